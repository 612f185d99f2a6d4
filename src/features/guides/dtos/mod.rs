mod guide_dto;

pub use guide_dto::*;
