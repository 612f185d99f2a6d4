mod guide_handler;

pub use guide_handler::*;
