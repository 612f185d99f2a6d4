mod guide;

pub use guide::{GuideRow, GuideWithDevice};
