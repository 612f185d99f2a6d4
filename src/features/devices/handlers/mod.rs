mod device_handler;

pub use device_handler::*;
