mod device;

pub use device::{Device, DeviceWithCategory};
