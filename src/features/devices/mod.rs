//! Devices and their repair guides.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/devices` | List all devices with category info |
//! | GET | `/api/devices/{slug}` | Get device by slug |
//! | GET | `/api/devices/{slug}/guides` | Device with its guides |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::DeviceService;
