//! Repair guides.
//!
//! Each guide belongs to one device and carries ordered lists of tools, parts
//! and steps.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/guides` | List all guides with device and category info |
//! | GET | `/api/guides/{slug}` | Get guide by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GuideService;
