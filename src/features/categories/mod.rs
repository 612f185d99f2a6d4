//! Device categories (brands).
//!
//! Categories are the top of the catalog hierarchy; every device belongs to
//! exactly one category.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List all categories |
//! | GET | `/api/categories/{slug}` | Get category by slug |
//! | GET | `/api/categories/{slug}/devices` | Category with its devices |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
