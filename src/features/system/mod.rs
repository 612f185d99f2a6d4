//! Service-level endpoints that are not part of the catalog itself.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Service name, version and status |
//! | GET | `/health` | Liveness probe |

pub mod handlers;
pub mod routes;
