//! Catalog of device categories, devices and repair guides backed by SQLite.
//!
//! The data-access services live under [`features`]; [`features::router`]
//! assembles them into the HTTP surface served by the binary.

pub mod core;
pub mod features;
pub mod shared;
