//! Sensorio is a self-hosted IoT metadata and telemetry service.
//!
//! Users own projects, projects contain modules, modules contain devices,
//! and devices emit typed sensor readings. The service enforces:
//!
//! - ownership scoping on every operation (foreign-owned entities are
//!   indistinguishable from missing ones)
//! - a fixed measurement-type/unit compatibility table on device data types
//! - data-type membership on sensor readings
//! - cascading deletes that never leave dangling parent references
//!
//! Storage is behind the `MetaAdapter`/`AuthAdapter` traits; the bundled
//! SQLite adapters live in their own crates.

#![forbid(unsafe_code)]

pub mod app;
pub mod cascade;
pub mod ownership;
pub mod prelude;
pub mod routes;
pub mod validate;

pub mod auth;
pub mod device;
pub mod module;
pub mod project;
pub mod reading;

pub use crate::app::AppBuilder;
pub use sensorio_core::app::{App, AppState, VERSION};

// vim: ts=4
