//! Core infrastructure for the Sensorio service: application state shared by
//! all feature modules, request extractors, and the bearer-token middleware.

pub mod app;
pub mod extract;
pub mod prelude;
pub mod route_auth;

pub use crate::app::{App, AppState};
pub use crate::extract::Auth;

// vim: ts=4
