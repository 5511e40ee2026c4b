//! Account registration, login, and account deletion.

pub mod handler;
pub mod service;

// vim: ts=4
