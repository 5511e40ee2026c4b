//! Module management: groups of devices inside a project.

pub mod handler;
pub mod service;

// vim: ts=4
