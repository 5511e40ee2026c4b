//! Project management: the top of the entity hierarchy.

pub mod handler;
pub mod service;

// vim: ts=4
