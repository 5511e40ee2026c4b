//! Device management: sensors and actuators with declared data types.

pub mod handler;
pub mod service;

// vim: ts=4
