//! Sensor readings: immutable measurements attached to a device.

pub mod handler;
pub mod service;

// vim: ts=4
