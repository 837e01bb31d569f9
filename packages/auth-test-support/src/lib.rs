//! Test support utilities for the token subsystem
//!
//! This crate provides utilities shared by the integration test binaries,
//! currently unified logging initialization.

pub mod logging;
