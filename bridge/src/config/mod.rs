//! Configuration module for ocbridge.
//!
//! This module contains the export limits and the environment variables they
//! are loaded from.

pub mod limits;

pub use limits::{ConfigError, SpanLimits};
