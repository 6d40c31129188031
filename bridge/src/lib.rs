//! ocbridge Library
//!
//! This crate translates the spans and view data recorded by an OpenCensus
//! instrumentation library into the requests accepted by the OpenCensus
//! agent.
//!
//! # Modules
//!
//! - [`models`] - Source records: spans and view snapshots
//! - [`export`] - Translation into agent export requests
//! - [`proto`] - The agent wire schema
//! - [`config`] - Export limits
//! - [`resource`] - Resource and node discovery
//!
//! # Example
//!
//! ```
//! use ocbridge::config::SpanLimits;
//! use ocbridge::export::translate_spans;
//! use ocbridge::models::{SpanData, SpanId, SpanKind, TraceId};
//!
//! let span = SpanData::new(TraceId([1; 16]), SpanId([2; 8]), "GET /users")
//!     .with_kind(SpanKind::Server)
//!     .with_attribute("http.status_code", 200);
//!
//! let request = translate_spans(&[span], &SpanLimits::default());
//!
//! assert_eq!(request.spans.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod export;
pub mod models;
pub mod proto;
pub mod resource;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use prost;
pub use serde;
pub use serde_json;
pub use validator;
