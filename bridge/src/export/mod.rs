//! Translation of in-process telemetry into agent export requests.
//!
//! Two independent pipelines share the same shape: spans become an
//! [`ExportTraceServiceRequest`](crate::proto::agent::trace::v1::ExportTraceServiceRequest)
//! and view data becomes an
//! [`ExportMetricsServiceRequest`](crate::proto::agent::metrics::v1::ExportMetricsServiceRequest).
//! Both are pure functions over borrowed input; node and resource metadata are
//! attached afterwards through [`ExportRequest`].

pub mod attributes;
pub mod distribution;
pub mod metrics;
pub mod request;
pub mod trace;

pub use attributes::{normalize, truncate_attributes, AttributeValue};
pub use distribution::encode_distribution;
pub use metrics::{descriptor_type, translate_views, view_data_to_metric};
pub use request::ExportRequest;
pub use trace::{span_to_proto, translate_spans};

use crate::proto;
use chrono::{DateTime, Utc};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Converts a `DateTime<Utc>` to a protobuf timestamp.
///
/// chrono reports a leap second as a sub-second part of one second or more;
/// the excess is carried into `seconds` so `nanos` stays below one second.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn datetime_to_timestamp(time: &DateTime<Utc>) -> prost_types::Timestamp {
    let nanos = time.timestamp_subsec_nanos();

    prost_types::Timestamp {
        seconds: time.timestamp() + i64::from(nanos / NANOS_PER_SECOND),
        nanos: (nanos % NANOS_PER_SECOND) as i32,
    }
}

/// Narrows a count to the wire's `int32`, saturating at `i32::MAX`.
pub(crate) fn count_to_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Wraps a string with no truncated bytes.
pub(crate) fn truncatable_string(value: &str) -> proto::trace::v1::TruncatableString {
    proto::trace::v1::TruncatableString {
        value: value.to_string(),
        truncated_byte_count: 0,
    }
}

/// Splits `items` at `max`, returning the kept prefix and how many were cut.
pub(crate) fn apply_limit<T>(items: &[T], max: Option<usize>) -> (&[T], usize) {
    match max {
        Some(max) if items.len() > max => (&items[..max], items.len() - max),
        _ => (items, 0),
    }
}
