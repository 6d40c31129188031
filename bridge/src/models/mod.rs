//! Source data models.
//!
//! These are the records the instrumentation library hands over for export:
//! finished spans and view snapshots.

pub mod attribute;
pub mod trace;
pub mod view;

pub use attribute::AnyValue;
pub use trace::{
    Annotation, IdParseError, Link, LinkType, MessageEvent, MessageEventType, SpanData, SpanId,
    SpanKind, SpanValidationError, Status, TraceId, TracestateEntry,
};
pub use view::{
    Aggregation, AggregationData, DistributionData, MeasureKind, Row, Tag, View, ViewData,
    ViewValidationError,
};
