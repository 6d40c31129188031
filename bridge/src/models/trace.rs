//! Span data models.
//!
//! Defines the in-process span record handed over by the instrumentation
//! library once a span has ended.

use super::AnyValue;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use validator::Validate;

/// Error returned when an identifier cannot be parsed from its hex form.
#[derive(Debug, Error)]
pub enum IdParseError {
    /// The input was not valid hex of the expected length.
    #[error("invalid {kind} '{input}': {source}")]
    InvalidHex {
        /// Which identifier was being parsed.
        kind: &'static str,
        /// The rejected input.
        input: String,
        /// The underlying hex error.
        #[source]
        source: hex::FromHexError,
    },
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// The all-zero identifier, which is never a valid id.
            pub const INVALID: Self = Self([0; $len]);

            /// Returns true unless every byte is zero.
            #[must_use]
            pub fn is_valid(&self) -> bool {
                self.0.iter().any(|b| *b != 0)
            }

            /// Returns the raw bytes.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Parses the lowercase or uppercase hex form.
            ///
            /// # Errors
            ///
            /// Returns an error if `input` is not exactly the expected number of
            /// hex digits.
            pub fn from_hex(input: &str) -> Result<Self, IdParseError> {
                let mut bytes = [0u8; $len];
                hex::decode_to_slice(input, &mut bytes).map_err(|source| {
                    IdParseError::InvalidHex {
                        kind: $kind,
                        input: input.to_string(),
                        source,
                    }
                })?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_hex(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

id_type!(
    /// A 16-byte trace identifier.
    TraceId,
    16,
    "trace id"
);

id_type!(
    /// An 8-byte span identifier.
    SpanId,
    8,
    "span id"
);

/// Kind of span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// The span covers server-side handling of a request.
    Server,
    /// The span covers the client side of a request.
    Client,
    /// No kind was recorded. Unknown kinds also land here.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "unspecified"),
            Self::Server => write!(f, "server"),
            Self::Client => write!(f, "client"),
        }
    }
}

/// Direction of a message event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageEventType {
    /// The message was sent.
    Sent,
    /// The message was received.
    Received,
    /// Unknown direction.
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Relationship between a span and a linked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// The linked span is a child of the current span.
    Child,
    /// The linked span is the parent of the current span.
    Parent,
    /// The relationship is unknown or not parent/child.
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Final status of a span, using gRPC status codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    /// Status code, 0 means OK.
    #[serde(default)]
    pub code: i32,
    /// Developer-facing message.
    #[serde(default)]
    pub message: String,
}

impl Status {
    /// Creates a status from a code and message.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A single tracestate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracestateEntry {
    /// Vendor key.
    pub key: String,
    /// Opaque value.
    pub value: String,
}

/// A timestamped text annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// When the annotation was recorded.
    pub time: DateTime<Utc>,
    /// Annotation text.
    pub message: String,
    /// Attributes attached to the annotation.
    #[serde(default)]
    pub attributes: HashMap<String, AnyValue>,
}

impl Annotation {
    /// Creates an annotation without attributes.
    #[must_use]
    pub fn new(time: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            time,
            message: message.into(),
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute to the annotation.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A message sent or received while the span was active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// When the message was sent or received.
    pub time: DateTime<Utc>,
    /// Direction of the message.
    #[serde(default)]
    pub event_type: MessageEventType,
    /// Identifier used to pair sent and received events.
    #[serde(default)]
    pub message_id: u64,
    /// Size of the message before compression.
    #[serde(default)]
    pub uncompressed_byte_size: u64,
    /// Size of the message after compression.
    #[serde(default)]
    pub compressed_byte_size: u64,
}

impl MessageEvent {
    /// Creates a message event.
    #[must_use]
    pub fn new(
        time: DateTime<Utc>,
        event_type: MessageEventType,
        uncompressed_byte_size: u64,
        compressed_byte_size: u64,
    ) -> Self {
        Self {
            time,
            event_type,
            message_id: 0,
            uncompressed_byte_size,
            compressed_byte_size,
        }
    }

    /// Sets the message id.
    #[must_use]
    pub fn with_message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }
}

/// A reference from this span to another span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Trace of the linked span.
    pub trace_id: TraceId,
    /// The linked span.
    pub span_id: SpanId,
    /// How the linked span relates to this one.
    #[serde(default)]
    pub link_type: LinkType,
    /// Attributes attached to the link.
    #[serde(default)]
    pub attributes: HashMap<String, AnyValue>,
}

impl Link {
    /// Creates a link without attributes.
    #[must_use]
    pub fn new(trace_id: TraceId, span_id: SpanId, link_type: LinkType) -> Self {
        Self {
            trace_id,
            span_id,
            link_type,
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute to the link.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A finished span as recorded by the instrumentation library.
///
/// Attribute values are dynamically typed; they are normalized into the wire
/// value kinds only when the span is exported.
///
/// # Example
///
/// ```
/// use ocbridge::models::{SpanData, SpanId, SpanKind, TraceId};
///
/// let span = SpanData::new(TraceId([1; 16]), SpanId([2; 8]), "GET /api/users")
///     .with_kind(SpanKind::Server)
///     .with_attribute("http.method", "GET")
///     .with_attribute("http.status_code", 200);
///
/// assert!(span.is_root());
/// assert!(span.validate_span().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SpanData {
    /// Trace this span belongs to.
    pub trace_id: TraceId,

    /// Identifier of this span.
    pub span_id: SpanId,

    /// Parent span, all zeroes for root spans.
    #[serde(default)]
    pub parent_span_id: SpanId,

    /// W3C tracestate entries, in order.
    #[serde(default)]
    pub tracestate: Vec<TracestateEntry>,

    /// Operation name.
    #[validate(length(min = 1, message = "Span name cannot be empty"))]
    pub name: String,

    /// Kind of span.
    #[serde(default)]
    pub kind: SpanKind,

    /// When the span started.
    pub start_time: DateTime<Utc>,

    /// When the span ended.
    pub end_time: DateTime<Utc>,

    /// Span attributes.
    #[serde(default)]
    pub attributes: HashMap<String, AnyValue>,

    /// Annotations recorded on the span.
    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// Message events recorded on the span.
    #[serde(default)]
    pub message_events: Vec<MessageEvent>,

    /// Links to other spans.
    #[serde(default)]
    pub links: Vec<Link>,

    /// Final status.
    #[serde(default)]
    pub status: Status,

    /// True when the parent span lives in another process.
    #[serde(default)]
    pub has_remote_parent: bool,

    /// Attributes the instrumentation library already discarded.
    #[serde(default)]
    pub dropped_attribute_count: u32,

    /// Annotations the instrumentation library already discarded.
    #[serde(default)]
    pub dropped_annotation_count: u32,

    /// Message events the instrumentation library already discarded.
    #[serde(default)]
    pub dropped_message_event_count: u32,

    /// Links the instrumentation library already discarded.
    #[serde(default)]
    pub dropped_link_count: u32,

    /// Number of child spans started while this span was active.
    #[serde(default)]
    pub child_span_count: u32,
}

/// Errors that can occur during span validation.
#[derive(Debug, Error)]
pub enum SpanValidationError {
    /// The trace ID is all zeroes.
    #[error("Trace ID cannot be all zeroes")]
    InvalidTraceId,

    /// The span ID is all zeroes.
    #[error("Span ID cannot be all zeroes")]
    InvalidSpanId,

    /// The span name is empty.
    #[error("Span name cannot be empty")]
    EmptyName,

    /// The end time is before the start time.
    #[error("End time cannot be before start time")]
    InvalidTimeRange,

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl SpanData {
    /// Creates a new root span with the current time as both start and end.
    #[must_use]
    pub fn new(trace_id: TraceId, span_id: SpanId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            trace_id,
            span_id,
            parent_span_id: SpanId::INVALID,
            tracestate: Vec::new(),
            name: name.into(),
            kind: SpanKind::default(),
            start_time: now,
            end_time: now,
            attributes: HashMap::new(),
            annotations: Vec::new(),
            message_events: Vec::new(),
            links: Vec::new(),
            status: Status::default(),
            has_remote_parent: false,
            dropped_attribute_count: 0,
            dropped_annotation_count: 0,
            dropped_message_event_count: 0,
            dropped_link_count: 0,
            child_span_count: 0,
        }
    }

    /// Sets the parent span ID.
    #[must_use]
    pub fn with_parent(mut self, parent_span_id: SpanId) -> Self {
        self.parent_span_id = parent_span_id;
        self
    }

    /// Marks whether the parent span is in another process.
    #[must_use]
    pub fn with_remote_parent(mut self, has_remote_parent: bool) -> Self {
        self.has_remote_parent = has_remote_parent;
        self
    }

    /// Sets the span kind.
    #[must_use]
    pub fn with_kind(mut self, kind: SpanKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the span status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the start time.
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the end time.
    #[must_use]
    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Adds an attribute to the span.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a tracestate entry.
    #[must_use]
    pub fn with_tracestate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tracestate.push(TracestateEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Appends an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Appends a message event.
    #[must_use]
    pub fn with_message_event(mut self, event: MessageEvent) -> Self {
        self.message_events.push(event);
        self
    }

    /// Appends a link.
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Returns the duration of the span.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Returns true if this is a root span (parent id is all zeroes).
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.parent_span_id.is_valid()
    }

    /// Validates the span.
    ///
    /// Export does not require a valid span; this is a pre-flight check for
    /// callers that want to reject malformed records early.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trace ID or span ID is all zeroes
    /// - The name is empty
    /// - The end time is before the start time
    pub fn validate_span(&self) -> Result<(), SpanValidationError> {
        if !self.trace_id.is_valid() {
            return Err(SpanValidationError::InvalidTraceId);
        }
        if !self.span_id.is_valid() {
            return Err(SpanValidationError::InvalidSpanId);
        }
        if self.name.is_empty() {
            return Err(SpanValidationError::EmptyName);
        }
        if self.end_time < self.start_time {
            return Err(SpanValidationError::InvalidTimeRange);
        }
        self.validate()?;
        Ok(())
    }
}
