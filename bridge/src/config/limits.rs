//! Per-span count limits applied during span export.
//!
//! Every repeated part of a span (attributes, annotations, message events,
//! links and the attributes of annotations and links) can be capped. Items
//! over the cap are dropped and counted in the wire message's dropped count.
//! `None` means no limit, which is the default.

use crate::proto;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

/// Environment variable for [`SpanLimits::max_attributes`].
pub const ENV_MAX_ATTRIBUTES: &str = "OCBRIDGE_MAX_ATTRIBUTES";
/// Environment variable for [`SpanLimits::max_annotations`].
pub const ENV_MAX_ANNOTATIONS: &str = "OCBRIDGE_MAX_ANNOTATIONS";
/// Environment variable for [`SpanLimits::max_annotation_attributes`].
pub const ENV_MAX_ANNOTATION_ATTRIBUTES: &str = "OCBRIDGE_MAX_ANNOTATION_ATTRIBUTES";
/// Environment variable for [`SpanLimits::max_message_events`].
pub const ENV_MAX_MESSAGE_EVENTS: &str = "OCBRIDGE_MAX_MESSAGE_EVENTS";
/// Environment variable for [`SpanLimits::max_links`].
pub const ENV_MAX_LINKS: &str = "OCBRIDGE_MAX_LINKS";
/// Environment variable for [`SpanLimits::max_link_attributes`].
pub const ENV_MAX_LINK_ATTRIBUTES: &str = "OCBRIDGE_MAX_LINK_ATTRIBUTES";

/// Errors raised while loading limits.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but is not a non-negative integer.
    #[error("{name} must be a non-negative integer, got '{value}': {source}")]
    InvalidLimit {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// The parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Count limits for span export.
///
/// # Examples
///
/// ```
/// use ocbridge::config::SpanLimits;
///
/// let limits = SpanLimits::default().with_max_attributes(32);
/// assert_eq!(limits.max_attributes, Some(32));
/// assert_eq!(limits.max_links, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanLimits {
    /// Maximum number of attributes per span.
    #[serde(default)]
    pub max_attributes: Option<usize>,
    /// Maximum number of annotations per span.
    #[serde(default)]
    pub max_annotations: Option<usize>,
    /// Maximum number of attributes per annotation.
    #[serde(default)]
    pub max_annotation_attributes: Option<usize>,
    /// Maximum number of message events per span.
    #[serde(default)]
    pub max_message_events: Option<usize>,
    /// Maximum number of links per span.
    #[serde(default)]
    pub max_links: Option<usize>,
    /// Maximum number of attributes per link.
    #[serde(default)]
    pub max_link_attributes: Option<usize>,
}

impl SpanLimits {
    /// Limits with every cap disabled.
    pub const UNLIMITED: Self = Self {
        max_attributes: None,
        max_annotations: None,
        max_annotation_attributes: None,
        max_message_events: None,
        max_links: None,
        max_link_attributes: None,
    };

    /// Loads limits from environment variables.
    ///
    /// Configuration values can be set via:
    /// - `OCBRIDGE_MAX_ATTRIBUTES`
    /// - `OCBRIDGE_MAX_ANNOTATIONS`
    /// - `OCBRIDGE_MAX_ANNOTATION_ATTRIBUTES`
    /// - `OCBRIDGE_MAX_MESSAGE_EVENTS`
    /// - `OCBRIDGE_MAX_LINKS`
    /// - `OCBRIDGE_MAX_LINK_ATTRIBUTES`
    ///
    /// Unset variables leave the corresponding limit disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed as a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads limits using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// Returns an error if a resolved value cannot be parsed as a
    /// non-negative integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| -> Result<Option<usize>, ConfigError> {
            lookup(name)
                .map(|value| {
                    value
                        .trim()
                        .parse::<usize>()
                        .map_err(|source| ConfigError::InvalidLimit {
                            name,
                            value: value.clone(),
                            source,
                        })
                })
                .transpose()
        };

        Ok(Self {
            max_attributes: read(ENV_MAX_ATTRIBUTES)?,
            max_annotations: read(ENV_MAX_ANNOTATIONS)?,
            max_annotation_attributes: read(ENV_MAX_ANNOTATION_ATTRIBUTES)?,
            max_message_events: read(ENV_MAX_MESSAGE_EVENTS)?,
            max_links: read(ENV_MAX_LINKS)?,
            max_link_attributes: read(ENV_MAX_LINK_ATTRIBUTES)?,
        })
    }

    /// Sets the span attribute limit.
    #[must_use]
    pub const fn with_max_attributes(mut self, max: usize) -> Self {
        self.max_attributes = Some(max);
        self
    }

    /// Sets the annotation limit.
    #[must_use]
    pub const fn with_max_annotations(mut self, max: usize) -> Self {
        self.max_annotations = Some(max);
        self
    }

    /// Sets the per-annotation attribute limit.
    #[must_use]
    pub const fn with_max_annotation_attributes(mut self, max: usize) -> Self {
        self.max_annotation_attributes = Some(max);
        self
    }

    /// Sets the message event limit.
    #[must_use]
    pub const fn with_max_message_events(mut self, max: usize) -> Self {
        self.max_message_events = Some(max);
        self
    }

    /// Sets the link limit.
    #[must_use]
    pub const fn with_max_links(mut self, max: usize) -> Self {
        self.max_links = Some(max);
        self
    }

    /// Sets the per-link attribute limit.
    #[must_use]
    pub const fn with_max_link_attributes(mut self, max: usize) -> Self {
        self.max_link_attributes = Some(max);
        self
    }
}

/// Converts an agent-side limit, where zero or negative means unlimited.
fn agent_limit(value: i64) -> Option<usize> {
    if value <= 0 {
        None
    } else {
        Some(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

/// Limits pushed by the agent through `UpdatedLibraryConfig`.
///
/// The agent schema has a single attribute limit; it applies to spans,
/// annotations and links alike.
impl From<&proto::trace::v1::TraceConfig> for SpanLimits {
    fn from(config: &proto::trace::v1::TraceConfig) -> Self {
        let max_attributes = agent_limit(config.max_number_of_attributes);
        Self {
            max_attributes,
            max_annotations: agent_limit(config.max_number_of_annotations),
            max_annotation_attributes: max_attributes,
            max_message_events: agent_limit(config.max_number_of_message_events),
            max_links: agent_limit(config.max_number_of_links),
            max_link_attributes: max_attributes,
        }
    }
}
