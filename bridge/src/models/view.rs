//! View data models.
//!
//! A view is a named aggregation of a measure, broken down by tag keys. The
//! instrumentation library periodically hands over a [`ViewData`] snapshot:
//! the view definition, the collection window and one [`Row`] per distinct
//! combination of tag values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Value type of the measure a view aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// Integer measurements.
    Int64,
    /// Floating point measurements.
    #[default]
    Float64,
}

impl std::fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
        }
    }
}

/// How recorded measurements are aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Aggregation {
    /// Number of measurements.
    Count,
    /// Sum of measurements.
    Sum,
    /// Most recent measurement.
    LastValue,
    /// Histogram with explicit, strictly increasing bucket bounds.
    Distribution {
        /// Upper bounds of the buckets, excluding the overflow bucket.
        bounds: Vec<f64>,
    },
}

impl Aggregation {
    /// Creates a distribution aggregation.
    #[must_use]
    pub fn distribution(bounds: impl Into<Vec<f64>>) -> Self {
        Self::Distribution {
            bounds: bounds.into(),
        }
    }

    /// Returns the bucket bounds, empty for non-distribution aggregations.
    #[must_use]
    pub fn bounds(&self) -> &[f64] {
        match self {
            Self::Distribution { bounds } => bounds,
            Self::Count | Self::Sum | Self::LastValue => &[],
        }
    }

    /// Returns a short name for the aggregation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::LastValue => "last_value",
            Self::Distribution { .. } => "distribution",
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a view.
///
/// # Example
///
/// ```
/// use ocbridge::models::{Aggregation, View};
///
/// let view = View::new("ocagent.io/latency", Aggregation::distribution([0.0, 10.0, 20.0]))
///     .with_description("latency of runners for a 100m dash")
///     .with_unit("ms")
///     .with_tag_keys(["field", "name"]);
///
/// assert!(view.validate_view().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct View {
    /// Name of the view, used as the metric name.
    #[validate(length(min = 1, message = "View name cannot be empty"))]
    pub name: String,

    /// Human readable description.
    #[serde(default)]
    pub description: String,

    /// Unit of the underlying measure.
    #[serde(default)]
    pub unit: String,

    /// Value type of the underlying measure.
    #[serde(default)]
    pub measure_kind: MeasureKind,

    /// Aggregation applied to the measure.
    pub aggregation: Aggregation,

    /// Tag keys the view is broken down by, in order.
    #[serde(default)]
    pub tag_keys: Vec<String>,
}

/// A tag key/value pair on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// Running statistics of a distribution aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DistributionData {
    /// Number of recorded values.
    pub count: i64,
    /// Smallest recorded value.
    #[serde(default)]
    pub min: f64,
    /// Largest recorded value.
    #[serde(default)]
    pub max: f64,
    /// Arithmetic mean of the recorded values.
    pub mean: f64,
    /// Number of values per bucket, one more than the view's bounds.
    #[serde(default)]
    pub count_per_bucket: Vec<i64>,
    /// Sum of squared deviations from the mean.
    #[serde(default)]
    pub sum_of_squared_dev: f64,
}

impl DistributionData {
    /// Returns the sum of the recorded values, reconstructed from the mean.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }
}

/// Aggregated value of a single row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AggregationData {
    /// Result of a count aggregation.
    Count(i64),
    /// Result of a sum aggregation.
    Sum(f64),
    /// Result of a last-value aggregation.
    LastValue(f64),
    /// Result of a distribution aggregation.
    Distribution(DistributionData),
}

impl AggregationData {
    /// Returns true if this data was produced by `aggregation`.
    #[must_use]
    pub fn matches(&self, aggregation: &Aggregation) -> bool {
        matches!(
            (self, aggregation),
            (Self::Count(_), Aggregation::Count)
                | (Self::Sum(_), Aggregation::Sum)
                | (Self::LastValue(_), Aggregation::LastValue)
                | (Self::Distribution(_), Aggregation::Distribution { .. })
        )
    }
}

/// One aggregated row of a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Tag values of the row. Keys missing here had no value recorded.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Aggregated value.
    pub data: AggregationData,
}

impl Row {
    /// Creates a row without tags.
    #[must_use]
    pub fn new(data: AggregationData) -> Self {
        Self {
            tags: Vec::new(),
            data,
        }
    }

    /// Adds a tag to the row.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Returns the value recorded for `key`, if any.
    #[must_use]
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }
}

/// A snapshot of a view over the window `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewData {
    /// The view definition.
    pub view: View,
    /// Start of the collection window.
    pub start: DateTime<Utc>,
    /// End of the collection window.
    pub end: DateTime<Utc>,
    /// Aggregated rows.
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Errors that can occur during view validation.
#[derive(Debug, Error)]
pub enum ViewValidationError {
    /// The view name is empty.
    #[error("View name cannot be empty")]
    EmptyName,

    /// Distribution bounds are not strictly increasing.
    #[error("Distribution bounds must be strictly increasing")]
    InvalidBucketBounds,

    /// A row's data was produced by a different aggregation than the view's.
    #[error("Row {row} does not hold {aggregation} data")]
    AggregationMismatch {
        /// Index of the offending row.
        row: usize,
        /// The view's aggregation.
        aggregation: &'static str,
    },

    /// A distribution row does not have one bucket more than there are bounds.
    #[error("Row {row} has {actual} buckets, expected {expected}")]
    BucketCountMismatch {
        /// Index of the offending row.
        row: usize,
        /// Number of bounds plus one.
        expected: usize,
        /// Number of buckets in the row.
        actual: usize,
    },

    /// The window ends before it starts.
    #[error("End time cannot be before start time")]
    InvalidTimeRange,

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl View {
    /// Creates a view over a float measure with no tag keys.
    #[must_use]
    pub fn new(name: impl Into<String>, aggregation: Aggregation) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            unit: String::new(),
            measure_kind: MeasureKind::default(),
            aggregation,
            tag_keys: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the measure kind.
    #[must_use]
    pub fn with_measure_kind(mut self, measure_kind: MeasureKind) -> Self {
        self.measure_kind = measure_kind;
        self
    }

    /// Sets the tag keys.
    #[must_use]
    pub fn with_tag_keys<I, K>(mut self, tag_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.tag_keys = tag_keys.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the view definition.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - Distribution bounds are not strictly increasing
    pub fn validate_view(&self) -> Result<(), ViewValidationError> {
        if self.name.is_empty() {
            return Err(ViewValidationError::EmptyName);
        }

        let bounds = self.aggregation.bounds();
        for i in 1..bounds.len() {
            if bounds[i] <= bounds[i - 1] {
                return Err(ViewValidationError::InvalidBucketBounds);
            }
        }

        self.validate()?;
        Ok(())
    }
}

impl ViewData {
    /// Creates a snapshot without rows.
    #[must_use]
    pub fn new(view: View, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            view,
            start,
            end,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Validates the view and every row against it.
    ///
    /// Export does not require a valid snapshot; this is a pre-flight check
    /// for callers that want to reject malformed records early.
    ///
    /// # Errors
    ///
    /// Returns an error if the view is invalid, the window is inverted, a row
    /// holds data of another aggregation, or a distribution row's bucket
    /// count does not match the view's bounds.
    pub fn validate_view_data(&self) -> Result<(), ViewValidationError> {
        self.view.validate_view()?;

        if self.end < self.start {
            return Err(ViewValidationError::InvalidTimeRange);
        }

        for (index, row) in self.rows.iter().enumerate() {
            if !row.data.matches(&self.view.aggregation) {
                return Err(ViewValidationError::AggregationMismatch {
                    row: index,
                    aggregation: self.view.aggregation.as_str(),
                });
            }

            if let AggregationData::Distribution(ref data) = row.data {
                let expected = self.view.aggregation.bounds().len() + 1;
                if data.count_per_bucket.len() != expected {
                    return Err(ViewValidationError::BucketCountMismatch {
                        row: index,
                        expected,
                        actual: data.count_per_bucket.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn latency_view() -> View {
        View::new(
            "ocagent.io/latency",
            Aggregation::distribution([0.0, 10.0, 20.0, 30.0, 40.0]),
        )
        .with_tag_keys(["field", "name"])
    }

    #[test]
    fn test_row_tag_lookup() {
        let row = Row::new(AggregationData::Count(1)).with_tag("field", "main-field");

        assert_eq!(row.tag_value("field"), Some("main-field"));
        assert_eq!(row.tag_value("name"), None);
    }

    #[test]
    fn test_distribution_sum_from_mean() {
        let data = DistributionData {
            count: 4,
            mean: 2.5,
            ..Default::default()
        };
        assert!((data.sum() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_view_validation_empty_name() {
        let view = View::new("", Aggregation::Count);
        assert!(matches!(
            view.validate_view(),
            Err(ViewValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_view_validation_unsorted_bounds() {
        let view = View::new("latency", Aggregation::distribution([10.0, 5.0]));
        assert!(matches!(
            view.validate_view(),
            Err(ViewValidationError::InvalidBucketBounds)
        ));
    }

    #[test]
    fn test_view_data_validation_bucket_mismatch() {
        let now = Utc::now();
        let data = ViewData::new(latency_view(), now, now + Duration::seconds(1)).with_row(
            Row::new(AggregationData::Distribution(DistributionData {
                count: 1,
                mean: 11.9,
                count_per_bucket: vec![0, 1, 0, 0, 0],
                ..Default::default()
            })),
        );

        assert!(matches!(
            data.validate_view_data(),
            Err(ViewValidationError::BucketCountMismatch {
                row: 0,
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_view_data_validation_aggregation_mismatch() {
        let now = Utc::now();
        let data = ViewData::new(View::new("requests", Aggregation::Count), now, now)
            .with_row(Row::new(AggregationData::Sum(1.0)));

        assert!(matches!(
            data.validate_view_data(),
            Err(ViewValidationError::AggregationMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn test_view_data_validation_success() {
        let now = Utc::now();
        let data = ViewData::new(View::new("requests", Aggregation::Count), now, now)
            .with_row(Row::new(AggregationData::Count(5)).with_tag("method", "GET"));

        assert!(data.validate_view_data().is_ok());
    }

    #[test]
    fn test_view_data_deserialization() {
        let json = r#"{
            "view": {
                "name": "ocagent.io/latency",
                "unit": "ms",
                "aggregation": {"type": "distribution", "bounds": [0, 10, 20]},
                "tag_keys": ["field"]
            },
            "start": "2024-01-15T10:30:00Z",
            "end": "2024-01-15T10:30:17Z",
            "rows": [
                {
                    "tags": [{"key": "field", "value": "main-field"}],
                    "data": {"type": "distribution", "value": {"count": 1, "mean": 11.9, "count_per_bucket": [0, 1, 0, 0]}}
                }
            ]
        }"#;

        let data: ViewData = serde_json::from_str(json).unwrap();

        assert_eq!(data.view.measure_kind, MeasureKind::Float64);
        assert_eq!(data.view.aggregation.bounds(), &[0.0, 10.0, 20.0]);
        assert!(data.validate_view_data().is_ok());
    }

    #[test]
    fn test_aggregation_display() {
        assert_eq!(Aggregation::Count.to_string(), "count");
        assert_eq!(Aggregation::LastValue.to_string(), "last_value");
        assert_eq!(Aggregation::distribution([1.0]).to_string(), "distribution");
    }
}
