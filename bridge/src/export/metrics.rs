//! Conversion of view data into the agent metrics schema.

use crate::export::{datetime_to_timestamp, encode_distribution};
use crate::models::{Aggregation, AggregationData, MeasureKind, Row, View, ViewData};
use crate::proto::agent::metrics::v1::ExportMetricsServiceRequest;
use crate::proto::metrics::v1 as wire;

/// Picks the metric type for a view.
///
/// Counts are always integers and distributions always cumulative
/// distributions. Sums are cumulative and last values are gauges, typed after
/// the measure.
#[must_use]
pub fn descriptor_type(view: &View) -> wire::metric_descriptor::Type {
    use wire::metric_descriptor::Type;

    match (&view.aggregation, view.measure_kind) {
        (Aggregation::Count, _) | (Aggregation::Sum, MeasureKind::Int64) => Type::CumulativeInt64,
        (Aggregation::Sum, MeasureKind::Float64) => Type::CumulativeDouble,
        (Aggregation::LastValue, MeasureKind::Int64) => Type::GaugeInt64,
        (Aggregation::LastValue, MeasureKind::Float64) => Type::GaugeDouble,
        (Aggregation::Distribution { .. }, _) => Type::CumulativeDistribution,
    }
}

fn descriptor_to_proto(view: &View) -> wire::MetricDescriptor {
    wire::MetricDescriptor {
        name: view.name.clone(),
        description: view.description.clone(),
        unit: view.unit.clone(),
        r#type: descriptor_type(view) as i32,
        label_keys: view
            .tag_keys
            .iter()
            .map(|key| wire::LabelKey {
                key: key.clone(),
                description: String::new(),
            })
            .collect(),
    }
}

/// One label value per tag key of the view, in the view's key order.
fn label_values(tag_keys: &[String], row: &Row) -> Vec<wire::LabelValue> {
    tag_keys
        .iter()
        .map(|key| match row.tag_value(key) {
            Some(value) => wire::LabelValue {
                value: value.to_string(),
                has_value: true,
            },
            None => wire::LabelValue {
                value: String::new(),
                has_value: false,
            },
        })
        .collect()
}

/// Builds the point for a row, typed after the view's descriptor.
///
/// Scalar data recorded under a different scalar aggregation is converted to
/// the descriptor's kind. A distribution cannot stand in for a scalar or the
/// other way round, so those rows yield `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn point_value(view: &View, data: &AggregationData) -> Option<wire::point::Value> {
    use wire::metric_descriptor::Type;
    use wire::point::Value;

    match (descriptor_type(view), data) {
        (Type::CumulativeDistribution, AggregationData::Distribution(distribution)) => Some(
            Value::DistributionValue(encode_distribution(distribution, view.aggregation.bounds())),
        ),
        (Type::CumulativeDistribution, _) | (_, AggregationData::Distribution(_)) => None,
        (Type::CumulativeInt64 | Type::GaugeInt64, AggregationData::Count(count)) => {
            Some(Value::Int64Value(*count))
        }
        (
            Type::CumulativeInt64 | Type::GaugeInt64,
            AggregationData::Sum(value) | AggregationData::LastValue(value),
        ) => Some(Value::Int64Value(*value as i64)),
        (_, AggregationData::Count(count)) => Some(Value::DoubleValue(*count as f64)),
        (_, AggregationData::Sum(value) | AggregationData::LastValue(value)) => {
            Some(Value::DoubleValue(*value))
        }
    }
}

fn row_to_time_series(view_data: &ViewData, row: &Row) -> Option<wire::TimeSeries> {
    let view = &view_data.view;
    if !row.data.matches(&view.aggregation) {
        tracing::warn!(
            view = %view.name,
            aggregation = %view.aggregation,
            "Row data does not match the view aggregation"
        );
    }

    let Some(value) = point_value(view, &row.data) else {
        tracing::warn!(
            view = %view.name,
            "Skipping row that cannot be encoded as the view's metric type"
        );
        return None;
    };

    Some(wire::TimeSeries {
        start_timestamp: Some(datetime_to_timestamp(&view_data.start)),
        label_values: label_values(&view.tag_keys, row),
        points: vec![wire::Point {
            timestamp: Some(datetime_to_timestamp(&view_data.end)),
            value: Some(value),
        }],
    })
}

/// Converts one view snapshot into a metric with one time series per row.
///
/// Every series starts at the snapshot's start time and carries a single
/// point stamped with its end time. Points always match the descriptor type:
/// a row whose data disagrees with the view is converted to the view's kind,
/// or dropped when it mixes distributions with scalars.
#[must_use]
pub fn view_data_to_metric(view_data: &ViewData) -> wire::Metric {
    wire::Metric {
        metric_descriptor: Some(descriptor_to_proto(&view_data.view)),
        timeseries: view_data
            .rows
            .iter()
            .filter_map(|row| row_to_time_series(view_data, row))
            .collect(),
        resource: None,
    }
}

/// Builds a metrics export request holding one metric per view, in input
/// order.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ocbridge::export::translate_views;
/// use ocbridge::models::{Aggregation, AggregationData, Row, View, ViewData};
///
/// let view = View::new("requests", Aggregation::Count);
/// let data = ViewData::new(view, Utc::now(), Utc::now()).with_row(Row::new(AggregationData::Count(5)));
///
/// let request = translate_views(&[data]);
/// assert_eq!(request.metrics.len(), 1);
/// ```
#[must_use]
pub fn translate_views(views: &[ViewData]) -> ExportMetricsServiceRequest {
    let metrics: Vec<wire::Metric> = views.iter().map(view_data_to_metric).collect();

    tracing::debug!(metrics = metrics.len(), "Translated views");

    ExportMetricsServiceRequest {
        node: None,
        metrics,
        resource: None,
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
