//! Tests for view data conversion.

#[cfg(test)]
mod tests {
    use crate::export::metrics::*;
    use crate::models::{
        Aggregation, AggregationData, DistributionData, MeasureKind, Row, View, ViewData,
    };
    use crate::proto::metrics::v1 as wire;
    use chrono::{DateTime, TimeZone, Utc};

    fn window() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            Utc.timestamp_opt(1_700_000_017, 0).unwrap(),
        )
    }

    fn view_data(view: View, rows: Vec<Row>) -> ViewData {
        let (start, end) = window();
        rows.into_iter()
            .fold(ViewData::new(view, start, end), ViewData::with_row)
    }

    fn descriptor(metric: &wire::Metric) -> &wire::MetricDescriptor {
        metric.metric_descriptor.as_ref().unwrap()
    }

    fn single_point(metric: &wire::Metric, series: usize) -> &wire::point::Value {
        let points = &metric.timeseries[series].points;
        assert_eq!(points.len(), 1);
        points[0].value.as_ref().unwrap()
    }

    #[test]
    fn test_count_view() {
        let data = view_data(
            View::new("requests", Aggregation::Count),
            vec![Row::new(AggregationData::Count(5))],
        );

        let metric = view_data_to_metric(&data);

        assert_eq!(
            descriptor(&metric).r#type,
            wire::metric_descriptor::Type::CumulativeInt64 as i32
        );
        assert_eq!(metric.timeseries.len(), 1);
        assert_eq!(single_point(&metric, 0), &wire::point::Value::Int64Value(5));
    }

    #[test]
    fn test_descriptor_types() {
        use wire::metric_descriptor::Type;

        let cases = [
            (Aggregation::Count, MeasureKind::Float64, Type::CumulativeInt64),
            (Aggregation::Count, MeasureKind::Int64, Type::CumulativeInt64),
            (Aggregation::Sum, MeasureKind::Float64, Type::CumulativeDouble),
            (Aggregation::Sum, MeasureKind::Int64, Type::CumulativeInt64),
            (Aggregation::LastValue, MeasureKind::Float64, Type::GaugeDouble),
            (Aggregation::LastValue, MeasureKind::Int64, Type::GaugeInt64),
            (
                Aggregation::distribution([1.0]),
                MeasureKind::Int64,
                Type::CumulativeDistribution,
            ),
        ];

        for (aggregation, measure_kind, expected) in cases {
            let view = View::new("v", aggregation).with_measure_kind(measure_kind);
            assert_eq!(descriptor_type(&view), expected, "{view:?}");
        }
    }

    #[test]
    fn test_descriptor_fields() {
        let data = view_data(
            View::new("ocagent.io/latency", Aggregation::distribution([0.0, 10.0]))
                .with_description("latency of runners for a 100m dash")
                .with_unit("ms")
                .with_tag_keys(["field", "name"]),
            Vec::new(),
        );

        let metric = view_data_to_metric(&data);
        let descriptor = descriptor(&metric);

        assert_eq!(descriptor.name, "ocagent.io/latency");
        assert_eq!(descriptor.description, "latency of runners for a 100m dash");
        assert_eq!(descriptor.unit, "ms");
        let keys: Vec<&str> = descriptor.label_keys.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["field", "name"]);
        assert!(descriptor.label_keys.iter().all(|k| k.description.is_empty()));
        assert!(metric.timeseries.is_empty());
    }

    #[test]
    fn test_missing_tag_has_no_value() {
        let data = view_data(
            View::new("v", Aggregation::Count).with_tag_keys(["field", "name"]),
            vec![Row::new(AggregationData::Count(1)).with_tag("field", "main-field")],
        );

        let metric = view_data_to_metric(&data);
        let labels = &metric.timeseries[0].label_values;

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].value, "main-field");
        assert!(labels[0].has_value);
        assert_eq!(labels[1].value, "");
        assert!(!labels[1].has_value);
    }

    #[test]
    fn test_empty_tag_value_is_present() {
        let data = view_data(
            View::new("v", Aggregation::Count).with_tag_keys(["name"]),
            vec![Row::new(AggregationData::Count(1)).with_tag("name", "")],
        );

        let metric = view_data_to_metric(&data);

        assert!(metric.timeseries[0].label_values[0].has_value);
    }

    #[test]
    fn test_label_values_follow_view_key_order() {
        let data = view_data(
            View::new("v", Aggregation::Count).with_tag_keys(["a", "b"]),
            vec![Row::new(AggregationData::Count(1))
                .with_tag("b", "second")
                .with_tag("a", "first")],
        );

        let metric = view_data_to_metric(&data);
        let values: Vec<&str> = metric.timeseries[0]
            .label_values
            .iter()
            .map(|v| v.value.as_str())
            .collect();

        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_series_timestamps() {
        let data = view_data(
            View::new("v", Aggregation::LastValue),
            vec![Row::new(AggregationData::LastValue(2.5))],
        );

        let metric = view_data_to_metric(&data);
        let series = &metric.timeseries[0];

        assert_eq!(series.start_timestamp.as_ref().unwrap().seconds, 1_700_000_000);
        assert_eq!(series.points[0].timestamp.as_ref().unwrap().seconds, 1_700_000_017);
        assert_eq!(single_point(&metric, 0), &wire::point::Value::DoubleValue(2.5));
    }

    #[test]
    fn test_int64_measure_truncates_toward_zero() {
        let data = view_data(
            View::new("v", Aggregation::Sum).with_measure_kind(MeasureKind::Int64),
            vec![
                Row::new(AggregationData::Sum(42.9)),
                Row::new(AggregationData::Sum(-3.7)),
            ],
        );

        let metric = view_data_to_metric(&data);

        assert_eq!(single_point(&metric, 0), &wire::point::Value::Int64Value(42));
        assert_eq!(single_point(&metric, 1), &wire::point::Value::Int64Value(-3));
    }

    #[test]
    fn test_distribution_rows_use_view_bounds() {
        let data = view_data(
            View::new("latency", Aggregation::distribution([0.0, 10.0, 20.0, 30.0, 40.0])),
            vec![Row::new(AggregationData::Distribution(DistributionData {
                count: 1,
                min: 20.2,
                max: 20.2,
                mean: 20.2,
                count_per_bucket: vec![0, 0, 1, 0, 0],
                sum_of_squared_dev: 0.0,
            }))],
        );

        let metric = view_data_to_metric(&data);

        match single_point(&metric, 0) {
            wire::point::Value::DistributionValue(value) => {
                assert_eq!(value.count, 1);
                assert_eq!(value.buckets.len(), 5);
                assert_eq!(value.buckets[2].count, 1);
                let options = value.bucket_options.as_ref().unwrap();
                match options.r#type.as_ref().unwrap() {
                    wire::distribution_value::bucket_options::Type::Explicit(explicit) => {
                        assert_eq!(explicit.bounds, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
                    }
                }
            }
            other => panic!("expected distribution, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_row_follows_descriptor() {
        let data = view_data(
            View::new("v", Aggregation::Sum),
            vec![Row::new(AggregationData::Count(3))],
        );

        let metric = view_data_to_metric(&data);

        assert_eq!(
            descriptor(&metric).r#type,
            wire::metric_descriptor::Type::CumulativeDouble as i32
        );
        assert_eq!(single_point(&metric, 0), &wire::point::Value::DoubleValue(3.0));
    }

    #[test]
    fn test_mismatched_float_row_under_int_view() {
        let data = view_data(
            View::new("v", Aggregation::LastValue).with_measure_kind(MeasureKind::Int64),
            vec![Row::new(AggregationData::Sum(7.9))],
        );

        let metric = view_data_to_metric(&data);

        assert_eq!(
            descriptor(&metric).r#type,
            wire::metric_descriptor::Type::GaugeInt64 as i32
        );
        assert_eq!(single_point(&metric, 0), &wire::point::Value::Int64Value(7));
    }

    #[test]
    fn test_distribution_scalar_mismatch_is_skipped() {
        let distribution = AggregationData::Distribution(DistributionData {
            count: 1,
            min: 2.0,
            max: 2.0,
            mean: 2.0,
            count_per_bucket: vec![0, 1],
            sum_of_squared_dev: 0.0,
        });

        let scalar_view = view_data(
            View::new("v", Aggregation::Count),
            vec![Row::new(distribution), Row::new(AggregationData::Count(4))],
        );
        let metric = view_data_to_metric(&scalar_view);
        assert_eq!(metric.timeseries.len(), 1);
        assert_eq!(single_point(&metric, 0), &wire::point::Value::Int64Value(4));

        let distribution_view = view_data(
            View::new("v", Aggregation::distribution([1.0])),
            vec![Row::new(AggregationData::Sum(2.0))],
        );
        let metric = view_data_to_metric(&distribution_view);
        assert_eq!(
            descriptor(&metric).r#type,
            wire::metric_descriptor::Type::CumulativeDistribution as i32
        );
        assert!(metric.timeseries.is_empty());
    }

    #[test]
    fn test_translate_views_preserves_order() {
        let views = vec![
            view_data(View::new("first", Aggregation::Count), Vec::new()),
            view_data(View::new("second", Aggregation::Sum), Vec::new()),
        ];

        let request = translate_views(&views);

        let names: Vec<&str> = request
            .metrics
            .iter()
            .map(|m| m.metric_descriptor.as_ref().unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(request.node.is_none());
        assert!(request.resource.is_none());
    }
}
