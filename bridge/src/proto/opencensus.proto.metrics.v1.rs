/// Defines a Metric which has one or more timeseries.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Metric {
    /// The descriptor of the Metric.
    /// TODO(issue #152): consider only sending the name of descriptor for
    /// optimization.
    #[prost(message, optional, tag="1")]
    pub metric_descriptor: ::core::option::Option<MetricDescriptor>,
    /// One or more timeseries for a single metric, where each timeseries has
    /// one or more points.
    #[prost(message, repeated, tag="2")]
    pub timeseries: ::prost::alloc::vec::Vec<TimeSeries>,
    /// The resource for the metric. If unset, it may be set to a default value
    /// provided for a sequence of messages in an RPC stream.
    #[prost(message, optional, tag="3")]
    pub resource: ::core::option::Option<super::super::resource::v1::Resource>,
}
/// Defines a metric type and its schema.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MetricDescriptor {
    /// The metric type, including its DNS name prefix. It must be unique.
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    /// A detailed description of the metric, which can be used in documentation.
    #[prost(string, tag="2")]
    pub description: ::prost::alloc::string::String,
    /// The unit in which the metric value is reported. Follows the format
    /// described by <http://unitsofmeasure.org/ucum.html.>
    #[prost(string, tag="3")]
    pub unit: ::prost::alloc::string::String,
    #[prost(enumeration="metric_descriptor::Type", tag="4")]
    pub r#type: i32,
    /// The label keys associated with the metric descriptor.
    #[prost(message, repeated, tag="5")]
    pub label_keys: ::prost::alloc::vec::Vec<LabelKey>,
}
/// Nested message and enum types in `MetricDescriptor`.
pub mod metric_descriptor {
    /// The kind of metric. It describes how the data is reported.
    ///
    /// A gauge is an instantaneous measurement of a value.
    ///
    /// A cumulative measurement is a value accumulated over a time interval. In
    /// a time series, cumulative measurements should have the same start time,
    /// increasing values and increasing end times, until an event resets the
    /// cumulative value to zero and sets a new start time for the following
    /// points.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// Do not use this default value.
        Unspecified = 0,
        /// Integer gauge. The value can go both up and down.
        GaugeInt64 = 1,
        /// Floating point gauge. The value can go both up and down.
        GaugeDouble = 2,
        /// Distribution gauge measurement. The count and sum can go both up and
        /// down. Recorded values are always >= 0.
        /// Used in scenarios like a snapshot of time the current items in a queue
        /// have spent there.
        GaugeDistribution = 3,
        /// Integer cumulative measurement. The value cannot decrease, if resets
        /// then the start_time should also be reset.
        CumulativeInt64 = 4,
        /// Floating point cumulative measurement. The value cannot decrease, if
        /// resets then the start_time should also be reset. Recorded values are
        /// always >= 0.
        CumulativeDouble = 5,
        /// Distribution cumulative measurement. The count and sum cannot decrease,
        /// if resets then the start_time should also be reset.
        CumulativeDistribution = 6,
        /// Some frameworks implemented Histograms as a summary of observations
        /// (usually things like request durations and response sizes). While it
        /// also provides a total count of observations and a sum of all observed
        /// values, it calculates configurable percentiles over a sliding time
        /// window. This is not recommended, since it cannot be aggregated.
        Summary = 7,
    }
}
/// Defines a label key associated with a metric descriptor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelKey {
    /// The key for the label.
    #[prost(string, tag="1")]
    pub key: ::prost::alloc::string::String,
    /// A human-readable description of what this label key represents.
    #[prost(string, tag="2")]
    pub description: ::prost::alloc::string::String,
}
/// A collection of data points that describes the time-varying values
/// of a metric.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeSeries {
    /// Must be present for cumulative metrics. The time when the cumulative value
    /// was reset to zero. Exclusive. The cumulative value is over the time interval
    /// (start_timestamp, timestamp]. If not specified, the backend can use the
    /// previous recorded value.
    #[prost(message, optional, tag="1")]
    pub start_timestamp: ::core::option::Option<::prost_types::Timestamp>,
    /// The set of label values that uniquely identify this timeseries. Applies to
    /// all points. The order of label values must match that of label keys in the
    /// metric descriptor.
    #[prost(message, repeated, tag="2")]
    pub label_values: ::prost::alloc::vec::Vec<LabelValue>,
    /// The data points of this timeseries. Point.value type MUST match the
    /// MetricDescriptor.type.
    #[prost(message, repeated, tag="3")]
    pub points: ::prost::alloc::vec::Vec<Point>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelValue {
    /// The value for the label.
    #[prost(string, tag="1")]
    pub value: ::prost::alloc::string::String,
    /// If false the value field is ignored and considered not set.
    /// This is used to differentiate a missing label from an empty string.
    #[prost(bool, tag="2")]
    pub has_value: bool,
}
/// A timestamped measurement.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Point {
    /// The moment when this point was recorded. Inclusive.
    /// If not specified, the timestamp will be decided by the backend.
    #[prost(message, optional, tag="1")]
    pub timestamp: ::core::option::Option<::prost_types::Timestamp>,
    /// The actual point value.
    #[prost(oneof="point::Value", tags="2, 3, 4, 5")]
    pub value: ::core::option::Option<point::Value>,
}
/// Nested message and enum types in `Point`.
pub mod point {
    /// The actual point value.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        /// A 64-bit integer.
        #[prost(int64, tag="2")]
        Int64Value(i64),
        /// A 64-bit double-precision floating-point number.
        #[prost(double, tag="3")]
        DoubleValue(f64),
        /// A distribution value.
        #[prost(message, tag="4")]
        DistributionValue(super::DistributionValue),
        /// A summary value. This is not recommended, since it cannot be aggregated.
        #[prost(message, tag="5")]
        SummaryValue(super::SummaryValue),
    }
}
/// Distribution contains summary statistics for a population of values. It
/// optionally contains a histogram representing the distribution of those
/// values across a set of buckets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DistributionValue {
    /// The number of values in the population. Must be non-negative. This value
    /// must equal the sum of the values in bucket_counts if a histogram is
    /// provided.
    #[prost(int64, tag="1")]
    pub count: i64,
    /// The sum of the values in the population. If count is zero then this field
    /// must be zero.
    #[prost(double, tag="2")]
    pub sum: f64,
    /// The sum of squared deviations from the mean of the values in the
    /// population. For values x_i this is:
    ///
    /// ```text
    /// Sum[i=1..n]((x_i - mean)^2)
    /// ```
    ///
    /// Knuth, "The Art of Computer Programming", Vol. 2, page 323, 3rd edition
    /// describes Welford's method for accumulating this sum in one pass.
    ///
    /// If count is zero then this field must be zero.
    #[prost(double, tag="3")]
    pub sum_of_squared_deviation: f64,
    /// Don't change bucket boundaries within a TimeSeries if your backend doesn't
    /// support this.
    /// TODO(issue #152): consider not required to send bucket options for
    /// optimization.
    #[prost(message, optional, tag="4")]
    pub bucket_options: ::core::option::Option<distribution_value::BucketOptions>,
    /// If the distribution does not have a histogram, then omit this field.
    /// If there is a histogram, then the sum of the values in the Bucket counts
    /// must equal the value in the count field of the distribution.
    #[prost(message, repeated, tag="5")]
    pub buckets: ::prost::alloc::vec::Vec<distribution_value::Bucket>,
}
/// Nested message and enum types in `DistributionValue`.
pub mod distribution_value {
    /// A Distribution may optionally contain a histogram of the values in the
    /// population. The bucket boundaries for that histogram are described by
    /// BucketOptions.
    ///
    /// If bucket_options has no type, then there is no histogram associated with
    /// the Distribution.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BucketOptions {
        #[prost(oneof="bucket_options::Type", tags="1")]
        pub r#type: ::core::option::Option<bucket_options::Type>,
    }
    /// Nested message and enum types in `BucketOptions`.
    pub mod bucket_options {
        /// Specifies a set of buckets with arbitrary upper-bounds.
        /// This defines size(bounds) + 1 (= N) buckets. The boundaries for bucket
        /// index i are:
        ///
        /// [0, bucket_bounds\[i\]) for i == 0
        /// [bucket_bounds\[i-1\], bucket_bounds\[i\]) for 0 < i < N-1
        /// [bucket_bounds\[i\], +infinity) for i == N-1
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Explicit {
            /// The values must be strictly increasing and > 0.
            #[prost(double, repeated, tag="1")]
            pub bounds: ::prost::alloc::vec::Vec<f64>,
        }
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Type {
            /// Bucket with explicit bounds.
            #[prost(message, tag="1")]
            Explicit(Explicit),
        }
    }
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Bucket {
        /// The number of values in each bucket of the histogram, as described in
        /// bucket_bounds.
        #[prost(int64, tag="1")]
        pub count: i64,
        /// If the distribution does not have a histogram, then omit this field.
        #[prost(message, optional, tag="2")]
        pub exemplar: ::core::option::Option<Exemplar>,
    }
    /// Exemplars are example points that may be used to annotate aggregated
    /// Distribution values. They are metadata that gives information about a
    /// particular value added to a Distribution bucket.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Exemplar {
        /// Value of the exemplar point. It determines which bucket the exemplar
        /// belongs to.
        #[prost(double, tag="1")]
        pub value: f64,
        /// The observation (sampling) time of the above value.
        #[prost(message, optional, tag="2")]
        pub timestamp: ::core::option::Option<::prost_types::Timestamp>,
        /// Contextual information about the example value.
        #[prost(map="string, string", tag="3")]
        pub attachments: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    }
}
/// The start_timestamp only applies to the count and sum in the SummaryValue.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SummaryValue {
    /// The total number of recorded values since start_time. Optional since
    /// some systems don't expose this.
    #[prost(message, optional, tag="1")]
    pub count: ::core::option::Option<i64>,
    /// The total sum of recorded values since start_time. Optional since some
    /// systems don't expose this. If count is zero then this field must be zero.
    /// This field must be unset if the sum is not available.
    #[prost(message, optional, tag="2")]
    pub sum: ::core::option::Option<f64>,
    /// Values calculated over an arbitrary time window.
    #[prost(message, optional, tag="3")]
    pub snapshot: ::core::option::Option<summary_value::Snapshot>,
}
/// Nested message and enum types in `SummaryValue`.
pub mod summary_value {
    /// The values in this message can be reset at arbitrary unknown times, with
    /// the requirement that all of them are reset at the same time.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Snapshot {
        /// The number of values in the snapshot. Optional since some systems don't
        /// expose this.
        #[prost(message, optional, tag="1")]
        pub count: ::core::option::Option<i64>,
        /// The sum of values in the snapshot. Optional since some systems don't
        /// expose this. If count is zero then this field must be zero or not set
        /// (if not supported).
        #[prost(message, optional, tag="2")]
        pub sum: ::core::option::Option<f64>,
        /// A list of values at different percentiles of the distribution calculated
        /// from the current snapshot. The percentiles must be strictly increasing.
        #[prost(message, repeated, tag="3")]
        pub percentile_values: ::prost::alloc::vec::Vec<snapshot::ValueAtPercentile>,
    }
    /// Nested message and enum types in `Snapshot`.
    pub mod snapshot {
        /// Represents the value at a given percentile of a distribution.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ValueAtPercentile {
            /// The percentile of a distribution. Must be in the interval
            /// (0.0, 100.0].
            #[prost(double, tag="1")]
            pub percentile: f64,
            /// The value at the given percentile of a distribution.
            #[prost(double, tag="2")]
            pub value: f64,
        }
    }
}
