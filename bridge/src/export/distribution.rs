//! Encoding of distribution aggregations.

use crate::models::DistributionData;
use crate::proto::metrics::v1::{distribution_value, DistributionValue};

/// Encodes a distribution with explicit bucket `bounds`.
///
/// The sum is reconstructed as `mean * count`. Bounds and bucket counts are
/// copied as given; inputs where the bucket count is not one more than the
/// number of bounds, or where the buckets do not add up to `count`, are
/// encoded anyway and only reported at debug level.
#[must_use]
pub fn encode_distribution(data: &DistributionData, bounds: &[f64]) -> DistributionValue {
    use distribution_value::bucket_options::{Explicit, Type};

    if data.count_per_bucket.len() != bounds.len() + 1 {
        tracing::debug!(
            bounds = bounds.len(),
            buckets = data.count_per_bucket.len(),
            "Distribution bucket count does not match bounds"
        );
    }
    let bucket_total: i64 = data.count_per_bucket.iter().sum();
    if bucket_total != data.count {
        tracing::debug!(
            count = data.count,
            bucket_total,
            "Distribution buckets do not add up to count"
        );
    }

    DistributionValue {
        count: data.count,
        sum: data.sum(),
        sum_of_squared_deviation: data.sum_of_squared_dev,
        bucket_options: Some(distribution_value::BucketOptions {
            r#type: Some(Type::Explicit(Explicit {
                bounds: bounds.to_vec(),
            })),
        }),
        buckets: data
            .count_per_bucket
            .iter()
            .map(|&count| distribution_value::Bucket {
                count,
                exemplar: None,
            })
            .collect(),
    }
}
