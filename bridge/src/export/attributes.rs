//! Attribute value normalization and count-limited truncation.
//!
//! Span, annotation and link attributes arrive as dynamically typed
//! [`AnyValue`]s. The wire schema only knows four value kinds, so every value is
//! mapped onto [`AttributeValue`] with a string fallback for the rest.

use crate::export::count_to_i32;
use crate::models::AnyValue;
use crate::proto::trace::v1 as wire;
use std::collections::HashMap;

/// The value kinds an exported attribute can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// UTF-8 string.
    String(String),
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Double(f64),
}

/// Maps a recorded value onto the closed set of wire value kinds.
///
/// Booleans and strings keep their kind, integers widen to `i64` (unsigned
/// values above `i64::MAX` wrap) and every float, NaN and the infinities
/// included, becomes a double. Anything else, including `null`, arrays and
/// objects, is rendered as compact JSON text.
///
/// # Examples
///
/// ```
/// use ocbridge::export::{normalize, AttributeValue};
/// use ocbridge::models::AnyValue;
/// use serde_json::json;
///
/// assert_eq!(normalize(&AnyValue::from(42)), AttributeValue::Int(42));
/// assert_eq!(
///     normalize(&AnyValue::from(json!([1, 2]))),
///     AttributeValue::String("[1,2]".to_string())
/// );
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn normalize(value: &AnyValue) -> AttributeValue {
    match value {
        AnyValue::Bool(b) => AttributeValue::Bool(*b),
        AnyValue::String(s) => AttributeValue::String(s.clone()),
        AnyValue::Int(i) => AttributeValue::Int(*i),
        AnyValue::Uint(u) => AttributeValue::Int(*u as i64),
        AnyValue::Double(d) => AttributeValue::Double(*d),
        AnyValue::Other(other) => normalize_json(other),
    }
}

#[allow(clippy::cast_possible_wrap)]
fn normalize_json(value: &serde_json::Value) -> AttributeValue {
    use serde_json::Value;

    match value {
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::String(s) => AttributeValue::String(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                AttributeValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                AttributeValue::Int(u as i64)
            } else if let Some(f) = n.as_f64() {
                AttributeValue::Double(f)
            } else {
                AttributeValue::String(n.to_string())
            }
        }
        other => AttributeValue::String(other.to_string()),
    }
}

impl From<AttributeValue> for wire::AttributeValue {
    fn from(value: AttributeValue) -> Self {
        use wire::attribute_value::Value;

        let value = match value {
            AttributeValue::String(s) => Value::StringValue(wire::TruncatableString {
                value: s,
                truncated_byte_count: 0,
            }),
            AttributeValue::Bool(b) => Value::BoolValue(b),
            AttributeValue::Int(i) => Value::IntValue(i),
            AttributeValue::Double(d) => Value::DoubleValue(d),
        };

        Self { value: Some(value) }
    }
}

/// Converts an attribute bag, keeping at most `max` entries.
///
/// When the bag is over the limit the entries with the lexicographically
/// smallest keys are kept. `already_dropped` is the number of attributes the
/// instrumentation library discarded before export; it is added to the
/// dropped count so that kept plus dropped always equals the original count.
#[must_use]
pub fn truncate_attributes(
    attributes: &HashMap<String, AnyValue>,
    max: Option<usize>,
    already_dropped: u32,
) -> wire::span::Attributes {
    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort_unstable();

    let kept = max.map_or(keys.len(), |max| max.min(keys.len()));
    let overflow = keys.len() - kept;

    let attribute_map = keys
        .into_iter()
        .take(kept)
        .map(|key| (key.clone(), normalize(&attributes[key]).into()))
        .collect();

    wire::span::Attributes {
        attribute_map,
        dropped_attributes_count: count_to_i32(overflow).saturating_add(
            i32::try_from(already_dropped).unwrap_or(i32::MAX),
        ),
    }
}

/// Like [`truncate_attributes`], but omits the field when there is nothing to
/// report.
pub(crate) fn attributes_field(
    attributes: &HashMap<String, AnyValue>,
    max: Option<usize>,
    already_dropped: u32,
) -> Option<wire::span::Attributes> {
    if attributes.is_empty() && already_dropped == 0 {
        return None;
    }
    Some(truncate_attributes(attributes, max, already_dropped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SpanData, SpanId, TraceId};
    use proptest::prelude::*;
    use serde_json::json;

    fn bag(entries: &[(&str, AnyValue)]) -> HashMap<String, AnyValue> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn wire_kind(value: &wire::AttributeValue) -> &'static str {
        use wire::attribute_value::Value;

        match value.value {
            Some(Value::StringValue(_)) => "string",
            Some(Value::BoolValue(_)) => "bool",
            Some(Value::IntValue(_)) => "int",
            Some(Value::DoubleValue(_)) => "double",
            None => "none",
        }
    }

    #[test]
    fn test_normalize_supported_kinds() {
        assert_eq!(normalize(&AnyValue::from(true)), AttributeValue::Bool(true));
        assert_eq!(
            normalize(&AnyValue::from("GET")),
            AttributeValue::String("GET".to_string())
        );
        assert_eq!(normalize(&AnyValue::from(-7)), AttributeValue::Int(-7));
        assert_eq!(normalize(&AnyValue::from(0.25)), AttributeValue::Double(0.25));
        assert_eq!(normalize(&AnyValue::from(1.5_f32)), AttributeValue::Double(1.5));
    }

    #[test]
    fn test_normalize_non_finite_floats() {
        assert!(matches!(
            normalize(&AnyValue::from(f64::NAN)),
            AttributeValue::Double(v) if v.is_nan()
        ));
        assert_eq!(
            normalize(&AnyValue::from(f64::INFINITY)),
            AttributeValue::Double(f64::INFINITY)
        );
        assert_eq!(
            normalize(&AnyValue::from(f64::NEG_INFINITY)),
            AttributeValue::Double(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_span_float_attributes_export_as_doubles() {
        let span = SpanData::new(TraceId([1; 16]), SpanId([2; 8]), "compute")
            .with_attribute("nan", f64::NAN)
            .with_attribute("inf", f64::INFINITY)
            .with_attribute("ratio", 1.5_f32);

        let attributes = truncate_attributes(&span.attributes, None, 0);

        for key in ["nan", "inf", "ratio"] {
            assert_eq!(wire_kind(&attributes.attribute_map[key]), "double", "{key}");
        }
        match &attributes.attribute_map["inf"].value {
            Some(wire::attribute_value::Value::DoubleValue(v)) => assert!(v.is_infinite()),
            other => panic!("expected double value, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_unsigned_wraps() {
        assert_eq!(normalize(&AnyValue::from(u64::MAX)), AttributeValue::Int(-1));
        assert_eq!(
            normalize(&AnyValue::from(i64::MAX as u64)),
            AttributeValue::Int(i64::MAX)
        );
        assert_eq!(
            normalize(&AnyValue::Other(json!(u64::MAX))),
            AttributeValue::Int(-1)
        );
    }

    #[test]
    fn test_normalize_fallback_renders_json() {
        assert_eq!(
            normalize(&AnyValue::Other(serde_json::Value::Null)),
            AttributeValue::String("null".to_string())
        );
        assert_eq!(
            normalize(&AnyValue::from(json!({"a": 1}))),
            AttributeValue::String("{\"a\":1}".to_string())
        );
    }

    #[test]
    fn test_into_wire_value() {
        let wire_value: wire::AttributeValue = AttributeValue::String("x".to_string()).into();

        match wire_value.value {
            Some(wire::attribute_value::Value::StringValue(s)) => {
                assert_eq!(s.value, "x");
                assert_eq!(s.truncated_byte_count, 0);
            }
            other => panic!("expected string value, got {other:?}"),
        }
    }

    #[test]
    fn test_truncate_keeps_smallest_keys() {
        let attributes = bag(&[
            ("zeta", AnyValue::from(1)),
            ("alpha", AnyValue::from(2)),
            ("mid", AnyValue::from(3)),
        ]);

        let result = truncate_attributes(&attributes, Some(2), 0);

        assert_eq!(result.attribute_map.len(), 2);
        assert!(result.attribute_map.contains_key("alpha"));
        assert!(result.attribute_map.contains_key("mid"));
        assert_eq!(result.dropped_attributes_count, 1);
    }

    #[test]
    fn test_truncate_adds_source_dropped_count() {
        let attributes = bag(&[("a", AnyValue::from(1)), ("b", AnyValue::from(2))]);

        let result = truncate_attributes(&attributes, Some(1), 3);

        assert_eq!(result.attribute_map.len(), 1);
        assert_eq!(result.dropped_attributes_count, 4);
    }

    #[test]
    fn test_truncate_zero_limit_drops_everything() {
        let attributes = bag(&[("a", AnyValue::from(1))]);

        let result = truncate_attributes(&attributes, Some(0), 0);

        assert!(result.attribute_map.is_empty());
        assert_eq!(result.dropped_attributes_count, 1);
    }

    #[test]
    fn test_attributes_field_empty() {
        assert!(attributes_field(&HashMap::new(), None, 0).is_none());

        let dropped_only = attributes_field(&HashMap::new(), None, 2).unwrap();
        assert_eq!(dropped_only.dropped_attributes_count, 2);
    }

    fn float_value() -> impl Strategy<Value = f64> {
        prop_oneof![
            any::<f64>(),
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    }

    fn supported_value() -> impl Strategy<Value = AnyValue> {
        prop_oneof![
            any::<bool>().prop_map(AnyValue::from),
            "[a-z ]{0,12}".prop_map(AnyValue::from),
            any::<i64>().prop_map(AnyValue::from),
            any::<u64>().prop_map(AnyValue::from),
            float_value().prop_map(AnyValue::from),
            any::<f32>().prop_map(AnyValue::from),
        ]
    }

    fn unsupported_value() -> impl Strategy<Value = AnyValue> {
        prop_oneof![
            Just(AnyValue::Other(serde_json::Value::Null)),
            proptest::collection::vec(any::<i32>(), 0..4).prop_map(|v| AnyValue::from(json!(v))),
            "[a-z]{1,6}".prop_map(|k| AnyValue::from(json!({ k: true }))),
        ]
    }

    proptest! {
        #[test]
        fn test_supported_bags_under_limit_are_kept(
            attributes in proptest::collection::hash_map("[a-z]{1,8}", supported_value(), 0..16),
            headroom in 0usize..4,
        ) {
            let max = attributes.len() + headroom;
            let result = truncate_attributes(&attributes, Some(max), 0);

            prop_assert_eq!(result.attribute_map.len(), attributes.len());
            prop_assert_eq!(result.dropped_attributes_count, 0);
            for (key, value) in &attributes {
                let expected = match value {
                    AnyValue::Bool(_) => "bool",
                    AnyValue::String(_) | AnyValue::Other(_) => "string",
                    AnyValue::Int(_) | AnyValue::Uint(_) => "int",
                    AnyValue::Double(_) => "double",
                };
                prop_assert_eq!(wire_kind(&result.attribute_map[key]), expected);
            }
        }

        #[test]
        fn test_kept_plus_dropped_is_original(
            attributes in proptest::collection::hash_map("[a-z]{1,8}", supported_value(), 0..24),
            max in 0usize..12,
            already_dropped in 0u32..8,
        ) {
            let result = truncate_attributes(&attributes, Some(max), already_dropped);

            prop_assert!(result.attribute_map.len() <= max);
            prop_assert_eq!(
                result.attribute_map.len() + result.dropped_attributes_count as usize,
                attributes.len() + already_dropped as usize
            );
        }

        #[test]
        fn test_floats_always_become_doubles(value in float_value()) {
            prop_assert!(matches!(normalize(&AnyValue::from(value)), AttributeValue::Double(_)));
        }

        #[test]
        fn test_unsupported_values_become_strings(value in unsupported_value()) {
            prop_assert!(matches!(normalize(&value), AttributeValue::String(_)));
        }
    }
}
