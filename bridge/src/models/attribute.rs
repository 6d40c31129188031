//! Dynamically typed attribute values.

use serde::{Deserialize, Serialize};

/// An attribute value as recorded by the instrumentation library.
///
/// Scalars keep their native type so that every float, including NaN and the
/// infinities, stays a float until export. Anything else is kept as JSON.
///
/// # Example
///
/// ```
/// use ocbridge::models::AnyValue;
///
/// assert_eq!(AnyValue::from(200), AnyValue::Int(200));
/// assert!(matches!(AnyValue::from(f64::NAN), AnyValue::Double(v) if v.is_nan()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyValue {
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    Uint(u64),
    /// Floating point number.
    Double(f64),
    /// Text.
    String(String),
    /// Any other value, such as null, a list or a map.
    Other(serde_json::Value),
}

macro_rules! from_scalar {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for AnyValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

from_scalar!(Bool, bool: bool);
from_scalar!(Int, i64: i8, i16, i32, i64, u8, u16, u32);
from_scalar!(Double, f64: f32, f64);

impl From<u64> for AnyValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Int(value),
            Err(_) => Self::Uint(value),
        }
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<serde_json::Value> for AnyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Self::Bool(b),
            Value::String(s) => Self::String(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else if let Some(f) = n.as_f64() {
                    Self::Double(f)
                } else {
                    Self::Other(Value::Number(n))
                }
            }
            other => Self::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_scalars() {
        assert_eq!(AnyValue::from(true), AnyValue::Bool(true));
        assert_eq!(AnyValue::from(-3_i8), AnyValue::Int(-3));
        assert_eq!(AnyValue::from(7_u32), AnyValue::Int(7));
        assert_eq!(AnyValue::from(u64::MAX), AnyValue::Uint(u64::MAX));
        assert_eq!(AnyValue::from(5_u64), AnyValue::Int(5));
        assert_eq!(AnyValue::from(1.5_f32), AnyValue::Double(1.5));
        assert_eq!(AnyValue::from("GET"), AnyValue::String("GET".to_string()));
    }

    #[test]
    fn test_non_finite_floats_stay_floats() {
        assert!(matches!(AnyValue::from(f64::NAN), AnyValue::Double(v) if v.is_nan()));
        assert_eq!(AnyValue::from(f64::INFINITY), AnyValue::Double(f64::INFINITY));
        assert_eq!(
            AnyValue::from(f32::NEG_INFINITY),
            AnyValue::Double(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_from_json() {
        assert_eq!(AnyValue::from(json!(25)), AnyValue::Int(25));
        assert_eq!(AnyValue::from(json!(0.5)), AnyValue::Double(0.5));
        assert_eq!(AnyValue::from(json!(null)), AnyValue::Other(json!(null)));
        assert_eq!(AnyValue::from(json!([1, 2])), AnyValue::Other(json!([1, 2])));
    }

    #[test]
    fn test_deserialize_picks_native_kind() {
        let values: Vec<AnyValue> =
            serde_json::from_str(r#"[true, 25, 18446744073709551615, 10.239, "ocagent", null, {"a": 1}]"#)
                .unwrap();

        assert_eq!(
            values,
            vec![
                AnyValue::Bool(true),
                AnyValue::Int(25),
                AnyValue::Uint(u64::MAX),
                AnyValue::Double(10.239),
                AnyValue::String("ocagent".to_string()),
                AnyValue::Other(json!(null)),
                AnyValue::Other(json!({"a": 1})),
            ]
        );
    }
}
