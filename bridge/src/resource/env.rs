//! Resource detection from `OC_RESOURCE_TYPE` / `OC_RESOURCE_LABELS`.

use super::{ResourceDescriptor, ResourceDetector};
use std::collections::HashMap;
use thiserror::Error;

/// Environment variable holding the resource type.
pub const ENV_RESOURCE_TYPE: &str = "OC_RESOURCE_TYPE";
/// Environment variable holding the resource labels.
pub const ENV_RESOURCE_LABELS: &str = "OC_RESOURCE_LABELS";

/// Maximum length of a label key or value.
const MAX_LABEL_LENGTH: usize = 256;

/// Errors raised while decoding resource labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// A label has no `=` separator.
    #[error("label '{0}' is not of the form key=value")]
    MissingSeparator(String),

    /// A label key is empty.
    #[error("label key cannot be empty")]
    EmptyKey,

    /// A quoted value is missing its closing quote.
    #[error("unterminated quote in label value for '{0}'")]
    UnterminatedQuote(String),

    /// A key or value is longer than 256 characters.
    #[error("label '{0}' exceeds 256 characters")]
    TooLong(String),

    /// A key or value contains characters outside printable ASCII.
    #[error("label '{0}' contains non-printable or non-ASCII characters")]
    NotPrintable(String),
}

fn check_label_part(part: &str) -> Result<(), ResourceError> {
    if part.len() > MAX_LABEL_LENGTH {
        return Err(ResourceError::TooLong(part.to_string()));
    }
    if !part.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err(ResourceError::NotPrintable(part.to_string()));
    }
    Ok(())
}

/// Splits on commas that are not inside double quotes.
fn split_labels(input: &str) -> Result<Vec<&str>, ResourceError> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (index, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    let last = &input[start..];
    if in_quotes {
        let key = last.split('=').next().unwrap_or_default().trim();
        return Err(ResourceError::UnterminatedQuote(key.to_string()));
    }
    parts.push(last);
    Ok(parts)
}

/// Decodes labels of the form `key1=value1,key2="value 2"`.
///
/// Whitespace around keys and values is ignored, values may be wrapped in
/// double quotes to keep commas, and empty segments (such as a trailing
/// comma) are skipped. Later duplicates overwrite earlier ones.
///
/// # Errors
///
/// Returns an error if a segment has no `=`, a key is empty, a quote is not
/// closed, or a key or value is longer than 256 characters or not printable
/// ASCII.
///
/// # Examples
///
/// ```
/// use ocbridge::resource::decode_labels;
///
/// let labels = decode_labels(r#"k8s.io/pod/name=web-0, team="core, infra""#).unwrap();
/// assert_eq!(labels["k8s.io/pod/name"], "web-0");
/// assert_eq!(labels["team"], "core, infra");
/// ```
pub fn decode_labels(input: &str) -> Result<HashMap<String, String>, ResourceError> {
    let mut labels = HashMap::new();

    for segment in split_labels(input)? {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| ResourceError::MissingSeparator(segment.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ResourceError::EmptyKey);
        }

        let value = value.trim();
        let value = match value.strip_prefix('"') {
            Some(quoted) => quoted
                .strip_suffix('"')
                .ok_or_else(|| ResourceError::UnterminatedQuote(key.to_string()))?,
            None => value,
        };

        check_label_part(key)?;
        check_label_part(value)?;
        labels.insert(key.to_string(), value.to_string());
    }

    Ok(labels)
}

/// Reads the resource from the `OC_RESOURCE_TYPE` and `OC_RESOURCE_LABELS`
/// environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvResourceDetector {
    resource_type: Option<String>,
    labels: Option<String>,
}

impl EnvResourceDetector {
    /// Captures the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Captures the variables using `lookup` to resolve names.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            resource_type: lookup(ENV_RESOURCE_TYPE),
            labels: lookup(ENV_RESOURCE_LABELS),
        }
    }

    /// Builds the resource, failing on malformed labels.
    ///
    /// Returns `Ok(None)` when neither a type nor any label is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `OC_RESOURCE_LABELS` cannot be decoded.
    pub fn try_detect(&self) -> Result<Option<ResourceDescriptor>, ResourceError> {
        let resource_type = self
            .resource_type
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let labels = match self.labels.as_deref() {
            Some(raw) => decode_labels(raw)?,
            None => HashMap::new(),
        };

        if resource_type.is_empty() && labels.is_empty() {
            return Ok(None);
        }

        Ok(Some(ResourceDescriptor {
            resource_type,
            labels,
        }))
    }
}

impl ResourceDetector for EnvResourceDetector {
    fn detect(&self) -> Option<ResourceDescriptor> {
        match self.try_detect() {
            Ok(resource) => resource,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed OC_RESOURCE_LABELS");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(resource_type: Option<&str>, labels: Option<&str>) -> EnvResourceDetector {
        EnvResourceDetector::from_lookup(|name| match name {
            ENV_RESOURCE_TYPE => resource_type.map(ToString::to_string),
            ENV_RESOURCE_LABELS => labels.map(ToString::to_string),
            _ => None,
        })
    }

    #[test]
    fn test_decode_simple_labels() {
        let labels = decode_labels("a=1,b=2").unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels["a"], "1");
        assert_eq!(labels["b"], "2");
    }

    #[test]
    fn test_decode_quoted_and_spaced_labels() {
        let labels = decode_labels(r#" region = "eu, west" , zone=b ,"#).unwrap();

        assert_eq!(labels["region"], "eu, west");
        assert_eq!(labels["zone"], "b");
    }

    #[test]
    fn test_decode_empty_value() {
        let labels = decode_labels(r#"a=,b="""#).unwrap();

        assert_eq!(labels["a"], "");
        assert_eq!(labels["b"], "");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode_labels("novalue"),
            Err(ResourceError::MissingSeparator("novalue".to_string()))
        );
        assert_eq!(decode_labels("=x"), Err(ResourceError::EmptyKey));
        assert!(matches!(
            decode_labels(r#"a="open"#),
            Err(ResourceError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            decode_labels(&format!("k={}", "v".repeat(257))),
            Err(ResourceError::TooLong(_))
        ));
        assert!(matches!(
            decode_labels("k=caf\u{e9}"),
            Err(ResourceError::NotPrintable(_))
        ));
    }

    #[test]
    fn test_detect_nothing_set() {
        assert_eq!(detector(None, None).detect(), None);
        assert_eq!(detector(Some("  "), Some("")).detect(), None);
    }

    #[test]
    fn test_detect_type_and_labels() {
        let resource = detector(Some(" k8s.io/container "), Some("pod=web-0"))
            .detect()
            .unwrap();

        assert_eq!(resource.resource_type, "k8s.io/container");
        assert_eq!(resource.labels["pod"], "web-0");
    }

    #[test]
    fn test_detect_labels_only() {
        let resource = detector(None, Some("host=a")).detect().unwrap();

        assert!(resource.resource_type.is_empty());
        assert_eq!(resource.labels.len(), 1);
    }

    #[test]
    fn test_detect_malformed_labels_yields_none() {
        let detector = detector(Some("host"), Some("broken"));

        assert!(detector.try_detect().is_err());
        assert_eq!(detector.detect(), None);
    }
}
