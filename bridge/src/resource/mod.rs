//! Resource and node descriptors.
//!
//! Export requests carry two pieces of static metadata: the resource the
//! telemetry describes and the node (process) that produced it. Both are
//! discovered from the environment by a collaborator implementing
//! [`ResourceDetector`] or [`NodeDetector`]; the exporters only ever receive
//! the resolved descriptors.

pub mod env;
pub mod node;

pub use env::{decode_labels, EnvResourceDetector, ResourceError};
pub use node::ProcessNodeDetector;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entity for which telemetry is reported.
///
/// # Example
///
/// ```
/// use ocbridge::resource::ResourceDescriptor;
///
/// let resource = ResourceDescriptor::new("k8s.io/container")
///     .with_label("k8s.io/pod/name", "web-0");
///
/// assert_eq!(resource.labels.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource type, e.g. `k8s.io/container`.
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Labels describing the resource.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl ResourceDescriptor {
    /// Creates a resource without labels.
    #[must_use]
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            labels: HashMap::new(),
        }
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

/// Identity of the process exporting telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Host or container name.
    pub host_name: String,
    /// Process id.
    pub pid: u32,
    /// Name of the instrumented service.
    pub service_name: String,
    /// Version of this exporter.
    pub exporter_version: String,
    /// Version of the instrumentation library.
    #[serde(default)]
    pub core_library_version: String,
    /// Additional node attributes.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// Discovers the resource the current process reports for.
pub trait ResourceDetector {
    /// Returns the detected resource, or `None` when nothing is known.
    fn detect(&self) -> Option<ResourceDescriptor>;
}

/// Discovers the identity of the current process.
pub trait NodeDetector {
    /// Returns a node descriptor for `service_name`.
    fn detect(&self, service_name: &str) -> NodeDescriptor;
}
