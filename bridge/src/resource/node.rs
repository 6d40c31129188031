//! Node detection for the current process.

use super::{NodeDescriptor, NodeDetector};
use std::collections::HashMap;

/// Version reported as the exporter version.
pub const EXPORTER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Describes the running process: host name, pid and exporter version.
#[derive(Debug, Clone, Default)]
pub struct ProcessNodeDetector {
    core_library_version: String,
    attributes: HashMap<String, String>,
}

impl ProcessNodeDetector {
    /// Creates a detector with no library version or extra attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instrumentation library version to report.
    #[must_use]
    pub fn with_core_library_version(mut self, version: impl Into<String>) -> Self {
        self.core_library_version = version.into();
        self
    }

    /// Adds a node attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

fn local_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read host name");
            String::new()
        }
    }
}

impl NodeDetector for ProcessNodeDetector {
    fn detect(&self, service_name: &str) -> NodeDescriptor {
        NodeDescriptor {
            host_name: local_hostname(),
            pid: std::process::id(),
            service_name: service_name.to_string(),
            exporter_version: EXPORTER_VERSION.to_string(),
            core_library_version: self.core_library_version.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
