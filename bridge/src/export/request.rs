//! Attaching node and resource metadata to export requests.

use crate::export::datetime_to_timestamp;
use crate::proto::agent::common::v1 as common;
use crate::proto::agent::metrics::v1::ExportMetricsServiceRequest;
use crate::proto::agent::trace::v1::ExportTraceServiceRequest;
use crate::proto::resource::v1::Resource;
use crate::resource::{NodeDescriptor, ResourceDescriptor};
use chrono::{DateTime, Utc};

/// Converts a resource descriptor to its wire form.
#[must_use]
pub fn resource_to_proto(resource: &ResourceDescriptor) -> Resource {
    Resource {
        r#type: resource.resource_type.clone(),
        labels: resource.labels.clone(),
    }
}

/// Converts a node descriptor to its wire form, stamping the process start
/// time.
///
/// The language is left unspecified because the schema has no entry for
/// Rust.
#[must_use]
pub fn node_to_proto(node: &NodeDescriptor, start_time: &DateTime<Utc>) -> common::Node {
    common::Node {
        identifier: Some(common::ProcessIdentifier {
            host_name: node.host_name.clone(),
            pid: node.pid,
            start_timestamp: Some(datetime_to_timestamp(start_time)),
        }),
        library_info: Some(common::LibraryInfo {
            language: common::library_info::Language::Unspecified as i32,
            exporter_version: node.exporter_version.clone(),
            core_library_version: node.core_library_version.clone(),
        }),
        service_info: Some(common::ServiceInfo {
            name: node.service_name.clone(),
        }),
        attributes: node.attributes.clone(),
    }
}

/// An export request that can carry node and resource metadata.
///
/// Both setters replace any value set before.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ocbridge::config::SpanLimits;
/// use ocbridge::export::{translate_spans, ExportRequest};
/// use ocbridge::resource::ResourceDescriptor;
///
/// let request = translate_spans(&[], &SpanLimits::default())
///     .with_resource(&ResourceDescriptor::new("host").with_label("zone", "b"));
///
/// assert_eq!(request.resource.unwrap().r#type, "host");
/// ```
pub trait ExportRequest: Sized {
    /// Sets the resource the request reports for.
    #[must_use]
    fn with_resource(self, resource: &ResourceDescriptor) -> Self;

    /// Sets the node that produced the request.
    #[must_use]
    fn with_node(self, node: &NodeDescriptor, start_time: &DateTime<Utc>) -> Self;
}

impl ExportRequest for ExportTraceServiceRequest {
    fn with_resource(mut self, resource: &ResourceDescriptor) -> Self {
        self.resource = Some(resource_to_proto(resource));
        self
    }

    fn with_node(mut self, node: &NodeDescriptor, start_time: &DateTime<Utc>) -> Self {
        self.node = Some(node_to_proto(node, start_time));
        self
    }
}

impl ExportRequest for ExportMetricsServiceRequest {
    fn with_resource(mut self, resource: &ResourceDescriptor) -> Self {
        self.resource = Some(resource_to_proto(resource));
        self
    }

    fn with_node(mut self, node: &NodeDescriptor, start_time: &DateTime<Utc>) -> Self {
        self.node = Some(node_to_proto(node, start_time));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn node() -> NodeDescriptor {
        NodeDescriptor {
            host_name: "web-0".to_string(),
            pid: 4242,
            service_name: "example".to_string(),
            exporter_version: "0.1.0".to_string(),
            core_library_version: "0.23.0".to_string(),
            attributes: HashMap::from([("zone".to_string(), "b".to_string())]),
        }
    }

    #[test]
    fn test_node_to_proto() {
        let started = Utc.timestamp_opt(1_700_000_000, 5).unwrap();

        let wire_node = node_to_proto(&node(), &started);

        let identifier = wire_node.identifier.unwrap();
        assert_eq!(identifier.host_name, "web-0");
        assert_eq!(identifier.pid, 4242);
        let start = identifier.start_timestamp.unwrap();
        assert_eq!((start.seconds, start.nanos), (1_700_000_000, 5));
        let library = wire_node.library_info.unwrap();
        assert_eq!(library.language, 0);
        assert_eq!(library.exporter_version, "0.1.0");
        assert_eq!(library.core_library_version, "0.23.0");
        assert_eq!(wire_node.service_info.unwrap().name, "example");
        assert_eq!(wire_node.attributes["zone"], "b");
    }

    #[test]
    fn test_resource_to_proto() {
        let resource = ResourceDescriptor::new("k8s.io/container")
            .with_label("k8s.io/pod/name", "web-0");

        let wire_resource = resource_to_proto(&resource);

        assert_eq!(wire_resource.r#type, "k8s.io/container");
        assert_eq!(wire_resource.labels["k8s.io/pod/name"], "web-0");
    }

    #[test]
    fn test_last_resource_wins() {
        let request = ExportMetricsServiceRequest::default()
            .with_resource(&ResourceDescriptor::new("first"))
            .with_resource(&ResourceDescriptor::new("second"));

        assert_eq!(request.resource.unwrap().r#type, "second");
    }

    #[test]
    fn test_trace_request_with_node() {
        let started = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let request = ExportTraceServiceRequest::default().with_node(&node(), &started);

        let wire_node = request.node.unwrap();
        assert_eq!(wire_node.service_info.unwrap().name, "example");
        assert!(request.resource.is_none());
    }
}
