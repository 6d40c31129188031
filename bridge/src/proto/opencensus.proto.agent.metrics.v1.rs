#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportMetricsServiceRequest {
    /// This is required only in the first message on the stream or if the
    /// previous sent ExportMetricsServiceRequest message has a different Node (e.g.
    /// when the same RPC is used to send Metrics from multiple Applications).
    #[prost(message, optional, tag="1")]
    pub node: ::core::option::Option<super::super::common::v1::Node>,
    /// A list of metrics that belong to the last received Node.
    #[prost(message, repeated, tag="2")]
    pub metrics: ::prost::alloc::vec::Vec<super::super::super::metrics::v1::Metric>,
    /// The resource for the metrics in this message that do not have an explicit
    /// resource set.
    /// If unset, the most recently set resource in the RPC stream applies. It is
    /// valid to never be set within a stream, e.g. when no resource info is known
    /// at all or when all sent metrics have an explicit resource set.
    #[prost(message, optional, tag="3")]
    pub resource: ::core::option::Option<super::super::super::resource::v1::Resource>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportMetricsServiceResponse {
}
