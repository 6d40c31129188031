//! Conversion of finished spans into the agent trace schema.

use crate::config::SpanLimits;
use crate::export::attributes::attributes_field;
use crate::export::{apply_limit, count_to_i32, datetime_to_timestamp, truncatable_string};
use crate::models::{
    Annotation, Link, LinkType, MessageEvent, MessageEventType, SpanData, SpanKind,
    TracestateEntry,
};
use crate::proto::agent::trace::v1::ExportTraceServiceRequest;
use crate::proto::trace::v1 as wire;

fn span_kind_to_proto(kind: SpanKind) -> wire::span::SpanKind {
    match kind {
        SpanKind::Unspecified => wire::span::SpanKind::Unspecified,
        SpanKind::Server => wire::span::SpanKind::Server,
        SpanKind::Client => wire::span::SpanKind::Client,
    }
}

fn message_event_type_to_proto(
    event_type: MessageEventType,
) -> wire::span::time_event::message_event::Type {
    use wire::span::time_event::message_event::Type;

    match event_type {
        MessageEventType::Unspecified => Type::Unspecified,
        MessageEventType::Sent => Type::Sent,
        MessageEventType::Received => Type::Received,
    }
}

fn link_type_to_proto(link_type: LinkType) -> wire::span::link::Type {
    match link_type {
        LinkType::Unspecified => wire::span::link::Type::Unspecified,
        LinkType::Child => wire::span::link::Type::ChildLinkedSpan,
        LinkType::Parent => wire::span::link::Type::ParentLinkedSpan,
    }
}

fn tracestate_to_proto(entries: &[TracestateEntry]) -> Option<wire::span::Tracestate> {
    if entries.is_empty() {
        return None;
    }

    Some(wire::span::Tracestate {
        entries: entries
            .iter()
            .map(|entry| wire::span::tracestate::Entry {
                key: entry.key.clone(),
                value: entry.value.clone(),
            })
            .collect(),
    })
}

fn annotation_to_proto(annotation: &Annotation, limits: &SpanLimits) -> wire::span::TimeEvent {
    wire::span::TimeEvent {
        time: Some(datetime_to_timestamp(&annotation.time)),
        value: Some(wire::span::time_event::Value::Annotation(
            wire::span::time_event::Annotation {
                description: Some(truncatable_string(&annotation.message)),
                attributes: attributes_field(
                    &annotation.attributes,
                    limits.max_annotation_attributes,
                    0,
                ),
            },
        )),
    }
}

fn message_event_to_proto(event: &MessageEvent) -> wire::span::TimeEvent {
    wire::span::TimeEvent {
        time: Some(datetime_to_timestamp(&event.time)),
        value: Some(wire::span::time_event::Value::MessageEvent(
            wire::span::time_event::MessageEvent {
                r#type: message_event_type_to_proto(event.event_type) as i32,
                id: event.message_id,
                uncompressed_size: event.uncompressed_byte_size,
                compressed_size: event.compressed_byte_size,
            },
        )),
    }
}

/// Annotations first, then message events, each truncated to its own limit.
fn time_events_to_proto(span: &SpanData, limits: &SpanLimits) -> Option<wire::span::TimeEvents> {
    let (annotations, dropped_annotations) = apply_limit(&span.annotations, limits.max_annotations);
    let (events, dropped_events) = apply_limit(&span.message_events, limits.max_message_events);

    let dropped_annotations = dropped_annotations + span.dropped_annotation_count as usize;
    let dropped_events = dropped_events + span.dropped_message_event_count as usize;

    if annotations.is_empty() && events.is_empty() && dropped_annotations == 0 && dropped_events == 0
    {
        return None;
    }

    let time_event = annotations
        .iter()
        .map(|annotation| annotation_to_proto(annotation, limits))
        .chain(events.iter().map(message_event_to_proto))
        .collect();

    Some(wire::span::TimeEvents {
        time_event,
        dropped_annotations_count: count_to_i32(dropped_annotations),
        dropped_message_events_count: count_to_i32(dropped_events),
    })
}

fn link_to_proto(link: &Link, limits: &SpanLimits) -> wire::span::Link {
    wire::span::Link {
        trace_id: link.trace_id.as_bytes().to_vec(),
        span_id: link.span_id.as_bytes().to_vec(),
        r#type: link_type_to_proto(link.link_type) as i32,
        attributes: attributes_field(&link.attributes, limits.max_link_attributes, 0),
        tracestate: None,
    }
}

fn links_to_proto(span: &SpanData, limits: &SpanLimits) -> Option<wire::span::Links> {
    let (links, dropped) = apply_limit(&span.links, limits.max_links);
    let dropped = dropped + span.dropped_link_count as usize;

    if links.is_empty() && dropped == 0 {
        return None;
    }

    Some(wire::span::Links {
        link: links.iter().map(|link| link_to_proto(link, limits)).collect(),
        dropped_links_count: count_to_i32(dropped),
    })
}

/// Converts a single span to its wire form.
///
/// A parent id of all zeros marks a root span and leaves the wire parent
/// empty. Repeated parts of the span are capped by `limits`; whatever is cut
/// is added to the matching dropped count together with the counts the
/// instrumentation library already reported.
#[must_use]
pub fn span_to_proto(span: &SpanData, limits: &SpanLimits) -> wire::Span {
    let parent_span_id = if span.parent_span_id.is_valid() {
        span.parent_span_id.as_bytes().to_vec()
    } else {
        Vec::new()
    };

    wire::Span {
        trace_id: span.trace_id.as_bytes().to_vec(),
        span_id: span.span_id.as_bytes().to_vec(),
        tracestate: tracestate_to_proto(&span.tracestate),
        parent_span_id,
        name: Some(truncatable_string(&span.name)),
        kind: span_kind_to_proto(span.kind) as i32,
        start_time: Some(datetime_to_timestamp(&span.start_time)),
        end_time: Some(datetime_to_timestamp(&span.end_time)),
        attributes: attributes_field(
            &span.attributes,
            limits.max_attributes,
            span.dropped_attribute_count,
        ),
        stack_trace: None,
        time_events: time_events_to_proto(span, limits),
        links: links_to_proto(span, limits),
        status: Some(wire::Status {
            code: span.status.code,
            message: span.status.message.clone(),
        }),
        resource: None,
        same_process_as_parent_span: Some(!span.has_remote_parent),
        child_span_count: Some(span.child_span_count),
    }
}

/// Builds a trace export request holding every span in input order.
///
/// Node and resource are left unset; attach them with
/// [`ExportRequest`](crate::export::ExportRequest).
///
/// # Examples
///
/// ```
/// use ocbridge::config::SpanLimits;
/// use ocbridge::export::translate_spans;
/// use ocbridge::models::{SpanData, SpanId, TraceId};
///
/// let span = SpanData::new(TraceId([1; 16]), SpanId([2; 8]), "GET /");
/// let request = translate_spans(&[span], &SpanLimits::default());
///
/// assert_eq!(request.spans.len(), 1);
/// assert!(request.spans[0].parent_span_id.is_empty());
/// ```
#[must_use]
pub fn translate_spans(spans: &[SpanData], limits: &SpanLimits) -> ExportTraceServiceRequest {
    let spans: Vec<wire::Span> = spans
        .iter()
        .map(|span| span_to_proto(span, limits))
        .collect();

    tracing::debug!(spans = spans.len(), "Translated spans");

    ExportTraceServiceRequest {
        node: None,
        spans,
        resource: None,
    }
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;
