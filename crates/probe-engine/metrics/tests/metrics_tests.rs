//! Tests for the metric definitions and the Prometheus sink.

use prometheus::{Encoder, TextEncoder};
use serde_json::json;

use probe_engine_metrics::{MetricName, MetricPoint, MetricSink, MetricUnit, PrometheusSink};

fn point(name: MetricName, value: f64) -> MetricPoint {
    MetricPoint {
        name,
        namespace: "health".to_string(),
        dimension: "nightly health check".to_string(),
        value,
    }
}

#[test]
fn there_are_exactly_three_metrics() {
    let names = enum_iterator::all::<MetricName>().collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            MetricName::QueryResponseTime,
            MetricName::QueryResponseStatus,
            MetricName::QueryConnectionTime,
        ]
    );
}

#[test]
fn timings_are_in_seconds_and_status_is_unitless() {
    assert_eq!(MetricName::QueryResponseTime.unit(), MetricUnit::Seconds);
    assert_eq!(MetricName::QueryConnectionTime.unit(), MetricUnit::Seconds);
    assert_eq!(MetricName::QueryResponseStatus.unit(), MetricUnit::Unitless);
}

#[test]
fn points_serialize_with_backend_names() {
    let value = serde_json::to_value(point(MetricName::QueryResponseStatus, 500.0)).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "SQLQueryResponseStatus",
            "namespace": "health",
            "dimension": "nightly health check",
            "value": 500.0
        })
    );
}

#[tokio::test]
async fn prometheus_sink_records_the_latest_value() {
    let mut registry = prometheus::Registry::new();
    let sink = PrometheusSink::initialize(&mut registry).expect("PrometheusSink::initialize");

    sink.put_metric(&point(MetricName::QueryResponseStatus, 200.0))
        .await
        .unwrap();
    sink.put_metric(&point(MetricName::QueryResponseStatus, 500.0))
        .await
        .unwrap();
    sink.put_metric(&point(MetricName::QueryConnectionTime, 0.25))
        .await
        .unwrap();

    let mut buffer = vec![];
    TextEncoder::new()
        .encode(&registry.gather(), &mut buffer)
        .unwrap();
    let exposition = String::from_utf8(buffer).unwrap();

    assert!(exposition.contains(
        r#"query_probe_response_status{namespace="health",query_name="nightly health check"} 500"#
    ));
    assert!(exposition.contains(
        r#"query_probe_connection_time_seconds{namespace="health",query_name="nightly health check"} 0.25"#
    ));
}

#[test]
fn registering_twice_fails() {
    let mut registry = prometheus::Registry::new();
    PrometheusSink::initialize(&mut registry).expect("first registration");
    assert!(PrometheusSink::initialize(&mut registry).is_err());
}
