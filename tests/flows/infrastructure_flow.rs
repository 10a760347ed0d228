/// Infrastructure Flow Tests
///
/// ASN observation → sinks (no admission, no discovery events)

#[path = "../common/mod.rs"]
mod common;

use common::*;
use reconflux_application::ports::DiscoveryHandler;

#[tokio::test]
async fn test_asn_observation_is_persisted_for_the_run() {
    let pipeline = TestPipeline::start(&["example.com"]).await;
    let sink = pipeline.sink.clone();

    pipeline.manager.on_asn_result(asn_observation()).await;
    pipeline.manager.on_asn_result(asn_observation()).await;

    assert_eq!(sink.count_infrastructure(RUN_ID).await.unwrap(), 1);
    let finished = pipeline.finish().await;
    assert!(finished.discoveries().is_empty());
    assert_eq!(finished.metrics.summary().heartbeats, 2);
}

#[tokio::test]
async fn test_asn_observation_ignores_admission_gate() {
    let pipeline = TestPipeline::start(&["example.com"]).await;
    let sink = pipeline.sink.clone();

    // A cancelled gate refuses DNS answers but never infrastructure data
    pipeline.shutdown.cancel();
    pipeline.manager.on_asn_result(asn_observation()).await;

    assert_eq!(sink.count_infrastructure(RUN_ID).await.unwrap(), 1);
    pipeline.finish().await;
}

#[tokio::test]
async fn test_incomplete_asn_observation_is_skipped() {
    let pipeline = TestPipeline::start(&["example.com"]).await;
    let sink = pipeline.sink.clone();

    let mut record = asn_observation();
    record.prefix.clear();
    pipeline.manager.on_asn_result(record).await;

    assert_eq!(sink.count_infrastructure(RUN_ID).await.unwrap(), 0);
}
