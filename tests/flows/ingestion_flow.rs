/// Ingestion Flow Tests
///
/// Resolved answer → admission → dispatcher → handlers → SQLite + bus

#[path = "../common/mod.rs"]
mod common;

use common::*;
use reconflux_application::ports::{Admission, DiscoveryHandler};
use reconflux_domain::config::PipelineConfig;
use reconflux_domain::{AddressEvent, BusEvent, DiscoveryTag, NameEvent};

// ============================================================================
// Alias handling
// ============================================================================

#[tokio::test]
async fn test_cname_answer_stores_alias_and_requeues_target() {
    // Arrange
    let pipeline = TestPipeline::start(&["example.com"]).await;

    // Act
    let admission = pipeline.manager.on_dns_result(cdn_alias_answer()).await;
    let finished = pipeline.finish().await;

    // Assert
    assert_eq!(admission, Admission::Admitted);
    assert_eq!(
        finished.stored_records().await,
        vec![(
            "CNAME".to_string(),
            "www.example.com".to_string(),
            "edge.cdn.example.net".to_string(),
        )]
    );
    assert_eq!(
        finished.discoveries(),
        vec![&BusEvent::NewName(NameEvent {
            name: "edge.cdn.example.net".to_string(),
            domain: "example.net".to_string(),
            tag: DiscoveryTag::Dns,
            source: "DNS".to_string(),
        })]
    );
    assert!(finished.metrics.summary().heartbeats > 0);
}

// ============================================================================
// Text mining
// ============================================================================

#[tokio::test]
async fn test_spf_answer_emits_events_without_facts() {
    let pipeline = TestPipeline::start(&["example.com"]).await;

    pipeline.manager.on_dns_result(spf_answer()).await;
    let finished = pipeline.finish().await;

    assert!(finished.stored_records().await.is_empty());
    let discoveries = finished.discoveries();
    assert_eq!(discoveries.len(), 2);
    assert!(discoveries.contains(&&BusEvent::NewAddress(AddressEvent {
        address: "203.0.113.5".to_string(),
        domain: "example.com".to_string(),
        tag: DiscoveryTag::Dns,
        source: "DNS".to_string(),
    })));
    assert!(discoveries.contains(&&BusEvent::NewName(NameEvent {
        name: "_spf.example.com".to_string(),
        domain: "example.com".to_string(),
        tag: DiscoveryTag::Dns,
        source: "DNS".to_string(),
    })));
}

// ============================================================================
// Mixed answer set
// ============================================================================

#[tokio::test]
async fn test_apex_answer_processes_every_record_in_order() {
    let pipeline = TestPipeline::start(&["example.com"]).await;

    pipeline.manager.on_dns_result(apex_answer()).await;
    let finished = pipeline.finish().await;

    assert_eq!(
        finished.stored_records().await,
        vec![
            ("A".to_string(), "example.com".to_string(), "192.0.2.80".to_string()),
            ("NS".to_string(), "example.com".to_string(), "ns1.dns-host.net".to_string()),
            ("MX".to_string(), "example.com".to_string(), "mx.example.com".to_string()),
        ]
    );

    let summary = finished.metrics.summary();
    assert_eq!(summary.addresses, 1);
    assert_eq!(summary.names, 2);
    assert_eq!(finished.metrics.domain_count("dns-host.net"), 1);
    assert_eq!(finished.metrics.domain_count("example.com"), 1);
}

#[tokio::test]
async fn test_replayed_answers_are_stored_once() {
    let pipeline = TestPipeline::start(&["example.com"]).await;

    for _ in 0..3 {
        pipeline.manager.on_dns_result(apex_answer()).await;
    }
    let finished = pipeline.finish().await;

    assert_eq!(finished.stored_records().await.len(), 3);
    assert_eq!(finished.metrics.summary().addresses, 3);
}

// ============================================================================
// Admission under load
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_burst_of_queries_all_processed_with_wider_gate() {
    let config = PipelineConfig {
        max_concurrency: 3,
        backoff_ms: vec![1, 2, 5],
        ..PipelineConfig::default()
    };
    let pipeline = TestPipeline::start_with(&["example.com"], config).await;

    for i in 0..30 {
        let query = reconflux_domain::ResolvedQuery::new(format!("host{}.example.com", i), "example.com")
            .with_record(reconflux_domain::ResourceRecord::new(
                format!("host{}.example.com", i),
                reconflux_domain::RecordType::A,
                format!("192.0.2.{}", i + 1),
            ));
        assert_eq!(pipeline.manager.on_dns_result(query).await, Admission::Admitted);
    }
    let finished = pipeline.finish().await;

    assert_eq!(finished.stored_records().await.len(), 30);
    assert_eq!(finished.metrics.summary().addresses, 30);
}

#[tokio::test]
async fn test_shutdown_drops_pending_answers() {
    let pipeline = TestPipeline::start(&["example.com"]).await;

    pipeline.shutdown.cancel();
    let admission = pipeline.manager.on_dns_result(apex_answer()).await;
    let finished = pipeline.finish().await;

    assert_eq!(admission, Admission::Cancelled);
    assert!(finished.stored_records().await.is_empty());
    assert!(finished.discoveries().is_empty());
}
