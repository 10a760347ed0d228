use async_trait::async_trait;
use reconflux_domain::{AsnRecord, ResolvedQuery};

/// Outcome of handing a resolved query to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A slot was acquired and processing was spawned
    Admitted,
    /// Cancellation was observed before a slot became free; the query was dropped
    Cancelled,
}

/// Entry points through which discovery results reach the pipeline.
#[async_trait]
pub trait DiscoveryHandler: Send + Sync {
    /// Hands over one resolved DNS answer set.
    ///
    /// Returns once the query has been admitted (processing continues in the
    /// background) or abandoned because of cancellation.
    async fn on_dns_result(&self, query: ResolvedQuery) -> Admission;

    /// Records an ASN/netblock observation. Not subject to admission control.
    async fn on_asn_result(&self, record: AsnRecord);
}
