use async_trait::async_trait;
use reconflux_domain::{DiscoveryTag, DomainError};

/// Storage sink ("graph database") receiving normalized facts.
///
/// Every insert carries the record source, discovery tag and run identifier
/// so a sink can partition or trace facts by run. The pipeline treats
/// persistence as best-effort: an `Err` from any method is logged and never
/// stops writes to other sinks or event emission.
#[async_trait]
pub trait GraphSink: Send + Sync {
    /// Short label used in failure diagnostics (e.g. `"sqlite:./reconflux.db"`).
    fn name(&self) -> &str;

    /// Records that `name` is an alias of `target`.
    async fn insert_cname(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records that `name` resolves to the IPv4 `address`.
    async fn insert_a(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records that `name` resolves to the IPv6 `address`.
    async fn insert_aaaa(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records a reverse mapping from the `name` pointer to `target`.
    async fn insert_ptr(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records that `service` (itself a record name under `name`) is served by `target`.
    async fn insert_srv(
        &self,
        name: &str,
        service: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records `target` as a nameserver of `name`.
    async fn insert_ns(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records `target` as a mail exchanger of `name`.
    async fn insert_mx(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;

    /// Records that `address` sits in `prefix`, announced by `asn`.
    #[allow(clippy::too_many_arguments)]
    async fn insert_infrastructure(
        &self,
        asn: u32,
        description: &str,
        address: &str,
        prefix: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError>;
}
