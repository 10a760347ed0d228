use crate::ports::{EventBus, ScopeOracle};
use crate::services::LivenessSignal;
use fancy_regex::Regex;
use reconflux_domain::{
    normalize_name, AddressEvent, BusEvent, DiscoveryTag, DomainError, NameEvent,
};
use std::sync::Arc;
use tracing::{debug, warn};

const IPV4_PATTERN: &str =
    r"((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

const SUBDOMAIN_PATTERN: &str =
    r"(([a-zA-Z0-9]{1}|[_a-zA-Z0-9]{1}[_a-zA-Z0-9-]{0,61}[a-zA-Z0-9]{1})[.]{1})+[a-zA-Z]{2,61}";

const MINED_SOURCE: &str = "DNS";

/// Counts of events produced from one piece of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MiningReport {
    pub addresses: usize,
    pub names: usize,
    pub dropped_names: usize,
}

/// Extracts IPv4 literals and subdomain-shaped tokens from free-text record
/// data (TXT/SPF) and turns them into discovery events.
///
/// Addresses are announced unconditionally under the owning domain. Names
/// are only re-published when the scope authority places them in scope and
/// can name their root domain. Nothing is written to sinks from here.
pub struct TextMiner {
    ipv4: Regex,
    subdomain: Regex,
    scope: Arc<dyn ScopeOracle>,
    bus: Arc<dyn EventBus>,
    liveness: LivenessSignal,
}

impl TextMiner {
    pub fn new(
        scope: Arc<dyn ScopeOracle>,
        bus: Arc<dyn EventBus>,
        liveness: LivenessSignal,
    ) -> Result<Self, DomainError> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| DomainError::InvalidPattern(e.to_string()))
        };

        Ok(Self {
            ipv4: compile(IPV4_PATTERN)?,
            subdomain: compile(SUBDOMAIN_PATTERN)?,
            scope,
            bus,
            liveness,
        })
    }

    pub fn mine(&self, data: &str, domain: &str) -> MiningReport {
        let mut report = MiningReport::default();

        for address in Self::matches(&self.ipv4, data) {
            self.bus.publish(BusEvent::NewAddress(AddressEvent {
                address: address.to_string(),
                domain: domain.to_string(),
                tag: DiscoveryTag::Dns,
                source: MINED_SOURCE.to_string(),
            }));
            report.addresses += 1;
        }

        for candidate in Self::matches(&self.subdomain, data) {
            let name = normalize_name(candidate);
            if !self.scope.is_in_scope(&name) {
                report.dropped_names += 1;
                continue;
            }

            let Some(root) = self
                .scope
                .which_domain(&name)
                .map(|d| normalize_name(&d))
                .filter(|d| !d.is_empty())
            else {
                report.dropped_names += 1;
                continue;
            };

            self.bus.publish(BusEvent::NewName(NameEvent {
                name,
                domain: root,
                tag: DiscoveryTag::Dns,
                source: MINED_SOURCE.to_string(),
            }));
            report.names += 1;
        }

        debug!(
            addresses = report.addresses,
            names = report.names,
            dropped = report.dropped_names,
            "Mined record text"
        );
        self.liveness.beat();
        report
    }

    fn matches<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
        re.find_iter(text)
            .filter_map(|m| match m {
                Ok(m) => Some(m.as_str()),
                Err(e) => {
                    warn!(error = %e, "Pattern match aborted");
                    None
                }
            })
            .collect()
    }
}
