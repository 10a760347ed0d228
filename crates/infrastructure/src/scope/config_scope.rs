use reconflux_application::ports::ScopeOracle;
use reconflux_domain::config::ScopeConfig;
use reconflux_domain::{is_same_or_subdomain, normalize_name};
use tracing::debug;

/// Scope authority backed by the `[scope]` configuration section.
///
/// A name is in scope when it equals or sits below a configured root and
/// does not equal or sit below an excluded name. `which_domain` answers with
/// the most specific matching root.
#[derive(Debug, Clone)]
pub struct ConfigScope {
    roots: Vec<String>,
    excluded: Vec<String>,
    run_id: String,
}

impl ConfigScope {
    pub fn new(
        roots: impl IntoIterator<Item = impl AsRef<str>>,
        excluded: impl IntoIterator<Item = impl AsRef<str>>,
        run_id: impl Into<String>,
    ) -> Self {
        let mut roots = Self::clean(roots);
        // longest first so the first hit is the most specific root
        roots.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            roots,
            excluded: Self::clean(excluded),
            run_id: run_id.into(),
        }
    }

    pub fn from_config(config: &ScopeConfig) -> Self {
        let run_id = config
            .run_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_run_id);

        let scope = Self::new(&config.domains, &config.excluded, run_id);
        debug!(
            roots = scope.roots.len(),
            excluded = scope.excluded.len(),
            run_id = %scope.run_id,
            "Scope loaded"
        );
        scope
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    fn clean(names: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
        let mut cleaned: Vec<String> = names
            .into_iter()
            .map(|n| normalize_name(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        cleaned.sort();
        cleaned.dedup();
        cleaned
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded
            .iter()
            .any(|excluded| is_same_or_subdomain(name, excluded))
    }
}

/// `run_<unix millis>`
pub fn generate_run_id() -> String {
    format!("run_{}", chrono::Utc::now().timestamp_millis())
}

impl ScopeOracle for ConfigScope {
    fn which_domain(&self, name: &str) -> Option<String> {
        let name = normalize_name(name);
        if name.is_empty() || self.is_excluded(&name) {
            return None;
        }
        self.roots
            .iter()
            .find(|root| is_same_or_subdomain(&name, root))
            .cloned()
    }

    fn is_in_scope(&self, name: &str) -> bool {
        self.which_domain(name).is_some()
    }

    fn run_id(&self) -> String {
        self.run_id.clone()
    }
}
