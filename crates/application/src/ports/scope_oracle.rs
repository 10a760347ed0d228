/// Authority deciding which names belong to the current run.
pub trait ScopeOracle: Send + Sync {
    /// Root domain of the run that `name` falls under, if any.
    fn which_domain(&self, name: &str) -> Option<String>;

    /// Whether `name` may be expanded by this run.
    fn is_in_scope(&self, name: &str) -> bool;

    /// Identifier attached to every fact written during this run.
    fn run_id(&self) -> String;
}
