pub mod config_scope;

pub use config_scope::{generate_run_id, ConfigScope};
