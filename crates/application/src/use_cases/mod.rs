pub mod data_manager;
pub mod ingest;
pub mod record_infrastructure;

pub use data_manager::{DataManager, DataManagerBuilder};
pub use ingest::{DispatchReport, RecordDispatcher, RecordHandlers};
pub use record_infrastructure::RecordInfrastructureUseCase;
