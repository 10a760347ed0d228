pub mod dispatcher;
pub mod handlers;

pub use dispatcher::{DispatchReport, RecordDispatcher};
pub use handlers::RecordHandlers;
