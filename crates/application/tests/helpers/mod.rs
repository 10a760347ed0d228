pub mod mock_repositories;
pub mod pipeline;

pub use mock_repositories::*;
pub use pipeline::*;
