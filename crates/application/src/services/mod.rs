pub mod admission;
pub mod liveness;
pub mod sink_fanout;
pub mod text_miner;

pub use admission::{AdmissionController, BackoffSchedule};
pub use liveness::LivenessSignal;
pub use sink_fanout::{FanoutReport, SinkFanout};
pub use text_miner::{MiningReport, TextMiner};
