//! Export orchestration
//!
//! The coordinator drives the run; the batch processor consumes one page of
//! queued ids at a time; progress and summary types report what happened.

pub mod batch;
pub mod coordinator;
pub mod progress;
pub mod summary;

pub use batch::{BatchConfig, BatchProcessor, BatchResult};
pub use coordinator::ExportCoordinator;
pub use progress::BatchProgress;
pub use summary::{ExportError, ExportErrorType, ExportSummary};
