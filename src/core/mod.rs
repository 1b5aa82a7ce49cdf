//! Business logic
//!
//! - [`export`] - run orchestration, batch loop, progress and summary
//! - [`sheet`] - per-record workbook rendering
//! - [`archive`] - incremental zip output

pub mod archive;
pub mod export;
pub mod sheet;
