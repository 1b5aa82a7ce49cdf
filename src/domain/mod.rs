//! Domain models and types for Baler.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`NodeId`], [`NodeUuid`], [`Bundle`])
//! - **Domain models** ([`ContentRecord`], [`ContentType`])
//! - **Error types** ([`BalerError`], [`CmsError`], [`ArchiveError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Baler uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use baler::domain::{Bundle, NodeUuid};
//!
//! # fn example() -> Result<(), String> {
//! let bundle = Bundle::new("article")?;
//! let uuid = NodeUuid::new("9c2a-47aa")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: Bundle = uuid;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod content_type;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use content_type::ContentType;
pub use errors::{ArchiveError, BalerError, CmsError};
pub use ids::{Bundle, NodeId, NodeUuid};
pub use record::{ContentRecord, ContentRecordBuilder};
pub use result::Result;
