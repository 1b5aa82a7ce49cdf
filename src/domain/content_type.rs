//! Content type domain model

use super::ids::Bundle;
use serde::{Deserialize, Serialize};

/// A content type (bundle) as exposed by the CMS
///
/// Pairs the machine name with the human label shown to the operator when
/// picking what to export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Machine name
    pub id: Bundle,

    /// Human-readable label
    pub label: String,
}

impl ContentType {
    /// Creates a new ContentType
    pub fn new(id: Bundle, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
