//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for CMS identifiers. Each type
//! ensures type safety and validates the format the CMS hands out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric node identifier
///
/// The CMS assigns every content record a serial numeric id. This wrapper
/// keeps node ids from being mixed up with author ids or counters.
///
/// # Examples
///
/// ```
/// use baler::domain::ids::NodeId;
/// use std::str::FromStr;
///
/// let id = NodeId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new NodeId from a raw numeric id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid node id: {s}"))
    }
}

/// Node UUID newtype wrapper
///
/// Represents the unique external identifier the CMS assigns to a record.
/// The exporter treats it as opaque; it only has to be non-empty because it
/// names the record's archive entry.
///
/// # Examples
///
/// ```
/// use baler::domain::ids::NodeUuid;
/// use std::str::FromStr;
///
/// let uuid = NodeUuid::from_str("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(uuid.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeUuid(String);

impl NodeUuid {
    /// Creates a new NodeUuid from a string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the uuid is empty or contains path separators
    /// (it is embedded into archive entry names).
    pub fn new(uuid: impl Into<String>) -> Result<Self, String> {
        let uuid = uuid.into();
        if uuid.trim().is_empty() {
            return Err("Node uuid cannot be empty".to_string());
        }
        if uuid.contains('/') || uuid.contains('\\') {
            return Err(format!("Node uuid cannot contain path separators: {uuid}"));
        }
        Ok(Self(uuid))
    }

    /// Returns the uuid as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeUuid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NodeUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Content type (bundle) machine name
///
/// A bundle names a category of content records sharing a field schema.
/// Machine names are lowercase identifiers like `article` or `landing_page`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bundle(String);

impl Bundle {
    /// Creates a new Bundle from a machine name
    ///
    /// # Errors
    ///
    /// Returns `Err` if the name is empty or is not a lowercase machine name
    /// (`a-z`, `0-9`, `_`).
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Bundle name cannot be empty".to_string());
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(format!(
                "Invalid bundle machine name '{name}'. Expected lowercase letters, digits and underscores"
            ));
        }
        Ok(Self(name))
    }

    /// Returns the machine name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Bundle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Bundle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
