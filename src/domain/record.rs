//! Content record domain model
//!
//! This module defines the core ContentRecord type representing a single CMS
//! content record as read from the repository. The exporter only reads these
//! fields; it never writes back to the store.

use super::ids::{Bundle, NodeId, NodeUuid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content record loaded from the CMS repository
///
/// Holds exactly the fields the export projects into a spreadsheet row:
/// identifiers, title, authorship, creation time, publish flag and language.
///
/// # Examples
///
/// ```
/// use baler::domain::record::ContentRecordBuilder;
/// use baler::domain::ids::{Bundle, NodeId, NodeUuid};
/// use chrono::Utc;
///
/// let record = ContentRecordBuilder::new()
///     .id(NodeId::new(7))
///     .uuid(NodeUuid::new("0b44-11aa").unwrap())
///     .bundle(Bundle::new("article").unwrap())
///     .title("Hello")
///     .author_name("admin")
///     .author_id(1)
///     .created(Utc::now())
///     .published(true)
///     .langcode("en")
///     .build()
///     .unwrap();
/// assert_eq!(record.title, "Hello");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Numeric node id
    pub id: NodeId,

    /// Unique external identifier
    pub uuid: NodeUuid,

    /// Content type machine name
    pub bundle: Bundle,

    /// Record title (label)
    pub title: String,

    /// Author display name
    pub author_name: String,

    /// Numeric author id
    pub author_id: u64,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Publish flag
    pub published: bool,

    /// Language code (e.g. "en")
    pub langcode: String,
}

impl ContentRecord {
    /// Creates a new builder for constructing a ContentRecord
    pub fn builder() -> ContentRecordBuilder {
        ContentRecordBuilder::default()
    }

    /// Human-readable publish status label
    pub fn status_label(&self) -> &'static str {
        if self.published {
            "published"
        } else {
            "unpublished"
        }
    }
}

/// Builder for constructing ContentRecord instances
#[derive(Debug, Default)]
pub struct ContentRecordBuilder {
    id: Option<NodeId>,
    uuid: Option<NodeUuid>,
    bundle: Option<Bundle>,
    title: Option<String>,
    author_name: Option<String>,
    author_id: Option<u64>,
    created: Option<DateTime<Utc>>,
    published: Option<bool>,
    langcode: Option<String>,
}

impl ContentRecordBuilder {
    /// Creates a new ContentRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node id
    pub fn id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the node uuid
    pub fn uuid(mut self, uuid: NodeUuid) -> Self {
        self.uuid = Some(uuid);
        self
    }

    /// Sets the bundle
    pub fn bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Sets the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the author display name
    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Sets the author id
    pub fn author_id(mut self, id: u64) -> Self {
        self.author_id = Some(id);
        self
    }

    /// Sets the creation timestamp
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Sets the publish flag
    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Sets the language code
    pub fn langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = Some(langcode.into());
        self
    }

    /// Builds the ContentRecord
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing
    pub fn build(self) -> Result<ContentRecord, String> {
        Ok(ContentRecord {
            id: self.id.ok_or("id is required")?,
            uuid: self.uuid.ok_or("uuid is required")?,
            bundle: self.bundle.ok_or("bundle is required")?,
            title: self.title.ok_or("title is required")?,
            author_name: self.author_name.ok_or("author_name is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            created: self.created.ok_or("created is required")?,
            published: self.published.ok_or("published is required")?,
            langcode: self.langcode.ok_or("langcode is required")?,
        })
    }
}
