//! Wire models for the CMS export API
//!
//! DTOs deserialized from the CMS responses, converted into domain types at
//! the adapter boundary so the rest of the crate never sees raw wire data.

use crate::domain::{Bundle, CmsError, ContentRecord, ContentType, NodeId, NodeUuid, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Content type entry as returned by `GET /api/content-types`
#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeDto {
    /// Machine name
    pub id: String,

    /// Human label
    pub label: String,
}

impl ContentTypeDto {
    /// Converts the DTO into the domain ContentType
    pub fn into_content_type(self) -> Result<ContentType> {
        let bundle = Bundle::new(self.id)
            .map_err(|e| CmsError::InvalidResponse(format!("Invalid content type id: {e}")))?;
        Ok(ContentType::new(bundle, self.label))
    }
}

/// Response of `GET /api/nodes?types=...`: the matching node id set
#[derive(Debug, Clone, Deserialize)]
pub struct NodeIdsDto {
    /// Matching node ids
    pub ids: Vec<u64>,
}

impl NodeIdsDto {
    /// Converts the raw id list into domain NodeIds
    pub fn into_node_ids(self) -> Vec<NodeId> {
        self.ids.into_iter().map(NodeId::new).collect()
    }
}

/// Author sub-object of a node response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDto {
    /// Numeric author id
    pub uid: u64,

    /// Display name
    pub name: String,
}

/// Node as returned by `GET /api/nodes/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDto {
    /// Numeric node id
    pub nid: u64,

    /// Unique external identifier
    pub uuid: String,

    /// Content type machine name
    #[serde(rename = "type")]
    pub bundle: String,

    /// Title
    pub title: String,

    /// Author
    pub author: AuthorDto,

    /// Creation timestamp (RFC 3339)
    pub created: DateTime<Utc>,

    /// Publish flag
    pub status: bool,

    /// Language code
    pub langcode: String,
}

impl NodeDto {
    /// Converts the DTO into the domain ContentRecord
    ///
    /// # Errors
    ///
    /// Returns `CmsError::InvalidResponse` when the CMS hands back ids the
    /// domain types reject.
    pub fn into_record(self) -> Result<ContentRecord> {
        let uuid = NodeUuid::new(self.uuid)
            .map_err(|e| CmsError::InvalidResponse(format!("Invalid node uuid: {e}")))?;
        let bundle = Bundle::new(self.bundle)
            .map_err(|e| CmsError::InvalidResponse(format!("Invalid node bundle: {e}")))?;

        ContentRecord::builder()
            .id(NodeId::new(self.nid))
            .uuid(uuid)
            .bundle(bundle)
            .title(self.title)
            .author_name(self.author.name)
            .author_id(self.author.uid)
            .created(self.created)
            .published(self.status)
            .langcode(self.langcode)
            .build()
            .map_err(|e| CmsError::InvalidResponse(format!("Incomplete node: {e}")).into())
    }
}
