//! CLI command implementations

pub mod content_types;
pub mod export;
pub mod init;
pub mod validate;
