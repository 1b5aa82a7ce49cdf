//! CMS repository adapter

pub mod client;
pub mod models;
pub mod vendor;

pub use client::CmsClient;
pub use vendor::{CmsVendor, JsonApiVendor};
