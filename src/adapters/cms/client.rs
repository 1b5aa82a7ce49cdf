//! CMS client factory and utilities

use crate::config::CmsConfig;
use crate::domain::{BalerError, Result};
use std::sync::Arc;

use super::vendor::{CmsVendor, JsonApiVendor};

/// CMS client that wraps a vendor implementation
///
/// Provides a high-level handle for the export core. It selects the vendor
/// implementation from configuration and offers a connectivity check.
pub struct CmsClient {
    vendor: Arc<dyn CmsVendor>,
}

impl CmsClient {
    /// Creates a new CMS client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor type is not supported or the vendor
    /// cannot be initialized.
    pub fn new(config: CmsConfig) -> Result<Self> {
        let vendor_type = config.vendor.to_lowercase();

        let vendor: Arc<dyn CmsVendor> = match vendor_type.as_str() {
            "jsonapi" => Arc::new(JsonApiVendor::new(config)?),
            _ => {
                return Err(BalerError::Configuration(format!(
                    "Unsupported CMS vendor: {vendor_type}. Supported vendors: jsonapi"
                )))
            }
        };

        Ok(Self { vendor })
    }

    /// Wraps an existing vendor implementation (used by tests)
    pub fn from_vendor(vendor: Arc<dyn CmsVendor>) -> Self {
        Self { vendor }
    }

    /// Returns a reference to the underlying vendor implementation
    pub fn vendor(&self) -> &Arc<dyn CmsVendor> {
        &self.vendor
    }

    /// Performs a connectivity check against the CMS
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS is not reachable or not responding.
    pub async fn health_check(&self) -> Result<()> {
        match self.vendor.list_content_types().await {
            Ok(_) => {
                tracing::info!(base_url = self.vendor.base_url(), "CMS health check passed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    base_url = self.vendor.base_url(),
                    error = %e,
                    "CMS health check failed"
                );
                Err(e)
            }
        }
    }

    /// Base URL of the CMS instance
    pub fn base_url(&self) -> &str {
        self.vendor.base_url()
    }
}
