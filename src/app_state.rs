//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::{CatalogStore, UserRegistry};
use crate::gateway::DelegationClient;
use crate::service::{AccountService, CatalogService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog lookups.
    pub catalog_service: Arc<CatalogService>,
    /// User registration.
    pub account_service: Arc<AccountService>,
    /// Outbound client for delegated lookups.
    pub delegation: DelegationClient,
    /// Honour `X-Forwarded-Proto` when rebuilding delegated URLs.
    pub trust_forwarded_proto: bool,
}

impl AppState {
    /// Wires the services around `catalog` and a fresh, empty user registry.
    ///
    /// # Errors
    ///
    /// Returns an error when the outbound HTTP client cannot be constructed.
    pub fn new(catalog: CatalogStore, config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let catalog_service = Arc::new(CatalogService::new(Arc::new(catalog)));
        let account_service = Arc::new(AccountService::new(Arc::new(UserRegistry::new())));
        let delegation = DelegationClient::new(config.upstream_timeout())?;

        Ok(Self {
            catalog_service,
            account_service,
            delegation,
            trust_forwarded_proto: config.trust_forwarded_proto,
        })
    }
}
