//! Catalog Service Client
//!
//! This module provides HTTP access to the remote catalog service. The
//! dashboard talks to the service through the [`CatalogClient`] trait;
//! [`RestClient`] is the gloo-net implementation used in the browser.

mod rest;

pub use rest::RestClient;

use async_trait::async_trait;
use plateful_shared::{Food, NewFood};

/// Error types for catalog client operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for catalog service implementations
///
/// The dashboard only depends on this interface, so the backing service
/// can be swapped without touching the view code.
#[async_trait(?Send)]
pub trait CatalogClient {
    /// Fetch the full catalog, in server order.
    async fn list_foods(&self) -> Result<Vec<Food>, CatalogClientError>;

    /// Create a new catalog entry; the service assigns the id.
    async fn create_food(&self, food: &NewFood) -> Result<Food, CatalogClientError>;

    /// Replace the entry with the given id.
    async fn update_food(&self, id: u64, food: &NewFood) -> Result<Food, CatalogClientError>;

    /// Delete the entry with the given id.
    async fn delete_food(&self, id: u64) -> Result<(), CatalogClientError>;
}
