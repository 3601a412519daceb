//! REST Catalog Client
//!
//! This client talks JSON to the catalog service's `/foods` endpoints.

use gloo_net::http::Request;
use plateful_shared::{Food, NewFood};

use super::{CatalogClient, CatalogClientError};

/// REST client for the catalog service
#[derive(Debug, Clone)]
pub struct RestClient {
    /// Catalog service base URL
    base_url: String,
}

impl RestClient {
    /// Create a new client for the given base URL
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Create a client pointed at the origin the page was served from
    pub fn from_window_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3333".to_string());
        Self::new(&origin)
    }

    /// Get the collection endpoint URL
    fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    /// Get the endpoint URL for a single entry
    fn food_url(&self, id: u64) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }
}

#[async_trait::async_trait(?Send)]
impl CatalogClient for RestClient {
    async fn list_foods(&self) -> Result<Vec<Food>, CatalogClientError> {
        let response = Request::get(&self.foods_url())
            .send()
            .await
            .map_err(|e| CatalogClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(CatalogClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogClientError::InvalidResponse(e.to_string()))
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, CatalogClientError> {
        let response = Request::post(&self.foods_url())
            .header("Content-Type", "application/json")
            .json(food)
            .map_err(|e| CatalogClientError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| CatalogClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(CatalogClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogClientError::InvalidResponse(e.to_string()))
    }

    async fn update_food(&self, id: u64, food: &NewFood) -> Result<Food, CatalogClientError> {
        let response = Request::put(&self.food_url(id))
            .header("Content-Type", "application/json")
            .json(food)
            .map_err(|e| CatalogClientError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| CatalogClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(CatalogClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogClientError::InvalidResponse(e.to_string()))
    }

    async fn delete_food(&self, id: u64) -> Result<(), CatalogClientError> {
        let response = Request::delete(&self.food_url(id))
            .send()
            .await
            .map_err(|e| CatalogClientError::ConnectionFailed(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(CatalogClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RestClient::new("http://localhost:3333/");
        assert_eq!(client.foods_url(), "http://localhost:3333/foods");
    }

    #[test]
    fn entry_url_includes_id() {
        let client = RestClient::new("http://localhost:3333");
        assert_eq!(client.food_url(42), "http://localhost:3333/foods/42");
    }
}
