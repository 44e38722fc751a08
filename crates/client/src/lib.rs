//! HTTP client for the ZenGrid API.
//!
//! [`GridClient`] is a single reusable connection handle built once at
//! startup from a [`ClientConfig`] and passed explicitly to whatever
//! needs store access -- there is no global instance. Transport
//! concerns (connection reuse, TLS, timeouts) belong to the underlying
//! `reqwest` client; this crate adds only typed request/response
//! plumbing and error mapping.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use zengrid_core::types::{DbId, Timestamp};

pub mod config;

pub use config::{ClientConfig, ConfigError};

/// Errors raised by [`GridClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 404 for the addressed resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response from the server.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Convenience type alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A grid item as served by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct GridItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating a grid item. The server forces new items
/// active, so there is no `is_active` field to send.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateGridItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

/// Payload for a sparse patch. Omitted (`None`) fields are untouched
/// server-side, so every field is skipped when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateGridItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Health endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Timestamp,
    pub uptime: u64,
    pub message: String,
}

/// Standard `{ "data": T }` success envelope.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Standard `{ "error": ..., "code": ... }` error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A reusable handle to the ZenGrid API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its
/// connection pool across clones.
#[derive(Debug, Clone)]
pub struct GridClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GridClient {
    /// Build a client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from the environment. Fails fast if the base URL
    /// is not configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // --- Store operations ---

    /// List all active grid items in display order.
    pub async fn list_grid_items(&self) -> ClientResult<Vec<GridItem>> {
        let response = self
            .request(reqwest::Method::GET, "/api/v1/grid-items")
            .send()
            .await?;
        Self::decode(response).await
    }

    /// List active grid items in one category.
    pub async fn grid_items_by_category(&self, category: &str) -> ClientResult<Vec<GridItem>> {
        let response = self
            .request(
                reqwest::Method::GET,
                &format!("/api/v1/grid-items/by-category/{category}"),
            )
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Create a grid item, returning the stored row (with its new id).
    pub async fn create_grid_item(&self, input: &CreateGridItem) -> ClientResult<GridItem> {
        let response = self
            .request(reqwest::Method::POST, "/api/v1/grid-items")
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Sparse-patch a grid item. Fails with [`ClientError::NotFound`]
    /// if the id does not reference an existing item.
    pub async fn update_grid_item(
        &self,
        id: DbId,
        input: &UpdateGridItem,
    ) -> ClientResult<GridItem> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/api/v1/grid-items/{id}"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a grid item. Fails with [`ClientError::NotFound`] if the
    /// id does not reference an existing item.
    pub async fn delete_grid_item(&self, id: DbId) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/v1/grid-items/{id}"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Fetch the server's health status.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let response = self.request(reqwest::Method::GET, "/health").send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<HealthStatus>().await?)
    }

    // --- Internals ---

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let builder = self.http.request(method, url);
        match &self.config.admin_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Unwrap the `{ "data": ... }` envelope of a success response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        let envelope = response.json::<DataEnvelope<T>>().await?;
        Ok(envelope.data)
    }

    /// Map non-success statuses to [`ClientError`], passing successes through.
    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorEnvelope>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_omits_unset_fields() {
        let input = CreateGridItem {
            title: "A".to_string(),
            category: Some("news".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["title"], "A");
        assert_eq!(json["category"], "news");
        assert!(json.get("description").is_none());
        assert!(json.get("is_active").is_none());
    }

    #[test]
    fn sparse_patch_serializes_only_supplied_fields() {
        let patch = UpdateGridItem {
            sort_order: Some(5),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["sort_order"], 5);
    }
}
