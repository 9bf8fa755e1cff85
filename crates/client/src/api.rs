//! HTTP transport for the wishlist service.
//!
//! [`WishlistApi`] is the seam between the session layer and the
//! network; [`ApiClient`] is the reqwest-backed implementation. Tests
//! script the trait directly instead of standing up a server.

use async_trait::async_trait;
use serde::Deserialize;

use giftlist_core::types::DbId;

use crate::error::ClientError;
use crate::types::{ItemPatchRequest, NewItem, Wishlist, WishlistItem};

/// Environment variable naming the service base URL.
pub const API_BASE_URL_ENV: &str = "GIFTLIST_API_BASE_URL";

/// Default base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:10000";

/// Typed access to the wishlist endpoints.
#[async_trait]
pub trait WishlistApi {
    /// Get-or-create the wishlist for a chat, with its items.
    async fn fetch_wishlist(&self, chat_id: &str) -> Result<Wishlist, ClientError>;

    /// Add an item, returning the created row.
    async fn add_item(
        &self,
        wishlist_id: DbId,
        item: &NewItem,
    ) -> Result<WishlistItem, ClientError>;

    /// Apply a reservation/purchase patch, returning the updated row.
    async fn patch_item(
        &self,
        item_id: DbId,
        patch: &ItemPatchRequest,
    ) -> Result<WishlistItem, ClientError>;

    /// Delete an item.
    async fn delete_item(&self, item_id: DbId) -> Result<(), ClientError>;
}

/// reqwest-backed implementation of [`WishlistApi`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from `GIFTLIST_API_BASE_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

/// Error body shape returned by the service.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Turn a non-success response into [`ClientError::Api`], pulling the
/// message from the service's error body when it parses.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ApiErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    tracing::warn!(status = status.as_u16(), message = %message, "API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl WishlistApi for ApiClient {
    async fn fetch_wishlist(&self, chat_id: &str) -> Result<Wishlist, ClientError> {
        let url = format!("{}/api/wishlists", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "chatId": chat_id }))
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn add_item(
        &self,
        wishlist_id: DbId,
        item: &NewItem,
    ) -> Result<WishlistItem, ClientError> {
        let url = format!("{}/api/wishlists/{wishlist_id}/items", self.base_url);
        let response = self.http.post(&url).json(item).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn patch_item(
        &self,
        item_id: DbId,
        patch: &ItemPatchRequest,
    ) -> Result<WishlistItem, ClientError> {
        let url = format!("{}/api/wishlist-items/{item_id}", self.base_url);
        let response = self.http.patch(&url).json(patch).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn delete_item(&self, item_id: DbId) -> Result<(), ClientError> {
        let url = format!("{}/api/wishlist-items/{item_id}", self.base_url);
        let response = self.http.delete(&url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
