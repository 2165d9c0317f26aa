use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::*;

/// Read-only source of users, posts and comments.
///
/// Every accessor answers `None` for "no data": a missing id, a failed request
/// or an unreadable body all look the same to the caller.
#[allow(async_fn_in_trait)]
pub trait PostsApi {
    async fn list_users(&self) -> Option<Vec<User>>;

    async fn list_user_posts(&self, user_id: Option<u64>) -> Option<Vec<Post>>;

    async fn get_user(&self, user_id: Option<u64>) -> Option<User>;

    async fn list_post_comments(&self, post_id: Option<u64>) -> Option<Vec<Comment>>;
}

/// Client for the posts REST service
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Get the base URL for the client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`fetch`](Self::fetch), but logs any failure and reports it as no data.
    pub async fn request<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.fetch(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Request for {} failed: {}", path, e);
                None
            }
        }
    }
}

impl PostsApi for ApiClient {
    async fn list_users(&self) -> Option<Vec<User>> {
        self.request("/users").await
    }

    async fn list_user_posts(&self, user_id: Option<u64>) -> Option<Vec<Post>> {
        let user_id = present_id(user_id)?;
        self.request(&format!("/users/{user_id}/posts")).await
    }

    async fn get_user(&self, user_id: Option<u64>) -> Option<User> {
        let user_id = present_id(user_id)?;
        self.request(&format!("/users/{user_id}")).await
    }

    async fn list_post_comments(&self, post_id: Option<u64>) -> Option<Vec<Comment>> {
        let post_id = present_id(post_id)?;
        self.request(&format!("/posts/{post_id}/comments")).await
    }
}
