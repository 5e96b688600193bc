use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::DEFAULT_ENDPOINT;
use crate::error::{PostsClientError, PostsClientResult};
use crate::models::Post;
use crate::source::PostSource;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
/// HTTP-источник ленты поверх `reqwest`.
pub struct PostsClient {
    endpoint: String,
    client: Client,
}

impl PostsClient {
    /// Создаёт клиент для заданного адреса списка постов с таймаутами
    /// по умолчанию (5 с на соединение, 15 с на весь запрос).
    pub fn new(endpoint: impl Into<String>) -> PostsClientResult<Self> {
        Self::with_timeouts(endpoint, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT)
    }

    /// Создаёт клиент с явными таймаутами.
    pub fn with_timeouts(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> PostsClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(PostsClientError::from_reqwest)?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Клиент для публичного JSONPlaceholder.
    pub fn jsonplaceholder() -> PostsClientResult<Self> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Адрес, к которому обращается клиент.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl PostSource for PostsClient {
    async fn fetch_posts(&self) -> PostsClientResult<Vec<Post>> {
        debug!(endpoint = %self.endpoint, "fetching posts");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(PostsClientError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostsClientError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(PostsClientError::from_reqwest)?;
        let posts: Vec<Post> = serde_json::from_slice(&body)?;

        debug!(count = posts.len(), "posts received");
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_points_at_jsonplaceholder() {
        let client = PostsClient::jsonplaceholder().expect("client should build");
        assert_eq!(client.endpoint(), "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn custom_endpoint_is_kept_as_is() {
        let client = PostsClient::with_timeouts(
            "http://127.0.0.1:9999/posts",
            Duration::from_secs(1),
            Duration::from_secs(2),
        )
        .expect("client should build");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9999/posts");
    }
}
