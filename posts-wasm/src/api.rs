use async_trait::async_trait;
use gloo_net::http::Request;
use posts_client::{DEFAULT_ENDPOINT, Post, PostSource, PostsClientError, PostsClientResult};

const POSTS_URL: &str = match option_env!("WASM_POSTS_URL") {
    Some(value) => value,
    None => DEFAULT_ENDPOINT,
};

/// Источник ленты через `fetch` браузера.
#[derive(Debug, Clone)]
pub(crate) struct BrowserSource {
    url: &'static str,
}

impl BrowserSource {
    pub(crate) fn new() -> Self {
        Self { url: POSTS_URL }
    }
}

#[async_trait(?Send)]
impl PostSource for BrowserSource {
    async fn fetch_posts(&self) -> PostsClientResult<Vec<Post>> {
        let response = Request::get(self.url)
            .send()
            .await
            .map_err(|err| PostsClientError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(PostsClientError::Http {
                status: response.status(),
            });
        }

        response
            .json::<Vec<Post>>()
            .await
            .map_err(|err| PostsClientError::Decode(err.to_string()))
    }
}
