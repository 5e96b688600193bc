use async_trait::async_trait;

use crate::error::PostsClientResult;
use crate::models::Post;

/// Источник ленты: один GET без параметров.
///
/// Реализации не повторяют запрос и не обрезают ответ, это делает
/// `FeedState::settle`. Трейт объявлен без `Send`, так как браузерная
/// реализация работает с `!Send`-фьючами `gloo-net`.
#[async_trait(?Send)]
pub trait PostSource {
    /// Загружает весь список постов в порядке, заданном сервером.
    async fn fetch_posts(&self) -> PostsClientResult<Vec<Post>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostsClientError;
    use crate::feed::{FeedState, FeedView};

    struct StaticSource(PostsClientResult<Vec<Post>>);

    #[async_trait(?Send)]
    impl PostSource for StaticSource {
        async fn fetch_posts(&self) -> PostsClientResult<Vec<Post>> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn dyn_source_feeds_state() {
        let source: Box<dyn PostSource> = Box::new(StaticSource(Err(
            PostsClientError::Transport("Network down".to_string()),
        )));

        let mut state = FeedState::new();
        state.settle(source.fetch_posts().await);

        assert_eq!(state.view(), FeedView::Error("Network down"));
    }
}
