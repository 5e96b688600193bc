use tracing::{debug, warn};

use crate::error::PostsClientResult;
use crate::models::Post;

/// Сколько публикаций остаётся в ленте после загрузки.
pub const FEED_LIMIT: usize = 10;

/// Оставляет первые `FEED_LIMIT` постов в порядке, заданном сервером.
pub fn first_page(mut posts: Vec<Post>) -> Vec<Post> {
    posts.truncate(FEED_LIMIT);
    posts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Одно из трёх взаимоисключающих представлений ленты.
pub enum FeedView<'a> {
    /// Запрос ещё не завершился.
    Loading,
    /// Запрос завершился ошибкой; внутри текст для пользователя.
    Error(&'a str),
    /// Лента загружена (возможно, пустая).
    Loaded(&'a [Post]),
}

/// Выбирает представление по трём значениям состояния.
///
/// Приоритет фиксирован: загрузка, затем ошибка, затем список.
pub fn select_view<'a>(loading: bool, error: Option<&'a str>, posts: &'a [Post]) -> FeedView<'a> {
    if loading {
        return FeedView::Loading;
    }
    match error {
        Some(message) => FeedView::Error(message),
        None => FeedView::Loaded(posts),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Локальное состояние ленты: посты, флаг загрузки и текст ошибки.
///
/// Создаётся в состоянии загрузки. Единственный писатель — обработчик
/// завершения запроса (`settle`).
pub struct FeedState {
    posts: Vec<Post>,
    loading: bool,
    error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    /// Начальное состояние: идёт загрузка, постов нет, ошибки нет.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Применяет результат запроса.
    ///
    /// Успех заменяет ленту первыми `FEED_LIMIT` постами и сбрасывает ошибку.
    /// Ошибка сохраняет её текст и не трогает прежние посты. В обоих случаях
    /// флаг загрузки снимается последним.
    pub fn settle(&mut self, result: PostsClientResult<Vec<Post>>) {
        match result {
            Ok(posts) => {
                let received = posts.len();
                self.posts = first_page(posts);
                self.error = None;
                debug!(received, kept = self.posts.len(), "posts loaded");
            }
            Err(err) => {
                warn!(error = %err, status = ?err.status(), "failed to load posts");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Возвращает ленту в состояние загрузки перед повторным запросом.
    pub fn restart(&mut self) {
        self.loading = true;
    }

    /// Текущее представление.
    pub fn view(&self) -> FeedView<'_> {
        select_view(self.loading, self.error.as_deref(), &self.posts)
    }

    /// Загруженные посты.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Идёт ли сейчас загрузка.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Текст последней ошибки, если она была.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
