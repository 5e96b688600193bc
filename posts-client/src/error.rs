use thiserror::Error;

/// Текст, который пользователь видит при любом неуспешном HTTP-статусе.
pub const HTTP_FAILURE_MESSAGE: &str = "Error al cargar las publicaciones";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки загрузки ленты.
///
/// `Display` — это ровно тот текст, который показывается в представлении
/// ошибки: для HTTP-статуса фиксированная строка, для остальных случаев
/// сообщение исходной ошибки без изменений.
pub enum PostsClientError {
    /// Сервер ответил не-2xx статусом. Статус хранится только для логов.
    #[error("{}", HTTP_FAILURE_MESSAGE)]
    Http {
        /// HTTP-статус ответа.
        status: u16,
    },

    /// Запрос не дошёл до сервера или соединение оборвалось.
    #[error("{0}")]
    Transport(String),

    /// Тело ответа не удалось разобрать как массив постов.
    #[error("{0}")]
    Decode(String),
}

/// Результат операций `posts-client`.
pub type PostsClientResult<T> = Result<T, PostsClientError>;

impl PostsClientError {
    /// Возвращает HTTP-статус, если ошибка вызвана ответом сервера.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Http {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PostsClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
