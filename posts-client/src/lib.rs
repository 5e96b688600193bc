//! Клиентская библиотека ленты публикаций JSONPlaceholder.
//!
//! Содержит всё, что не зависит от способа отрисовки:
//! - модель `Post` и типизированные ошибки загрузки;
//! - трейт `PostSource` и HTTP-реализацию поверх `reqwest` (feature `http`);
//! - состояние ленты `FeedState` с выбором одного из трёх представлений;
//! - `FeedScope`, отбрасывающий ответы, пришедшие после закрытия компонента.
//!
//! CLI и wasm-компонент используют одни и те же правила: запрос выполняется
//! один раз, в ленте остаются первые `FEED_LIMIT` записей.
#![warn(missing_docs)]

mod error;
mod feed;
#[cfg(feature = "http")]
mod http_client;
mod models;
mod presentation;
mod scope;
mod source;

pub mod copy;

pub use error::{HTTP_FAILURE_MESSAGE, PostsClientError, PostsClientResult};
pub use feed::{FEED_LIMIT, FeedState, FeedView, first_page, select_view};
#[cfg(feature = "http")]
pub use http_client::PostsClient;
pub use models::Post;
pub use presentation::{Classes, Presentation};
pub use scope::{FeedScope, LoadTicket};
pub use source::PostSource;

/// Адрес, с которого лента загружается по умолчанию.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";
