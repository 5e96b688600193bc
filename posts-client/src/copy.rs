//! Тексты интерфейса ленты. Общие для CLI и браузера.

/// Подпись под индикатором загрузки.
pub const LOADING_CAPTION: &str = "Cargando publicaciones...";
/// Заголовок представления ошибки.
pub const ERROR_HEADING: &str = "¡Oops!";
/// Кнопка повторной загрузки.
pub const RETRY_LABEL: &str = "Reintentar";

/// Заголовок страницы приложения.
pub const APP_TITLE: &str = "📝 Lista de Publicaciones";
/// Подзаголовок страницы приложения.
pub const APP_SUBTITLE: &str = "Consumiendo datos desde JSONPlaceholder API";

/// Заголовок загруженной ленты.
pub const FEED_TITLE: &str = "📝 Publicaciones";
/// Подзаголовок загруженной ленты.
pub const FEED_SUBTITLE: &str = "Explora las últimas publicaciones de nuestra comunidad";
/// Декоративная кнопка на карточке, обработчика у неё нет.
pub const READ_MORE_LABEL: &str = "Leer más →";
/// Подвал ленты.
pub const FEED_FOOTER: &str = "Datos obtenidos de JSONPlaceholder API";

/// Счётчик в шапке ленты, например `10 publicaciones`.
pub fn count_label(count: usize) -> String {
    format!("{count} publicaciones")
}

/// Подпись автора на карточке.
pub fn author_label(user_id: i64) -> String {
    format!("Usuario #{user_id}")
}
