use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Оформление ленты. Логика загрузки и выбора представления у всех
/// вариантов общая, отличаются только классы и пара необязательных блоков.
pub enum Presentation {
    /// Карточки на Tailwind: автор поста и кнопка повтора при ошибке.
    #[default]
    Tailwind,
    /// Компактные карточки на Bootstrap.
    Bootstrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// CSS-классы элементов ленты для конкретного оформления.
#[allow(missing_docs)]
pub struct Classes {
    pub shell: &'static str,
    pub shell_header: &'static str,
    pub shell_title: &'static str,
    pub shell_subtitle: &'static str,

    pub loading_wrapper: &'static str,
    pub spinner: &'static str,
    pub loading_caption: &'static str,

    pub error_wrapper: &'static str,
    pub error_card: &'static str,
    pub error_icon: &'static str,
    pub error_heading: &'static str,
    pub error_message: &'static str,
    pub retry_button: &'static str,

    pub page: &'static str,
    pub header: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub count_badge: &'static str,
    pub grid: &'static str,
    pub card: &'static str,
    pub card_body: &'static str,
    pub id_badge: &'static str,
    pub card_title: &'static str,
    pub card_text: &'static str,
    pub author: &'static str,
    pub card_footer: &'static str,
    pub read_more: &'static str,
    pub footer: &'static str,
}

const TAILWIND: Classes = Classes {
    shell: "container py-5",
    shell_header: "text-center mb-5",
    shell_title: "display-4 text-primary",
    shell_subtitle: "text-muted",

    loading_wrapper: "flex justify-center items-center min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100",
    spinner: "inline-block animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-indigo-600",
    loading_caption: "mt-4 text-lg text-gray-700 font-medium",

    error_wrapper: "flex justify-center items-center min-h-screen bg-gradient-to-br from-red-50 to-pink-100",
    error_card: "bg-white rounded-lg shadow-xl p-8 max-w-md text-center",
    error_icon: "mx-auto h-16 w-16 text-red-500",
    error_heading: "mt-4 text-2xl font-bold text-gray-800",
    error_message: "mt-2 text-gray-600",
    retry_button: "mt-6 px-6 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 transition-colors",

    page: "min-h-screen bg-gradient-to-br from-purple-50 via-blue-50 to-indigo-100 py-12 px-4",
    header: "text-center mb-12",
    title: "text-5xl font-bold text-gray-800 mb-3",
    subtitle: "text-gray-600 text-lg",
    count_badge: "mt-4 inline-block px-4 py-2 bg-indigo-100 rounded-full text-indigo-700 font-semibold",
    grid: "max-w-4xl mx-auto grid gap-6",
    card: "bg-white rounded-xl shadow-lg hover:shadow-2xl transition-all duration-300 overflow-hidden border border-gray-100",
    card_body: "p-6 flex items-start gap-4",
    id_badge: "flex-shrink-0 w-12 h-12 bg-gradient-to-br from-indigo-500 to-purple-600 rounded-lg flex items-center justify-center text-white font-bold text-lg shadow-md",
    card_title: "text-2xl font-bold text-gray-800 mb-3 capitalize leading-tight",
    card_text: "text-gray-600 leading-relaxed",
    author: "mt-4 flex items-center gap-2 text-sm text-gray-500",
    card_footer: "bg-gradient-to-r from-indigo-50 to-purple-50 px-6 py-3 border-t border-gray-100",
    read_more: "text-indigo-600 hover:text-indigo-800 font-medium text-sm transition-colors",
    footer: "text-center mt-12 text-gray-500",
};

const BOOTSTRAP: Classes = Classes {
    shell: "container py-5",
    shell_header: "text-center mb-5",
    shell_title: "display-4 text-primary",
    shell_subtitle: "text-muted",

    loading_wrapper: "d-flex flex-column justify-content-center align-items-center py-5",
    spinner: "spinner-border text-primary",
    loading_caption: "mt-3 text-secondary",

    error_wrapper: "d-flex justify-content-center py-5",
    error_card: "alert alert-danger text-center",
    error_icon: "d-none",
    error_heading: "alert-heading",
    error_message: "mb-0",
    retry_button: "btn btn-danger mt-3",

    page: "py-4",
    header: "text-center mb-4",
    title: "h2",
    subtitle: "text-muted",
    count_badge: "badge bg-primary fs-6",
    grid: "row g-4",
    card: "col-12 card shadow-sm",
    card_body: "card-body d-flex gap-3",
    id_badge: "badge bg-secondary align-self-start",
    card_title: "card-title h5 text-capitalize",
    card_text: "card-text text-muted",
    author: "small text-secondary",
    card_footer: "card-footer bg-transparent",
    read_more: "btn btn-link p-0",
    footer: "text-center mt-4 text-muted",
};

impl Presentation {
    /// Таблица классов оформления.
    pub fn classes(self) -> &'static Classes {
        match self {
            Self::Tailwind => &TAILWIND,
            Self::Bootstrap => &BOOTSTRAP,
        }
    }

    /// Показывать ли на карточке `Usuario #N`.
    pub fn shows_author(self) -> bool {
        matches!(self, Self::Tailwind)
    }

    /// Показывать ли кнопку повтора в представлении ошибки.
    pub fn shows_retry(self) -> bool {
        matches!(self, Self::Tailwind)
    }

    /// Имя оформления, как его принимает `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Presentation {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tailwind" => Ok(Self::Tailwind),
            "bootstrap" => Ok(Self::Bootstrap),
            other => Err(format!("unknown presentation `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Bootstrap".parse::<Presentation>(), Ok(Presentation::Bootstrap));
        assert_eq!(" tailwind ".parse::<Presentation>(), Ok(Presentation::Tailwind));
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("bulma".parse::<Presentation>().is_err());
    }

    #[test]
    fn only_tailwind_shows_author_and_retry() {
        assert!(Presentation::Tailwind.shows_author());
        assert!(Presentation::Tailwind.shows_retry());
        assert!(!Presentation::Bootstrap.shows_author());
        assert!(!Presentation::Bootstrap.shows_retry());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for presentation in [Presentation::Tailwind, Presentation::Bootstrap] {
            assert_eq!(presentation.to_string().parse(), Ok(presentation));
        }
    }
}
