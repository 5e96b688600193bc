use leptos::prelude::*;
use posts_client::{Presentation, copy};

use crate::components::posts_list::PostsList;

const PRESENTATION: Option<&str> = option_env!("WASM_PRESENTATION");

fn presentation() -> Presentation {
    let Some(raw) = PRESENTATION else {
        return Presentation::default();
    };
    raw.parse().unwrap_or_else(|err: String| {
        leptos::logging::warn!("{err}, falling back to tailwind");
        Presentation::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let presentation = presentation();
    let classes = presentation.classes();

    view! {
        <main class=classes.shell>
            <header class=classes.shell_header>
                <h1 class=classes.shell_title>{copy::APP_TITLE}</h1>
                <p class=classes.shell_subtitle>{copy::APP_SUBTITLE}</p>
            </header>

            <PostsList presentation=presentation />
        </main>
    }
}
