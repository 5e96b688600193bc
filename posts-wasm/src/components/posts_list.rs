use leptos::prelude::*;
use posts_client::{Classes, FeedView, Post, Presentation, copy};

use crate::api::BrowserSource;
use crate::state::FeedHandle;

/// Лента первых публикаций. Загружается один раз при монтировании;
/// повтор доступен только из представления ошибки.
#[component]
pub(crate) fn PostsList(presentation: Presentation) -> impl IntoView {
    let handle = FeedHandle::new();
    handle.load(BrowserSource::new());

    on_cleanup({
        let handle = handle.clone();
        move || handle.close()
    });

    let on_retry = Callback::new({
        let handle = handle.clone();
        move |_: ()| handle.retry(BrowserSource::new())
    });

    let classes = presentation.classes();
    let feed = handle.feed;

    view! {
        <section class="posts-feed">
            {move || {
                feed.with(|state| match state.view() {
                    FeedView::Loading => loading_view(classes).into_any(),
                    FeedView::Error(message) => {
                        let retry = presentation.shows_retry().then_some(on_retry);
                        error_view(classes, message.to_string(), retry).into_any()
                    }
                    FeedView::Loaded(posts) => {
                        list_view(classes, posts.to_vec(), presentation.shows_author()).into_any()
                    }
                })
            }}
        </section>
    }
}

fn loading_view(classes: &'static Classes) -> impl IntoView {
    view! {
        <div class=classes.loading_wrapper>
            <div class="text-center">
                <div class=classes.spinner role="status"></div>
                <p class=classes.loading_caption>{copy::LOADING_CAPTION}</p>
            </div>
        </div>
    }
}

fn error_view(
    classes: &'static Classes,
    message: String,
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=classes.error_wrapper>
            <div class=classes.error_card>
                <svg class=classes.error_icon fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                    />
                </svg>
                <h2 class=classes.error_heading>{copy::ERROR_HEADING}</h2>
                <p class=classes.error_message>{message}</p>
                {on_retry.map(|on_retry| view! {
                    <button class=classes.retry_button on:click=move |_| on_retry.run(())>
                        {copy::RETRY_LABEL}
                    </button>
                })}
            </div>
        </div>
    }
}

fn list_view(classes: &'static Classes, posts: Vec<Post>, shows_author: bool) -> impl IntoView {
    let count = copy::count_label(posts.len());

    view! {
        <div class=classes.page>
            <header class=classes.header>
                <h1 class=classes.title>{copy::FEED_TITLE}</h1>
                <p class=classes.subtitle>{copy::FEED_SUBTITLE}</p>
                <span class=classes.count_badge>{count}</span>
            </header>

            <div class=classes.grid>
                {posts
                    .into_iter()
                    .map(|post| post_card(classes, post, shows_author))
                    .collect_view()}
            </div>

            <footer class=classes.footer>
                <p>{copy::FEED_FOOTER}</p>
            </footer>
        </div>
    }
}

fn post_card(classes: &'static Classes, post: Post, shows_author: bool) -> impl IntoView {
    let id = post.id.to_string();
    let author = shows_author.then(|| copy::author_label(post.user_id));

    view! {
        <article class=classes.card data-post-id=id.clone()>
            <div class=classes.card_body>
                <div class=classes.id_badge>{id}</div>
                <div>
                    <h2 class=classes.card_title>{post.title}</h2>
                    <p class=classes.card_text>{post.body}</p>
                    {author.map(|label| view! {
                        <div class=classes.author>
                            <span>"👤"</span>
                            <span>{label}</span>
                        </div>
                    })}
                </div>
            </div>
            // "Leer más" декоративная: обработчика нет.
            <div class=classes.card_footer>
                <button class=classes.read_more type="button">{copy::READ_MORE_LABEL}</button>
            </div>
        </article>
    }
}
