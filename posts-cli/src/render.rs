use std::fmt::Write;

use posts_client::{FeedView, Post, Presentation, copy};

pub fn render(view: FeedView<'_>, presentation: Presentation) -> String {
    match view {
        FeedView::Loading => format!("⏳ {}\n", copy::LOADING_CAPTION),
        FeedView::Error(message) => render_error(message),
        FeedView::Loaded(posts) => render_posts(posts, presentation),
    }
}

fn render_error(message: &str) -> String {
    format!("{}\n{message}\n", copy::ERROR_HEADING)
}

fn render_posts(posts: &[Post], presentation: Presentation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", copy::FEED_TITLE);
    let _ = writeln!(out, "{}", copy::FEED_SUBTITLE);
    let _ = writeln!(out, "[{}]", copy::count_label(posts.len()));

    for post in posts {
        out.push('\n');
        render_card(&mut out, post, presentation);
    }

    out.push('\n');
    let _ = writeln!(out, "{}", copy::FEED_FOOTER);
    out
}

fn render_card(out: &mut String, post: &Post, presentation: Presentation) {
    let _ = writeln!(out, "#{} {}", post.id, post.title);
    for line in post.body.lines() {
        let _ = writeln!(out, "    {line}");
    }
    if presentation.shows_author() {
        let _ = writeln!(out, "    👤 {}", copy::author_label(post.user_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posts_client::{FeedState, HTTP_FAILURE_MESSAGE, PostsClientError};

    fn post(id: i64) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("title {id}"),
            body: format!("line one\nline two {id}"),
        }
    }

    #[test]
    fn loading_view_shows_only_caption() {
        let out = render(FeedState::new().view(), Presentation::Tailwind);
        assert!(out.contains(copy::LOADING_CAPTION));
        assert!(!out.contains(copy::ERROR_HEADING));
        assert!(!out.contains("publicaciones]"));
    }

    #[test]
    fn http_error_shows_heading_and_fixed_message() {
        let mut state = FeedState::new();
        state.settle(Err(PostsClientError::Http { status: 500 }));

        let out = render(state.view(), Presentation::Tailwind);
        assert_eq!(out, format!("¡Oops!\n{HTTP_FAILURE_MESSAGE}\n"));
    }

    #[test]
    fn list_shows_count_and_cards_in_order() {
        let mut state = FeedState::new();
        state.settle(Ok((1..=12).map(post).collect()));

        let out = render(state.view(), Presentation::Tailwind);
        assert!(out.contains("[10 publicaciones]"));
        let first = out.find("#1 title 1").expect("first card");
        let tenth = out.find("#10 title 10").expect("tenth card");
        assert!(first < tenth);
        assert!(!out.contains("#11 "));
        assert!(out.contains("    line two 10"));
    }

    #[test]
    fn compact_presentation_hides_author() {
        let posts = vec![post(1)];
        let rich = render(FeedView::Loaded(&posts), Presentation::Tailwind);
        let compact = render(FeedView::Loaded(&posts), Presentation::Bootstrap);
        assert!(rich.contains("Usuario #1"));
        assert!(!compact.contains("Usuario #1"));
    }

    #[test]
    fn empty_list_shows_zero_count_without_cards() {
        let out = render(FeedView::Loaded(&[]), Presentation::Tailwind);
        assert!(out.contains("[0 publicaciones]"));
        assert!(!out.contains('#'));
    }
}
