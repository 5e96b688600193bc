use leptos::prelude::*;
use posts_client::{FeedScope, FeedState, PostSource};

/// Состояние ленты, привязанное к времени жизни компонента.
#[derive(Debug, Clone)]
pub(crate) struct FeedHandle {
    pub(crate) feed: RwSignal<FeedState>,
    scope: FeedScope,
}

impl FeedHandle {
    pub(crate) fn new() -> Self {
        Self {
            feed: RwSignal::new(FeedState::new()),
            scope: FeedScope::new(),
        }
    }

    /// Запускает загрузку. Ответ применяется, только если компонент жив и
    /// за это время не стартовала более новая загрузка.
    pub(crate) fn load<S>(&self, source: S)
    where
        S: PostSource + 'static,
    {
        let ticket = self.scope.begin();
        let feed = self.feed;

        leptos::task::spawn_local(async move {
            let result = source.fetch_posts().await;
            if ticket.is_current() {
                feed.update(|state| state.settle(result));
            } else {
                leptos::logging::log!("stale posts response dropped");
            }
        });
    }

    pub(crate) fn retry<S>(&self, source: S)
    where
        S: PostSource + 'static,
    {
        self.feed.update(FeedState::restart);
        self.load(source);
    }

    pub(crate) fn close(&self) {
        self.scope.close();
    }
}
