use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
struct ScopeInner {
    generation: AtomicU64,
    closed: AtomicBool,
}

#[derive(Debug, Clone, Default)]
/// Время жизни компонента ленты.
///
/// Каждый запрос получает `LoadTicket`. Результат применяется к состоянию,
/// только если билет всё ещё актуален: компонент не закрыт и после него не
/// был выдан более новый билет.
pub struct FeedScope {
    inner: Arc<ScopeInner>,
}

impl FeedScope {
    /// Создаёт открытую область без выданных билетов.
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдаёт билет для нового запроса; все прежние билеты устаревают.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            scope: self.clone(),
            generation,
        }
    }

    /// Закрывает область. Вызывается при демонтировании компонента.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    /// Закрыта ли область.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
/// Право одного запроса записать свой результат в состояние.
pub struct LoadTicket {
    scope: FeedScope,
    generation: u64,
}

impl LoadTicket {
    /// Можно ли применить результат запроса.
    pub fn is_current(&self) -> bool {
        !self.scope.is_closed()
            && self.scope.inner.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let scope = FeedScope::new();
        let ticket = scope.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn closing_scope_invalidates_pending_ticket() {
        let scope = FeedScope::new();
        let ticket = scope.begin();
        scope.close();
        assert!(!ticket.is_current());
    }

    #[test]
    fn newer_ticket_supersedes_older_one() {
        let scope = FeedScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn clones_share_lifetime() {
        let scope = FeedScope::new();
        let ticket = scope.begin();
        scope.clone().close();
        assert!(scope.is_closed());
        assert!(!ticket.is_current());
    }
}
