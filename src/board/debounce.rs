use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::api::PublicationApi;

use super::engine::BoardEngine;

/// Quiescence window for the search field.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Collapses rapid search keystrokes into a single committed query.
///
/// Every [`input`](SearchDebouncer::input) restarts the quiescence window;
/// only a value that stays unchanged for the whole window reaches the engine,
/// which then reloads. Dropping the debouncer aborts any pending emission, so
/// it never fires for an owner that no longer exists.
pub struct SearchDebouncer<A: PublicationApi + 'static> {
    engine: BoardEngine<A>,
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<A: PublicationApi + 'static> SearchDebouncer<A> {
    pub fn new(engine: BoardEngine<A>) -> Self {
        Self::with_window(engine, SEARCH_DEBOUNCE)
    }

    /// Create a debouncer with a custom window (useful for testing).
    pub fn with_window(engine: BoardEngine<A>, window: Duration) -> Self {
        Self {
            engine,
            window,
            pending: None,
        }
    }

    /// Feed one keystroke's worth of search text.
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let engine = self.engine.clone();
        let text = text.into();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            sleep(window).await;
            engine.set_search(text).await;
        }));
    }
}

impl<A: PublicationApi + 'static> Drop for SearchDebouncer<A> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use tokio::task::yield_now;
    use tokio::time::advance;

    use crate::api::types::{Pagination, PublicationPage, PublicationStats};
    use crate::api::{ApiError, Publication, PublicationFilters, PublicationStatus};

    #[derive(Default)]
    struct RecordingApi {
        pages: StdMutex<VecDeque<PublicationPage>>,
        list_calls: StdMutex<Vec<PublicationFilters>>,
    }

    impl RecordingApi {
        fn queue_empty_page(&self) {
            self.pages.lock().unwrap().push_back(PublicationPage {
                data: vec![],
                pagination: Pagination {
                    page: 1,
                    limit: 30,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        fn list_calls(&self) -> Vec<PublicationFilters> {
            self.list_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PublicationApi for RecordingApi {
        async fn list(&self, filters: &PublicationFilters) -> Result<PublicationPage, ApiError> {
            self.list_calls.lock().unwrap().push(filters.clone());
            Ok(self
                .pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected list request"))
        }

        async fn update_status(
            &self,
            _id: i64,
            _status: PublicationStatus,
        ) -> Result<Publication, ApiError> {
            panic!("debounce never updates status")
        }

        async fn stats(&self) -> Result<PublicationStats, ApiError> {
            panic!("debounce never requests stats")
        }
    }

    async fn settle() {
        for _ in 0..50 {
            yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_settled_value_fires_once() {
        let api = Arc::new(RecordingApi::default());
        api.queue_empty_page();
        let engine = BoardEngine::new(api.clone());
        let mut debouncer = SearchDebouncer::new(engine);

        // Keystrokes at t=0, t=100 and t=200.
        debouncer.input("p");
        advance(Duration::from_millis(100)).await;
        debouncer.input("pr");
        advance(Duration::from_millis(100)).await;
        debouncer.input("pro");

        // t=699: the window since the last keystroke has not elapsed.
        advance(Duration::from_millis(499)).await;
        settle().await;
        assert!(api.list_calls().is_empty());

        // t=700: exactly one reload, carrying the value as of t=200.
        advance(Duration::from_millis(1)).await;
        settle().await;
        let calls = api.list_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search.as_deref(), Some("pro"));
        assert_eq!(calls[0].page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn each_keystroke_restarts_the_window() {
        let api = Arc::new(RecordingApi::default());
        api.queue_empty_page();
        let engine = BoardEngine::new(api.clone());
        let mut debouncer = SearchDebouncer::new(engine);

        debouncer.input("a");
        advance(Duration::from_millis(400)).await;
        debouncer.input("ab");
        advance(Duration::from_millis(400)).await;
        settle().await;
        // 800ms of wall time, but never 500ms of quiescence.
        assert!(api.list_calls().is_empty());

        advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(api.list_calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_emission() {
        let api = Arc::new(RecordingApi::default());
        let engine = BoardEngine::new(api.clone());
        let mut debouncer = SearchDebouncer::new(engine);

        debouncer.input("abandoned");
        drop(debouncer);

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert!(api.list_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_window_is_honored() {
        let api = Arc::new(RecordingApi::default());
        api.queue_empty_page();
        let engine = BoardEngine::new(api.clone());
        let mut debouncer = SearchDebouncer::with_window(engine, Duration::from_millis(50));

        debouncer.input("x");
        advance(Duration::from_millis(50)).await;
        settle().await;
        assert_eq!(api.list_calls().len(), 1);
    }
}
