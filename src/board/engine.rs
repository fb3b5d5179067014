use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::api::{
    ApiError, Publication, PublicationApi, PublicationFilters, PublicationStatus,
    DEFAULT_PAGE_LIMIT,
};

use super::transitions;

/// How long an illegal-move banner stays visible before auto-clearing.
const INVALID_MOVE_BANNER_TTL: Duration = Duration::from_secs(3);

/// User-visible errors surfaced by the board.
///
/// A closed enumeration instead of free-form exception text: validation
/// failures are recovered locally and never reach the network, while load and
/// move failures carry the HTTP status when the server produced one.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// The drag-and-drop move is not in the transition table.
    InvalidMove {
        from: PublicationStatus,
        to: PublicationStatus,
    },
    /// A reload or load-more request failed; loaded data is untouched.
    Load {
        message: String,
        http_status: Option<u16>,
    },
    /// A status update failed; the board was resynchronized from the server.
    Move {
        message: String,
        http_status: Option<u16>,
    },
}

impl BoardError {
    fn load(err: &ApiError) -> Self {
        BoardError::Load {
            message: err.to_string(),
            http_status: err.http_status(),
        }
    }

    fn move_failed(err: &ApiError) -> Self {
        BoardError::Move {
            message: err.to_string(),
            http_status: err.http_status(),
        }
    }
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidMove { .. } => {
                write!(f, "Movimento não permitido entre essas colunas.")
            }
            BoardError::Load { message, .. } => {
                write!(f, "Erro ao carregar publicações: {message}")
            }
            BoardError::Move { message, .. } => {
                write!(f, "Erro ao mover publicação: {message}")
            }
        }
    }
}

/// The result of a drag-and-drop move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was legal and the server confirmed it.
    Moved,
    /// The move is not in the transition table; nothing changed.
    Rejected,
    /// No record with that id is loaded; nothing changed.
    NotFound,
    /// The server rejected the update; the board was reloaded.
    Failed,
}

/// The committed filter state driving every list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

/// Page/has-more bookkeeping for the currently loaded record window.
///
/// One cursor is shared by all four columns; column scoping is purely a
/// client-side projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub loading_more: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
            loading: false,
            loading_more: false,
        }
    }
}

// Banner with optional expiry, checked lazily at read time.
#[derive(Debug, Clone)]
struct Banner {
    error: BoardError,
    expires_at: Option<Instant>,
}

impl Banner {
    fn persistent(error: BoardError) -> Self {
        Self {
            error,
            expires_at: None,
        }
    }

    fn transient(error: BoardError, ttl: Duration) -> Self {
        Self {
            error,
            expires_at: Some(Instant::now() + ttl),
        }
    }

    fn expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Read-only view of the board for projection and rendering.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub publications: Vec<Publication>,
    pub cursor: PageCursor,
    pub query: QueryState,
    pub error: Option<BoardError>,
}

struct BoardState {
    publications: Vec<Publication>,
    query: QueryState,
    cursor: PageCursor,
    banner: Option<Banner>,
    // Bumped on every query commit; a response whose captured generation no
    // longer matches is stale and must be dropped.
    generation: u64,
}

impl BoardState {
    fn new() -> Self {
        Self {
            publications: Vec::new(),
            query: QueryState::default(),
            cursor: PageCursor::default(),
            banner: None,
            generation: 0,
        }
    }

    fn commit_query(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.cursor.page = 1;
        self.cursor.has_more = true;
        self.cursor.loading_more = false;
    }

    fn request_filters(&self, page: u32, limit: u32) -> PublicationFilters {
        PublicationFilters {
            search: self.query.search.clone(),
            data_inicio: self.query.data_inicio.clone(),
            data_fim: self.query.data_fim.clone(),
            page,
            limit,
            ..Default::default()
        }
    }
}

/// Owns the publication collection, the committed query state and the shared
/// pagination cursor, and orchestrates reloads, incremental loads and
/// optimistic drag-and-drop moves.
///
/// Handles are cheap to clone and share the same state. The internal lock is
/// never held across a network await, so overlapping reloads are possible by
/// design; responses are checked against the committed generation at apply
/// time and stale ones are dropped silently.
pub struct BoardEngine<A: PublicationApi> {
    api: Arc<A>,
    state: Arc<Mutex<BoardState>>,
    limit: u32,
}

impl<A: PublicationApi> Clone for BoardEngine<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            limit: self.limit,
        }
    }
}

impl<A: PublicationApi> BoardEngine<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_limit(api, DEFAULT_PAGE_LIMIT)
    }

    /// Create an engine with a custom page size.
    pub fn with_limit(api: Arc<A>, limit: u32) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(BoardState::new())),
            limit,
        }
    }

    /// Commit a new search term and reload. An empty string clears the filter
    /// rather than being sent as a literal empty value.
    pub async fn set_search(&self, text: impl Into<String>) {
        {
            let mut state = self.state.lock().await;
            state.query.search = non_empty(text.into());
            state.commit_query();
        }
        self.reload().await;
    }

    /// Commit a new availability start date and reload immediately; date
    /// pickers are an explicit commit, so no debounce here.
    pub async fn set_start_date(&self, date: impl Into<String>) {
        {
            let mut state = self.state.lock().await;
            state.query.data_inicio = non_empty(date.into());
            state.commit_query();
        }
        self.reload().await;
    }

    /// Commit a new availability end date and reload immediately.
    pub async fn set_end_date(&self, date: impl Into<String>) {
        {
            let mut state = self.state.lock().await;
            state.query.data_fim = non_empty(date.into());
            state.commit_query();
        }
        self.reload().await;
    }

    /// Commit a whole query state at once and reload. Empty fields are
    /// normalized to "no filter".
    pub async fn set_query(&self, query: QueryState) {
        {
            let mut state = self.state.lock().await;
            state.query = QueryState {
                search: query.search.and_then(non_empty),
                data_inicio: query.data_inicio.and_then(non_empty),
                data_fim: query.data_fim.and_then(non_empty),
            };
            state.commit_query();
        }
        self.reload().await;
    }

    /// Replace the whole collection with page 1 of the committed query.
    ///
    /// On failure the collection is left as-is (empty on first load) and a
    /// banner is raised. A response that arrives after the query state was
    /// superseded is dropped without touching anything.
    pub async fn reload(&self) {
        let (filters, generation) = {
            let mut state = self.state.lock().await;
            state.cursor.loading = true;
            state.banner = None;
            (state.request_filters(1, self.limit), state.generation)
        };

        let result = self.api.list(&filters).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            // Superseded by a newer query; the newer reload owns the cursor.
            return;
        }
        state.cursor.loading = false;
        match result {
            Ok(page) => {
                state.cursor.page = 1;
                state.cursor.has_more = 1 < page.pagination.total_pages;
                state.publications = page.data;
            }
            Err(err) => {
                state.banner = Some(Banner::persistent(BoardError::load(&err)));
            }
        }
    }

    /// Append the next page of the committed query to the collection.
    ///
    /// No-op while exhausted or while another load-more is in flight. The
    /// request is not scoped to a column; all columns share one cursor.
    pub async fn load_more(&self) {
        let (filters, generation, next_page) = {
            let mut state = self.state.lock().await;
            if !state.cursor.has_more || state.cursor.loading_more {
                return;
            }
            let next_page = state.cursor.page + 1;
            state.cursor.loading_more = true;
            (
                state.request_filters(next_page, self.limit),
                state.generation,
                next_page,
            )
        };

        let result = self.api.list(&filters).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            // The query changed while this page was in flight; commit_query
            // already reset the cursor, including loading_more.
            return;
        }
        state.cursor.loading_more = false;
        if state.cursor.page + 1 != next_page {
            // A reload moved the cursor within the same query; drop the page.
            return;
        }
        match result {
            Ok(page) => {
                state.publications.extend(page.data);
                state.cursor.page = next_page;
                state.cursor.has_more = next_page < page.pagination.total_pages;
            }
            Err(err) => {
                state.banner = Some(Banner::persistent(BoardError::load(&err)));
            }
        }
    }

    /// Move a card to another column.
    ///
    /// Illegal moves raise a transient banner and never reach the server.
    /// Legal moves are applied optimistically; if the server rejects the
    /// update, the board reloads ground truth instead of rolling back
    /// locally, and the error banner is kept visible after the resync.
    pub async fn move_card(&self, id: i64, to: PublicationStatus) -> MoveOutcome {
        {
            let mut state = self.state.lock().await;
            let Some(pos) = state.publications.iter().position(|p| p.id == id) else {
                return MoveOutcome::NotFound;
            };
            let from = state.publications[pos].status;
            if !transitions::is_valid_move(from, to) {
                state.banner = Some(Banner::transient(
                    BoardError::InvalidMove { from, to },
                    INVALID_MOVE_BANNER_TTL,
                ));
                return MoveOutcome::Rejected;
            }
            // Optimistic: the card moves before the server confirms.
            state.publications[pos].status = to;
        }

        match self.api.update_status(id, to).await {
            Ok(_) => MoveOutcome::Moved,
            Err(err) => {
                // Local state may be stale; re-fetch ground truth rather
                // than attempting a local-only rollback.
                self.reload().await;
                let mut state = self.state.lock().await;
                state.banner = Some(Banner::persistent(BoardError::move_failed(&err)));
                MoveOutcome::Failed
            }
        }
    }

    /// Dismiss the current error banner.
    pub async fn clear_error(&self) {
        self.state.lock().await.banner = None;
    }

    /// A cloned, read-only view of the board. Expired transient banners are
    /// filtered out here.
    pub async fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.lock().await;
        BoardSnapshot {
            publications: state.publications.clone(),
            cursor: state.cursor,
            query: state.query.clone(),
            error: state
                .banner
                .as_ref()
                .filter(|b| !b.expired())
                .map(|b| b.error.clone()),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
