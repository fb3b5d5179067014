mod columns;
mod debounce;
mod engine;
mod transitions;

pub use columns::{by_status, column_title, columns, Column};
pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use engine::{BoardEngine, BoardError, BoardSnapshot, MoveOutcome, PageCursor, QueryState};
pub use transitions::{allowed_moves, is_valid_move};
