//! Application state: value types plus the central [`AppState`] container.

mod app_state;
mod types;

pub use app_state::AppState;
pub use types::{
    Difficulty, Facets, Focus, Kind, QueryInput, Record, SORT_KEYS, SearchPhase, SearchResults,
    SortKey,
};
