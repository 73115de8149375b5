//! Dashboard state and its reducer.
//!
//! All UI-visible state lives in one serializable struct and is advanced only
//! by [`reduce`]. The terminal layer dispatches actions and renders whatever
//! comes back; every transition is testable without a terminal.

use crate::favorites::FavoritesSet;
use crate::models::{ApiRecord, CategoryFilter};
use serde::{Deserialize, Serialize};

/// Everything the dashboard knows. `latest_seq` is the reducer-side half of
/// the search sequence discipline: a `ResultsReady` carrying an older stamp
/// is dropped on the floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub query: String,
    pub category: CategoryFilter,
    pub results: Vec<ApiRecord>,
    pub is_searching: bool,
    pub latest_seq: u64,
    pub favorites: FavoritesSet,
    /// Id of the record open in the detail modal, at most one.
    pub selected: Option<String>,
    pub dark: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            dark: true,
            ..Self::default()
        }
    }

    /// Which of the two main views should render.
    pub fn view(&self) -> View {
        if self.query.trim().is_empty() && self.category.is_all() {
            View::Browsing
        } else {
            View::Filtered
        }
    }

    pub fn modal_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// The two top-level views: trending + category tiles, or the result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browsing,
    Filtered,
}

/// Every way the dashboard state can change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    QueryChanged(String),
    CategorySelected(CategoryFilter),
    /// A search was dispatched with this sequence stamp.
    SearchStarted(u64),
    /// A search completed. Applied only if `seq` is still the latest.
    ResultsReady { seq: u64, results: Vec<ApiRecord> },
    FavoriteToggled(String),
    RecordSelected(String),
    ModalClosed,
    ThemeToggled,
}

/// Unidirectional update: old state + action -> new state. No other code
/// writes to `DashboardState`.
pub fn reduce(mut state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::QueryChanged(query) => {
            state.query = query;
        }
        Action::CategorySelected(category) => {
            state.category = category;
        }
        Action::SearchStarted(seq) => {
            state.is_searching = true;
            state.latest_seq = seq;
        }
        Action::ResultsReady { seq, results } => {
            if seq == state.latest_seq {
                state.results = results;
                state.is_searching = false;
            } else {
                tracing::debug!(seq, latest = state.latest_seq, "dropping stale results");
            }
        }
        Action::FavoriteToggled(id) => {
            state.favorites = state.favorites.toggle(&id);
        }
        Action::RecordSelected(id) => {
            state.selected = Some(id);
        }
        Action::ModalClosed => {
            state.selected = None;
        }
        Action::ThemeToggled => {
            state.dark = !state.dark;
        }
    }
    state
}
