// TUI application state and event handling
use apidex_core::models::{ApiRecord, Category, CategoryFilter, Suggestion};
use apidex_core::state::{reduce, Action, DashboardState, View};
use apidex_core::{suggest, Catalog, SearchSession, Theme};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating results
    Searching, // Typing in search box
}

/// Terminal-side wrapper around the core dashboard state.
///
/// Everything semantic goes through `dispatch` into the reducer; the App only
/// adds what the terminal needs on top (cursor, list widget state, input
/// mode, derived suggestions).
pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub state: DashboardState,
    pub catalog: Catalog,
    pub categories: Vec<Category>,
    pub trending: Vec<ApiRecord>,
    pub suggestions: Vec<Suggestion>,
    pub session: SearchSession,
    pub selected_index: usize,
    pub list_state: ListState,
    pub error_message: Option<String>,
    pub theme: Theme,
    // Position in the All -> category1 -> category2 -> ... cycle
    category_cursor: usize,
}

impl App {
    pub fn new(catalog: Catalog, categories: Vec<Category>, state: DashboardState) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let trending = apidex_core::trending::trending(&catalog);
        let theme = Theme::for_mode(state.dark);

        Self {
            should_quit: false,
            input_mode: InputMode::Searching,
            state,
            catalog,
            categories,
            trending,
            suggestions: Vec::new(),
            session: SearchSession::new(),
            selected_index: 0,
            list_state,
            error_message: None,
            theme,
            category_cursor: 0,
        }
    }

    /// Run an action through the reducer and refresh derived state.
    pub fn dispatch(&mut self, action: Action) {
        let fresh_results = matches!(action, Action::ResultsReady { .. });
        self.state = reduce(std::mem::take(&mut self.state), action);

        self.theme = Theme::for_mode(self.state.dark);
        self.suggestions = suggest(&self.catalog, &self.categories, &self.state.query);

        if fresh_results {
            self.reset_selection();
        } else {
            self.clamp_selection();
        }
    }

    /// Records the list pane is currently showing.
    pub fn visible_records(&self) -> &[ApiRecord] {
        match self.state.view() {
            View::Browsing => &self.trending,
            View::Filtered => &self.state.results,
        }
    }

    pub fn selected_record(&self) -> Option<&ApiRecord> {
        self.visible_records().get(self.selected_index)
    }

    pub fn next_result(&mut self) {
        let len = self.visible_records().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1).min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_result(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_records().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Advance the All -> categories -> All cycle, returning the new filter.
    pub fn cycle_category(&mut self) -> CategoryFilter {
        self.category_cursor = (self.category_cursor + 1) % (self.categories.len() + 1);
        self.current_category_filter()
    }

    pub fn current_category_filter(&self) -> CategoryFilter {
        if self.category_cursor == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Id(self.categories[self.category_cursor - 1].id.clone())
        }
    }

    /// Display name of the active category restriction.
    pub fn category_label(&self) -> &str {
        if self.category_cursor == 0 {
            "All APIs"
        } else {
            &self.categories[self.category_cursor - 1].name
        }
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(record) = self.selected_record() {
            let id = record.id.clone();
            self.dispatch(Action::FavoriteToggled(id));
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(record) = self.selected_record() {
            let id = record.id.clone();
            self.dispatch(Action::RecordSelected(id));
        }
    }

    /// Record open in the detail modal, if any.
    pub fn modal_record(&self) -> Option<&ApiRecord> {
        self.state
            .selected
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    /// Compare affordance is a stub: observable only in the logs.
    pub fn compare_selected(&self) {
        if let Some(record) = self.selected_record() {
            tracing::debug!(id = %record.id, name = %record.name, "compare requested");
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(
            Catalog::builtin(),
            apidex_core::builtin_categories(),
            DashboardState::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browsing_shows_trending_slate() {
        let app = App::default();
        assert_eq!(app.state.view(), View::Browsing);
        assert_eq!(app.visible_records().len(), 5);
        assert_eq!(app.visible_records()[0].id, "jsonplaceholder");
    }

    #[test]
    fn category_cycle_wraps_through_all() {
        let mut app = App::default();
        assert_eq!(app.current_category_filter(), CategoryFilter::All);

        let first = app.cycle_category();
        assert_eq!(first, CategoryFilter::Id("content-media".to_string()));

        // Three categories, then back to All.
        app.cycle_category();
        app.cycle_category();
        assert_eq!(app.cycle_category(), CategoryFilter::All);
        assert_eq!(app.category_label(), "All APIs");
    }

    #[test]
    fn dispatch_refreshes_suggestions_and_theme() {
        let mut app = App::default();
        app.dispatch(Action::QueryChanged("git".to_string()));
        assert_eq!(app.suggestions.len(), 1);
        assert_eq!(app.suggestions[0].text, "GitHub");

        app.dispatch(Action::ThemeToggled);
        assert_eq!(app.theme.name, "Light");
    }

    #[test]
    fn fresh_results_reset_selection() {
        let mut app = App::default();
        app.next_result();
        app.next_result();
        assert_eq!(app.selected_index, 2);

        app.dispatch(Action::QueryChanged("a".to_string()));
        app.dispatch(Action::SearchStarted(1));
        let results = apidex_core::filter(&app.catalog, "a", &CategoryFilter::All);
        app.dispatch(Action::ResultsReady { seq: 1, results });
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn favorite_toggle_targets_selected_record() {
        let mut app = App::default();
        let id = app.selected_record().unwrap().id.clone();
        app.toggle_selected_favorite();
        assert!(app.state.favorites.contains(&id));
    }

    #[test]
    fn startup_catalog_error_is_held_until_first_keypress() {
        let (catalog, message) =
            Catalog::load_or_builtin(std::path::Path::new("/no/such/catalog.json"));
        let mut app = App::new(
            catalog,
            apidex_core::builtin_categories(),
            DashboardState::new(),
        );
        app.error_message = message;
        assert!(app.error_message.is_some());

        // The runner clears it on the next keypress.
        app.clear_error();
        assert!(app.error_message.is_none());
    }

    #[test]
    fn modal_resolves_selected_id_against_catalog() {
        let mut app = App::default();
        app.open_selected();
        assert!(app.modal_record().is_some());
        app.dispatch(Action::ModalClosed);
        assert!(app.modal_record().is_none());
    }
}
