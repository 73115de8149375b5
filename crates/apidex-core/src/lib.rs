// Core business logic lives here - the brain of the operation
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod search;
pub mod state;
pub mod suggest;
pub mod theme;
pub mod trending;

pub use catalog::{builtin_categories, Catalog};
pub use config::Config;
pub use error::Error;
pub use favorites::FavoritesSet;
pub use search::{filter, SearchSession};
pub use state::{reduce, Action, DashboardState, View};
pub use suggest::{suggest, MAX_SUGGESTIONS};
pub use theme::Theme;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
