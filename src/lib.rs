//! ShowBrowser - Search TV shows and browse their episodes
//!
//! This library provides the core functionality for querying the TVMaze API,
//! normalizing its responses into display records, and rendering those records
//! into injected display panels.

mod catalog;
mod render;
mod ui;

// Re-export error types
pub use catalog::CatalogError;

// Re-export catalog and UI types
pub use catalog::{Episode, EpisodeSource, MISSING_IMAGE_URL, Show, ShowSource, TvMazeCatalog};
pub use ui::{BrowserUi, Panel};

use thiserror::Error;

/// Top-level error type for ShowBrowser operations
#[derive(Debug, Error)]
pub enum ShowBrowserError {
    /// Error while querying the show catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Searches shows by a free-text term and renders the results.
///
/// The catalog backend and the UI targets are injected at construction, so
/// the component holds no ambient state.
pub struct ShowSearch<S>
where
    S: ShowSource,
{
    /// The catalog backend queried for show matches
    source: S,
}

impl<S> ShowSearch<S>
where
    S: ShowSource,
{
    /// Creates a show search backed by the given catalog source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches shows matching `term` and displays them.
    ///
    /// On success the episode panel is hidden (it is only revealed again when
    /// episodes are requested) and the show list is replaced with the freshly
    /// rendered results. On failure the UI is left exactly as it was: prior
    /// content stays in place and no panel changes visibility.
    pub fn search_and_display(
        &self,
        term: &str,
        ui: &mut BrowserUi,
    ) -> Result<Vec<Show>, ShowBrowserError> {
        let shows = self.source.search_shows(term)?;

        ui.episode_panel.hide();
        ui.show_list.replace(render::show_list(&shows));

        Ok(shows)
    }
}

/// Fetches the episodes of a show and renders them.
pub struct EpisodeBrowser<E>
where
    E: EpisodeSource,
{
    /// The catalog backend queried for episode lists
    source: E,
}

impl<E> EpisodeBrowser<E>
where
    E: EpisodeSource,
{
    /// Creates an episode browser backed by the given catalog source.
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Fetches all episodes of the show with the given id and displays them.
    ///
    /// On success the episode panel is revealed and its content replaced with
    /// the freshly rendered list. On failure the UI is left untouched.
    pub fn browse_and_display(
        &self,
        show_id: u64,
        ui: &mut BrowserUi,
    ) -> Result<Vec<Episode>, ShowBrowserError> {
        let episodes = self.source.episodes_of_show(show_id)?;

        ui.episode_panel.show();
        ui.episode_panel.replace(render::episode_list(&episodes));

        Ok(episodes)
    }
}
