/// Data structures and traits for TV show catalog lookups.
///
/// This module provides the normalized display records for shows and episodes,
/// as well as the traits a catalog backend implements to serve them.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use thiserror::Error;

/// URL substituted when a show has no image in the source payload.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur while querying a show catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request to the catalog backend failed (network, DNS, HTTP status)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend's response did not match the expected JSON shape
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

/// Normalized display record for a television series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Catalog id of the show
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Summary text, may contain HTML markup; empty when the source has none
    pub summary: String,
    /// URL of a medium-sized poster, or [`MISSING_IMAGE_URL`]
    pub image: String,
}

/// Normalized display record for one episode of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Catalog id of the episode
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

/// Trait for backends that can search shows by a free-text term.
///
/// Implementations perform a single lookup and return the matches in the
/// order the backend ranked them. They do not retry and do not return
/// partial results.
pub trait ShowSource {
    /// Searches for shows matching the given term.
    ///
    /// The term may be empty; an empty result list is not an error.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;
}

/// Trait for backends that can list the episodes of a show.
pub trait EpisodeSource {
    /// Fetches all episodes of the show with the given id, in backend order.
    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}
