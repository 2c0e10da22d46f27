/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One entry of the TVMaze show-search response.
///
/// The search endpoint nests the actual show under a `show` field next to
/// search-ranking metadata, which is ignored here.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as returned by the TVMaze search endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// TVMaze id of the show
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Poster images (may be null for shows without artwork)
    pub image: Option<TvMazeImage>,
}

/// Image variants attached to a TVMaze show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// URL of the medium-sized poster (may be null)
    pub medium: Option<String>,
}

/// A single episode from the TVMaze episodes endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// TVMaze id of the episode
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
