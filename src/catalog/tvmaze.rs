/// TVMaze catalog backend implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, Episode, EpisodeSource, MISSING_IMAGE_URL, Show, ShowSource};

/// Catalog backend for the TVMaze API.
///
/// This backend queries https://api.tvmaze.com using the show-search and
/// episode-list endpoints. Each call performs exactly one GET request; there
/// is no retry, no timeout beyond the client defaults, and no caching.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a catalog instance pointing at the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Creates a catalog instance pointing at a custom base URL.
    ///
    /// A trailing slash on the base URL is accepted and ignored.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Checks an HTTP response status and maps failure to a transport error.
    fn ensure_success(response: &reqwest::blocking::Response) -> Result<(), CatalogError> {
        if !response.status().is_success() {
            return Err(CatalogError::Transport(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }
        Ok(())
    }

    /// Converts the wrapper entries of a search response to Show records.
    ///
    /// Response order is preserved. A missing image (or an image without a
    /// medium variant) maps to the fixed placeholder URL, and a null summary
    /// maps to the empty string, so every field is present after conversion.
    fn convert_shows(results: &[TvMazeSearchResult]) -> Vec<Show> {
        results
            .iter()
            .map(|result| Show {
                id: result.show.id,
                name: result.show.name.clone(),
                summary: result.show.summary.clone().unwrap_or_default(),
                image: result
                    .show
                    .image
                    .as_ref()
                    .and_then(|image| image.medium.clone())
                    .unwrap_or_else(|| MISSING_IMAGE_URL.to_string()),
            })
            .collect()
    }

    /// Converts TVMaze episodes to Episode records, preserving order.
    fn convert_episodes(episodes: &[TvMazeEpisode]) -> Vec<Episode> {
        episodes
            .iter()
            .map(|episode| Episode {
                id: episode.id,
                name: episode.name.clone(),
                season: episode.season,
                number: episode.number,
            })
            .collect()
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowSource for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", term)])
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Self::ensure_success(&response)?;

        let results: Vec<TvMazeSearchResult> = response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(Self::convert_shows(&results))
    }
}

impl EpisodeSource for TvMazeCatalog {
    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Self::ensure_success(&response)?;

        let episodes: Vec<TvMazeEpisode> = response
            .json()
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(Self::convert_episodes(&episodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(json: &str) -> Vec<TvMazeSearchResult> {
        serde_json::from_str(json).unwrap()
    }

    fn parse_episodes(json: &str) -> Vec<TvMazeEpisode> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_show_without_image_gets_placeholder() {
        // The "batman" scenario: one result whose show has image: null
        let results = parse_search(
            r#"[{"score": 0.9, "show": {"id": 975, "name": "Batman", "summary": "<p>The Caped Crusader.</p>", "image": null}}]"#,
        );

        let shows = TvMazeCatalog::convert_shows(&results);

        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].image, MISSING_IMAGE_URL);
    }

    #[test]
    fn test_show_with_image_keeps_medium_url() {
        let results = parse_search(
            r#"[{"show": {"id": 1, "name": "Under the Dome", "summary": "<p>Trapped.</p>", "image": {"medium": "https://static.tvmaze.com/1.jpg", "original": "https://static.tvmaze.com/1_full.jpg"}}}]"#,
        );

        let shows = TvMazeCatalog::convert_shows(&results);

        assert_eq!(shows[0].image, "https://static.tvmaze.com/1.jpg");
    }

    #[test]
    fn test_show_image_is_never_empty() {
        // Image object present but without a medium variant still maps to
        // the placeholder, never to an empty or missing field.
        let results = parse_search(
            r#"[{"show": {"id": 7, "name": "Obscure", "summary": null, "image": {"medium": null}}}]"#,
        );

        let shows = TvMazeCatalog::convert_shows(&results);

        assert_eq!(shows[0].image, MISSING_IMAGE_URL);
        assert_eq!(shows[0].summary, "");
    }

    #[test]
    fn test_shows_preserve_response_order() {
        let results = parse_search(
            r#"[
                {"show": {"id": 3, "name": "C", "summary": null, "image": null}},
                {"show": {"id": 1, "name": "A", "summary": null, "image": null}},
                {"show": {"id": 2, "name": "B", "summary": null, "image": null}}
            ]"#,
        );

        let shows = TvMazeCatalog::convert_shows(&results);

        let ids: Vec<u64> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_show_conversion_is_idempotent() {
        let json = r#"[
            {"show": {"id": 10, "name": "X", "summary": "<b>x</b>", "image": {"medium": "https://example.com/x.jpg"}}},
            {"show": {"id": 11, "name": "Y", "summary": null, "image": null}}
        ]"#;

        let first = TvMazeCatalog::convert_shows(&parse_search(json));
        let second = TvMazeCatalog::convert_shows(&parse_search(json));

        assert_eq!(first, second);
    }

    #[test]
    fn test_episode_fields_map_one_to_one() {
        let episodes = parse_episodes(r#"[{"id": 1, "name": "Pilot", "season": 1, "number": 1}]"#);

        let converted = TvMazeCatalog::convert_episodes(&episodes);

        assert_eq!(
            converted,
            vec![Episode {
                id: 1,
                name: "Pilot".to_string(),
                season: 1,
                number: 1,
            }]
        );
    }

    #[test]
    fn test_episodes_preserve_response_order() {
        let episodes = parse_episodes(
            r#"[
                {"id": 12, "name": "Two", "season": 1, "number": 2},
                {"id": 11, "name": "One", "season": 1, "number": 1},
                {"id": 21, "name": "Premiere", "season": 2, "number": 1}
            ]"#,
        );

        let converted = TvMazeCatalog::convert_episodes(&episodes);

        let ids: Vec<u64> = converted.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![12, 11, 21]);
        assert_eq!(converted[2].name, "Premiere");
        assert_eq!(converted[2].season, 2);
        assert_eq!(converted[2].number, 1);
    }

    #[test]
    fn test_malformed_search_payload_fails_to_parse() {
        // Episodes shape where the search wrapper shape is expected
        let result: Result<Vec<TvMazeSearchResult>, _> =
            serde_json::from_str(r#"[{"id": 1, "name": "Pilot", "season": 1, "number": 1}]"#);

        assert!(result.is_err());
    }
}
