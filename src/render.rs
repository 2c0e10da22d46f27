//! Pure rendering of show and episode lists to panel text.
//!
//! Rendering is a mapping step with no fetching and no panel access, so it
//! can be tested on plain records. Summaries arrive as HTML fragments from
//! the API and are stripped to plain text for display.

use crate::catalog::{Episode, Show};

/// Renders a list of shows as one text block per show.
///
/// Each block carries the show id (used by the episode controls of the
/// surrounding UI), the name, the poster URL and the plain-text summary.
pub fn show_list(shows: &[Show]) -> String {
    let mut output = String::new();

    for show in shows {
        output.push_str(&format!(
            "[{}] {}\n    image: {}\n    {}\n",
            show.id,
            show.name,
            show.image,
            nanohtml2text::html2text(&show.summary).trim()
        ));
    }

    output
}

/// Renders a list of episodes, one line per episode.
pub fn episode_list(episodes: &[Episode]) -> String {
    let mut output = String::new();

    for episode in episodes {
        output.push_str(&format!(
            "{} (season {}, number {})\n",
            episode.name, episode.season, episode.number
        ));
    }

    output
}
