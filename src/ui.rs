//! Display panel targets for rendered show and episode lists.
//!
//! Panels stand in for the containers of a hosting page: a panel holds text
//! content and a visibility flag, and is always replaced as a whole rather
//! than patched incrementally.

/// A single display target with replace-whole-content semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
    content: String,
}

impl Panel {
    /// Creates an empty, visible panel.
    pub fn new() -> Self {
        Self {
            visible: true,
            content: String::new(),
        }
    }

    /// Creates an empty panel that starts out hidden.
    pub fn new_hidden() -> Self {
        Self {
            visible: false,
            content: String::new(),
        }
    }

    /// Replaces the panel content, discarding whatever was there before.
    pub fn replace(&mut self, content: String) {
        self.content = content;
    }

    /// Makes the panel visible without touching its content.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the panel without touching its content.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the panel is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The current panel content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

/// The two display targets of the browser: a show list and an episode panel.
///
/// The episode panel starts out hidden and is only revealed once episodes
/// have been fetched for a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserUi {
    /// Target for the rendered search results
    pub show_list: Panel,
    /// Target for the rendered episode list, initially hidden
    pub episode_panel: Panel,
}

impl BrowserUi {
    /// Creates the initial UI state: empty show list, hidden episode panel.
    pub fn new() -> Self {
        Self {
            show_list: Panel::new(),
            episode_panel: Panel::new_hidden(),
        }
    }
}

impl Default for BrowserUi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ui = BrowserUi::new();

        assert!(ui.show_list.is_visible());
        assert!(ui.show_list.content().is_empty());
        assert!(!ui.episode_panel.is_visible());
        assert!(ui.episode_panel.content().is_empty());
    }

    #[test]
    fn test_replace_discards_prior_content() {
        let mut panel = Panel::new();
        panel.replace("first".to_string());
        panel.replace("second".to_string());

        assert_eq!(panel.content(), "second");
    }

    #[test]
    fn test_hide_and_show_keep_content() {
        let mut panel = Panel::new();
        panel.replace("kept".to_string());

        panel.hide();
        assert!(!panel.is_visible());
        assert_eq!(panel.content(), "kept");

        panel.show();
        assert!(panel.is_visible());
        assert_eq!(panel.content(), "kept");
    }
}
