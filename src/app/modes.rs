//! Input mode state types for the application.
//!
//! The application operates in one of two input modes:
//! - **Normal**: Scrolling and command keys
//! - **Search**: Query editing (typing) or scrolling through results (navigating)
//!
//! # Example
//!
//! ```rust
//! use orderdeck::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! assert!(!InputMode::Normal.is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,

    /// Keys scroll the filtered ledger; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active, whether the search bar is shown, and
/// therefore how many pane rows remain for the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Scrolling and command keys: j/k, PageUp/PageDown, g/G, / (search), t (theme), q (quit).
    Normal,

    /// Search bar visible, with a [`SearchFocus`].
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
