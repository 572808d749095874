//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns key presses, mouse wheel
//! ticks, and pane resizes into state changes and action sequences. It is the
//! only place where [`AppState`] is mutated in response to the outside world.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `WindowedList` methods
//! 4. A render flag and the actions to execute are returned
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Scrolling**: `ScrollDown`, `ScrollUp`, `PageDown`, `PageUp`, `Top`, `Bottom`, `MouseScroll`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **System**: `Resize`, `ToggleTheme`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use orderdeck::app::{handle_event, AppState, Event};
//! use orderdeck::data::generate_transactions;
//! use orderdeck::ui::Theme;
//! use orderdeck::virtual_list::RowGeometry;
//!
//! let ledger = generate_transactions(100, 1);
//! let mut state = AppState::new(ledger, RowGeometry::new(2, 5)?, Theme::default());
//! handle_event(&mut state, &Event::Resize { rows: 27, cols: 80 })?;
//! let (should_render, actions) = handle_event(&mut state, &Event::ScrollDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.list.viewport().scroll_offset, 2);
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or pane changes.
///
/// The handler processes these sequentially on the plugin thread, so every
/// transition is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Scrolls forward by one ledger row.
    ScrollDown,
    /// Scrolls back by one ledger row.
    ScrollUp,
    /// Scrolls forward by one viewport.
    PageDown,
    /// Scrolls back by one viewport.
    PageUp,
    /// Jumps to the first row.
    Top,
    /// Jumps to the last page.
    Bottom,
    /// Scrolls by a number of terminal lines; negative values scroll back.
    MouseScroll {
        lines: isize,
    },
    /// Reports the pane size Zellij is rendering into.
    Resize {
        rows: usize,
        cols: usize,
    },
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the filtered results (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,
    /// Swaps the dark and light color schemes.
    ToggleTheme,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `false` when the event
/// left everything on screen unchanged, such as scrolling past either end or a
/// resize to the same size.
///
/// # Errors
///
/// Event handling itself cannot fail today; the `Result` keeps the signature
/// stable for hosts that propagate errors with `?`.
///
/// # Tracing
///
/// Each call enters a debug-level span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let row_step = isize::try_from(state.list.geometry().row_height()).unwrap_or(isize::MAX);

    match event {
        Event::ScrollDown => Ok((state.list.scroll_by(row_step), vec![])),
        Event::ScrollUp => Ok((state.list.scroll_by(-row_step), vec![])),
        Event::PageDown => Ok((state.list.page_down(), vec![])),
        Event::PageUp => Ok((state.list.page_up(), vec![])),
        Event::Top => Ok((state.list.scroll_to_top(), vec![])),
        Event::Bottom => Ok((state.list.scroll_to_bottom(), vec![])),
        Event::MouseScroll { lines } => {
            tracing::trace!(lines, "mouse scroll");
            Ok((state.list.scroll_by(*lines), vec![]))
        }
        Event::Resize { rows, cols } => {
            let changed = state.resize(*rows, *cols);
            if changed {
                tracing::debug!(
                    rows,
                    cols,
                    viewport_height = state.list.viewport().height,
                    scroll_offset = state.list.viewport().scroll_offset,
                    "pane resized"
                );
            }
            Ok((changed, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.apply_search_filter();
            state.sync_viewport();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            if state.search_query.is_empty() {
                leave_search(state);
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            if !state.input_mode.is_search() && state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            leave_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();

            // The echoed query changes even when the filtered rows do not.
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            if state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }

            state.apply_search_filter();
            Ok((true, vec![]))
        }
    }
}

fn leave_search(state: &mut AppState) {
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    state.apply_search_filter();
    state.sync_viewport();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_transactions;
    use crate::ui::theme::Theme;
    use crate::virtual_list::RowGeometry;

    fn state(count: usize) -> AppState {
        let mut state = AppState::new(
            generate_transactions(count, 3),
            RowGeometry::new(2, 5).unwrap(),
            Theme::default(),
        );
        handle_event(&mut state, &Event::Resize { rows: 27, cols: 100 }).unwrap();
        state
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn scroll_moves_by_one_row() {
        let mut state = state(100);
        assert!(send(&mut state, Event::ScrollDown));
        assert_eq!(state.list.viewport().scroll_offset, 2);
        assert!(send(&mut state, Event::ScrollUp));
        assert_eq!(state.list.viewport().scroll_offset, 0);
    }

    #[test]
    fn scrolling_past_the_top_does_not_render() {
        let mut state = state(100);
        assert!(!send(&mut state, Event::ScrollUp));
        assert!(!send(&mut state, Event::PageUp));
        assert!(!send(&mut state, Event::Top));
    }

    #[test]
    fn bottom_clamps_to_last_page() {
        let mut state = state(100);
        assert!(send(&mut state, Event::Bottom));
        // 200 content lines, 20-line viewport.
        assert_eq!(state.list.viewport().scroll_offset, 180);
        assert!(!send(&mut state, Event::ScrollDown));
        assert_eq!(state.list.window().end_index(), Some(99));
    }

    #[test]
    fn mouse_scroll_uses_line_count() {
        let mut state = state(100);
        assert!(send(&mut state, Event::MouseScroll { lines: 3 }));
        assert_eq!(state.list.viewport().scroll_offset, 3);
        assert!(send(&mut state, Event::MouseScroll { lines: -10 }));
        assert_eq!(state.list.viewport().scroll_offset, 0);
    }

    #[test]
    fn resize_keeps_scroll_position() {
        let mut state = state(100);
        send(&mut state, Event::PageDown);
        let offset = state.list.viewport().scroll_offset;
        assert!(send(&mut state, Event::Resize { rows: 40, cols: 100 }));
        assert_eq!(state.list.viewport().height, 33);
        assert_eq!(state.list.viewport().scroll_offset, offset);
        assert!(!send(&mut state, Event::Resize { rows: 40, cols: 100 }));
    }

    #[test]
    fn typing_filters_the_ledger() {
        let mut state = state(100);
        send(&mut state, Event::SearchMode);
        assert_eq!(state.list.viewport().height, 17);

        for c in "user_42".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.list.filtered_len(), 1);
        assert_eq!(state.list.record_at(0).unwrap().buyer_name, "user_42");

        send(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "user_4");
        assert_eq!(state.list.filtered_len(), 11);
    }

    #[test]
    fn chars_are_ignored_outside_typing_focus() {
        let mut state = state(10);
        assert!(!send(&mut state, Event::Char('x')));
        assert!(state.search_query.is_empty());
        assert!(!send(&mut state, Event::Backspace));
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = state(10);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list.viewport().height, 20);
    }

    #[test]
    fn focus_results_then_back_to_search_bar() {
        let mut state = state(100);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('9'));
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert!(!send(&mut state, Event::Char('9')));

        send(&mut state, Event::FocusSearchBar);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
    }

    #[test]
    fn escape_restores_full_ledger() {
        let mut state = state(100);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('z'));
        send(&mut state, Event::Char('z'));
        assert!(state.list.is_empty());

        assert!(send(&mut state, Event::Escape));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list.filtered_len(), 100);
        assert!(!send(&mut state, Event::Escape));
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state(1);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn toggle_theme_renders() {
        let mut state = state(1);
        let before = state.theme.name.clone();
        assert!(send(&mut state, Event::ToggleTheme));
        assert_ne!(state.theme.name, before);
    }
}
