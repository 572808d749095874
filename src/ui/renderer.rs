//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use orderdeck::app::AppState;
//! use orderdeck::ui::{render, Theme};
//! use orderdeck::virtual_list::RowGeometry;
//!
//! let mut state = AppState::new(vec![], RowGeometry::new(2, 5)?, Theme::default());
//! state.resize(24, 80);
//! render(&state, 24, 80); // Renders the empty state to stdout
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// `rows` and `cols` must be the size the state was last resized to; the host
/// feeds them through `Event::Resize` before calling this.
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!`.
/// Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a full-pane error in place of the ledger.
pub fn render_error(message: &str, theme: &Theme, cols: usize) {
    components::render_error(message, theme, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
