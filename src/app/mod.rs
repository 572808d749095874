//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the windowed list.
//! It implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Mouse / Resize → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                                        ↓
//!                                              compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use orderdeck::app::{handle_event, AppState, Event};
//! use orderdeck::ui::Theme;
//! use orderdeck::virtual_list::RowGeometry;
//!
//! let mut state = AppState::new(vec![], RowGeometry::new(2, 5)?, Theme::default());
//! let (should_render, _) = handle_event(&mut state, &Event::ScrollDown)?;
//! assert!(!should_render);
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
