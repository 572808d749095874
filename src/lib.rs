//! Orderdeck: A Zellij plugin for browsing a seller's order ledger.
//!
//! Orderdeck shows thousands of sales transactions in a pane and stays
//! responsive while doing it:
//! - Windowed rendering: only the rows in view, plus a small buffer, are built
//! - Instant case-insensitive search over item, buyer, and order id
//! - Keyboard and mouse-wheel scrolling with scroll position kept across resizes
//! - Dark and light themes, plus custom TOML themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Windowed List │   │ Sample Data   │
//! │ (ui/)         │   │ (virtual_list)│   │ (data/)       │
//! │ - Rendering   │   │ - Window math │   │ - Seeded      │
//! │ - Theming     │   │ - Filtering   │   │   generator   │
//! │ - Components  │   │ - Viewport    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Transaction model (domain/transaction)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`virtual_list`]: Window computation, filtering, and the windowed list controller
//! - [`domain`]: Core domain types (Transaction, errors)
//! - [`data`]: Deterministic sample ledger
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/orderdeck.wasm" {
//!         row_height "2"
//!         buffer "5"
//!         record_count "5000"
//!         seed "2024"
//!         theme "orderdeck-dark"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use orderdeck::{handle_event, initialize, Config, Event};
//!
//! let config = Config { record_count: 200, ..Config::default() };
//! let mut state = initialize(&config)?;
//!
//! for event in [Event::Resize { rows: 30, cols: 100 }, Event::PageDown, Event::Bottom] {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     assert!(actions.is_empty());
//! }
//! assert_eq!(state.list.window().end_index(), Some(199));
//! # Ok::<(), orderdeck::OrderdeckError>(())
//! ```

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod virtual_list;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{OrderdeckError, Result, Transaction, TransactionStatus};
pub use ui::Theme;

use std::collections::BTreeMap;
use virtual_list::RowGeometry;

const DEFAULT_ROW_HEIGHT: i64 = 2;
const DEFAULT_BUFFER: i64 = 5;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Geometry values are kept signed so that nonsense such as `row_height "-1"`
/// reaches [`initialize`] and is reported, instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Terminal lines per ledger row. Must be positive. Default: 2
    pub row_height: i64,

    /// Rows materialized above and below the viewport. Must not be negative. Default: 5
    pub buffer: i64,

    /// Transactions in the generated ledger. Default: 5000
    pub record_count: usize,

    /// Seed for the ledger generator. Default: 2024
    pub seed: u64,

    /// Built-in theme name: `orderdeck-dark` or `orderdeck-light`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` expands to the sandbox home.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            buffer: DEFAULT_BUFFER,
            record_count: data::DEFAULT_RECORD_COUNT,
            seed: data::DEFAULT_SEED,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `row_height`, `buffer`: String → `i64` (falls back to the default on parse error)
    /// - `record_count`, `seed`: String → unsigned (falls back to the default on parse error)
    /// - `theme`, `theme_file`, `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use orderdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("row_height".to_string(), "3".to_string());
    /// map.insert("buffer".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.row_height, 3);
    /// assert_eq!(config.buffer, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            row_height: parse_or(config, "row_height", defaults.row_height),
            buffer: parse_or(config, "buffer", defaults.buffer),
            record_count: parse_or(config, "record_count", defaults.record_count),
            seed: parse_or(config, "seed", defaults.seed),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    config
        .get(key)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Builds the application state from configuration.
///
/// Validates the row geometry, loads the theme (from file, name, or default),
/// and generates the ledger. The viewport has zero height until the first
/// `Event::Resize`.
///
/// # Errors
///
/// Returns [`OrderdeckError::Configuration`] if `row_height` is not positive
/// or `buffer` is negative. Theme problems are logged and fall back to the
/// default theme.
///
/// # Example
///
/// ```rust
/// use orderdeck::{initialize, Config, OrderdeckError};
///
/// let config = Config { row_height: 0, ..Config::default() };
/// assert!(matches!(initialize(&config), Err(OrderdeckError::Configuration(_))));
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", record_count = config.record_count).entered();

    let geometry = RowGeometry::from_signed(config.row_height, config.buffer)?;
    let theme = load_theme(config);
    let transactions = data::generate_transactions(config.record_count, config.seed);

    tracing::debug!(
        row_height = geometry.row_height(),
        buffer = geometry.buffer(),
        theme = %theme.name,
        "orderdeck initialized"
    );

    Ok(AppState::new(transactions, geometry, theme))
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            }
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("row_height", "1"),
            ("buffer", " 0 "),
            ("record_count", "12"),
            ("seed", "7"),
            ("theme", "orderdeck-light"),
            ("theme_file", "~/paper.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.row_height, 1);
        assert_eq!(config.buffer, 0);
        assert_eq!(config.record_count, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.theme_name.as_deref(), Some("orderdeck-light"));
        assert_eq!(config.theme_file.as_deref(), Some("~/paper.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn negative_geometry_survives_parsing_and_fails_initialization() {
        let config = Config::from_zellij(&map(&[("buffer", "-2")]));
        assert_eq!(config.buffer, -2);
        assert!(matches!(initialize(&config), Err(OrderdeckError::Configuration(_))));
    }

    #[test]
    fn initialize_builds_the_ledger() {
        let config = Config {
            record_count: 30,
            theme_name: Some("orderdeck-light".to_string()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.list.total_len(), 30);
        assert_eq!(state.theme.name, "orderdeck-light");
        assert_eq!(state.list.viewport().height, 0);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            record_count: 1,
            theme_name: Some("solarized".to_string()),
            theme_file: Some("/nowhere/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).unwrap().theme, Theme::default());
    }
}
