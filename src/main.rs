//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the orderdeck library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translates Zellij
//! key and mouse events into library events, and executes the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`, subscribe to `Key` and `Mouse`
//! 2. **Update**: Map Zellij events, delegate to `handle_event`, execute actions
//! 3. **Render**: Feed the pane size in as `Event::Resize`, then draw
//!
//! If the configuration is invalid (for example `row_height "0"`) the plugin
//! renders the error instead of the ledger and ignores input except `q`.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use orderdeck::{handle_event, Action, Config, Event, InputMode, OrderdeckError, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Application state, or the configuration error that prevented building it.
    app: Result<orderdeck::AppState, OrderdeckError>,
}

impl Default for State {
    /// Zellij constructs the plugin before `load` delivers its configuration.
    fn default() -> Self {
        Self {
            app: Ok(orderdeck::AppState::placeholder()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `Mouse`: Wheel scrolling
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        orderdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            row_height = config.row_height,
            buffer = config.buffer,
            record_count = config.record_count,
            "parsed configuration"
        );
        self.app = orderdeck::initialize(&config);
        if let Err(e) = &self.app {
            tracing::error!(error = %e, "plugin configuration rejected");
        }

        subscribe(&[EventType::Key, EventType::Mouse]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            _ => return false,
        };

        let Ok(app) = self.app.as_mut() else {
            if our_event == Event::CloseFocus {
                Self::execute_action(&Action::CloseFocus);
            }
            return false;
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Zellij reports the pane size on every render, so resizes are picked up here.
    fn render(&mut self, rows: usize, cols: usize) {
        match self.app.as_mut() {
            Ok(app) => {
                if let Err(e) = handle_event(app, &Event::Resize { rows, cols }) {
                    tracing::warn!(error = %e, "error applying pane size");
                }
                orderdeck::ui::render(app, rows, cols);
            }
            Err(e) => {
                orderdeck::ui::render_error(&e.to_string(), &orderdeck::Theme::default(), cols);
            }
        }
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            _ => "Other".to_string(),
        }
    }

    fn input_mode(&self) -> InputMode {
        self.app
            .as_ref()
            .map_or(InputMode::Normal, |app| app.input_mode)
    }

    /// Maps keyboard events to application events.
    ///
    /// Scrolling keys that are not printable (arrows, PageUp/PageDown,
    /// Home/End, Ctrl chords) work in every mode. Letter keys are commands in
    /// normal mode and while browsing search results, and text while typing a
    /// query.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::ScrollDown),
                BareKey::Char('p') => Some(Event::ScrollUp),
                BareKey::Char('d') => Some(Event::PageDown),
                BareKey::Char('u') => Some(Event::PageUp),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Down => return Some(Event::ScrollDown),
            BareKey::Up => return Some(Event::ScrollUp),
            BareKey::PageDown => return Some(Event::PageDown),
            BareKey::PageUp => return Some(Event::PageUp),
            BareKey::Home => return Some(Event::Top),
            BareKey::End => return Some(Event::Bottom),
            _ => {}
        }

        match self.input_mode() {
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('/') | BareKey::Backspace => Event::FocusSearchBar,
                _ => return Self::map_command_key(key.bare_key),
            }),
            InputMode::Normal => match key.bare_key {
                BareKey::Esc => Some(Event::Escape),
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Char('q') => Some(Event::CloseFocus),
                other => Self::map_command_key(other),
            },
        }
    }

    /// Keys shared by normal mode and result browsing.
    fn map_command_key(key: BareKey) -> Option<Event> {
        match key {
            BareKey::Char('j') => Some(Event::ScrollDown),
            BareKey::Char('k') => Some(Event::ScrollUp),
            BareKey::Char('g') => Some(Event::Top),
            BareKey::Char('G') => Some(Event::Bottom),
            BareKey::Char('t') => Some(Event::ToggleTheme),
            _ => None,
        }
    }

    /// Maps mouse wheel events; Zellij reports the number of lines per tick.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        let lines = match mouse {
            Mouse::ScrollDown(n) => isize::try_from(n).unwrap_or(isize::MAX),
            Mouse::ScrollUp(n) => -isize::try_from(n).unwrap_or(isize::MAX),
            _ => return None,
        };
        Some(Event::MouseScroll { lines })
    }

    /// Executes an action emitted by the event handler.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
