//! End-to-end behaviour of the ledger through the public API.

use std::collections::BTreeMap;
use std::io::Write;

use orderdeck::virtual_list::{compute_window, RowGeometry, Window, WindowedList};
use orderdeck::{handle_event, initialize, Config, Event, InputMode, OrderdeckError, SearchFocus};

fn config(pairs: &[(&str, &str)]) -> Config {
    let map: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Config::from_zellij(&map)
}

#[test]
fn large_ledger_materializes_only_the_window() {
    let geometry = RowGeometry::new(80, 5).unwrap();
    let records = orderdeck::data::generate_transactions(5000, 2024);
    let mut list = WindowedList::new(records, geometry, 600);

    assert_eq!(list.window(), Window::Span { start: 0, end: 12 });
    assert_eq!(list.materialized().count(), 13);

    list.scroll_to(4000);
    assert_eq!(list.window(), Window::Span { start: 45, end: 62 });
    let first = list.placements()[0];
    assert_eq!((first.index, first.offset), (45, 3600));
    assert_eq!(list.content_height(), 400_000);
}

#[test]
fn window_is_clamped_for_short_filtered_views() {
    let row_height = std::num::NonZeroUsize::new(80).unwrap();
    assert_eq!(
        compute_window(3, 2000, 600, row_height, 5),
        Window::Span { start: 0, end: 2 }
    );
    assert!(compute_window(0, 0, 600, row_height, 5).is_empty());
}

#[test]
fn searching_then_clearing_restores_the_ledger() {
    let mut state = initialize(&config(&[("record_count", "1000")])).unwrap();
    handle_event(&mut state, &Event::Resize { rows: 40, cols: 120 }).unwrap();
    handle_event(&mut state, &Event::PageDown).unwrap();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "lens".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    // Every fifth item is a lens.
    assert_eq!(state.list.filtered_len(), 200);
    assert!(state
        .list
        .materialized()
        .all(|(_, trx)| trx.item_name.starts_with("Lens")));

    let vm = state.compute_viewmodel();
    assert_eq!(vm.header.subtitle, "Tracking 200 individual transactions");
    assert!(vm.display_rows.iter().all(|row| row.highlight_ranges == vec![(0, 4)]));

    handle_event(&mut state, &Event::FocusResults).unwrap();
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.list.filtered_len(), 1000);
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn unmatched_search_shows_empty_state_not_rows() {
    let mut state = initialize(&config(&[("record_count", "50")])).unwrap();
    handle_event(&mut state, &Event::Resize { rows: 30, cols: 100 }).unwrap();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "tripod".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    let vm = state.compute_viewmodel();
    assert!(vm.display_rows.is_empty());
    assert!(vm.scrollbar.is_none());
    let empty = vm.empty_state.unwrap();
    assert_eq!(empty.message, "No transactions found");
    assert_eq!(empty.subtitle, "Try adjusting your search criteria");
}

#[test]
fn shrinking_the_pane_keeps_the_scroll_position() {
    let mut state = initialize(&config(&[("record_count", "500"), ("row_height", "1")])).unwrap();
    handle_event(&mut state, &Event::Resize { rows: 60, cols: 100 }).unwrap();
    handle_event(&mut state, &Event::MouseScroll { lines: 120 }).unwrap();

    handle_event(&mut state, &Event::Resize { rows: 20, cols: 60 }).unwrap();
    assert_eq!(state.list.viewport().scroll_offset, 120);
    assert_eq!(state.list.window().start_index(), Some(115));
}

#[test]
fn invalid_geometry_is_rejected_at_startup() {
    for pairs in [[("row_height", "0")], [("row_height", "-80")], [("buffer", "-1")]] {
        let result = initialize(&config(&pairs));
        assert!(matches!(result, Err(OrderdeckError::Configuration(_))), "{pairs:?}");
    }
}

#[test]
fn custom_theme_file_is_used_and_toggles_to_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body = include_str!("../themes/orderdeck-dark.toml").replace("orderdeck-dark", "midnight");
    file.write_all(body.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().to_string();

    let mut state = initialize(&config(&[("record_count", "5"), ("theme_file", path.as_str())])).unwrap();
    assert_eq!(state.theme.name, "midnight");

    handle_event(&mut state, &Event::ToggleTheme).unwrap();
    assert_eq!(state.theme.name, "orderdeck-light");
    handle_event(&mut state, &Event::ToggleTheme).unwrap();
    assert_eq!(state.theme.name, "midnight");
}
