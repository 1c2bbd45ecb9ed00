//! Drives the plugin state machine the way the Zellij shim does: events in,
//! actions out, with web responses fed back by hand.

use std::collections::BTreeMap;

use cinegrid::api::RequestContext;
use cinegrid::catalog::AppendPolicy;
use cinegrid::ui::{Body, CatalogLayout, PosterView};
use cinegrid::{handle_event, initialize, Action, AppState, Config, Event, LayoutMode, Screen};
use serde_json::json;

const ROWS: usize = 40;
const COLS: usize = 100;

fn movie(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "overview": format!("{title} overview"),
        "poster_path": format!("/poster-{id}.jpg"),
        "popularity": 83.7,
        "vote_average": 7.42,
        "vote_count": 1200,
        "release_date": "2008-07-16",
    })
}

fn page_body(page: u32, titles: &[&str], total_pages: u32) -> Vec<u8> {
    let results: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| movie(u64::from(page) * 100 + i as u64, t))
        .collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * 20,
    })
    .to_string()
    .into_bytes()
}

fn twenty(prefix: &str) -> Vec<String> {
    (1..=20).map(|i| format!("{prefix} {i}")).collect()
}

/// Returns the context map of the single catalog fetch in `actions`.
fn catalog_request(actions: &[Action]) -> BTreeMap<String, String> {
    match actions {
        [Action::FetchCatalogPage { context, .. }] => context.to_map(),
        other => panic!("expected one catalog fetch, got {other:?}"),
    }
}

fn respond(state: &mut AppState, context: BTreeMap<String, String>, status: u16, body: Vec<u8>) -> bool {
    let (render, actions) = handle_event(state, &Event::WebResponse { status, body, context }).unwrap();
    assert!(actions.is_empty());
    render
}

fn loaded(titles: &[&str], total_pages: u32) -> AppState {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let context = catalog_request(&actions);
    respond(&mut state, context, 200, page_body(1, titles, total_pages));
    state
}

#[test]
fn permission_grant_fetches_first_page_and_load_more_continues() {
    let mut state = initialize(&Config::default());

    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    match actions.as_slice() {
        [Action::FetchCatalogPage { url, .. }] => assert!(url.contains("page=1"), "{url}"),
        other => panic!("unexpected actions {other:?}"),
    }
    let context = catalog_request(&actions);

    let titles = twenty("Movie");
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    assert!(respond(&mut state, context, 200, page_body(1, &titles, 5)));

    assert_eq!(state.store.len(), 20);
    assert_eq!(state.store.current_page(), 2);
    assert_eq!(state.filtered.len(), 20);

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert_eq!(
        RequestContext::from_map(&catalog_request(&actions)).unwrap(),
        RequestContext::CatalogPage { page: 2 }
    );
}

#[test]
fn denied_permission_or_disabled_autoload_fetches_nothing() {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
    assert!(actions.is_empty());

    let mut state = initialize(&Config {
        autoload: false,
        ..Config::default()
    });
    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn rapid_taps_issue_a_single_request() {
    let mut state = initialize(&Config::default());
    let (_, first) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (render, second) = handle_event(&mut state, &Event::LoadMore).unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(!render);
}

#[test]
fn search_filters_after_three_characters() {
    let mut state = loaded(&["Batman", "Batgirl", "Superman"], 10);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "ba".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    assert_eq!(state.filtered.len(), 3);

    handle_event(&mut state, &Event::Char('t')).unwrap();
    let titles: Vec<&str> = state.filtered.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Batman", "Batgirl"]);

    let vm = state.compute_viewmodel(ROWS, COLS);
    assert_eq!(vm.header.title, " Popular Movies (2/3) ");
    match vm.body {
        Body::Catalog(layout) => {
            assert_eq!(layout.cards()[0].highlight_ranges, vec![(0, 3)]);
        }
        other => panic!("expected catalog body, got {other:?}"),
    }

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.filtered.len(), 3);
    assert!(state.search_query.is_empty());
}

#[test]
fn search_with_no_match_shows_empty_state() {
    let mut state = loaded(&["Batman"], 10);
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "zzz".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    match state.compute_viewmodel(ROWS, COLS).body {
        Body::Empty(empty) => assert_eq!(empty.message, "No matches for \"zzz\""),
        other => panic!("expected empty state, got {other:?}"),
    }
}

#[test]
fn detail_screen_shows_rounded_facts_and_pops_on_back() {
    let mut state = loaded(&["Heat", "Ronin"], 10);
    handle_event(&mut state, &Event::MoveRight).unwrap();
    handle_event(&mut state, &Event::Select).unwrap();

    assert!(matches!(&state.screen, Screen::Detail(m) if m.title == "Ronin"));

    let (render, _) = handle_event(&mut state, &Event::MoveLeft).unwrap();
    assert!(!render);
    assert_eq!(state.selected_index, 1);

    let vm = state.compute_viewmodel(ROWS, COLS);
    assert_eq!(vm.header.title, " Ronin ");
    match vm.body {
        Body::Detail(detail) => {
            assert_eq!(detail.popularity, "84");
            assert_eq!(detail.vote, "7/10");
            assert_eq!(detail.release_year, Some(2008));
            assert_eq!(detail.overview_lines, vec!["Ronin overview".to_string()]);
        }
        other => panic!("expected detail body, got {other:?}"),
    }

    handle_event(&mut state, &Event::Back).unwrap();
    assert_eq!(state.screen, Screen::Catalog);
}

#[test]
fn failed_fetch_is_reported_and_retried() {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let context = catalog_request(&actions);

    let body = br#"{"status_code": 25, "status_message": "Rate limited"}"#.to_vec();
    assert!(respond(&mut state, context, 429, body));

    assert!(state.store.is_empty());
    let status = state.compute_viewmodel(ROWS, COLS).status;
    assert!(status.is_error);
    assert_eq!(
        status.message.as_deref(),
        Some("Failed to load page 1: HTTP 429: Rate limited. Press m to retry")
    );
    assert!(status.load_more.enabled);

    let (_, retry) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert_eq!(
        RequestContext::from_map(&catalog_request(&retry)).unwrap(),
        RequestContext::CatalogPage { page: 1 }
    );
}

#[test]
fn late_completion_for_another_page_is_dropped() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::LoadMore).unwrap();

    let stale = RequestContext::CatalogPage { page: 7 }.to_map();
    assert!(!respond(&mut state, stale, 200, page_body(7, &["Late"], 10)));
    assert!(state.store.is_empty());
}

#[test]
fn last_page_exhausts_the_catalog() {
    let mut state = loaded(&["Only"], 1);

    let (render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!render);
    assert!(actions.is_empty());

    let status = state.compute_viewmodel(ROWS, COLS).status;
    assert_eq!(status.message.as_deref(), Some("End of catalog"));
    assert!(!status.load_more.enabled);
}

#[test]
fn short_page_still_moves_the_cursor() {
    let state = loaded(&["A", "B", "C", "D", "E"], 10);
    assert_eq!(state.store.len(), 5);
    assert_eq!(state.store.current_page(), 2);
}

#[test]
fn single_item_policy_appends_one_movie_per_completion() {
    let mut state = initialize(&Config {
        append_mode: AppendPolicy::OnePerCompletion,
        ..Config::default()
    });
    let titles = twenty("Film");
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();

    for _ in 0..3 {
        let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        let context = catalog_request(&actions);
        respond(&mut state, context, 200, page_body(1, &titles, 10));
    }

    let loaded: Vec<&str> = state.store.items().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(loaded, vec!["Film 1", "Film 2", "Film 3"]);
    assert_eq!(state.store.current_page(), 1);
}

#[test]
fn posters_are_requested_once_and_resolved() {
    let mut state = loaded(&["Heat", "Ronin"], 10);

    let requests = state.request_visible_posters(ROWS);
    assert_eq!(requests.len(), 2);
    assert!(state.request_visible_posters(ROWS).is_empty());

    let heat = state.filtered[0].clone();
    let ronin = state.filtered[1].clone();
    assert_eq!(state.poster_view(&heat), PosterView::Loading);

    for action in requests {
        let Action::FetchPoster { url, context } = action else {
            panic!("expected poster fetch");
        };
        let status = if url.ends_with("poster-100.jpg") { 200 } else { 404 };
        respond(&mut state, context.to_map(), status, vec![0xff; 16]);
    }

    assert_eq!(state.poster_view(&heat), PosterView::Loaded);
    assert_eq!(state.poster_view(&ronin), PosterView::Placeholder);
}

#[test]
fn toggling_layout_switches_view_model_variant() {
    let mut state = loaded(&["Heat", "Ronin", "Collateral"], 10);
    assert!(matches!(
        state.compute_viewmodel(ROWS, COLS).body,
        Body::Catalog(CatalogLayout::Grid(_))
    ));

    handle_event(&mut state, &Event::ToggleLayout).unwrap();
    assert_eq!(state.layout, LayoutMode::List);
    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(matches!(vm.body, Body::Catalog(CatalogLayout::List(_))));
    assert_eq!(vm.header.toggle_icon, "square.grid.2x2.fill");
}

#[test]
fn foreign_response_context_is_an_error() {
    let mut state = initialize(&Config::default());
    let mut context = BTreeMap::new();
    context.insert("kind".to_string(), "weather".to_string());

    let result = handle_event(
        &mut state,
        &Event::WebResponse {
            status: 200,
            body: vec![],
            context,
        },
    );
    assert!(result.is_err());
}
