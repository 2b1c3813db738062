//! Integration tests for the recipe viewer
//!
//! Tests cover:
//! - Document loading: storage first, then the document URL, then empty
//! - Navigation bounds, keyboard bindings and table of contents
//! - Start position from the address fragment and fragment rewriting
//! - Round trip from a budget selector save

use async_trait::async_trait;
use cookbook_bs::{BudgetSelector, SaveOutcome, SelectorOptions};
use cookbook_common::models::Page;
use cookbook_common::source::Origin;
use cookbook_common::{
    Error, JsonSource, KeyValueStore, Locale, PageItem, Result, SiteClient, SqliteStore,
    STORAGE_KEY,
};
use cookbook_rv::keys::Key;
use cookbook_rv::{PageAddress, RecipeViewer};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Test double: fixed path → JSON map; unknown paths are a 404
#[derive(Default)]
struct StaticSource {
    files: HashMap<String, Value>,
}

impl StaticSource {
    fn with(mut self, path: &str, value: Value) -> Self {
        self.files.insert(path.to_string(), value);
        self
    }
}

#[async_trait]
impl JsonSource for StaticSource {
    async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.files.get(path).cloned().ok_or(Error::Http {
            url: path.to_string(),
            status: 404,
        })
    }
}

fn pages(count: usize) -> Vec<Page> {
    (1..=count)
        .map(|i| vec![PageItem::new(format!("step {}", i), format!("page {}", i))])
        .collect()
}

fn viewer(count: usize, address: &str) -> RecipeViewer {
    RecipeViewer::from_pages(pages(count), PageAddress::parse(address), Locale::En)
}

async fn load(source: &StaticSource, store: &SqliteStore, address: &str) -> RecipeViewer {
    RecipeViewer::load(source, store, PageAddress::parse(address), Locale::En).await
}

// =============================================================================
// Loading
// =============================================================================

#[tokio::test]
async fn test_storage_takes_priority_over_fetch() {
    let store = SqliteStore::in_memory().await.unwrap();
    store
        .set(STORAGE_KEY, r#"{"pages":[[{"step":"stored"}]]}"#)
        .await
        .unwrap();
    let source = StaticSource::default().with("./json/data.json", json!([[], []]));

    let viewer = load(&source, &store, "recipe.html").await;

    assert_eq!(viewer.page_count(), 1);
    assert_eq!(viewer.current_items()[0].step.as_deref(), Some("stored"));
}

#[tokio::test]
async fn test_stored_bare_array_is_pages() {
    let store = SqliteStore::in_memory().await.unwrap();
    store.set(STORAGE_KEY, r#"[[{"narrate":"a"}],[{"narrate":"b"}]]"#).await.unwrap();

    let viewer = load(&StaticSource::default(), &store, "recipe.html").await;
    assert_eq!(viewer.page_count(), 2);
}

#[tokio::test]
async fn test_malformed_storage_degrades_to_no_data() {
    let store = SqliteStore::in_memory().await.unwrap();
    store.set(STORAGE_KEY, r#"{"chapters":[]}"#).await.unwrap();
    // A valid fetchable document must not be used once storage was present
    let source = StaticSource::default().with("./json/data.json", json!([[{"step": "x"}]]));

    let viewer = load(&source, &store, "recipe.html#p=2").await;

    assert_eq!(viewer.page_count(), 0);
    assert_eq!(viewer.page_index(), None);
    assert_eq!(viewer.counter(), "page 0 / 0");
    assert!(viewer.prev_disabled());
    assert!(viewer.next_disabled());
    assert!(viewer.toc().is_empty());
    // Fragment untouched when there is nothing to show
    assert_eq!(viewer.address().to_string(), "recipe.html#p=2");

    let html = viewer.render_page().unwrap();
    assert!(html.contains(r#"<div class="item">No data</div>"#));
}

#[tokio::test]
async fn test_unparseable_storage_degrades_to_no_data() {
    let store = SqliteStore::in_memory().await.unwrap();
    store.set(STORAGE_KEY, "{not json").await.unwrap();

    let viewer = load(&StaticSource::default(), &store, "recipe.html").await;
    assert_eq!(viewer.page_count(), 0);
}

#[tokio::test]
async fn test_empty_storage_value_falls_back_to_fetch() {
    let store = SqliteStore::in_memory().await.unwrap();
    store.set(STORAGE_KEY, "").await.unwrap();
    let source = StaticSource::default().with("./json/data.json", json!({"pages": [[], [], []]}));

    let viewer = load(&source, &store, "recipe.html").await;
    assert_eq!(viewer.page_count(), 3);
}

#[tokio::test]
async fn test_data_query_parameter_overrides_default_url() {
    let store = SqliteStore::in_memory().await.unwrap();
    let source = StaticSource::default()
        .with("./json/data.json", json!([[]]))
        .with("./json/other.json", json!([[], []]));

    let viewer = load(&source, &store, "recipe.html?data=./json/other.json").await;
    assert_eq!(viewer.page_count(), 2);
}

#[tokio::test]
async fn test_fetch_failure_degrades_to_no_data() {
    let store = SqliteStore::in_memory().await.unwrap();

    let viewer = load(&StaticSource::default(), &store, "recipe.html").await;
    assert_eq!(viewer.page_count(), 0);
    assert!(viewer.render_page().unwrap().contains("No data"));
}

#[tokio::test]
async fn test_fetched_document_with_wrong_shape_degrades_to_no_data() {
    let store = SqliteStore::in_memory().await.unwrap();
    let source = StaticSource::default().with("./json/data.json", json!({"pages": "nope"}));

    let viewer = load(&source, &store, "recipe.html").await;
    assert_eq!(viewer.page_count(), 0);
}

#[tokio::test]
async fn test_numeric_step_is_rendered_as_text() {
    let store = SqliteStore::in_memory().await.unwrap();
    let source = StaticSource::default().with(
        "./json/data.json",
        json!({"pages": [
            [{"step": 1, "narrate": "boil water"}],
            [{"step": "2", "narrate": "add rice"}]
        ]}),
    );

    let viewer = load(&source, &store, "recipe.html").await;

    assert_eq!(viewer.page_count(), 2);
    assert_eq!(viewer.counter(), "page 1 / 2");
    let content = viewer.render_content().unwrap();
    assert!(content.contains(r#"<div class="item-step">Step: 1</div>"#), "{}", content);
    assert!(content.contains("boil water"));
}

#[tokio::test]
async fn test_directory_origin_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("json")).unwrap();
    std::fs::write(
        dir.path().join("json/data.json"),
        r#"{"pages":[[{"step":"one"}],[{"step":"two"}]]}"#,
    )
    .unwrap();

    let source = SiteClient::new(Origin::Dir(dir.path().to_path_buf())).unwrap();
    let store = SqliteStore::in_memory().await.unwrap();
    let viewer = RecipeViewer::load(
        &source,
        &store,
        PageAddress::parse("recipe.html#p=2"),
        Locale::En,
    )
    .await;

    assert_eq!(viewer.page_index(), Some(1));
    assert_eq!(viewer.current_items()[0].step.as_deref(), Some("two"));
}

// =============================================================================
// Start position
// =============================================================================

#[test]
fn test_fragment_p3_on_five_pages_starts_at_index_2() {
    let viewer = viewer(5, "recipe.html#p=3");
    assert_eq!(viewer.page_index(), Some(2));
    assert_eq!(viewer.counter(), "page 3 / 5");
}

#[test]
fn test_fragment_p99_on_five_pages_clamps_to_last() {
    let viewer = viewer(5, "recipe.html#p=99");
    assert_eq!(viewer.page_index(), Some(4));
    assert_eq!(viewer.address().fragment(), Some("p=5"));
}

#[test]
fn test_page_marker_later_in_fragment_is_honored() {
    let viewer = viewer(3, "recipe.html#top#p=2");
    assert_eq!(viewer.page_index(), Some(1));
    assert_eq!(viewer.address().fragment(), Some("p=2"));
}

#[test]
fn test_missing_or_invalid_fragment_starts_at_first_page() {
    for address in ["recipe.html", "recipe.html#p=0", "recipe.html#x", "recipe.html#p=abc"] {
        assert_eq!(viewer(3, address).page_index(), Some(0), "{}", address);
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_prev_at_first_page_is_noop() {
    let mut viewer = viewer(3, "recipe.html");
    assert!(viewer.prev_disabled());

    viewer.navigate_prev();
    assert_eq!(viewer.page_index(), Some(0));
    assert_eq!(viewer.address().fragment(), Some("p=1"));
}

#[test]
fn test_next_at_last_page_is_noop() {
    let mut viewer = viewer(3, "recipe.html#p=3");
    assert!(viewer.next_disabled());

    viewer.navigate_next();
    assert_eq!(viewer.page_index(), Some(2));
}

#[test]
fn test_index_never_leaves_range() {
    let mut viewer = viewer(4, "recipe.html");
    let moves = [1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1];
    for forward in moves {
        if forward == 1 {
            viewer.navigate_next();
        } else {
            viewer.navigate_prev();
        }
        let index = viewer.page_index().unwrap();
        assert!(index < 4);
        assert_eq!(viewer.address().fragment(), Some(format!("p={}", index + 1).as_str()));
    }
}

#[test]
fn test_keys_navigate() {
    let mut viewer = viewer(3, "recipe.html");

    assert!(viewer.handle_key(Key::Right));
    assert_eq!(viewer.page_index(), Some(1));
    assert!(viewer.handle_key(Key::Left));
    assert_eq!(viewer.page_index(), Some(0));
    assert!(viewer.handle_key(Key::Toc(3)));
    assert_eq!(viewer.page_index(), Some(2));
    assert!(!viewer.handle_key(Key::Quit));
}

#[test]
fn test_toc_marks_current_page() {
    let mut viewer = viewer(3, "recipe.html");
    viewer.select_toc(2);

    let toc = viewer.toc();
    assert_eq!(toc.len(), 3);
    assert_eq!(toc.iter().map(|e| e.label.as_str()).collect::<Vec<_>>(), ["1", "2", "3"]);
    assert_eq!(toc.iter().filter(|e| e.current).count(), 1);
    assert!(toc[1].current);

    let html = viewer.render_page().unwrap();
    assert!(html.contains(r#"data-i="1" aria-current="page">2</button>"#));
    assert!(html.contains(r#"<span id="pageInfo">page 2 / 3</span>"#));
}

#[test]
fn test_toc_out_of_range_is_ignored() {
    let mut viewer = viewer(3, "recipe.html#p=2");
    viewer.select_toc(0);
    viewer.select_toc(4);
    assert_eq!(viewer.page_index(), Some(1));
}

#[test]
fn test_navigation_on_empty_document_is_noop() {
    let mut viewer = viewer(0, "recipe.html");
    viewer.navigate_next();
    viewer.navigate_prev();
    viewer.select_toc(1);
    assert_eq!(viewer.page_index(), None);
    assert_eq!(viewer.address().fragment(), None);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_narration_script_is_escaped() {
    let pages = vec![vec![PageItem {
        step: None,
        narrate: Some("<script>alert(1)</script>".to_string()),
    }]];
    let viewer = RecipeViewer::from_pages(pages, PageAddress::default(), Locale::En);

    let content = viewer.render_content().unwrap();
    assert!(content.contains("&lt;script&gt;"));
    assert!(!content.contains("<script"));
    assert!(!content.contains("item-step"));
}

#[test]
fn test_empty_fields_are_not_rendered() {
    let pages = vec![vec![PageItem {
        step: Some(String::new()),
        narrate: Some("only narration".to_string()),
    }]];
    let viewer = RecipeViewer::from_pages(pages, PageAddress::default(), Locale::ZhTw);

    let content = viewer.render_content().unwrap();
    assert_eq!(
        content,
        r#"<div class="item"><div class="item-narr">說白：only narration</div></div>"#
    );
    assert_eq!(viewer.counter(), "第 1 / 1 頁");
}

// =============================================================================
// Round trip from the budget selector
// =============================================================================

#[tokio::test]
async fn test_budget_selector_save_round_trips_into_viewer() {
    let source = StaticSource::default()
        .with(
            "./json/budget-recipes.json",
            json!([{"id": 1, "name": "Congee", "estimatedCost": 50}]),
        )
        .with(
            "./json/budget-recipes-details.json",
            json!([{"id": 1, "ingredients": ["rice", "water", "salt"], "steps": ["boil", "simmer"]}]),
        );
    let source = Arc::new(source);
    let store = Arc::new(SqliteStore::in_memory().await.unwrap());

    let mut selector =
        BudgetSelector::new(source.clone(), store.clone(), SelectorOptions::default());
    selector.load_catalog().await;
    selector.submit_budget("100");
    selector.select(1);
    assert!(matches!(selector.save().await, SaveOutcome::Saved { page_count: 2, .. }));

    let viewer = RecipeViewer::load(
        &*source,
        &*store,
        PageAddress::default(),
        Locale::ZhTw,
    )
    .await;

    assert_eq!(viewer.page_count(), 2);
    assert_eq!(viewer.pages().iter().map(Vec::len).sum::<usize>(), 5);
    assert_eq!(viewer.current_items()[2].step.as_deref(), Some("食材 3"));
}
