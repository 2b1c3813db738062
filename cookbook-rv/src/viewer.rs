//! Recipe viewer controller
//!
//! Loads the shared document (local storage first, else the document URL),
//! then shows one page at a time. Loading never fails outward: any error is
//! logged and the viewer starts with no pages, showing the "no data"
//! placeholder.

use crate::address::PageAddress;
use crate::keys::Key;
use crate::messages::Messages;
use crate::pagination::Pagination;
use crate::views::{ItemView, RecipePage, TocEntry};
use askama::Template;
use cookbook_common::models::Page;
use cookbook_common::{
    Document, JsonSource, KeyValueStore, Locale, PageItem, Result, STORAGE_KEY,
};
use tracing::{debug, error, info};

/// Session state of the recipe viewer page
pub struct RecipeViewer {
    pages: Vec<Page>,
    pagination: Pagination,
    address: PageAddress,
    messages: Messages,
}

impl RecipeViewer {
    /// Load the document and render the page named by the address fragment
    pub async fn load(
        source: &dyn JsonSource,
        store: &dyn KeyValueStore,
        address: PageAddress,
        locale: Locale,
    ) -> Self {
        let pages = load_pages(source, store, &address).await;
        Self::from_pages(pages, address, locale)
    }

    /// Start on already-loaded pages
    pub fn from_pages(pages: Vec<Page>, address: PageAddress, locale: Locale) -> Self {
        let start = address.start_index();
        let mut viewer = Self {
            pagination: Pagination::new(pages.len(), 0),
            pages,
            address,
            messages: Messages::new(locale),
        };
        viewer.render(start);
        viewer
    }

    /// Show page `index` (clamped) and record it in the address fragment
    ///
    /// With no pages nothing moves and the fragment is left alone.
    pub fn render(&mut self, index: usize) {
        if self.pagination.is_empty() {
            return;
        }
        let shown = self.pagination.go_to(index);
        self.address.set_page(shown);
        debug!(page = shown + 1, of = self.pages.len(), "Rendered page");
    }

    pub fn navigate_prev(&mut self) {
        let target = self.pagination.index().unwrap_or(0).saturating_sub(1);
        self.render(target);
    }

    pub fn navigate_next(&mut self) {
        let target = self.pagination.index().unwrap_or(0).saturating_add(1);
        self.render(target);
    }

    /// Activate a table-of-contents entry by its 1-based label
    pub fn select_toc(&mut self, label: usize) {
        if label >= 1 && label <= self.pages.len() {
            self.render(label - 1);
        }
    }

    /// Apply a key binding; returns false on quit
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Left => self.navigate_prev(),
            Key::Right => self.navigate_next(),
            Key::Toc(label) => self.select_toc(label),
            Key::Quit => return false,
        }
        true
    }

    /// Current 0-based page; `None` when there is no data
    pub fn page_index(&self) -> Option<usize> {
        self.pagination.index()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Items of the current page
    pub fn current_items(&self) -> &[PageItem] {
        self.page_index()
            .and_then(|i| self.pages.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn prev_disabled(&self) -> bool {
        self.pagination.prev_disabled()
    }

    pub fn next_disabled(&self) -> bool {
        self.pagination.next_disabled()
    }

    /// "page X / N" text
    pub fn counter(&self) -> String {
        self.messages
            .page_counter(self.page_index(), self.pages.len())
    }

    /// One entry per page, the current one marked
    pub fn toc(&self) -> Vec<TocEntry> {
        let current = self.page_index();
        (0..self.pages.len())
            .map(|i| TocEntry {
                index: i,
                label: (i + 1).to_string(),
                current: Some(i) == current,
            })
            .collect()
    }

    /// The shareable address, fragment included
    pub fn address(&self) -> &PageAddress {
        &self.address
    }

    /// Markup of the current page's items
    pub fn render_content(&self) -> std::result::Result<String, askama::Error> {
        let step_prefix = self.messages.step_prefix();
        let narrate_prefix = self.messages.narrate_prefix();

        self.current_items()
            .iter()
            .map(|item| {
                ItemView {
                    step: non_empty(&item.step),
                    narrate: non_empty(&item.narrate),
                    step_prefix,
                    narrate_prefix,
                }
                .render()
            })
            .collect()
    }

    /// Full page markup for the current state
    pub fn render_page(&self) -> std::result::Result<String, askama::Error> {
        let content = self.render_content()?;
        let toc = self.toc();
        let counter = self.counter();

        RecipePage {
            lang: self.messages.locale().html_lang(),
            title: self.messages.title(),
            toc: &toc,
            empty: self.pages.is_empty(),
            no_data: self.messages.no_data(),
            content: &content,
            prev_disabled: self.prev_disabled(),
            next_disabled: self.next_disabled(),
            prev_label: self.messages.prev_button(),
            next_label: self.messages.next_button(),
            counter: &counter,
        }
        .render()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Pages from storage, else from the document URL; empty on any failure
pub async fn load_pages(
    source: &dyn JsonSource,
    store: &dyn KeyValueStore,
    address: &PageAddress,
) -> Vec<Page> {
    match try_load_pages(source, store, address).await {
        Ok(pages) => {
            info!("Loaded document with {} pages", pages.len());
            pages
        }
        Err(e) => {
            error!("Could not read document: {}", e);
            Vec::new()
        }
    }
}

async fn try_load_pages(
    source: &dyn JsonSource,
    store: &dyn KeyValueStore,
    address: &PageAddress,
) -> Result<Vec<Page>> {
    if let Some(saved) = store.get(STORAGE_KEY).await?.filter(|s| !s.is_empty()) {
        debug!("Using document from local storage");
        return Ok(Document::from_json_str(&saved)?.pages);
    }

    let data_url = address.data_url();
    debug!(url = %data_url, "Fetching document");
    let value = source.fetch_json(&data_url).await?;
    Ok(Document::from_value(value)?.pages)
}
