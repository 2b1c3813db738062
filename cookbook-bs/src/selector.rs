//! Budget selector controller
//!
//! Owns the session state of one page visit: the catalog, the filtered view,
//! the selection and the memoized recipe details. Every entry point catches
//! its own failures and reports them through the status text, so the
//! session never ends up half-updated.

use crate::catalog::{self, INITIAL_LIST_LIMIT};
use crate::messages::Messages;
use crate::save;
use crate::views::{BudgetPage, CardView, SelectionView};
use askama::Template;
use chrono::Utc;
use cookbook_common::config::SaveMode;
use cookbook_common::{
    Document, Error, JsonSource, KeyValueStore, Locale, RecipeDetail, RecipeSummary, Result,
    CATALOG_PATH, DEFAULT_DATA_PATH, DETAILS_PATH, STORAGE_KEY,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Behavior switches for one selector session
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    pub locale: Locale,
    pub save_mode: SaveMode,
    /// Also write `data.json` here on every save
    pub export_dir: Option<PathBuf>,
}

/// Result of a save request
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Document written to storage
    Saved {
        page_count: usize,
        exported: Option<PathBuf>,
    },
    /// Nothing selected; no I/O attempted
    NoSelection,
    /// Fetch, parse, storage or export failure
    Failed,
}

/// Session state of the budget selector page
pub struct BudgetSelector {
    source: Arc<dyn JsonSource>,
    store: Arc<dyn KeyValueStore>,
    options: SelectorOptions,
    messages: Messages,
    recipes: Vec<RecipeSummary>,
    filtered: Vec<RecipeSummary>,
    /// Cards shown from `filtered`; `None` shows all of them
    list_limit: Option<usize>,
    catalog_loaded: bool,
    selected: Option<RecipeSummary>,
    details: Option<Vec<RecipeDetail>>,
    budget_input: String,
    status: String,
}

impl BudgetSelector {
    pub fn new(
        source: Arc<dyn JsonSource>,
        store: Arc<dyn KeyValueStore>,
        options: SelectorOptions,
    ) -> Self {
        let messages = Messages::new(options.locale);
        Self {
            source,
            store,
            options,
            messages,
            recipes: Vec::new(),
            filtered: Vec::new(),
            list_limit: Some(INITIAL_LIST_LIMIT),
            catalog_loaded: false,
            selected: None,
            details: None,
            budget_input: String::new(),
            status: String::new(),
        }
    }

    /// Fetch the catalog and show its first entries unfiltered
    pub async fn load_catalog(&mut self) {
        match self.fetch_catalog().await {
            Ok(recipes) => {
                info!("Loaded {} recipes", recipes.len());
                self.status = self.messages.catalog_loaded(recipes.len());
                self.filtered = recipes.clone();
                self.recipes = recipes;
                self.list_limit = Some(INITIAL_LIST_LIMIT);
                self.catalog_loaded = true;
            }
            Err(e) => {
                error!("Failed to load recipe catalog: {}", e);
                self.status = self.messages.catalog_failed();
            }
        }
    }

    async fn fetch_catalog(&self) -> Result<Vec<RecipeSummary>> {
        let value = self.source.fetch_json(CATALOG_PATH).await?;
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidShape(format!("catalog must be an array of recipes: {}", e)))
    }

    /// Handle the budget form: remember the raw input and filter by it
    pub fn submit_budget(&mut self, input: &str) {
        self.budget_input = input.trim().to_string();
        self.filter_by_budget(catalog::parse_budget(input));
    }

    /// Refilter the catalog; clears the selection
    pub fn filter_by_budget(&mut self, budget: Option<f64>) {
        if self.recipes.is_empty() {
            warn!("Ignoring budget filter: catalog not loaded");
            return;
        }

        self.filtered = catalog::filter_by_budget(&self.recipes, budget);
        self.list_limit = None;
        self.selected = None;
        self.status = self.messages.filtered(self.filtered.len());
        debug!(?budget, matched = self.filtered.len(), "Filtered catalog");
    }

    /// Pick a recipe by id, falling back to the full catalog
    pub fn select(&mut self, id: i64) {
        self.selected = catalog::find_recipe(&self.filtered, &self.recipes, id).cloned();
        let name = self.selected.as_ref().map(|r| r.name.as_str()).unwrap_or("");
        self.status = self.messages.selected(name);
        debug!(id, found = self.selected.is_some(), "Selection changed");
    }

    /// Save using the configured strategy and export setting
    pub async fn save(&mut self) -> SaveOutcome {
        let export_dir = self.options.export_dir.clone();
        self.save_to(export_dir).await
    }

    /// Save and additionally export `data.json` into `dir`
    pub async fn save_and_export(&mut self, dir: PathBuf) -> SaveOutcome {
        self.save_to(Some(dir)).await
    }

    async fn save_to(&mut self, export_dir: Option<PathBuf>) -> SaveOutcome {
        let Some(selected) = self.selected.clone() else {
            self.status = self.messages.select_first();
            return SaveOutcome::NoSelection;
        };

        match self.write_document(&selected, export_dir).await {
            Ok((page_count, exported)) => {
                info!(id = selected.id, page_count, "Saved selection");
                self.status = match &exported {
                    Some(path) => self.messages.saved_and_exported(path),
                    None => self.messages.saved(),
                };
                SaveOutcome::Saved {
                    page_count,
                    exported,
                }
            }
            Err(e) => {
                error!("Save failed: {}", e);
                self.status = self.messages.save_failed();
                SaveOutcome::Failed
            }
        }
    }

    async fn write_document(
        &mut self,
        selected: &RecipeSummary,
        export_dir: Option<PathBuf>,
    ) -> Result<(usize, Option<PathBuf>)> {
        let document = match self.options.save_mode {
            SaveMode::Details => {
                let detail = self
                    .details()
                    .await?
                    .iter()
                    .find(|d| d.id == selected.id)
                    .cloned()
                    .unwrap_or_else(|| {
                        warn!(id = selected.id, "No detail record; saving empty recipe");
                        RecipeDetail {
                            id: selected.id,
                            ..Default::default()
                        }
                    });
                save::build_detail_document(&detail, &self.messages)
            }
            SaveMode::Merge => {
                let base = Document::from_value(self.source.fetch_json(DEFAULT_DATA_PATH).await?)?;
                let user_budget = catalog::parse_budget(&self.budget_input)
                    .filter(|b| *b != 0.0)
                    .unwrap_or(selected.estimated_cost);
                save::merge_selection(base, selected, user_budget, Utc::now())
            }
        };

        self.store.set(STORAGE_KEY, &document.to_json()?).await?;

        let exported = match export_dir {
            Some(dir) => Some(save::export_document(&dir, &document).await?),
            None => None,
        };

        Ok((document.pages.len(), exported))
    }

    /// Recipe details, fetched on first use and kept for the session
    async fn details(&mut self) -> Result<&[RecipeDetail]> {
        if self.details.is_none() {
            let value = self.source.fetch_json(DETAILS_PATH).await?;
            let details: Vec<RecipeDetail> = serde_json::from_value(value).map_err(|e| {
                Error::InvalidShape(format!("details must be an array of records: {}", e))
            })?;
            info!("Loaded {} recipe details", details.len());
            self.details = Some(details);
        }
        Ok(self.details.as_deref().unwrap_or_default())
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn catalog(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn filtered(&self) -> &[RecipeSummary] {
        &self.filtered
    }

    /// Recipes currently rendered as cards
    pub fn visible(&self) -> &[RecipeSummary] {
        match self.list_limit {
            Some(limit) => &self.filtered[..self.filtered.len().min(limit)],
            None => &self.filtered,
        }
    }

    pub fn selected(&self) -> Option<&RecipeSummary> {
        self.selected.as_ref()
    }

    pub fn can_save(&self) -> bool {
        self.selected.is_some()
    }

    fn meta(&self, r: &RecipeSummary) -> String {
        self.messages
            .recipe_meta(r.estimated_cost, r.duration, r.servings)
    }

    /// Full page markup for the current state
    pub fn render_page(&self) -> std::result::Result<String, askama::Error> {
        let cards = self
            .visible()
            .iter()
            .map(|r| CardView {
                id: r.id,
                name: r.name.clone(),
                summary: r.summary.clone(),
                meta: self.meta(r),
                tags: r.tags.clone(),
            })
            .collect();

        let selection = self.selected.as_ref().map(|r| SelectionView {
            name: r.name.clone(),
            summary: r.summary.clone(),
            meta: self.meta(r),
        });

        BudgetPage {
            lang: self.messages.locale().html_lang(),
            title: self.messages.title(),
            budget_label: self.messages.budget_label(),
            filter_label: self.messages.filter_button(),
            budget: &self.budget_input,
            status: &self.status,
            show_no_match: self.catalog_loaded && self.filtered.is_empty(),
            no_match: self.messages.no_match(),
            cards,
            pick_label: self.messages.pick_button(),
            selection,
            selection_empty: self.messages.selection_empty(),
            save_disabled: !self.can_save(),
            save_label: self.messages.save_button(),
        }
        .render()
    }
}
