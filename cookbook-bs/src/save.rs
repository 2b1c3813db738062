//! Turning a selection into the shared document
//!
//! Two strategies exist. Detail expansion replaces the document with an
//! ingredients page and a steps page. Merge keeps an existing document's
//! pages and appends a record of the selection.

use crate::messages::Messages;
use chrono::{DateTime, SecondsFormat, Utc};
use cookbook_common::models::{BudgetSelection, Page};
use cookbook_common::{Document, PageItem, RecipeDetail, RecipeSummary, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Ingredients page (if any) followed by steps page (if any)
pub fn build_detail_document(detail: &RecipeDetail, messages: &Messages) -> Document {
    let mut pages: Vec<Page> = Vec::with_capacity(2);

    if !detail.ingredients.is_empty() {
        pages.push(
            detail
                .ingredients
                .iter()
                .enumerate()
                .map(|(i, text)| PageItem::new(messages.ingredient_label(i + 1), text.as_str()))
                .collect(),
        );
    }

    if !detail.steps.is_empty() {
        pages.push(
            detail
                .steps
                .iter()
                .enumerate()
                .map(|(i, text)| PageItem::new(messages.step_label(i + 1), text.as_str()))
                .collect(),
        );
    }

    Document::from_pages(pages)
}

/// Append `selected` to `base`, keeping its pages and earlier selections
pub fn merge_selection(
    mut base: Document,
    selected: &RecipeSummary,
    user_budget: f64,
    saved_at: DateTime<Utc>,
) -> Document {
    base.budget_selections.push(BudgetSelection {
        id: selected.id,
        name: selected.name.clone(),
        estimated_cost: selected.estimated_cost,
        user_budget,
        duration: selected.duration,
        servings: selected.servings,
        tags: selected.tags.clone(),
        summary: selected.summary.clone(),
        saved_at: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    base
}

/// Write `document` as pretty JSON to `<dir>/data.json`
pub async fn export_document(dir: &Path, document: &Document) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(cookbook_common::EXPORT_FILE_NAME);
    tokio::fs::write(&path, document.to_json_pretty()?).await?;
    info!("Exported document to {}", path.display());
    Ok(path)
}
