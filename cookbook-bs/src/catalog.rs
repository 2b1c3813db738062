//! Catalog filtering by budget

use cookbook_common::RecipeSummary;
use std::cmp::Ordering;

/// Number of cards shown before the first filter is applied
pub const INITIAL_LIST_LIMIT: usize = 20;

/// Parse the budget field
///
/// Empty, non-numeric and non-finite input means "no budget".
pub fn parse_budget(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|b| b.is_finite())
}

/// Ascending by estimated cost, ties by id
pub fn budget_order(a: &RecipeSummary, b: &RecipeSummary) -> Ordering {
    a.estimated_cost
        .total_cmp(&b.estimated_cost)
        .then_with(|| a.id.cmp(&b.id))
}

/// Recipes affordable within `budget`, sorted by [`budget_order`]
///
/// An absent, zero or negative budget keeps the whole catalog.
pub fn filter_by_budget(catalog: &[RecipeSummary], budget: Option<f64>) -> Vec<RecipeSummary> {
    let mut filtered: Vec<RecipeSummary> = match budget {
        Some(limit) if limit > 0.0 => catalog
            .iter()
            .filter(|r| r.estimated_cost <= limit)
            .cloned()
            .collect(),
        _ => catalog.to_vec(),
    };
    filtered.sort_by(budget_order);
    filtered
}

/// Look `id` up in the filtered view first, then the full catalog
pub fn find_recipe<'a>(
    filtered: &'a [RecipeSummary],
    catalog: &'a [RecipeSummary],
    id: i64,
) -> Option<&'a RecipeSummary> {
    filtered
        .iter()
        .find(|r| r.id == id)
        .or_else(|| catalog.iter().find(|r| r.id == id))
}
