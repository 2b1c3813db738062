//! Recipe and document models
//!
//! The catalog and detail records come from static JSON files. The
//! [`Document`] is the only structure shared between the two page
//! controllers: the budget selector writes it, the recipe viewer reads it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One catalog entry, keyed by `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    /// Estimated cost in local currency units
    pub estimated_cost: f64,
    /// Preparation time in minutes
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub servings: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Ingredients and steps for one recipe, same `id` space as [`RecipeSummary`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// One narrated unit of content; both fields are optional
///
/// Hand-written documents often carry numeric steps, so any scalar is
/// accepted and kept as text. `null`, `false`, `0` and `""` count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageItem {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub step: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub narrate: Option<String>,
}

impl PageItem {
    pub fn new(step: impl Into<String>, narrate: impl Into<String>) -> Self {
        Self {
            step: Some(step.into()),
            narrate: Some(narrate.into()),
        }
    }
}

/// A page is an ordered group of items shown together
pub type Page = Vec<PageItem>;

/// Record appended by the merge save strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSelection {
    pub id: i64,
    pub name: String,
    pub estimated_cost: f64,
    /// Budget the user entered, or the recipe cost when none was entered
    pub user_budget: f64,
    pub duration: f64,
    pub servings: f64,
    pub tags: Vec<String>,
    pub summary: String,
    /// RFC 3339 UTC timestamp
    pub saved_at: String,
}

/// Page-structured content consumed by the recipe viewer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub budget_selections: Vec<BudgetSelection>,
}

impl Document {
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            pages,
            budget_selections: Vec::new(),
        }
    }

    /// Validate an already-parsed JSON value as a document
    ///
    /// Accepts a bare array (the pages) or an object with a `pages` array.
    /// Existing `budgetSelections` are carried over when well-formed and
    /// dropped with a warning otherwise.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(pages) => Ok(Self::from_pages(parse_pages(pages)?)),
            Value::Object(mut map) => {
                let pages = match map.remove("pages") {
                    Some(Value::Array(pages)) => parse_pages(pages)?,
                    _ => {
                        return Err(Error::InvalidShape(
                            "expected an array or an object with a `pages` array".to_string(),
                        ))
                    }
                };
                let budget_selections = match map.remove("budgetSelections") {
                    Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
                        tracing::warn!("Ignoring malformed budgetSelections: {}", e);
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
                Ok(Self {
                    pages,
                    budget_selections,
                })
            }
            other => Err(Error::InvalidShape(format!(
                "expected an array or an object with a `pages` array, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse and validate serialized document text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Serialize for storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize for a human-readable export file
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

fn parse_pages(pages: Vec<Value>) -> Result<Vec<Page>> {
    serde_json::from_value(Value::Array(pages))
        .map_err(|e| Error::InvalidShape(format!("pages must be arrays of items: {}", e)))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_text))
}

/// Display text of a JSON value, `None` for falsy scalars
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => None,
            // 2.0 reads as "2"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                Some(format!("{}", f as i64))
            }
            _ => Some(n.to_string()),
        },
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|v| value_text(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
