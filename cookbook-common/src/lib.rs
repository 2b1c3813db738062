//! # Cookbook Common Library
//!
//! Shared code for the cookbook page controllers:
//! - Recipe and document models (the shared `{ pages }` document shape)
//! - Persistent local storage (key-value store backed by SQLite)
//! - JSON sources (HTTP origin or local directory)
//! - Configuration loading and root folder resolution
//! - Locale selection for user-facing text

pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod source;
pub mod store;

pub use error::{Error, Result};
pub use locale::Locale;
pub use models::{Document, PageItem, RecipeDetail, RecipeSummary};
pub use source::{JsonSource, SiteClient};
pub use store::{KeyValueStore, SqliteStore};

/// Storage key shared by both page controllers for the saved document
pub const STORAGE_KEY: &str = "cookbook-data.json";

/// Catalog of recipe summaries, relative to the site origin
pub const CATALOG_PATH: &str = "./json/budget-recipes.json";

/// Recipe detail records, relative to the site origin
pub const DETAILS_PATH: &str = "./json/budget-recipes-details.json";

/// Default shared document, relative to the site origin
pub const DEFAULT_DATA_PATH: &str = "./json/data.json";

/// File name used when exporting the document outside storage
pub const EXPORT_FILE_NAME: &str = "data.json";
