//! cookbook-bs library - Budget Selector
//!
//! Filters the recipe catalog by a budget ceiling, tracks one selection and
//! saves it as the shared `{ pages }` document for the recipe viewer.

pub mod catalog;
pub mod messages;
pub mod save;
pub mod selector;
pub mod session;
pub mod views;

pub use selector::{BudgetSelector, SaveOutcome, SelectorOptions};
