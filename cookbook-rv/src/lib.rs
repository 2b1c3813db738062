//! cookbook-rv library - Recipe Viewer
//!
//! Paginates the shared `{ pages }` document one page at a time, with
//! previous/next and keyboard navigation, a table of contents, and the
//! reading position kept in the page address fragment.

pub mod address;
pub mod keys;
pub mod messages;
pub mod pagination;
pub mod viewer;
pub mod views;

pub use address::PageAddress;
pub use viewer::RecipeViewer;
