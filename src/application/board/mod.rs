//! Review board: the in-memory review collection plus its view state.
//!
//! `ReviewBoard` owns the records and the filter/page inputs; the derived
//! filtered view is recomputed after every command, so it is always a pure
//! function of (collection, search query, status filter). Filtering and
//! pagination are plain functions so they can be tested without any UI.

pub mod feed;
pub mod pagination;
pub mod render;
pub mod seed;
mod store;

pub use feed::{ActivityEntry, ActivityFeed, ActivityKind};
pub use pagination::{PageControl, page_controls, total_pages};
pub use store::{ReviewBoard, StatusFilter, filter_reviews, passes_filters};
