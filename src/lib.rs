//! NavBuilder - hierarchical navigation menus for server-rendered pages
//!
//! NavBuilder assembles ordered trees of links either item by item with
//! [`MenuTree::add`], in bulk from an external record source (for example a
//! database table with parent/child rows), or by injecting a pre-built item
//! list. The tree renders to nested `<ul>`/`<li>` markup, marking the item
//! matching the current URL (`active current`) and every ancestor on the way
//! down to it (`active`).

pub mod build;
pub mod error;
pub mod models;
pub mod render;
pub mod slug;
pub mod source;

// Re-exports for convenience
pub use error::{NavError, NavResult};
pub use models::{Attrs, MenuItem, MenuTree};
pub use render::{current_class, ActiveState, RootRelative, UrlBuilder};
pub use slug::slugify;
pub use source::{OrderDirection, Record, RecordQuery, RecordSource, SourceConfig};
