//! Record source port - abstraction for bulk tree construction
//!
//! The data source behind `MenuTree::from_source` stays external: anything
//! that can answer "give me the ordered records whose parent column equals
//! this id" can back a menu, whether that is a SQL table, a CMS API or an
//! in-memory fixture. This module defines that seam plus the column-name
//! configuration it is driven by.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NavResult;

/// One row returned by a record source, as an ordered key/value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(serde_json::Map<String, Value>);

impl From<serde_json::Map<String, Value>> for Record {
    fn from(fields: serde_json::Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl Record {
    /// Raw field access
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// A field rendered as text. Strings pass through; numbers and booleans
    /// stringify the way a loosely-typed database driver would hand them
    /// over. Null, arrays and objects yield `None`.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.0.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A field interpreted as a visibility flag.
    ///
    /// `None` when the column is absent or null - callers distinguish
    /// absence from an explicit false. Numbers count as true unless zero;
    /// the strings `""`, `"0"` and `"false"` count as false.
    pub fn flag(&self, column: &str) -> Option<bool> {
        match self.0.get(column)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => Some(!s.is_empty() && s != "0" && s != "false"),
            _ => None,
        }
    }
}

/// Sort direction for the order-by column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// A "children of this parent" selection against a record source
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    /// Named source to select from
    pub table: String,
    /// Column holding the parent reference
    pub parent_column: String,
    /// Parent id the selection filters on
    pub parent_id: Value,
    /// Column the result set is ordered by
    pub order_by: String,
    pub order_direction: OrderDirection,
}

/// Abstract source of ordered parent/child records.
///
/// Implemented outside this crate, over whatever storage actually holds the
/// menu rows. Failures propagate to the `from_source` caller unchanged; this
/// crate neither retries nor suppresses them.
pub trait RecordSource {
    /// Select all records whose parent column equals `query.parent_id`,
    /// ordered by `query.order_by` in `query.order_direction`.
    fn select_children(&self, query: &RecordQuery) -> anyhow::Result<Vec<Record>>;
}

/// Column-name configuration for [`MenuTree::from_source`].
///
/// Every field has a conventional default, so an empty configuration works
/// against a `categories(id, parent_id, title, url, is_active)` table.
/// Nothing is validated locally; a wrong column name surfaces as a
/// downstream error when records come back without it.
///
/// [`MenuTree::from_source`]: crate::MenuTree::from_source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_id_column")]
    pub id_column: String,

    #[serde(default = "default_parent_column")]
    pub parent_column: String,

    #[serde(default = "default_title_column")]
    pub title_column: String,

    #[serde(default = "default_url_column")]
    pub url_column: String,

    #[serde(default = "default_order_by")]
    pub order_by: String,

    #[serde(default)]
    pub order_direction: OrderDirection,

    #[serde(default = "default_visible_column")]
    pub visible_column: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            id_column: default_id_column(),
            parent_column: default_parent_column(),
            title_column: default_title_column(),
            url_column: default_url_column(),
            order_by: default_order_by(),
            order_direction: OrderDirection::default(),
            visible_column: default_visible_column(),
        }
    }
}

impl SourceConfig {
    /// Parse a configuration from TOML text, filling unset fields with the
    /// conventional defaults.
    pub fn from_toml_str(text: &str) -> NavResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The query selecting the children of `parent_id`
    pub fn query_for(&self, parent_id: &Value) -> RecordQuery {
        RecordQuery {
            table: self.table.clone(),
            parent_column: self.parent_column.clone(),
            parent_id: parent_id.clone(),
            order_by: self.order_by.clone(),
            order_direction: self.order_direction,
        }
    }
}

fn default_table() -> String {
    "categories".to_string()
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_parent_column() -> String {
    "parent_id".to_string()
}

fn default_title_column() -> String {
    "title".to_string()
}

fn default_url_column() -> String {
    "url".to_string()
}

fn default_order_by() -> String {
    "id".to_string()
}

fn default_visible_column() -> String {
    "is_active".to_string()
}
