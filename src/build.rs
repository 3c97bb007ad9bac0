//! Bulk tree construction from an external record source
//!
//! Walks a parent/child record table recursively: the children of a parent
//! id become one tree level, and each record's own id seeds the next level
//! down. An empty result set produces no node at all, which is what
//! terminates the recursion.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{NavError, NavResult};
use crate::models::MenuTree;
use crate::source::{Record, RecordSource, SourceConfig};

impl MenuTree {
    /// Recursively build a tree from the records under `parent_id`.
    ///
    /// Returns `Ok(None)` when no records match `parent_id` - including at
    /// the root, so callers decide what an absent menu means. Source
    /// failures are wrapped in [`NavError::Source`] and propagated without
    /// retry; a record missing one of the configured columns surfaces as
    /// [`NavError::MissingColumn`].
    pub fn from_source(
        source: &dyn RecordSource,
        config: &SourceConfig,
        parent_id: &Value,
    ) -> NavResult<Option<MenuTree>> {
        let tree = build_level(source, config, parent_id)?;
        debug!(
            table = %config.table,
            parent = %parent_id,
            items = tree.as_ref().map_or(0, MenuTree::len),
            "built menu tree from record source"
        );
        Ok(tree)
    }
}

fn build_level(
    source: &dyn RecordSource,
    config: &SourceConfig,
    parent_id: &Value,
) -> NavResult<Option<MenuTree>> {
    let query = config.query_for(parent_id);
    let records = source
        .select_children(&query)
        .map_err(|source| NavError::Source {
            table: config.table.clone(),
            source,
        })?;
    trace!(table = %config.table, parent = %parent_id, records = records.len(), "selected child records");

    if records.is_empty() {
        return Ok(None);
    }

    let mut tree = MenuTree::new();
    for record in &records {
        let title = required_text(record, config, &config.title_column)?;
        let url = required_text(record, config, &config.url_column)?;
        let id = record
            .get(&config.id_column)
            .cloned()
            .ok_or_else(|| missing(config, &config.id_column))?;

        // An absent visibility column means visible; an explicit false is
        // honored.
        let visible = record.flag(&config.visible_column).unwrap_or(true);

        let children = build_level(source, config, &id)?;
        tree.add(title, Some(url.as_str()), children, visible);
    }

    Ok(Some(tree))
}

fn required_text(record: &Record, config: &SourceConfig, column: &str) -> NavResult<String> {
    record.text(column).ok_or_else(|| missing(config, column))
}

fn missing(config: &SourceConfig, column: &str) -> NavError {
    NavError::MissingColumn {
        table: config.table.clone(),
        column: column.to_string(),
    }
}
