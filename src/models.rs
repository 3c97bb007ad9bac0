//! Core data models for NavBuilder
//!
//! Defines the fundamental data structures:
//! - `MenuItem`: one navigable entry, possibly with nested children
//! - `MenuTree`: ordered sequence of items plus render configuration
//! - `Attrs`: root list-tag attributes, either ordered pairs or a raw string

use serde::{Deserialize, Serialize};

use crate::slug::slugify;

fn default_visible() -> bool {
    true
}

/// One navigation entry.
///
/// `url` is stored without leading or trailing slashes when the item is
/// appended through [`MenuTree::add`]; directly injected items are taken as
/// given. A leaf carries `children: None` - an empty `Some(vec![])` never
/// appears, so "leaf" and "empty folder" render the same way (no nested
/// list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display text, emitted verbatim as the link text
    pub title: String,

    /// Slug/path of the link target
    pub url: String,

    /// Ordered child items, absent for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,

    /// Whether the item (and its whole subtree) is rendered
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl MenuItem {
    /// Create a visible leaf item with a normalized url
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            title: title.into(),
            url: url.trim_matches('/').to_string(),
            children: None,
            visible: true,
        }
    }

    /// Whether this item has at least one child
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Attributes for the outermost list tag.
///
/// The ordered-pairs form compiles to ` key="escaped-value"` fragments in
/// insertion order; the raw form is emitted as-is behind a single leading
/// space. Values are escaped at render time, keys are not.
#[derive(Debug, Clone, PartialEq)]
pub enum Attrs {
    /// Ordered `key="value"` pairs
    Pairs(Vec<(String, String)>),
    /// A pre-compiled attribute string, emitted verbatim
    Raw(String),
}

impl Default for Attrs {
    fn default() -> Self {
        Attrs::Pairs(Vec::new())
    }
}

impl Attrs {
    pub fn is_empty(&self) -> bool {
        match self {
            Attrs::Pairs(pairs) => pairs.is_empty(),
            Attrs::Raw(raw) => raw.is_empty(),
        }
    }

    /// Look up a keyed attribute. Always `None` for the raw form.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Attrs::Pairs(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            Attrs::Raw(_) => None,
        }
    }

    /// Insert or replace a keyed attribute, preserving insertion order.
    ///
    /// Setting a key on the raw form discards the raw string and starts a
    /// fresh pair list.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let pairs = match self {
            Attrs::Pairs(pairs) => pairs,
            Attrs::Raw(_) => {
                *self = Attrs::Pairs(Vec::new());
                match self {
                    Attrs::Pairs(pairs) => pairs,
                    Attrs::Raw(_) => unreachable!(),
                }
            }
        };
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => pairs.push((key, value)),
        }
    }
}

/// An ordered tree of navigation items plus render configuration.
///
/// Item order is insertion order and is preserved through build and render.
/// The tree is mutated only while it is being assembled; rendering takes
/// `&self` and carries no shared state between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    items: Vec<MenuItem>,

    /// Attributes for the outermost `<ul>` only
    pub attrs: Attrs,

    /// Current URL used to compute active-state classes
    pub current: Option<String>,

    /// Optional prefix joined in front of every rendered link path
    pub url_prefix: Option<String>,
}

impl MenuTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from a pre-built item list (direct injection).
    ///
    /// No validation beyond shape; items are taken as given.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// The ordered item sequence
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append one item.
    ///
    /// When `url` is `None` or empty it is derived by slugifying the title;
    /// either way the stored url is trimmed of leading/trailing slashes.
    /// `children` is absorbed by value: only its item sequence is kept, its
    /// render configuration is discarded, and an empty tree collapses to
    /// "no children".
    pub fn add(
        &mut self,
        title: impl Into<String>,
        url: Option<&str>,
        children: Option<MenuTree>,
        visible: bool,
    ) -> &mut Self {
        let title = title.into();
        let url = match url {
            Some(u) if !u.is_empty() => u.trim_matches('/').to_string(),
            _ => slugify(&title),
        };
        let children = children.and_then(|tree| {
            if tree.items.is_empty() {
                None
            } else {
                Some(tree.items)
            }
        });
        self.items.push(MenuItem {
            title,
            url,
            children,
            visible,
        });
        self
    }

    /// Append a visible leaf link (the common case of [`MenuTree::add`])
    pub fn link(&mut self, title: impl Into<String>, url: &str) -> &mut Self {
        self.add(title, Some(url), None, true)
    }

    /// Look up a root-tag attribute by key
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Insert or replace a root-tag attribute by key
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set(key, value);
        self
    }

    /// Set the current URL used for active-state classes
    pub fn set_current(&mut self, current: impl Into<String>) -> &mut Self {
        self.current = Some(current.into());
        self
    }

    /// Set the prefix joined in front of every rendered link path.
    ///
    /// Stored without leading/trailing slashes, like item urls.
    pub fn set_url_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        let prefix: String = prefix.into();
        self.url_prefix = Some(prefix.trim_matches('/').to_string());
        self
    }
}
