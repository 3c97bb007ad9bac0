//! Nested-list markup rendering
//!
//! Turns a `MenuTree` into a `<ul>`/`<li>` fragment in item order. The
//! recursion threads its depth through as an explicit parameter, so the
//! root attributes land on the outermost tag only and concurrent or
//! re-entrant renders of the same tree cannot interfere with each other.

use std::fmt;
use std::fmt::Write;

use tracing::trace;

use crate::models::{Attrs, MenuItem, MenuTree};

/// Abstraction over the final href construction.
///
/// NavBuilder does no URL logic of its own beyond slash-trimming and
/// prefix joining; the joined path goes through this collaborator to become
/// the emitted href.
pub trait UrlBuilder {
    fn href(&self, path: &str) -> String;
}

/// Default URL style: root-relative links (`about/team` -> `/about/team`)
#[derive(Debug, Clone, Copy, Default)]
pub struct RootRelative;

impl UrlBuilder for RootRelative {
    fn href(&self, path: &str) -> String {
        format!("/{path}")
    }
}

/// Active-state class of one item relative to the current URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveState {
    /// The item itself is the current URL
    Current,
    /// Some descendant of the item is the current URL
    Ancestor,
}

impl ActiveState {
    pub fn as_class(&self) -> &'static str {
        match self {
            ActiveState::Current => "active current",
            ActiveState::Ancestor => "active",
        }
    }
}

/// Classify `item` against the current URL.
///
/// `Current` requires an exact url match. `Ancestor` means the current URL
/// equals the url of some descendant; matching considers descendant urls
/// only, and ignores visibility (a hidden descendant still marks its
/// ancestors active - it just is not rendered).
pub fn current_class(current: &str, item: &MenuItem) -> Option<ActiveState> {
    if item.url == current {
        return Some(ActiveState::Current);
    }
    if let Some(children) = item.children.as_deref() {
        if has_active_descendant(children, current) {
            return Some(ActiveState::Ancestor);
        }
    }
    None
}

fn has_active_descendant(items: &[MenuItem], current: &str) -> bool {
    items.iter().any(|item| {
        item.url == current
            || item
                .children
                .as_deref()
                .is_some_and(|children| has_active_descendant(children, current))
    })
}

/// Escape a string for use as an HTML attribute value
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Compile attributes into a tag-ready string.
///
/// Pairs become ` key="escaped-value"` fragments in insertion order (values
/// escaped, keys not); the raw form is emitted verbatim behind one leading
/// space; empty attributes compile to an empty string.
pub fn compile_attrs(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    match attrs {
        Attrs::Raw(raw) => format!(" {raw}"),
        Attrs::Pairs(pairs) => {
            let mut compiled = String::new();
            for (key, value) in pairs {
                let _ = write!(compiled, " {}=\"{}\"", key, escape_attr(value));
            }
            compiled
        }
    }
}

impl MenuTree {
    /// Render the tree to nested `<ul>`/`<li>` markup with root-relative
    /// links. Rendering never fails and leaves the tree untouched.
    pub fn render(&self) -> String {
        self.render_opts(None, None, &RootRelative)
    }

    /// Render with a caller-supplied URL-building collaborator
    pub fn render_with(&self, urls: &dyn UrlBuilder) -> String {
        self.render_opts(None, None, urls)
    }

    /// Full render form: per-call root attributes and current URL fall back
    /// to the tree's configured values when `None`.
    pub fn render_opts(
        &self,
        attrs: Option<&Attrs>,
        current: Option<&str>,
        urls: &dyn UrlBuilder,
    ) -> String {
        trace!(items = self.len(), "rendering menu tree");
        render_level(
            self.items(),
            attrs.unwrap_or(&self.attrs),
            current.or(self.current.as_deref()),
            self.url_prefix.as_deref(),
            urls,
            1,
        )
    }
}

impl fmt::Display for MenuTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_level(
    items: &[MenuItem],
    attrs: &Attrs,
    current: Option<&str>,
    prefix: Option<&str>,
    urls: &dyn UrlBuilder,
    depth: usize,
) -> String {
    let mut menu = String::new();

    // Only the outermost list tag carries the configured attributes.
    if depth == 1 {
        let _ = write!(menu, "<ul{}>", compile_attrs(attrs));
    } else {
        menu.push_str("<ul>");
    }

    for item in items {
        // An invisible item is skipped entirely, children included.
        if !item.visible {
            continue;
        }

        let mut classes: Vec<&str> = Vec::new();
        if item.children.is_some() {
            classes.push("parent");
        }
        if let Some(current) = current {
            if let Some(state) = current_class(current, item) {
                classes.push(state.as_class());
            }
        }
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", escape_attr(&classes.join(" ")))
        };

        // Title text is emitted verbatim; only attribute values are escaped.
        let _ = write!(
            menu,
            "<li{}><a href=\"{}\">{}</a>",
            class_attr,
            urls.href(&join_path(prefix, &item.url)),
            item.title
        );
        if let Some(children) = item.children.as_deref() {
            menu.push_str(&render_level(children, attrs, current, prefix, urls, depth + 1));
        }
        menu.push_str("</li>");
    }

    menu.push_str("</ul>");
    menu
}

fn join_path(prefix: Option<&str>, url: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}/{url}"),
        _ => url.to_string(),
    }
}
