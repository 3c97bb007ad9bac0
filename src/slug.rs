//! Title-to-slug derivation
//!
//! Used by `MenuTree::add` when an item is appended without an explicit url.

/// Derive a URL-safe slug from a display title.
///
/// Lowercases the input, replaces every run of non-alphanumeric characters
/// with a single `-`, and trims leading/trailing separators. An input with
/// no alphanumeric characters yields an empty slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            // Some lowercasings expand into letter + combining mark; keep
            // only the alphanumeric part so slugs stay slug-safe.
            for lower in c.to_lowercase().filter(|lc| lc.is_alphanumeric()) {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}
