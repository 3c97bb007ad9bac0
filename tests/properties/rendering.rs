//! Property tests for tree assembly and rendering.

use proptest::prelude::*;

use navbuilder::{MenuItem, MenuTree};

fn title() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,11}").unwrap()
}

/// Recursive item trees up to a few levels deep
fn item_tree() -> impl Strategy<Value = MenuItem> {
    let leaf = (title(), "[a-z]{1,8}", any::<bool>()).prop_map(|(title, url, visible)| MenuItem {
        title,
        url,
        children: None,
        visible,
    });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            title(),
            "[a-z]{1,8}",
            any::<bool>(),
            proptest::collection::vec(inner, 1..4),
        )
            .prop_map(|(title, url, visible, children)| MenuItem {
                title,
                url,
                children: Some(children),
                visible,
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendered links appear in exactly the order items were added.
    #[test]
    fn property_render_preserves_insertion_order(
        titles in proptest::collection::vec(title(), 1..8),
    ) {
        let mut tree = MenuTree::new();
        let mut urls = Vec::new();
        for (i, t) in titles.iter().enumerate() {
            // Index suffix keeps urls unique regardless of generated titles.
            let url = format!("{}-{i}", navbuilder::slugify(t));
            tree.link(t.clone(), &url);
            urls.push(url);
        }

        let html = tree.render();
        let mut last = 0;
        for url in &urls {
            let needle = format!("href=\"/{url}\"");
            let pos = html[last..].find(&needle);
            prop_assert!(pos.is_some(), "missing {needle} after byte {last} in {html}");
            last += pos.unwrap() + needle.len();
        }
    }

    /// PROPERTY: rendering is idempotent and never panics, whatever the tree
    /// shape, current URL or prefix.
    #[test]
    fn property_render_idempotent(
        items in proptest::collection::vec(item_tree(), 0..5),
        current in proptest::option::of("[a-z/]{0,12}"),
        prefix in proptest::option::of("[a-z/]{0,8}"),
    ) {
        let mut tree = MenuTree::from_items(items);
        if let Some(current) = current {
            tree.set_current(current);
        }
        if let Some(prefix) = prefix {
            tree.set_url_prefix(prefix);
        }

        prop_assert_eq!(tree.render(), tree.render());
    }

    /// PROPERTY: root attributes appear exactly once, however deep the tree.
    #[test]
    fn property_root_attrs_emitted_once(
        items in proptest::collection::vec(item_tree(), 0..5),
    ) {
        let mut tree = MenuTree::from_items(items);
        tree.set_attr("id", "proptest-root");

        let html = tree.render();
        prop_assert_eq!(html.matches("id=\"proptest-root\"").count(), 1);
    }

    /// PROPERTY: invisible top-level items leave no trace in the markup.
    #[test]
    fn property_invisible_items_not_rendered(
        visible_title in title(),
    ) {
        let mut tree = MenuTree::new();
        tree.link(visible_title, "shown-item");
        tree.add("Never Shown", Some("hidden-item"), None, false);

        let html = tree.render();
        prop_assert!(html.contains("href=\"/shown-item\""));
        prop_assert!(!html.contains("hidden-item"));
        prop_assert!(!html.contains("Never Shown"));
    }
}
