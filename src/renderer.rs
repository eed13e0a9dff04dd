//! The node renderer.
//!
//! Walks resolved content nodes and maps each node's type onto a rendering
//! strategy through a flat dispatch table. Every branch has a plain fallback:
//! unknown types render their children without a wrapper, reference nodes
//! missing required fields render unlinked text, and nothing on this path
//! panics — the content comes from a remote API and must never break the
//! page it is rendered into.

use crate::config::{Config, Meta};
use crate::element::{self, Element};
use crate::node::{ContentNode, FormattedNode};

mod links;
mod refs;
mod wrappers;

pub(crate) use links::internal_anchor;

/// Everything a per-type render function gets to work with.
pub struct RenderArgs<'a> {
    pub node: &'a FormattedNode,
    /// The node's children, already rendered in order.
    pub children: Vec<Element>,
    pub config: &'a Config,
    pub meta: &'a Meta,
}

type RenderFn = fn(RenderArgs) -> Element;

static RENDERERS: &[(&str, RenderFn)] = &[
    ("link", links::render_link),
    ("site", refs::render_site),
    ("post", refs::render_post),
    ("comment", refs::render_comment),
    ("person", refs::render_person),
    ("plugin", refs::render_plugin),
    ("theme", refs::render_theme),
    ("backup", refs::render_backup),
    ("b", wrappers::render_strong),
    ("strong", wrappers::render_strong),
    ("i", wrappers::render_emphasis),
    ("em", wrappers::render_emphasis),
    ("pre", wrappers::render_pre),
    ("filepath", wrappers::render_filepath),
];

fn renderer_for(kind: &str) -> Option<RenderFn> {
    RENDERERS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, f)| *f)
}

/// Render a resolved node list.
pub fn render(nodes: &[ContentNode], config: &Config, meta: &Meta) -> Vec<Element> {
    nodes
        .iter()
        .map(|node| render_node(node, config, meta))
        .collect()
}

/// Render a resolved node list straight to an HTML string.
pub fn render_to_html(nodes: &[ContentNode], config: &Config, meta: &Meta) -> String {
    element::to_html(&render(nodes, config, meta))
}

/// Render one content node.
pub fn render_node(node: &ContentNode, config: &Config, meta: &Meta) -> Element {
    let node = match node {
        ContentNode::Text(text) => return Element::text(text.clone()),
        ContentNode::Node(node) => node,
    };

    // Children render first; every downstream branch reuses them.
    let children = render(&node.children, config, meta);

    if let Some(kind) = node.kind.as_deref() {
        if let Some(render_fn) = renderer_for(kind) {
            return render_fn(RenderArgs {
                node,
                children,
                config,
                meta,
            });
        }
        log::debug!("No renderer for node type {:?}, passing children through", kind);
        return Element::Fragment(children);
    }

    if !children.is_empty() {
        return Element::Fragment(children);
    }

    match &node.text {
        Some(text) if !text.is_empty() => Element::text(text.clone()),
        _ => Element::empty(),
    }
}

#[cfg(test)]
mod renderer_tests {
    use super::*;
    use serde_json::json;

    fn render_one(value: serde_json::Value) -> Element {
        let node: ContentNode = serde_json::from_value(value).unwrap();
        render_node(&node, &Config::default(), &Meta::default())
    }

    #[test]
    fn test_plain_string_renders_verbatim() {
        let el = render_one(json!("hello"));
        assert_eq!(el.to_html(), "hello");
    }

    #[test]
    fn test_unmapped_type_renders_children_without_wrapper() {
        let el = render_one(json!({
            "type": "badge",
            "children": ["a", { "type": "b", "children": ["b"] }, "c"]
        }));
        assert_eq!(el.to_html(), "a<strong>b</strong>c");
    }

    #[test]
    fn test_untyped_node_with_children_is_a_fragment() {
        let el = render_one(json!({ "children": ["x", "y"] }));
        assert_eq!(el.to_html(), "xy");
    }

    #[test]
    fn test_untyped_childless_node_renders_text() {
        assert_eq!(render_one(json!({ "text": "bare" })).to_html(), "bare");
        assert_eq!(render_one(json!({})).to_html(), "");
    }

    #[test]
    fn test_person_without_site_info_renders_plain() {
        let el = render_one(json!({
            "type": "person",
            "name": "sam",
            "children": ["sam"]
        }));
        assert_eq!(el.to_html(), "sam");
    }
}
