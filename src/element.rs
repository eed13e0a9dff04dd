//! The renderer's output tree: plain HTML elements with escaping.
//!
//! Rendering technology is deliberately minimal; consumers either serialize
//! with [`Element::to_html`] or walk the tree and map it onto their own UI
//! layer. A [`Element::Fragment`] groups children without a wrapper, which is
//! how unknown node types pass through.

use std::fmt::Write;

/// One rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Verbatim text, escaped on serialization.
    Text(String),
    Tag(Tag),
    /// Wrapperless sequence of children.
    Fragment(Vec<Element>),
}

/// An HTML tag with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Element>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::Tag(tag)
    }
}

impl Element {
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    /// An element that renders to nothing.
    pub fn empty() -> Self {
        Element::Fragment(Vec::new())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Element::Text(text) => escape_text(text, out),
            Element::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Element::Tag(tag) => {
                let _ = write!(out, "<{}", tag.name);
                for (name, value) in &tag.attrs {
                    let _ = write!(out, " {}=\"", name);
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in &tag.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag.name);
            }
        }
    }
}

/// Serialize a rendered element list.
pub fn to_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        element.write_html(&mut out);
    }
    out
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(Element::text("a < b & c").to_html(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_tag_with_attrs_and_children() {
        let el: Element = Tag::new("a")
            .attr("href", "/posts/1")
            .children(vec![Element::text("View")])
            .into();
        assert_eq!(el.to_html(), "<a href=\"/posts/1\">View</a>");
    }

    #[test]
    fn test_attr_values_are_escaped() {
        let el: Element = Tag::new("a")
            .attr("href", "/x?a=1&b=\"2\"")
            .into();
        assert_eq!(el.to_html(), "<a href=\"/x?a=1&amp;b=&quot;2&quot;\"></a>");
    }

    #[test]
    fn test_fragment_has_no_wrapper() {
        let el = Element::Fragment(vec![Element::text("a"), Element::text("b")]);
        assert_eq!(el.to_html(), "ab");
        assert_eq!(Element::empty().to_html(), "");
    }

    #[test]
    fn test_nested_tags() {
        let inner: Element = Tag::new("strong").children(vec![Element::text("world")]).into();
        let outer: Element = Tag::new("em")
            .children(vec![Element::text("hello "), inner])
            .into();
        assert_eq!(outer.to_html(), "<em>hello <strong>world</strong></em>");
    }
}
