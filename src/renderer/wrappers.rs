//! Structural formatting wrappers: no conditional logic, just tags.

use crate::element::{Element, Tag};
use crate::renderer::RenderArgs;

pub(crate) fn render_strong(args: RenderArgs) -> Element {
    Tag::new("strong").children(args.children).into()
}

pub(crate) fn render_emphasis(args: RenderArgs) -> Element {
    Tag::new("em").children(args.children).into()
}

pub(crate) fn render_pre(args: RenderArgs) -> Element {
    Tag::new("pre").children(args.children).into()
}

pub(crate) fn render_filepath(args: RenderArgs) -> Element {
    Tag::new("code")
        .attr("class", "filepath")
        .children(args.children)
        .into()
}
