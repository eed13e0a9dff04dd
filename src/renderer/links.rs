//! Link rendering.
//!
//! URLs pointing at one of the configured app hosts become relative in-app
//! anchors (or plain children when the deployment context suppresses internal
//! navigation); everything else renders as a new-tab anchor with safe `rel`
//! attributes.

use crate::element::{Element, Tag};
use crate::renderer::RenderArgs;

/// Split an http(s) URL into host and the path-query-fragment remainder.
/// Anything else (mailto, protocol-relative, garbage) is not splittable and
/// renders as external.
fn split_url(url: &str) -> Option<(&str, &str)> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if host_end == 0 {
        return None;
    }
    Some((&rest[..host_end], &rest[host_end..]))
}

/// Build a relative in-app anchor, propagating `data-*` attributes from the
/// node when present and from the render meta otherwise.
pub(crate) fn internal_anchor(href: String, args: &RenderArgs, children: Vec<Element>) -> Element {
    let mut tag = Tag::new("a").attr("href", href);

    let section = args
        .node
        .attr_str("section")
        .or(args.meta.section.as_deref());
    if let Some(section) = section {
        tag = tag.attr("data-section", section);
    }

    let intent = args.node.attr_str("intent").or(args.meta.intent.as_deref());
    if let Some(intent) = intent {
        tag = tag.attr("data-intent", intent);
    }

    tag.children(children).into()
}

pub(crate) fn external_anchor(url: &str, children: Vec<Element>) -> Element {
    Tag::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "external noopener noreferrer")
        .children(children)
        .into()
}

pub(crate) fn render_link(mut args: RenderArgs) -> Element {
    let Some(url) = args.node.attr_str("url") else {
        return Element::Fragment(args.children);
    };

    if let Some((host, rest)) = split_url(url)
        && args.config.is_app_host(host)
    {
        if !args.config.capabilities.internal_links {
            log::debug!("Suppressing internal link to {:?}", url);
            return Element::Fragment(args.children);
        }
        let href = if rest.is_empty() { "/" } else { rest }.to_string();
        let children = std::mem::take(&mut args.children);
        return internal_anchor(href, &args, children);
    }

    external_anchor(url, args.children)
}
