//! Rendering for entity reference nodes: sites, posts, comments, people,
//! plugins, themes, and backups.
//!
//! Every renderer degrades to plain (unlinked) children when the deployment
//! context disables its link family or the node is missing a field its route
//! needs. A half-broken reference from the API renders as text, never as a
//! broken link.

use serde_json::Value;

use crate::element::Element;
use crate::node::FormattedNode;
use crate::renderer::links::external_anchor;
use crate::renderer::{RenderArgs, internal_anchor};

/// A node attribute as route text: strings verbatim, numbers formatted.
fn attr_display(node: &FormattedNode, key: &str) -> Option<String> {
    match node.attr(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// The site slug for route building: the node's own, else the render meta's.
fn site_slug(args: &RenderArgs) -> Option<String> {
    attr_display(args.node, "siteSlug").or_else(|| args.meta.site_slug.clone())
}

/// The site id for route building: the node's own, else the render meta's.
fn site_id(args: &RenderArgs) -> Option<u64> {
    args.node.attr_id("siteId").or(args.meta.site_id)
}

fn plain(args: RenderArgs, reason: &str) -> Element {
    log::debug!(
        "Rendering {:?} node plain: {}",
        args.node.kind.as_deref().unwrap_or("?"),
        reason
    );
    Element::Fragment(args.children)
}

fn linked(mut args: RenderArgs, href: String) -> Element {
    let children = std::mem::take(&mut args.children);
    internal_anchor(href, &args, children)
}

pub(crate) fn render_site(args: RenderArgs) -> Element {
    if !args.config.capabilities.site_links {
        return plain(args, "site links disabled");
    }
    let Some(site_id) = site_id(&args) else {
        return plain(args, "missing siteId");
    };
    linked(args, format!("/sites/{site_id}"))
}

pub(crate) fn render_post(args: RenderArgs) -> Element {
    if !args.config.capabilities.post_links {
        return plain(args, "post links disabled");
    }
    let (Some(site_id), Some(post_id)) = (site_id(&args), args.node.attr_id("postId")) else {
        return plain(args, "missing siteId or postId");
    };
    linked(args, format!("/posts/{site_id}/{post_id}"))
}

pub(crate) fn render_comment(args: RenderArgs) -> Element {
    if !args.config.capabilities.post_links {
        return plain(args, "post links disabled");
    }
    let (Some(site_id), Some(post_id), Some(comment_id)) = (
        site_id(&args),
        args.node.attr_id("postId"),
        args.node.attr_id("commentId"),
    ) else {
        return plain(args, "missing siteId, postId, or commentId");
    };
    linked(
        args,
        format!("/posts/{site_id}/{post_id}#comment-{comment_id}"),
    )
}

pub(crate) fn render_person(args: RenderArgs) -> Element {
    if !args.config.capabilities.person_links {
        return plain(args, "person links disabled");
    }
    let (Some(name), Some(slug)) = (attr_display(args.node, "name"), site_slug(&args)) else {
        return plain(args, "missing name or site slug");
    };
    linked(args, format!("/people/{slug}/{name}"))
}

pub(crate) fn render_plugin(args: RenderArgs) -> Element {
    if !args.config.capabilities.plugin_links {
        return plain(args, "plugin links disabled");
    }
    let (Some(plugin), Some(slug)) = (attr_display(args.node, "pluginSlug"), site_slug(&args))
    else {
        return plain(args, "missing pluginSlug or site slug");
    };
    linked(args, format!("/plugins/{plugin}/{slug}"))
}

pub(crate) fn render_theme(args: RenderArgs) -> Element {
    // Third-party themes carry an external URI; those link regardless of the
    // theme capability.
    if let Some(uri) = args.node.attr_str("themeUri") {
        return external_anchor(uri, args.children);
    }
    if !args.config.capabilities.theme_links {
        return plain(args, "theme links disabled");
    }
    let (Some(theme), Some(slug)) = (attr_display(args.node, "themeSlug"), site_slug(&args))
    else {
        return plain(args, "missing themeSlug or site slug");
    };
    linked(args, format!("/themes/{theme}/{slug}"))
}

pub(crate) fn render_backup(args: RenderArgs) -> Element {
    if !args.config.capabilities.backup_links {
        return plain(args, "backup links disabled");
    }
    let (Some(rewind), Some(slug)) = (attr_display(args.node, "rewindId"), site_slug(&args))
    else {
        return plain(args, "missing rewindId or site slug");
    };
    linked(args, format!("/backups/{slug}?rewind={rewind}"))
}
