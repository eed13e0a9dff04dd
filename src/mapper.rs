//! Type-specific field mapping.
//!
//! Each range type maps its raw API metadata (snake_case) onto the semantic
//! fields of the emitted node (camelCase, per the consumer contract). The
//! dispatch is a flat lookup table with three fallbacks:
//!
//! - a range carrying a `url` is link-shaped and always takes the link
//!   mapping, whatever its declared type;
//! - a typed range with no mapper emits just its type;
//! - an untyped, URL-less range passes its raw fields through unchanged
//!   (legacy payloads predating range types).

use serde_json::{Map, Value};

use crate::content::Range;

type FieldMapper = fn(&Range) -> Map<String, Value>;

static FIELD_MAPPERS: &[(&str, FieldMapper)] = &[
    ("site", map_site),
    ("post", map_post),
    ("comment", map_comment),
    ("person", map_person),
    ("plugin", map_plugin),
    ("theme", map_theme),
    ("backup", map_backup),
    ("b", map_bare),
    ("strong", map_bare),
    ("i", map_bare),
    ("em", map_bare),
    ("pre", map_bare),
    ("filepath", map_bare),
];

/// Derive the node type and semantic fields for a range.
pub(crate) fn map_fields(range: &Range) -> (Option<String>, Map<String, Value>) {
    if range.url().is_some() {
        return (Some("link".to_string()), map_link(range));
    }

    if let Some(kind) = range.kind.as_deref() {
        for (name, mapper) in FIELD_MAPPERS {
            if *name == kind {
                return (Some(kind.to_string()), mapper(range));
            }
        }
        log::trace!("No field mapper for range type {:?}", kind);
        return (Some(kind.to_string()), Map::new());
    }

    (None, range.extra.clone())
}

/// Copy `from` out of the range under the name `to`, if present.
fn copy(out: &mut Map<String, Value>, range: &Range, from: &str, to: &str) {
    if let Some(value) = range.field(from) {
        out.insert(to.to_string(), value.clone());
    }
}

fn map_link(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "url", "url");
    copy(&mut out, range, "section", "section");
    copy(&mut out, range, "intent", "intent");
    out
}

fn map_site(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "id", "siteId");
    copy(&mut out, range, "section", "section");
    out
}

fn map_post(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "site_id", "siteId");
    copy(&mut out, range, "id", "postId");
    out
}

fn map_comment(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "site_id", "siteId");
    copy(&mut out, range, "post_id", "postId");
    copy(&mut out, range, "id", "commentId");
    out
}

fn map_person(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "site_id", "siteId");
    copy(&mut out, range, "site_slug", "siteSlug");
    copy(&mut out, range, "name", "name");
    out
}

fn map_plugin(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "slug", "pluginSlug");
    copy(&mut out, range, "site_slug", "siteSlug");
    out
}

fn map_theme(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "slug", "themeSlug");
    copy(&mut out, range, "uri", "themeUri");
    copy(&mut out, range, "site_slug", "siteSlug");
    out
}

fn map_backup(range: &Range) -> Map<String, Value> {
    let mut out = Map::new();
    copy(&mut out, range, "site_id", "siteId");
    copy(&mut out, range, "site_slug", "siteSlug");
    copy(&mut out, range, "rewind_id", "rewindId");
    out
}

/// Formatting wrappers carry no metadata.
fn map_bare(_range: &Range) -> Map<String, Value> {
    Map::new()
}
