//! The range nesting resolver.
//!
//! Turns a flat text payload plus a set of possibly overlapping annotation
//! ranges into an ordered list of content nodes: plain text fragments
//! interleaved with typed nodes whose children may nest. The pass is total;
//! malformed input degrades to plain text instead of failing, because the
//! output feeds straight into a render path that must never break.

use crate::content::{Content, Range, char_slice, char_slice_from};
use crate::mapper;
use crate::node::{ContentNode, FormattedNode};

mod nesting;
mod sorting;

use nesting::RangeNode;

/// Resolve any accepted content shape.
///
/// Bare strings come back as a one-element list, already-resolved arrays pass
/// through unchanged, and structured blocks go through the full
/// sort / nest / emit pipeline.
pub fn resolve(content: &Content) -> Vec<ContentNode> {
    match content {
        Content::Text(text) => vec![ContentNode::text(text.clone())],
        Content::Nodes(nodes) => nodes.clone(),
        Content::Block(block) => resolve_block(&block.text, &block.ranges),
    }
}

/// Resolve a text payload against its annotation ranges.
pub fn resolve_block(text: &str, ranges: &[Range]) -> Vec<ContentNode> {
    if ranges.is_empty() {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![ContentNode::text(text)];
    }

    log::debug!(
        "Resolving {} ranges over {} chars of text",
        ranges.len(),
        text.chars().count()
    );

    let sorted = sorting::sort_ranges(ranges);
    let forest = nesting::nest_ranges(sorted);
    emit(text, &forest, 0)
}

/// Walk the forest in order, consuming `text` left to right.
///
/// Offsets in the forest are absolute; `base` rebases them when emitting the
/// children of a range against that range's own span.
fn emit(text: &str, forest: &[RangeNode], base: usize) -> Vec<ContentNode> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for node in forest {
        let start = node.range.start().saturating_sub(base);
        let end = node.range.end().saturating_sub(base);

        // Plain text between the previous range and this one. A partially
        // overlapping sibling starts before the cursor; the slice is then
        // empty and the overlapped text is emitted again inside the node.
        let leading = char_slice(text, cursor, start);
        if !leading.is_empty() {
            out.push(ContentNode::text(leading));
        }

        out.push(emit_node(text, node, start, end));
        cursor = cursor.max(end);
    }

    let trailing = char_slice_from(text, cursor);
    if !trailing.is_empty() {
        out.push(ContentNode::text(trailing));
    }

    out
}

fn emit_node(text: &str, node: &RangeNode, start: usize, end: usize) -> ContentNode {
    let span = char_slice(text, start, end);

    let children = if node.children.is_empty() {
        if span.is_empty() {
            Vec::new()
        } else {
            vec![ContentNode::text(span)]
        }
    } else {
        emit(span, &node.children, node.range.start())
    };

    let (kind, attrs) = mapper::map_fields(&node.range);
    log::trace!("Emitting node type={:?} span={:?}", kind, span);

    ContentNode::Node(FormattedNode {
        kind,
        text: if span.is_empty() {
            None
        } else {
            Some(span.to_string())
        },
        children,
        attrs,
    })
}
