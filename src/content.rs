//! Input model for formatted activity content.
//!
//! The API delivers activity entries in one of three shapes:
//! - a structured block `{ "text": ..., "ranges": [...] }`
//! - a bare string (already plain text)
//! - an array of content nodes (already resolved upstream)
//!
//! All three deserialize into [`Content`]. Ranges carry half-open character
//! offsets into the block text plus arbitrary type-specific metadata, which is
//! kept as a flattened JSON map so unknown fields survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::node::ContentNode;

/// Any accepted content payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Structured text-plus-ranges block.
    Block(FormattedBlock),
    /// Already-resolved node list (idempotent re-entry).
    Nodes(Vec<ContentNode>),
    /// Plain text with no annotations.
    Text(String),
}

/// A text payload with zero or more annotation ranges.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormattedBlock {
    pub text: String,
    #[serde(default)]
    pub ranges: Vec<Range>,
}

/// An annotation over a character span of the block text.
///
/// `indices` are 0-based character offsets, `[start, end)`. A missing or
/// `[0, 0]` pair marks an anchorless range (a zero-width marker with no text
/// span of its own). Everything besides `indices` and `type` is type-specific
/// metadata and is preserved verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub indices: [usize; 2],
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Range {
    pub fn new(start: usize, end: usize, kind: Option<&str>) -> Self {
        Self {
            indices: [start, end],
            kind: kind.map(str::to_string),
            extra: Map::new(),
        }
    }

    pub fn start(&self) -> usize {
        self.indices[0]
    }

    pub fn end(&self) -> usize {
        self.indices[1]
    }

    /// Anchorless ranges sort first and never participate in enclosure.
    pub fn is_anchorless(&self) -> bool {
        self.indices == [0, 0]
    }

    /// The `url` metadata field, if present and a string.
    pub fn url(&self) -> Option<&str> {
        self.field("url").and_then(Value::as_str)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Map a character offset to a byte offset, clamped to the end of `text`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// Slice `text` by character offsets. Out-of-range or reversed offsets clamp
/// to an empty slice rather than panicking; content comes from a remote API
/// and must never take the render path down.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset(text, start);
    let to = byte_offset(text, end);
    if from >= to { "" } else { &text[from..to] }
}

/// Slice from a character offset to the end of `text`.
pub(crate) fn char_slice_from(text: &str, start: usize) -> &str {
    &text[byte_offset(text, start)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_block_with_ranges() {
        let value = json!({
            "text": "Site Example updated",
            "ranges": [{ "indices": [5, 12], "type": "site", "id": 987 }]
        });
        let content: Content = serde_json::from_value(value).unwrap();
        match content {
            Content::Block(block) => {
                assert_eq!(block.text, "Site Example updated");
                assert_eq!(block.ranges.len(), 1);
                assert_eq!(block.ranges[0].start(), 5);
                assert_eq!(block.ranges[0].end(), 12);
                assert_eq!(block.ranges[0].kind.as_deref(), Some("site"));
                assert_eq!(block.ranges[0].field("id"), Some(&json!(987)));
            }
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_bare_string() {
        let content: Content = serde_json::from_value(json!("plain")).unwrap();
        assert_eq!(content, Content::Text("plain".to_string()));
    }

    #[test]
    fn test_deserialize_resolved_array() {
        let content: Content = serde_json::from_value(json!(["already ", "split"])).unwrap();
        match content {
            Content::Nodes(nodes) => assert_eq!(nodes.len(), 2),
            other => panic!("expected nodes, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_indices_are_anchorless() {
        let range: Range = serde_json::from_value(json!({ "type": "marker" })).unwrap();
        assert!(range.is_anchorless());
    }

    #[test]
    fn test_char_slice_is_utf8_safe() {
        let text = "héllo wörld";
        assert_eq!(char_slice(text, 0, 5), "héllo");
        assert_eq!(char_slice(text, 6, 11), "wörld");
    }

    #[test]
    fn test_char_slice_clamps_out_of_range() {
        assert_eq!(char_slice("abc", 1, 100), "bc");
        assert_eq!(char_slice("abc", 50, 100), "");
        assert_eq!(char_slice("abc", 2, 1), "");
        assert_eq!(char_slice_from("abc", 99), "");
    }
}
