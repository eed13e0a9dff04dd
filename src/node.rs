//! Output model of the resolver: plain text interleaved with typed nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry in resolved content: either a plain text fragment or a typed
/// node that may carry nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    Node(FormattedNode),
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text(text.into())
    }
}

/// A typed content node.
///
/// `attrs` holds the semantic fields produced by the field-mapping pass
/// (`siteId`, `postId`, `url`, ...) under the camelCase keys the downstream
/// consumer contract uses. A node with no `type` and no `children` degenerates
/// to its `text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormattedNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl FormattedNode {
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(Value::as_str)
    }

    /// Numeric identifiers arrive as JSON numbers but occasionally as
    /// stringified numbers; accept both.
    pub fn attr_id(&self, key: &str) -> Option<u64> {
        match self.attr(key) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_string_serializes_bare() {
        let node = ContentNode::text("hello");
        assert_eq!(serde_json::to_value(&node).unwrap(), json!("hello"));
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let node = FormattedNode {
            kind: Some("b".to_string()),
            text: Some("bold".to_string()),
            children: vec![ContentNode::text("bold")],
            attrs: Map::new(),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({ "type": "b", "text": "bold", "children": ["bold"] })
        );
    }

    #[test]
    fn test_attrs_flatten_into_node() {
        let mut attrs = Map::new();
        attrs.insert("siteId".to_string(), json!(987));
        let node = FormattedNode {
            kind: Some("site".to_string()),
            attrs,
            ..Default::default()
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({ "type": "site", "siteId": 987 }));

        let back: FormattedNode = serde_json::from_value(value).unwrap();
        assert_eq!(back.attr_id("siteId"), Some(987));
    }

    #[test]
    fn test_attr_id_accepts_stringified_numbers() {
        let node: FormattedNode =
            serde_json::from_value(json!({ "type": "post", "postId": "42" })).unwrap();
        assert_eq!(node.attr_id("postId"), Some(42));
        assert_eq!(node.attr_id("siteId"), None);
    }
}
