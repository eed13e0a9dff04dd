//! Building the range forest.
//!
//! Sorted ranges fold into a forest: each incoming range is adopted by the
//! most recently added range that encloses it (scanning the accumulated
//! top-level list backward), recursing into that range's children with the
//! same backward scan. A range enclosed by nothing becomes a new top-level
//! entry. Two ranges that only partially overlap therefore end up as
//! siblings; that matches the upstream behavior and is deliberately not
//! "fixed" here.

use crate::content::Range;

/// A range plus the ranges nested inside it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeNode {
    pub range: Range,
    pub children: Vec<RangeNode>,
}

impl RangeNode {
    fn leaf(range: Range) -> Self {
        Self {
            range,
            children: Vec::new(),
        }
    }
}

/// `outer` encloses `inner` when its span fully contains it. Anchorless
/// ranges neither enclose nor get enclosed.
pub(crate) fn encloses(outer: &Range, inner: &Range) -> bool {
    if outer.is_anchorless() || inner.is_anchorless() {
        return false;
    }
    outer.start() <= inner.start() && outer.end() >= inner.end()
}

pub(crate) fn nest_ranges(sorted: Vec<Range>) -> Vec<RangeNode> {
    let mut forest: Vec<RangeNode> = Vec::new();
    for range in sorted {
        log::trace!(
            "Nesting range [{}, {}] type={:?}",
            range.start(),
            range.end(),
            range.kind
        );
        insert(&mut forest, RangeNode::leaf(range));
    }
    forest
}

/// Insert into the first enclosing sibling, scanning backward so the most
/// recent candidate ancestor wins.
fn insert(siblings: &mut Vec<RangeNode>, node: RangeNode) {
    for i in (0..siblings.len()).rev() {
        if encloses(&siblings[i].range, &node.range) {
            insert(&mut siblings[i].children, node);
            return;
        }
    }
    siblings.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::sorting::sort_ranges;

    fn range(start: usize, end: usize, kind: &str) -> Range {
        Range::new(start, end, Some(kind))
    }

    fn nest(ranges: &[Range]) -> Vec<RangeNode> {
        nest_ranges(sort_ranges(ranges))
    }

    #[test]
    fn test_contained_range_becomes_child() {
        let forest = nest(&[range(0, 11, "link"), range(6, 11, "b")]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].range.kind.as_deref(), Some("link"));
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].range.kind.as_deref(), Some("b"));
    }

    #[test]
    fn test_deep_nesting() {
        let forest = nest(&[range(0, 20, "a"), range(2, 18, "b"), range(4, 10, "c")]);
        assert_eq!(forest.len(), 1);
        let a = &forest[0];
        assert_eq!(a.children.len(), 1);
        let b = &a.children[0];
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].range.kind.as_deref(), Some("c"));
    }

    #[test]
    fn test_disjoint_ranges_stay_top_level() {
        let forest = nest(&[range(0, 4, "a"), range(6, 9, "b")]);
        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_most_recent_enclosing_sibling_wins() {
        // Both outer ranges could enclose [11, 14]; the later one gets it.
        let forest = nest(&[range(0, 20, "first"), range(10, 15, "second"), range(11, 14, "inner")]);
        assert_eq!(forest.len(), 1);
        let first = &forest[0];
        assert_eq!(first.children.len(), 1);
        let second = &first.children[0];
        assert_eq!(second.range.kind.as_deref(), Some("second"));
        assert_eq!(second.children.len(), 1);
        assert_eq!(second.children[0].range.kind.as_deref(), Some("inner"));
    }

    #[test]
    fn test_partial_overlap_becomes_sibling() {
        let forest = nest(&[range(0, 6, "a"), range(4, 10, "b")]);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_anchorless_never_encloses() {
        // [0, 5] contains [0, 0] numerically, but the sentinel opts out.
        assert!(!encloses(&range(0, 5, "a"), &Range::new(0, 0, Some("marker"))));
        let forest = nest(&[range(0, 5, "a"), Range::new(0, 0, Some("marker"))]);
        assert_eq!(forest.len(), 2);
        assert!(forest[0].range.is_anchorless());
    }
}
