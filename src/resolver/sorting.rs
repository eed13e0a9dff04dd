//! Range ordering.
//!
//! Ranges sort by start offset ascending with ties broken by end offset
//! descending, so an outer range starting at the same offset as a shorter one
//! comes first and can adopt it during nesting. Anchorless `[0, 0]` ranges
//! sort before everything else. Callers rely on this exact tie-break policy
//! for deterministic nesting; do not generalize it.

use std::cmp::Ordering;

use crate::content::Range;

pub(crate) fn sort_ranges(ranges: &[Range]) -> Vec<Range> {
    let mut sorted = ranges.to_vec();
    // Stable sort: equal ranges keep their input order.
    sorted.sort_by(compare_ranges);
    sorted
}

pub(crate) fn compare_ranges(a: &Range, b: &Range) -> Ordering {
    match (a.is_anchorless(), b.is_anchorless()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .start()
            .cmp(&b.start())
            .then_with(|| b.end().cmp(&a.end())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> Range {
        Range::new(start, end, None)
    }

    #[test]
    fn test_sorts_by_start_ascending() {
        let sorted = sort_ranges(&[range(7, 9), range(2, 4), range(5, 6)]);
        let starts: Vec<usize> = sorted.iter().map(Range::start).collect();
        assert_eq!(starts, vec![2, 5, 7]);
    }

    #[test]
    fn test_outer_range_sorts_before_inner_at_same_start() {
        let sorted = sort_ranges(&[range(3, 5), range(3, 10)]);
        assert_eq!(sorted[0].end(), 10);
        assert_eq!(sorted[1].end(), 5);
    }

    #[test]
    fn test_anchorless_sorts_first() {
        let sorted = sort_ranges(&[range(0, 8), range(0, 0), range(4, 6)]);
        assert!(sorted[0].is_anchorless());
        assert_eq!(sorted[1].indices, [0, 8]);
    }

    #[test]
    fn test_stable_for_identical_ranges() {
        let mut a = range(1, 3);
        a.kind = Some("first".to_string());
        let mut b = range(1, 3);
        b.kind = Some("second".to_string());
        let sorted = sort_ranges(&[a, b]);
        assert_eq!(sorted[0].kind.as_deref(), Some("first"));
        assert_eq!(sorted[1].kind.as_deref(), Some("second"));
    }
}
