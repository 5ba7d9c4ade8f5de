//! Text selection representation.

/// A selection as a byte range into an element value.
///
/// Always normalized so `start <= end`. Offsets produced by
/// [`InputElement`](crate::InputElement) sit on character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range from an anchor and a caret, in any order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The selected text, or `None` if the range does not fit `value`.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn selection_range_is_empty() {
        assert!(SelectionRange::new(3, 3).is_empty());
        assert!(!SelectionRange::new(3, 5).is_empty());
    }

    #[test]
    fn selection_range_slice() {
        assert_eq!(SelectionRange::new(0, 2).slice("$12.00"), Some("$1"));
        assert_eq!(SelectionRange::new(0, 2).slice("€1"), None);
        assert_eq!(SelectionRange::new(0, 9).slice("$1"), None);
    }
}
