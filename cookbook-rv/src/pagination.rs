//! Pagination over the document's pages
//!
//! The viewer holds one index into an ordered page sequence. It is clamped
//! on every move, so navigation past either end is a no-op.

/// Cursor into a sequence of `page_count` pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (0-indexed), always `< page_count` when pages exist
    index: usize,
    page_count: usize,
}

impl Pagination {
    /// Start at `requested`, clamped into range
    pub fn new(page_count: usize, requested: usize) -> Self {
        Self {
            index: clamp_index(requested, page_count),
            page_count,
        }
    }

    /// Current index; `None` when there are no pages
    pub fn index(&self) -> Option<usize> {
        (self.page_count > 0).then_some(self.index)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Move to `requested`, clamped; returns the new index
    pub fn go_to(&mut self, requested: usize) -> usize {
        self.index = clamp_index(requested, self.page_count);
        self.index
    }

    /// One page back; stays put at the first page
    pub fn prev(&mut self) -> usize {
        self.go_to(self.index.saturating_sub(1))
    }

    /// One page forward; stays put at the last page
    pub fn next(&mut self) -> usize {
        self.go_to(self.index.saturating_add(1))
    }

    /// The previous control is disabled on the first page and when empty
    pub fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    /// The next control is disabled on the last page and when empty
    pub fn next_disabled(&self) -> bool {
        self.index + 1 >= self.page_count
    }
}

/// Clamp `requested` into `[0, page_count - 1]`, or 0 when empty
///
/// # Examples
/// ```
/// use cookbook_rv::pagination::clamp_index;
///
/// assert_eq!(clamp_index(2, 5), 2);
/// assert_eq!(clamp_index(98, 5), 4);  // Clamped to last page
/// assert_eq!(clamp_index(3, 0), 0);
/// ```
pub fn clamp_index(requested: usize, page_count: usize) -> usize {
    requested.min(page_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normal() {
        let p = Pagination::new(5, 2);
        assert_eq!(p.index(), Some(2));
        assert!(!p.prev_disabled());
        assert!(!p.next_disabled());
    }

    #[test]
    fn test_pagination_out_of_bounds_high() {
        let p = Pagination::new(5, 99);
        assert_eq!(p.index(), Some(4)); // Clamped to last page
        assert!(p.next_disabled());
    }

    #[test]
    fn test_prev_at_first_page_is_noop() {
        let mut p = Pagination::new(3, 0);
        assert!(p.prev_disabled());
        assert_eq!(p.prev(), 0);
        assert_eq!(p.index(), Some(0));
    }

    #[test]
    fn test_next_at_last_page_is_noop() {
        let mut p = Pagination::new(3, 2);
        assert_eq!(p.next(), 2);
        assert_eq!(p.index(), Some(2));
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut p = Pagination::new(3, 0);
        assert_eq!(p.next(), 1);
        assert_eq!(p.next(), 2);
        assert_eq!(p.next(), 2);
        assert_eq!(p.prev(), 1);
        assert_eq!(p.prev(), 0);
        assert_eq!(p.prev(), 0);
    }

    #[test]
    fn test_pagination_empty() {
        let mut p = Pagination::new(0, 7);
        assert_eq!(p.index(), None);
        assert!(p.is_empty());
        assert!(p.prev_disabled());
        assert!(p.next_disabled());
        p.next();
        assert_eq!(p.index(), None);
    }

    #[test]
    fn test_single_page_disables_both() {
        let p = Pagination::new(1, 0);
        assert!(p.prev_disabled());
        assert!(p.next_disabled());
    }

    #[test]
    fn test_next_from_huge_index_does_not_overflow() {
        let mut p = Pagination::new(2, usize::MAX);
        assert_eq!(p.next(), 1);
    }
}
