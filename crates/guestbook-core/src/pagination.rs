//! Page window computation for message listings.
//!
//! Translates a requested page number into a storage `(skip, limit)` window,
//! clamping out-of-range requests to the nearest valid page instead of
//! erroring. This is the single place where page math happens; both the HTTP
//! handlers and the stores rely on its invariants.

/// The storage window for one page of messages.
///
/// Invariants: `1 <= current_page <= last_page` and `limit >= 1`. An empty
/// collection collapses to the canonical `current_page == last_page == 1`
/// window with `skip == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// The page actually served, after clamping.
    pub current_page: u64,
    /// Number of records to skip before the window starts.
    pub skip: u64,
    /// Maximum number of records in the window.
    pub limit: u64,
    /// Highest valid page number for the collection.
    pub last_page: u64,
}

impl PageWindow {
    /// Compute the window for `requested_page` over a collection of
    /// `total_rows` records, `page_size` records per page.
    ///
    /// Negative or zero page numbers normalize to page 1. A request past the
    /// end clamps to the last page. `page_size` must be positive; that is a
    /// configuration invariant, not a per-call check.
    pub fn compute(requested_page: i64, total_rows: u64, page_size: u64) -> Self {
        let page = requested_page.max(1) as u64;
        let last_page = total_rows.div_ceil(page_size);

        let mut current_page = page;
        let mut skip = page_size.saturating_mul(page - 1);
        if skip >= total_rows {
            // Past the end: serve the last page. The floor at zero covers
            // collections smaller than one page.
            skip = total_rows.saturating_sub(page_size);
            current_page = last_page;
        }

        if last_page <= 1 {
            return Self {
                current_page: 1,
                skip: 0,
                limit: page_size,
                last_page: 1,
            };
        }

        Self {
            current_page,
            skip,
            limit: page_size,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_canonicalizes() {
        let window = PageWindow::compute(1, 0, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 1,
                skip: 0,
                limit: 10,
                last_page: 1,
            }
        );
    }

    #[test]
    fn first_page_of_three() {
        let window = PageWindow::compute(1, 25, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 1,
                skip: 0,
                limit: 10,
                last_page: 3,
            }
        );
    }

    #[test]
    fn middle_page() {
        let window = PageWindow::compute(2, 25, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 2,
                skip: 10,
                limit: 10,
                last_page: 3,
            }
        );
    }

    #[test]
    fn request_past_end_clamps_to_last_page() {
        let window = PageWindow::compute(5, 25, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 3,
                skip: 15,
                limit: 10,
                last_page: 3,
            }
        );
    }

    #[test]
    fn collection_smaller_than_one_page_floors_skip_at_zero() {
        let window = PageWindow::compute(3, 4, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 1,
                skip: 0,
                limit: 10,
                last_page: 1,
            }
        );
    }

    #[test]
    fn negative_and_zero_pages_normalize_to_one() {
        for requested in [-5, -1, 0] {
            let window = PageWindow::compute(requested, 25, 10);
            assert_eq!(window.current_page, 1);
            assert_eq!(window.skip, 0);
        }
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let window = PageWindow::compute(3, 30, 10);
        assert_eq!(
            window,
            PageWindow {
                current_page: 3,
                skip: 20,
                limit: 10,
                last_page: 3,
            }
        );
    }

    #[test]
    fn current_page_stays_within_bounds() {
        for total_rows in 0..50 {
            for page_size in 1..8 {
                for requested in [-3, 0, 1, 2, 5, 100] {
                    let window = PageWindow::compute(requested, total_rows, page_size);
                    assert!(window.current_page >= 1);
                    assert!(window.current_page <= window.last_page);
                    assert!(window.last_page >= 1);
                    assert_eq!(window.limit, page_size);
                    if total_rows > 0 {
                        assert!(window.skip < total_rows);
                    } else {
                        assert_eq!(window.skip, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn huge_requested_page_does_not_overflow() {
        let window = PageWindow::compute(i64::MAX, 25, 10);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.skip, 15);
    }
}
