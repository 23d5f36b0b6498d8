//! Client-side page stepping.
//!
//! Pure translation of a navigation intent into the next page number. The
//! lower bound is enforced here; the upper bound is the server's job, which
//! clamps requests past the last page.

/// A user action requesting the previous, next, or first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Reset,
    Previous,
    Next,
}

/// Compute the target page for an intent, never going below page 1.
pub fn next_page(previous_page: u64, intent: NavigationIntent) -> u64 {
    match intent {
        NavigationIntent::Next => previous_page.saturating_add(1),
        NavigationIntent::Previous if previous_page > 1 => previous_page - 1,
        _ => 1,
    }
}
