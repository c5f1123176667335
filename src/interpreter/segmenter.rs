//! # State Segmenter
//!
//! Splits a solution dump into ordered state blocks.
//!
//! Headers look like `------State 3-------` or, for the fixpoint state of a
//! lasso trace, `------State 3 (loop)-------`. The loop marker is recorded
//! but never affects which block counts as "last": the final block in
//! discovery order is authoritative for aggregate and eligibility queries.

use std::sync::OnceLock;

use regex::Regex;

/// One discovered state: a contiguous slice of the solution text between two
/// headers (or the end of the text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateBlock<'a> {
    /// 0-based discovery order.
    pub index: usize,
    /// Whether the header carried the `(loop)` fixpoint marker.
    pub is_loop: bool,
    /// Everything between this header and the next.
    pub body: &'a str,
}

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"------State \d+( \(loop\))?-------").expect("state header pattern")
    })
}

/// Split a solution dump into its state blocks.
///
/// Returns an empty vector when no header is present; callers treat that as
/// "no solution data", not as a failure. Every header is located, not just
/// the first, because relation names repeat verbatim across states and
/// matching against the wrong block silently corrupts output.
pub fn segment(solution: &str) -> Vec<StateBlock<'_>> {
    let headers: Vec<_> = header_pattern().find_iter(solution).collect();

    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let body_start = header.end();
            let body_end = headers
                .get(index + 1)
                .map(|next| next.start())
                .unwrap_or(solution.len());
            StateBlock {
                index,
                is_loop: header.as_str().contains("(loop)"),
                body: &solution[body_start..body_end],
            }
        })
        .collect()
}

/// The last state block, if any. Authoritative for eligibility queries.
pub fn last_state(solution: &str) -> Option<StateBlock<'_>> {
    segment(solution).into_iter().last()
}
