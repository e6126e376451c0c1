//! Pagination state and the arithmetic that derives it.
//!
//! All helpers are total functions over their inputs: negative or zero values are clamped,
//! multiplication saturates, and nothing here can fail.
//!
//! # Invariants after a compute
//! - `page_count == ceil(total_rows / limit)`, and `0` exactly when `total_rows == 0`
//! - `1 <= page <= max(page_count, 1)`
//! - `offset == (page - 1) * limit`
//! - `limit >= 1`, `range >= 1`

use serde::Serialize;

/// Snapshot of the last compute. All-zero (`page == 0`) until the first compute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page: u64,
    pub page_count: u64,
    pub total_rows: u64,
    pub limit: u64,
    pub offset: u64,
    pub range: u64,
    /// `#anchor` appended to every link, if any.
    pub hash_fragment: Option<String>,
    /// Pre-encoded carry-through parameters, `""` or `&k=v&...`.
    pub query_string: String,
}

impl PaginationState {
    pub fn is_computed(&self) -> bool {
        self.page > 0
    }

    /// True when every row fits on one page and no link list is needed.
    pub fn is_single_page(&self) -> bool {
        self.total_rows <= self.limit
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ────────────────────────────────────────────────────────────────────────────

/// Clamps anything below 1 up to 1.
pub fn to_positive(n: i64) -> u64 {
    if n >= 1 {
        n as u64
    } else {
        1
    }
}

/// Negative row counts are treated as an empty result set.
pub fn clamp_total_rows(n: i64) -> u64 {
    n.max(0) as u64
}

pub fn page_count(total_rows: u64, limit: u64) -> u64 {
    total_rows.div_ceil(limit.max(1))
}

/// Resolves the requested page against `page_count`.
///
/// Absent → last page. Above the last page → last page. Otherwise clamped to at least 1.
pub fn resolve_page(requested: Option<i64>, page_count: u64) -> u64 {
    let last = i64::try_from(page_count).unwrap_or(i64::MAX);
    let page = match requested {
        None => page_count,
        Some(p) if p <= last => to_positive(p),
        Some(_) => page_count,
    };
    page.max(1)
}

/// 0-based offset of the first row on `page`; 0 for page 0.
pub fn offset_for(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_positive / clamp_total_rows ──────────────────────────────────────

    #[test]
    fn test_to_positive_clamps_zero_and_negatives() {
        assert_eq!(to_positive(0), 1);
        assert_eq!(to_positive(-7), 1);
        assert_eq!(to_positive(i64::MIN), 1);
        assert_eq!(to_positive(1), 1);
        assert_eq!(to_positive(42), 42);
    }

    #[test]
    fn test_negative_total_rows_is_empty() {
        assert_eq!(clamp_total_rows(-3), 0);
        assert_eq!(clamp_total_rows(0), 0);
        assert_eq!(clamp_total_rows(95), 95);
    }

    // ── page_count ──────────────────────────────────────────────────────────

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(95, 10), 10);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(101, 10), 11);
        assert_eq!(page_count(5, 10), 1);
        assert_eq!(page_count(1, 1), 1);
    }

    #[test]
    fn test_page_count_zero_iff_no_rows() {
        for limit in 1..=25u64 {
            assert_eq!(page_count(0, limit), 0);
            for total in 1..=200u64 {
                let count = page_count(total, limit);
                assert!(count > 0);
                assert_eq!(count, (total + limit - 1) / limit);
            }
        }
    }

    // ── resolve_page ────────────────────────────────────────────────────────

    #[test]
    fn test_absent_page_resolves_to_last() {
        assert_eq!(resolve_page(None, 10), 10);
    }

    #[test]
    fn test_page_beyond_last_resolves_to_last() {
        assert_eq!(resolve_page(Some(50), 10), 10);
        assert_eq!(resolve_page(Some(i64::MAX), 10), 10);
    }

    #[test]
    fn test_zero_or_negative_page_resolves_to_first() {
        assert_eq!(resolve_page(Some(0), 10), 1);
        assert_eq!(resolve_page(Some(-4), 10), 1);
    }

    #[test]
    fn test_resolved_page_within_bounds() {
        for count in 0..=30u64 {
            for requested in -5..=40i64 {
                let page = resolve_page(Some(requested), count);
                assert!(page >= 1, "page {page} for request {requested}/{count}");
                assert!(page <= count.max(1), "page {page} for request {requested}/{count}");
            }
            let page = resolve_page(None, count);
            assert!(page >= 1 && page <= count.max(1));
        }
    }

    // ── offset_for ──────────────────────────────────────────────────────────

    #[test]
    fn test_offset_for_first_pages() {
        assert_eq!(offset_for(0, 10), 0);
        assert_eq!(offset_for(1, 10), 0);
        assert_eq!(offset_for(2, 10), 10);
        assert_eq!(offset_for(10, 10), 90);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(offset_for(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_offset_stays_below_total_rows() {
        for limit in 1..=12u64 {
            for total in 1..=150u64 {
                let count = page_count(total, limit);
                for page in 1..=count {
                    assert!(offset_for(page, limit) < total);
                }
            }
        }
    }

    // ── PaginationState ─────────────────────────────────────────────────────

    #[test]
    fn test_default_state_is_not_computed() {
        let state = PaginationState::default();
        assert!(!state.is_computed());
        assert!(state.is_single_page());
    }
}
