//! Pagination and search helpers shared by all list endpoints.

/// Default page size for list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Maximum page size for list endpoints.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Default number of results per entity for global search.
pub const DEFAULT_SEARCH_LIMIT: i64 = 5;

/// Global search queries shorter than this (after trimming) return nothing.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Build a case-insensitive `LIKE` pattern for substring search.
///
/// The term is trimmed and ASCII lower-cased, and `%`, `_` and `\` are
/// escaped so they match literally. Queries must pair it with
/// `LOWER(column) LIKE ? ESCAPE '\'`. SQLite's `LOWER` only folds ASCII, so
/// non-ASCII letters match case-sensitively on both sides. Blank input
/// yields `None`.
pub fn like_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.to_ascii_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

/// Whether a global search query is long enough to run.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SEARCH_QUERY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_negative() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(20)), 20);
    }

    // -- like_pattern --------------------------------------------------------

    #[test]
    fn like_pattern_wraps_and_lowercases() {
        assert_eq!(like_pattern("  Web "), Some("%web%".to_string()));
    }

    #[test]
    fn like_pattern_leaves_non_ascii_case_alone() {
        assert_eq!(like_pattern("ÉCOLE"), Some("%École%".to_string()));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), Some("%50\\%\\_off%".to_string()));
        assert_eq!(like_pattern("a\\b"), Some("%a\\\\b%".to_string()));
    }

    #[test]
    fn like_pattern_blank_is_none() {
        assert_eq!(like_pattern("   "), None);
    }

    #[test]
    fn searchable_requires_two_chars() {
        assert!(!is_searchable(" a "));
        assert!(is_searchable("ab"));
    }
}
