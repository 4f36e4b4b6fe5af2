//! Search pattern construction.
//!
//! The repository binds the pattern produced here as a query parameter; the
//! term itself never appears in query text. The result cap is part of the
//! fixed query shape, exported here so handlers and tests agree on it.

/// Hard cap on search results, enforced in the query itself.
pub const SEARCH_RESULT_CAP: i64 = 50;

/// Build a `%term%` substring pattern for a LIKE/ILIKE comparison.
///
/// Wildcard-significant characters inside the term (`%`, `_`, and the `\`
/// escape character) are escaped so user input always matches literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_term_in_wildcards() {
        assert_eq!(like_pattern("foo"), "%foo%");
    }

    #[test]
    fn empty_term_becomes_bare_wildcards() {
        // Never reached in practice: the handler redirects on empty terms.
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn escapes_percent_and_underscore() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn escapes_backslash() {
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn preserves_unicode() {
        assert_eq!(like_pattern("carnét"), "%carnét%");
    }
}
