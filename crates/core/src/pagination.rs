//! Pagination math for the note listing.
//!
//! All functions are total over their declared domain: pages below 1 are
//! clamped, a page past the end simply produces an offset past the end (the
//! repository then returns an empty page, which is the defined behavior, not
//! an error).

/// Number of notes rendered per listing page. Fixed, not caller-configurable.
pub const PAGE_SIZE: i64 = 4;

/// Offset and page count for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub total_pages: i64,
}

/// Row offset for a 1-based page number. Pages below 1 clamp to 1, so the
/// offset is never negative.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1) * page_size
}

/// Ceiling division of `total_count` by `page_size`; `0` when there are no
/// rows at all.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    (total_count + page_size - 1) / page_size
}

/// Map `(page, page_size, total_count)` to the offset to fetch at and the
/// total page count.
pub fn compute_pagination(page: i64, page_size: i64, total_count: i64) -> Pagination {
    Pagination {
        offset: page_offset(page, page_size),
        total_pages: total_pages(total_count, page_size),
    }
}

/// Parse the `page` query parameter leniently.
///
/// Missing, non-numeric, and non-positive values all clamp to page 1 rather
/// than rejecting the request.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .max(1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
