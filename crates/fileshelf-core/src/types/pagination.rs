//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Fixed number of records per page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-indexed window of at most [`PAGE_SIZE`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request for `page` with the fixed page size.
    pub fn new(page: u64) -> Self {
        Self {
            page,
            page_size: PAGE_SIZE,
        }
    }

    /// Build a page request from a raw `page` query value.
    ///
    /// Parsing is permissive: an absent, empty, non-numeric or negative
    /// value selects page 0 instead of failing. Leading whitespace and a
    /// sign are accepted and only the leading run of digits counts, so
    /// `"3abc"` and `"3.7"` both select page 3.
    pub fn from_query(raw: Option<&str>) -> Self {
        Self::new(raw.map(parse_page).unwrap_or(0))
    }

    /// Number of records to skip. Saturates instead of overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0)
    }
}

fn parse_page(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(None, |acc: Option<u64>, d| {
            Some(
                acc.unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(u64::from(d - b'0')),
            )
        });

    match digits {
        Some(value) if !negative => value,
        _ => 0,
    }
}
