use std::collections::HashSet;
use thiserror::Error;

/// Malformed tokens are hard errors; pages that are merely outside the
/// document are not (they get dropped during expansion instead).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageRangeError {
    /// Token is neither a page number nor a `start-end` pair
    #[error("invalid page range '{0}'")]
    Malformed(String),
    /// Range token whose start page is greater than its end page
    #[error("invalid page range '{0}': start is greater than end")]
    Backwards(String),
}

/// One selection token: a single page, or an inclusive `start-end` range.
///
/// Bounds stay `i64` because zero and negative numbers are well-formed
/// syntax; they only fall away when the span is resolved against the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    start: i64,
    end: i64,
}

impl PageSpan {
    /// Parse a selection token like "7" or "3-5"
    pub fn parse(token: &str) -> Result<Self, PageRangeError> {
        if token.contains('-') {
            let fields: Vec<&str> = token.split('-').collect();
            let (start, end) = match fields.as_slice() {
                [start, end] => (
                    parse_page_number(start, token)?,
                    parse_page_number(end, token)?,
                ),
                _ => return Err(PageRangeError::Malformed(token.to_string())),
            };

            if start > end {
                return Err(PageRangeError::Backwards(token.to_string()));
            }

            Ok(PageSpan { start, end })
        } else {
            let page = parse_page_number(token, token)?;
            Ok(PageSpan {
                start: page,
                end: page,
            })
        }
    }

    /// Pages of this span that exist in a document of `total_pages`,
    /// ascending. Clamping here keeps a span like "1-999999999" from
    /// materializing anything beyond the document.
    fn pages(self, total_pages: u32) -> impl Iterator<Item = u32> {
        let lo = self.start.max(1);
        let hi = self.end.min(i64::from(total_pages));
        (lo..=hi).map(|page| page as u32)
    }
}

fn parse_page_number(field: &str, token: &str) -> Result<i64, PageRangeError> {
    field
        .trim()
        .parse()
        .map_err(|_| PageRangeError::Malformed(token.to_string()))
}

/// Parse a comma-separated selection like "1,3-5,10" into spans.
///
/// Tokens are trimmed; empty tokens (stray or trailing commas) are
/// skipped. A malformed token anywhere fails the whole selection.
pub fn parse_page_ranges(s: &str) -> Result<Vec<PageSpan>, PageRangeError> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(PageSpan::parse)
        .collect()
}

/// Expand a selection string into the pages it names, in the order it
/// first names them.
///
/// Pages outside `1..=total_pages` are dropped silently, as are repeats
/// of a page already selected, even across tokens: "3-5,4" yields
/// [3, 4, 5].
pub fn expand_page_ranges(s: &str, total_pages: u32) -> Result<Vec<u32>, PageRangeError> {
    let spans = parse_page_ranges(s)?;

    let mut seen = HashSet::new();
    let mut pages = Vec::new();
    for span in spans {
        for page in span.pages(total_pages) {
            if seen.insert(page) {
                pages.push(page);
            }
        }
    }
    Ok(pages)
}
