//! Page selection strings such as `"1,3-5"`.

use thiserror::Error;

/// Why a page selection could not be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("invalid page number: '{0}'")]
    NotANumber(String),
    #[error("page 0 is invalid (pages start at 1)")]
    Zero,
    #[error("page {page} exceeds document page count ({page_count})")]
    OutOfRange { page: usize, page_count: usize },
    #[error("page range {start}-{end} is reversed")]
    Reversed { start: usize, end: usize },
}

/// Parse a 1-based page selection into sorted, deduplicated 0-based indices.
///
/// Parts are separated by commas; each part is a page (`3`) or an inclusive
/// range (`2-4`). Empty parts and surrounding whitespace are ignored.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, PageRangeError> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((start, end)) => (page_number(start, page_count)?, page_number(end, page_count)?),
            None => {
                let page = page_number(part, page_count)?;
                (page, page)
            }
        };
        if start > end {
            return Err(PageRangeError::Reversed { start, end });
        }
        pages.extend((start - 1)..end);
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn page_number(text: &str, page_count: usize) -> Result<usize, PageRangeError> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| PageRangeError::NotANumber(text.to_string()))?;
    match page {
        0 => Err(PageRangeError::Zero),
        p if p > page_count => Err(PageRangeError::OutOfRange { page: p, page_count }),
        p => Ok(p),
    }
}
