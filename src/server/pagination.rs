//! Page requests and the `X-Total-Count`/`Link` response headers for paginated listings.

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;

pub static X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid sort parameter '{0}'")]
    InvalidSort(String),

    #[error("Unknown sort property '{0}'")]
    UnknownSortProperty(String),

    #[error("Page {page} of size {size} is out of range")]
    PageOutOfRange { page: u64, size: u64 },

    #[error("Failed to build pagination header: {0}")]
    Header(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    /// Parses `property[,asc|desc]`; the direction defaults to ascending.
    pub fn parse(raw: &str) -> Result<Self, PaginationError> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PaginationError::InvalidSort(raw.to_string()))?;

        let direction = match parts.next() {
            None | Some("") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(_) => return Err(PaginationError::InvalidSort(raw.to_string())),
        };

        if parts.next().is_some() {
            return Err(PaginationError::InvalidSort(raw.to_string()));
        }

        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }

    fn to_query_value(&self) -> String {
        let direction = match self.direction {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        };
        format!("{},{}", self.property, direction)
    }
}

/// Raw `page`, `size` and `sort` query parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index (default 0)
    pub page: Option<u64>,
    /// Page size (default 20)
    pub size: Option<u64>,
    /// Sort as `property[,asc|desc]`; repeat for secondary orderings
    #[serde(default)]
    pub sort: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl TryFrom<PageParams> for PageRequest {
    type Error = PaginationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let size = match params.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let page = params.page.unwrap_or(0);

        // The row offset is bound as a signed 64-bit value
        page.checked_mul(size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or(PaginationError::PageOutOfRange { page, size })?;

        let sort = params
            .sort
            .iter()
            .map(|raw| Sort::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { page, size, sort })
    }
}

/// One slice of a listing together with the size of the whole listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            1
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

/// Builds `X-Total-Count` and an RFC 5988 `Link` header with next/prev/last/first relations.
pub fn pagination_headers<T>(
    path: &str,
    page: &Page<T>,
    sort: &[Sort],
) -> Result<HeaderMap, PaginationError> {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT.clone(), HeaderValue::from(page.total_elements));

    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(path, page.number.saturating_add(1), page.size, sort, "next"));
    }
    if page.has_previous() {
        links.push(link(path, page.number - 1, page.size, sort, "prev"));
    }
    let last_page = page.total_pages().saturating_sub(1);
    links.push(link(path, last_page, page.size, sort, "last"));
    links.push(link(path, 0, page.size, sort, "first"));

    let value = HeaderValue::from_str(&links.join(","))
        .map_err(|e| PaginationError::Header(e.to_string()))?;
    headers.insert(LINK, value);

    Ok(headers)
}

fn link(path: &str, page: u64, size: u64, sort: &[Sort], rel: &str) -> String {
    let mut uri = format!("{}?page={}&size={}", path, page, size);
    for sort in sort {
        uri.push_str("&sort=");
        uri.push_str(&sort.to_query_value());
    }
    format!("<{}>; rel=\"{}\"", uri, rel)
}
