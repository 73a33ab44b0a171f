use axum::http::header::HeaderMap;

/// Default and upper bound for page sizes, supplied by server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: usize,
    pub max_per_page: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 1000,
        }
    }
}

/// Normalized, 1-based page request.
///
/// Construction never fails: a page below 1 becomes 1, and a non-positive page
/// size becomes the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: Option<i64>, per_page: Option<i64>, limits: PageLimits) -> Self {
        let page = page
            .and_then(|page| usize::try_from(page).ok())
            .unwrap_or(1)
            .max(1);
        let per_page = per_page
            .and_then(|per_page| usize::try_from(per_page).ok())
            .filter(|per_page| *per_page > 0)
            .unwrap_or(limits.default_per_page)
            .clamp(1, limits.max_per_page.max(1));
        Self { page, per_page }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Index of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// `ceil(total / per_page)`; zero when nothing matched.
    #[must_use]
    pub const fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None, PageLimits::default())
    }
}

/// One page of results plus the totals the client needs to render paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut the half-open slice `[offset, offset + per_page)` out of the full
    /// matched sequence. A page past the end is empty.
    pub fn from_matches(matches: Vec<T>, request: PageRequest) -> Self {
        let total_items = matches.len();
        let start = request.offset().min(total_items);
        let items: Vec<T> = matches.into_iter().skip(start).take(request.per_page()).collect();
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total_items,
            total_pages: request.total_pages(total_items),
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Sanitize resource name by removing control characters for HTTP headers
fn sanitize_resource_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).collect()
}

/// Build the `Content-Range` header for a page of results.
///
/// # Arguments
///
/// * `offset` - Index of the first returned item.
/// * `returned` - Number of items on the page.
/// * `total_count` - Number of items that matched overall.
/// * `resource_name` - The name of the resource being paginated.
///
/// An empty page is reported as `<resource> */<total>`.
#[must_use]
pub fn calculate_content_range(
    offset: usize,
    returned: usize,
    total_count: usize,
    resource_name: &str,
) -> HeaderMap {
    let safe_name = sanitize_resource_name(resource_name);

    let content_range = if returned == 0 {
        format!("{safe_name} */{total_count}")
    } else {
        let last = offset + returned - 1;
        format!("{safe_name} {offset}-{last}/{total_count}")
    };

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    }
    headers
}
