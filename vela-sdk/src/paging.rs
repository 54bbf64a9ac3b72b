//! Collection paging
//!
//! Collections come back one bounded page at a time. Each page carries the
//! items plus an optional `next` link whose `start` query parameter is the
//! opaque continuation token. [`list_all`] drives the loop: fetch, append,
//! follow the token until the API stops returning one. A failed page fetch
//! aborts the whole listing; no partial results are returned.

use serde::Deserialize;
use url::Url;

use crate::error::Result;

/// Page link as returned inside collections (`first`, `next`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Href {
    pub href: String,
}

/// One page of a collection
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token for the next page, absent on the last page
    pub next_start: Option<String>,
    /// Total item count across all pages, when the API reports it
    pub total_count: Option<i64>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_start.is_none()
    }
}

/// Extract the `start` continuation token from a `next` page link
pub fn next_start_token(next: Option<&Href>) -> Option<String> {
    let href = next?;
    let url = Url::parse(&href.href).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "start")
        .map(|(_, v)| v.into_owned())
}

/// Fetch every page of a collection
///
/// `fetch` is invoked with `None` for the first page and the returned
/// continuation token for each subsequent page. Items are accumulated in
/// order; there is no iteration bound, rate limiting, or deduplication.
pub async fn list_all<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all_items = Vec::new();
    let mut start: Option<String> = None;

    loop {
        let page = fetch(start.take()).await?;
        all_items.extend(page.items);

        match page.next_start {
            Some(token) => start = Some(token),
            None => break,
        }
    }

    Ok(all_items)
}
