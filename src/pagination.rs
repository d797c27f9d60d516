//! Fetch-and-accumulate over continuation-token paginated listing calls.
//!
//! Every listing in the console goes through [`fetch_all`] or
//! [`fetch_all_filtered`]: the first page is requested without a token, and
//! each following page with the token handed back by the previous one, until a
//! page comes back without one. The loop keeps stack depth constant no matter
//! how many pages the service returns.

use std::future::Future;

use crate::types::Page;

/// Collects every item of every page, in page-arrival order.
///
/// An error on any page is returned unchanged and the items gathered so far
/// are dropped.
pub async fn fetch_all<T, E, F, Fut>(fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    fetch_all_filtered(fetch_page, |_| true).await
}

/// Like [`fetch_all`], keeping only the items accepted by `keep`.
///
/// The predicate runs per page as items arrive.
pub async fn fetch_all_filtered<T, E, F, Fut, P>(
    mut fetch_page: F,
    mut keep: P,
) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    P: FnMut(&T) -> bool,
{
    let mut items = Vec::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0usize;
    loop {
        let page = fetch_page(next_token.take()).await?;
        pages += 1;
        items.extend(page.items.into_iter().filter(|item| keep(item)));
        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }
    log::debug!("collected {} items across {pages} pages", items.len());
    Ok(items)
}
