/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Page arithmetic for listings that report their size in a response header

use crate::constants::TOTAL_COUNT_HEADER;
use crate::error::AppError;
use crate::model::responses::Page;
use reqwest::header::HeaderMap;
use std::future::Future;
use tracing::{debug, info};

/// Number of pages needed for `total` items, i.e. `ceil(total / page_size)`
///
/// A zero page size yields zero pages.
#[must_use]
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Reads the collection size from the `x-total-count` header
pub fn total_count(headers: &HeaderMap) -> Result<u64, AppError> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or(AppError::MissingTotalCount)
}

/// Fetches every page of a listing
///
/// Page 0 is always requested. After each page the page count is recomputed
/// from the total the server reported, and fetching stops once the page index
/// reaches it, so at most `ceil(total / page_size)` requests are made.
///
/// # Arguments
/// * `page_size` - Items per page, must be positive
/// * `fetch` - Loads the page with the given zero-based index
pub async fn collect_pages<T, F, Fut>(page_size: u32, mut fetch: F) -> Result<Vec<T>, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, AppError>>,
{
    if page_size == 0 {
        return Err(AppError::InvalidInput(
            "page size must be positive".to_string(),
        ));
    }

    let mut items = Vec::new();
    let mut page = 0;
    let mut pages = 1; // updated after the first response

    while page < pages {
        let result = fetch(page).await?;
        pages = page_count(result.total_count, page_size);
        debug!(
            "Page {}/{} returned {} items (total {})",
            page + 1,
            pages,
            result.items.len(),
            result.total_count
        );
        items.extend(result.items);
        page += 1;
    }

    info!("Fetched {} items in {} pages", items.len(), page);
    Ok(items)
}
