//! Name search over the business entity registry.

use crate::domain::entity::EntityRecord;
use crate::domain::search::{SearchFilter, SearchQuery};
use crate::dto::search::{SearchParams, SearchResponse};
use crate::pagination::{PageWindow, PaginationEnvelope};
use crate::repository::EntityReader;
use crate::services::{ServiceError, ServiceResult};

/// Runs the page fetch and the total count for the same filter.
///
/// The two reads are independent; under concurrent writes the total may
/// drift from the page contents. Either failure aborts the whole search.
pub fn execute<R>(
    repo: &R,
    filter: &SearchFilter,
    window: PageWindow,
) -> ServiceResult<(Vec<EntityRecord>, u64)>
where
    R: EntityReader + ?Sized,
{
    let records = repo
        .find_entities_by_name(filter, window)
        .map_err(|err| {
            log::error!("Failed to fetch entities for {:?}: {err}", filter.pattern());
            ServiceError::from(err)
        })?;

    let total = repo.count_entities_by_name(filter).map_err(|err| {
        log::error!("Failed to count entities for {:?}: {err}", filter.pattern());
        ServiceError::from(err)
    })?;

    Ok((records, total))
}

/// Validates the raw parameters and returns one page of matching entities.
pub fn search<R>(repo: &R, params: SearchParams) -> ServiceResult<SearchResponse>
where
    R: EntityReader + ?Sized,
{
    let query = SearchQuery::normalize(params.q.as_deref(), params.page.as_deref())?;
    let filter = SearchFilter::from(&query);
    let window = PageWindow::for_page(query.page);

    log::debug!(
        "Searching entities: term={:?} page={} offset={}",
        query.term.as_str(),
        query.page,
        window.offset
    );

    let (results, total) = execute(repo, &filter, window)?;
    let pagination = PaginationEnvelope::assemble(total, window, query.page);

    Ok(SearchResponse {
        results,
        pagination,
    })
}
