use crate::error::AppError;
use crate::models::page::{total_pages, PageEnvelope};
use crate::models::search::SearchFilter;
use crate::state::AppState;

pub async fn find_many(state: &AppState, filter: &SearchFilter) -> Result<PageEnvelope, AppError> {
    let github = state
        .github
        .as_ref()
        .ok_or(AppError::ClientNotInitialized)?;

    let result = github.search_repositories(filter).await?;

    if result.incomplete_results {
        tracing::warn!(total = result.total_count, "Upstream returned incomplete results");
    }

    Ok(PageEnvelope {
        total_pages: total_pages(result.total_count, filter.limit),
        current_page: filter.page,
        total: result.total_count,
        repositories: result.items,
    })
}
