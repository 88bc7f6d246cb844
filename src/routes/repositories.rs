use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::{AppError, ErrorBody, ErrorReport};
use crate::models::page::PageEnvelope;
use crate::models::search::{SearchFilter, SearchParams};
use crate::services::repository_service;
use crate::state::AppState;

/// Search repositories
#[utoipa::path(
    get,
    path = "/api/v1/repositories",
    tag = "repositories",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of matching repositories", body = PageEnvelope),
        (status = 400, description = "Invalid query parameters", body = ErrorBody),
        (status = 500, description = "Client missing or upstream failure", body = ErrorBody),
    )
)]
pub async fn find_many(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<PageEnvelope>, ErrorReport> {
    let environment = state.config.environment;

    let Query(params) = query
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()).report(environment))?;

    let filter = SearchFilter::try_from(params).map_err(|e| e.report(environment))?;
    tracing::info!(
        date = ?filter.date,
        language = ?filter.language,
        sort = %filter.sort,
        order = filter.order.as_str(),
        page = filter.page,
        limit = filter.limit,
        "Searching repositories"
    );

    let page = repository_service::find_many(&state, &filter)
        .await
        .map_err(|e| e.report(environment))?;

    Ok(Json(page))
}
