//! Resource API endpoints.

use axum::extract::{rejection::QueryRejection, Path, Query, State};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{FilterState, Resource, ResourceList};
use crate::AppState;

/// GET /api/resources - List resources matching the filter query.
///
/// Accepts `q` (or `query`), `type`, `tag` and `audience`; missing values
/// default to the wildcard.
pub async fn list_resources(
    State(state): State<AppState>,
    filters: Result<Query<FilterState>, QueryRejection>,
) -> ApiResult<ResourceList> {
    let Query(filters) =
        filters.map_err(|e| AppError::BadRequest(format!("Invalid filter query: {}", e)))?;

    success(state.catalog.list(filters))
}

/// GET /api/resources/:id - Get a single resource.
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Resource> {
    match state.catalog.get(&id) {
        Some(resource) => success(resource.clone()),
        None => Err(AppError::NotFound(format!("Resource {} not found", id))),
    }
}
