//! Tag API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::TagSummary;
use crate::AppState;

/// GET /api/tags - List every tag in the catalog, sorted.
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Vec<TagSummary>> {
    success(state.catalog.tags())
}
