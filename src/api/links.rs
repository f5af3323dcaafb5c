//! External links endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::ExternalLinks;
use crate::AppState;

/// GET /api/links - Configured shop and waitlist destinations.
pub async fn get_links(State(state): State<AppState>) -> ApiResult<ExternalLinks> {
    success(state.config.links.clone())
}
