use crate::api::error::AppError;
use crate::routing::classifier::{PageKind, classify};
use axum::{
    Json,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/pages/{outer}/{inner}",
    params(
        ("outer" = String, Path, description = "First URL segment"),
        ("inner" = String, Path, description = "Second URL segment")
    ),
    responses(
        (status = 200, description = "Resolved page kind", body = PageKind),
        (status = 404, description = "Path does not address any page")
    ),
    tag = "pages"
)]
pub async fn resolve_page(
    State(state): State<crate::AppState>,
    Path((outer, inner)): Path<(String, String)>,
) -> Result<Json<PageKind>, AppError> {
    match classify(&state.catalog, &outer, &inner) {
        PageKind::Unresolved => Err(AppError::NotFound(format!(
            "No page at /{}/{}",
            outer, inner
        ))),
        kind => Ok(Json(kind)),
    }
}
