use axum::extract::{Path, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use hairhq_core::domain::{info::ports::InfoService, profile::entities::Mode};

#[utoipa::path(
    get,
    path = "/hair-info/{mode}",
    tag = "hair-info",
    summary = "Get the info document for a mode (path form)",
    params(
        ("mode" = String, Path, description = "Info document mode"),
    ),
    responses(
        (status = 200, description = "Raw info document for the mode, or an empty object")
    )
)]
pub async fn get_hair_info_by_mode(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let mode = Mode::parse(Some(&mode));
    let info = state.service.get_info(mode).await.map_err(ApiError::from)?;

    Ok(Response::OK(info))
}
