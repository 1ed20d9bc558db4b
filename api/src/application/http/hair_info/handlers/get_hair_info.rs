use axum::extract::{Query, State};

use crate::application::http::{
    hair_info::validators::GetHairInfoParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use hairhq_core::domain::{info::ports::InfoService, profile::entities::Mode};

#[utoipa::path(
    get,
    path = "/info",
    tag = "hair-info",
    summary = "Get the info document for a mode (query form)",
    params(GetHairInfoParams),
    responses(
        (status = 200, description = "Raw info document for the mode, or an empty object")
    )
)]
pub async fn get_hair_info(
    State(state): State<AppState>,
    Query(params): Query<GetHairInfoParams>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let mode = Mode::parse(params.mode.as_deref());
    let info = state.service.get_info(mode).await.map_err(ApiError::from)?;

    Ok(Response::OK(info))
}
