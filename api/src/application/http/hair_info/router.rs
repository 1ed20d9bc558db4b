use super::handlers::{
    get_hair_info::{__path_get_hair_info, get_hair_info},
    get_hair_info_by_mode::{__path_get_hair_info_by_mode, get_hair_info_by_mode},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_hair_info, get_hair_info_by_mode))]
pub struct HairInfoApiDoc;

pub fn hair_info_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/info", state.args.server.root_path),
            get(get_hair_info),
        )
        .route(
            &format!("{}/api/hair-info/{{mode}}", state.args.server.root_path),
            get(get_hair_info_by_mode),
        )
}
