use super::handlers::generate_hair_plan::{__path_generate_hair_plan, generate_hair_plan};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_hair_plan))]
pub struct HairPlanApiDoc;

pub fn hair_plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/hair-plan", state.args.server.root_path),
        post(generate_hair_plan),
    )
}
