use super::handlers::hair_chat::{__path_hair_chat, hair_chat};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(hair_chat))]
pub struct HairChatApiDoc;

pub fn hair_chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/hair-chat", state.args.server.root_path),
        post(hair_chat),
    )
}
