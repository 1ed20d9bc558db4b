use crate::application::http::health::__path_health;
use crate::application::http::{
    hair_chat::router::HairChatApiDoc, hair_info::router::HairInfoApiDoc,
    hair_plan::router::HairPlanApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HairHQ API"
    ),
    paths(health),
    nest(
        (path = "/api", api = HairPlanApiDoc),
        (path = "/api", api = HairChatApiDoc),
        (path = "/api", api = HairInfoApiDoc),
    )
)]
pub struct ApiDoc;
