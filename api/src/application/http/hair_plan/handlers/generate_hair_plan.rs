use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use hairhq_core::domain::{
    common::entities::app_errors::CoreError,
    plan::{entities::CarePlan, ports::PlanService},
    profile::{entities::HairProfile, value_objects::RawHairProfile},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HairPlanResponse {
    #[serde(flatten)]
    pub plan: CarePlan,
    /// Echo of the canonical profile, for client-side debugging. Present in
    /// success and fallback payloads alike.
    pub profile_received: HairProfile,
}

impl HairPlanResponse {
    fn new(plan: CarePlan, profile_received: HairProfile) -> Self {
        Self {
            plan,
            profile_received,
        }
    }

    fn degraded(summary: &str, profile_received: HairProfile) -> Self {
        Self {
            plan: CarePlan {
                summary: summary.to_string(),
                ..CarePlan::default()
            },
            profile_received,
        }
    }
}

#[utoipa::path(
    post,
    path = "/hair-plan",
    tag = "hair-plan",
    summary = "Generate a personalized care plan",
    description = "Canonicalizes the submitted hair profile and asks the generation backend for a structured care plan. Upstream failures degrade to an empty plan with a human-readable summary rather than an error status.",
    request_body = RawHairProfile,
    responses(
        (status = 200, body = HairPlanResponse)
    )
)]
pub async fn generate_hair_plan(
    State(state): State<AppState>,
    Json(payload): Json<RawHairProfile>,
) -> Result<Response<HairPlanResponse>, ApiError> {
    let profile = HairProfile::from_raw(payload);

    match state.service.generate_plan(profile.clone()).await {
        Ok(plan) => Ok(Response::OK(HairPlanResponse::new(plan, profile))),
        Err(CoreError::NotConfigured) => Ok(Response::OK(HairPlanResponse::degraded(
            "Plan generation is not configured.",
            profile,
        ))),
        Err(e) => {
            tracing::error!("Failed to generate hair plan: {}", e);
            Ok(Response::OK(HairPlanResponse::degraded(
                "Could not generate plan right now.",
                profile,
            )))
        }
    }
}
