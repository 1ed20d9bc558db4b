use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, plan::entities::CarePlan,
    profile::entities::HairProfile,
};

/// Service trait for care plan generation.
#[cfg_attr(test, mockall::automock)]
pub trait PlanService: Send + Sync {
    fn generate_plan(
        &self,
        profile: HairProfile,
    ) -> impl Future<Output = Result<CarePlan, CoreError>> + Send;
}
