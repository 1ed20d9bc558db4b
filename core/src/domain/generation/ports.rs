use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    generation::entities::{GenerationOutput, GenerationRequest},
};

/// Client trait for the external generation backend.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GenerationOutput, CoreError>> + Send;
}
