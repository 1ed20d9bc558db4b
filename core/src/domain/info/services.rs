use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    generation::ports::LLMClient,
    info::ports::{InfoRepository, InfoService},
    profile::entities::Mode,
};

impl<LLM, I> InfoService for Service<LLM, I>
where
    LLM: LLMClient,
    I: InfoRepository,
{
    async fn get_info(&self, mode: Mode) -> Result<serde_json::Value, CoreError> {
        self.info_repository.load_info(mode).await
    }
}
