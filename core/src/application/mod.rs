use crate::domain::common::{HairHqConfig, services::Service};
use crate::infrastructure::{info::FileInfoRepository, llm::OpenAiLLMClient};

pub type HairHqService = Service<OpenAiLLMClient, FileInfoRepository>;

/// Wires the concrete adapters into the service aggregate. A missing or
/// blank credential leaves the generation client absent, which every
/// generation path treats as the not-configured state.
pub fn create_service(config: HairHqConfig) -> HairHqService {
    let llm_client = config
        .llm
        .openai_api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| OpenAiLLMClient::new(key.to_string(), config.llm.openai_model.clone()));

    let info_repository = FileInfoRepository::new(config.info.dir.clone());

    Service::new(llm_client, info_repository, config.prompts)
}
