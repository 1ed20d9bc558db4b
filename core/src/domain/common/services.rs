use crate::domain::common::PromptSettings;
use crate::domain::generation::ports::LLMClient;
use crate::domain::info::ports::InfoRepository;

/// Aggregate service over the domain's two ports. `llm_client` is `None`
/// when no generation credential is configured; every generation path
/// short-circuits on that state without touching the network.
#[derive(Clone)]
pub struct Service<LLM, I>
where
    LLM: LLMClient,
    I: InfoRepository,
{
    pub llm_client: Option<LLM>,
    pub info_repository: I,
    pub prompts: PromptSettings,
}

impl<LLM, I> Service<LLM, I>
where
    LLM: LLMClient,
    I: InfoRepository,
{
    pub fn new(llm_client: Option<LLM>, info_repository: I, prompts: PromptSettings) -> Self {
        Self {
            llm_client,
            info_repository,
            prompts,
        }
    }
}
