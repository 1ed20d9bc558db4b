use crate::domain::{
    common::{entities::app_errors::CoreError, helpers::extract_json_object, services::Service},
    generation::{GENERATION_TEMPERATURE, entities::GenerationRequest, ports::LLMClient},
    info::ports::InfoRepository,
    plan::{
        entities::CarePlan,
        helpers::normalize_plan,
        ports::PlanService,
        prompts::{MIN_ROUTINE_STEPS, plan_input, plan_instructions, retry_plan_instructions},
    },
    profile::entities::HairProfile,
};

impl<LLM, I> PlanService for Service<LLM, I>
where
    LLM: LLMClient,
    I: InfoRepository,
{
    async fn generate_plan(&self, profile: HairProfile) -> Result<CarePlan, CoreError> {
        let client = self.llm_client.as_ref().ok_or(CoreError::NotConfigured)?;

        let input = plan_input(&profile);

        // 1. First attempt with the baseline instructions
        let first = client
            .generate(GenerationRequest {
                instructions: plan_instructions().to_string(),
                input: input.clone(),
                temperature: GENERATION_TEMPERATURE,
                previous_response_id: None,
            })
            .await?;

        let plan = normalize_plan(&extract_json_object(&first.text));
        if plan.routine.len() >= MIN_ROUTINE_STEPS {
            return Ok(plan);
        }

        // 2. Under-delivered routine: ask again once, stricter, and keep the
        //    second answer whether or not it also falls short
        let second = client
            .generate(GenerationRequest {
                instructions: retry_plan_instructions(),
                input,
                temperature: GENERATION_TEMPERATURE,
                previous_response_id: None,
            })
            .await?;

        Ok(normalize_plan(&extract_json_object(&second.text)))
    }
}
