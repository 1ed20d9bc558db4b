use std::path::PathBuf;

use clap::Parser;
use hairhq_core::domain::common::{
    DEFAULT_HISTORY_TURNS, DEFAULT_PLAN_CONTEXT_MAX_CHARS, HairHqConfig, InfoConfig, LlmConfig,
    PromptSettings,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "hairhq-api", about = "HairHQ recommendation API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub info: InfoArgs,

    #[command(flatten)]
    pub prompts: PromptArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/hairhq".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Credential for the generation backend. When absent the service runs
    /// in not-configured mode and never calls out.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Directory holding the per-mode info documents (info_women.json,
    /// info_men.json).
    #[arg(long, env = "INFO_DIR", default_value = "data")]
    pub info_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PromptArgs {
    #[arg(long, env = "CHAT_HISTORY_TURNS", default_value_t = DEFAULT_HISTORY_TURNS)]
    pub chat_history_turns: usize,

    #[arg(long, env = "PLAN_CONTEXT_MAX_CHARS", default_value_t = DEFAULT_PLAN_CONTEXT_MAX_CHARS)]
    pub plan_context_max_chars: usize,
}

impl From<Args> for HairHqConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
            },
            info: InfoConfig {
                dir: args.info.info_dir,
            },
            prompts: PromptSettings {
                history_turns: args.prompts.chat_history_turns,
                plan_context_max_chars: args.prompts.plan_context_max_chars,
            },
        }
    }
}
