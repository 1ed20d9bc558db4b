pub mod entities;
pub mod ports;

pub use entities::{GenerationOutput, GenerationRequest};
pub use ports::LLMClient;

/// Sampling temperature shared by both generation tasks.
pub const GENERATION_TEMPERATURE: f32 = 0.7;
