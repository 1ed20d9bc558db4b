pub mod info;
pub mod llm;
