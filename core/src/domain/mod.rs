pub mod chat;
pub mod common;
pub mod generation;
pub mod info;
pub mod plan;
pub mod profile;
