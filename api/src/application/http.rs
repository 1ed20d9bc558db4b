pub mod hair_chat;
pub mod hair_info;
pub mod hair_plan;
pub mod health;
pub mod server;
