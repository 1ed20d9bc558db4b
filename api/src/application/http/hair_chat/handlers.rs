pub mod hair_chat;
