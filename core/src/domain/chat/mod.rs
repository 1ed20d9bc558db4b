pub mod entities;
pub mod helpers;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::{ChatTurn, StyleChatReply, StyleDetail};
pub use ports::ChatService;
pub use value_objects::ChatInput;
