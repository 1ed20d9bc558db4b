use std::future::Future;

use crate::domain::{
    chat::{entities::StyleChatReply, value_objects::ChatInput},
    common::entities::app_errors::CoreError,
};

/// Service trait for the style-suggestion chat.
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput)
    -> impl Future<Output = Result<StyleChatReply, CoreError>> + Send;
}
