//! Two-turn chat prompt (system instruction + user text)

use openai::chat::{ChatCompletionMessage, ChatCompletionMessageRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    /// The user text is kept exactly as given.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Ordered message list for the chat completion request
    pub fn to_messages(&self) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::System,
                content: Some(self.system.clone()),
                name: None,
                function_call: None,
                tool_call_id: None,
                tool_calls: None,
            },
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::User,
                content: Some(self.user.clone()),
                name: None,
                function_call: None,
                tool_call_id: None,
                tool_calls: None,
            },
        ]
    }
}
