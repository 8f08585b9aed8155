// Relay Value Objects
//
// 聊天消息与回复

use serde::{Deserialize, Serialize};

/// 聊天界面发出的消息，内容不做限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatMessage(String);

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 发送端的输入守卫：去掉首尾空白，空内容不发送
    pub fn compose(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChatMessage {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChatMessage {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 回复内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayResponse(String);

impl RelayResponse {
    /// `Default response for: "<message>"`
    pub fn for_message(message: &ChatMessage) -> Self {
        Self(format!("Default response for: \"{}\"", message.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RelayResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
