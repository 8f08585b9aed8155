// Message Relay
//
// 把聊天消息转换成固定模板的回复

use crate::modules::relay::domain::{ChatMessage, RelayResponse};

/// 消息中继
///
/// 纯函数，不做任何校验，空消息由发送端拦截
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRelay;

impl MessageRelay {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &ChatMessage) -> RelayResponse {
        tracing::info!("[MessageRelay] Message received: {}", message.as_str());
        RelayResponse::for_message(message)
    }
}
