// Relay Module
//
// 聊天窗口与后台之间的消息中继
//
// - domain: 消息、回复与事件名
// - application: 回声式中继

pub mod application;
pub mod domain;

pub use application::MessageRelay;
pub use domain::{ChatMessage, RelayResponse, RECEIVE_RESPONSE, SEND_MESSAGE};
