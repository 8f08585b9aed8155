// Relay Channels
//
// 聊天界面与后台进程之间的事件名，保持与旧版前端兼容

/// 聊天界面 -> 后台
pub const SEND_MESSAGE: &str = "send-message";

/// 后台 -> 聊天界面
pub const RECEIVE_RESPONSE: &str = "receive-response";
