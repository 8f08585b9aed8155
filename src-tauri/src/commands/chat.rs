// Chat Commands
//
// 聊天窗口的发送动作

use tauri::{State, WebviewWindow};

use crate::infrastructure::Shell;
use crate::modules::window::WindowLabel;
use crate::shared::AppResult;

/// 发送消息
///
/// 空白消息在这里被拦下；回复既作为返回值，也以 `receive-response` 事件发回调用窗口
#[tauri::command]
pub async fn chat_send_message(
    window: WebviewWindow,
    shell: State<'_, Shell>,
    message: String,
) -> AppResult<String> {
    let label = WindowLabel::new(window.label());
    let response = shell.send_from_surface(&label, &message).await?;
    Ok(response.into_string())
}
