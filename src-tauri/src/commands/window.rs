use tauri::State;

use crate::infrastructure::Shell;
use crate::modules::window::{ChatToggle, LiveWindow};
use crate::shared::AppResult;

#[tauri::command]
pub async fn window_toggle_chat(shell: State<'_, Shell>) -> AppResult<ChatToggle> {
    Ok(shell.windows().toggle_chat().await?)
}

#[tauri::command]
pub async fn window_show_main(shell: State<'_, Shell>) -> AppResult<Option<String>> {
    let label = shell.windows().show_main().await?;
    Ok(label.map(|l| l.to_string()))
}

#[tauri::command]
pub async fn window_open_settings(shell: State<'_, Shell>) -> AppResult<String> {
    let label = shell.windows().open_settings().await?;
    Ok(label.to_string())
}

#[tauri::command]
pub async fn window_list(shell: State<'_, Shell>) -> AppResult<Vec<LiveWindow>> {
    Ok(shell.windows().snapshot().await)
}

#[tauri::command]
pub async fn app_quit(shell: State<'_, Shell>) -> AppResult<()> {
    shell.lifecycle().quit().await;
    Ok(())
}
