// Tray Domain Events
//
// 托盘领域事件定义

use serde::{Deserialize, Serialize};

/// 托盘动作类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayAction {
    ShowMain,
    OpenSettings,
    Quit,
    Custom(String),
}

impl From<&str> for TrayAction {
    fn from(s: &str) -> Self {
        match s {
            "show" | "show_main" => TrayAction::ShowMain,
            "settings" | "open_settings" => TrayAction::OpenSettings,
            "quit" | "exit" => TrayAction::Quit,
            other => TrayAction::Custom(other.to_string()),
        }
    }
}
