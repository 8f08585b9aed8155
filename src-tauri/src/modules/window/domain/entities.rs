// Window Domain Entities
//
// 窗口领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::{MainWindowPolicy, SettingsPolicy, WindowLabel, WindowRole, WindowSize};

pub const PRODUCT_TITLE: &str = "JanDi AI Assistant";

/// 窗口配置实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub label: WindowLabel,
    pub role: WindowRole,
    pub title: String,
    pub size: WindowSize,
    pub always_on_top: bool,
    pub decorations: bool,
    pub resizable: bool,
    pub center: bool,
    /// 前端入口页面，相对于 frontendDist
    pub page: String,
}

impl WindowConfig {
    /// 浮动聊天窗口：固定尺寸、置顶
    pub fn chat_window() -> Self {
        Self {
            label: WindowLabel::chat(),
            role: WindowRole::Chat,
            title: PRODUCT_TITLE.to_string(),
            size: WindowSize::new(300, 150),
            always_on_top: true,
            decorations: true,
            resizable: false,
            center: true,
            page: "chat/index.html".to_string(),
        }
    }

    /// 设置窗口：400x500，不可调整大小
    pub fn settings_window(label: WindowLabel) -> Self {
        Self {
            label,
            role: WindowRole::Settings,
            title: PRODUCT_TITLE.to_string(),
            size: WindowSize::new(400, 500),
            always_on_top: false,
            decorations: true,
            resizable: false,
            center: true,
            page: "settings/index.html".to_string(),
        }
    }

    /// 主窗口
    pub fn main_window() -> Self {
        Self {
            label: WindowLabel::main(),
            role: WindowRole::Main,
            title: PRODUCT_TITLE.to_string(),
            size: WindowSize::new(800, 600),
            always_on_top: false,
            decorations: true,
            resizable: true,
            center: true,
            page: "index.html".to_string(),
        }
    }

    pub fn with_size(mut self, size: WindowSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// 窗口设置
///
/// 控制器创建窗口时使用的尺寸、标题与去重策略
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSettings {
    pub title: String,
    pub chat_size: WindowSize,
    pub settings_size: WindowSize,
    pub main_size: WindowSize,
    pub settings_policy: SettingsPolicy,
    pub main_policy: MainWindowPolicy,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: PRODUCT_TITLE.to_string(),
            chat_size: WindowSize::new(300, 150),
            settings_size: WindowSize::new(400, 500),
            main_size: WindowSize::new(800, 600),
            settings_policy: SettingsPolicy::default(),
            main_policy: MainWindowPolicy::default(),
        }
    }
}

impl WindowSettings {
    pub fn chat_config(&self) -> WindowConfig {
        WindowConfig::chat_window()
            .with_size(self.chat_size)
            .with_title(self.title.clone())
    }

    pub fn settings_config(&self, label: WindowLabel) -> WindowConfig {
        WindowConfig::settings_window(label)
            .with_size(self.settings_size)
            .with_title(self.title.clone())
    }

    pub fn main_config(&self) -> WindowConfig {
        WindowConfig::main_window()
            .with_size(self.main_size)
            .with_title(self.title.clone())
    }
}

/// 聊天窗口切换结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "label", rename_all = "lowercase")]
pub enum ChatToggle {
    Opened(WindowLabel),
    Closed(WindowLabel),
}

impl ChatToggle {
    pub fn is_open(&self) -> bool {
        matches!(self, ChatToggle::Opened(_))
    }
}

/// 存活窗口快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveWindow {
    pub role: WindowRole,
    pub label: WindowLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_window_config() {
        let config = WindowConfig::chat_window();
        assert_eq!(config.role, WindowRole::Chat);
        assert!(config.always_on_top);
        assert!(!config.resizable);
        assert_eq!(config.size, WindowSize::new(300, 150));
    }

    #[test]
    fn test_settings_window_config() {
        let config = WindowSettings::default().settings_config(WindowLabel::settings(2));
        assert_eq!(config.label.as_str(), "settings-2");
        assert_eq!(config.size, WindowSize::new(400, 500));
        assert!(!config.resizable);
        assert_eq!(config.title, PRODUCT_TITLE);
    }
}
