// Window Value Objects
//
// 窗口相关的值对象定义

use serde::{Deserialize, Serialize};

/// 窗口角色
///
/// 每个角色对应控制器中的一个窗口槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRole {
    Chat,
    Settings,
    Main,
}

impl WindowRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowRole::Chat => "chat",
            WindowRole::Settings => "settings",
            WindowRole::Main => "main",
        }
    }

    /// 角色的基础窗口标识
    pub fn base_label(&self) -> WindowLabel {
        WindowLabel::new(self.as_str())
    }
}

impl std::fmt::Display for WindowRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 设置窗口的去重策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SettingsPolicy {
    /// 每次打开都新建一个窗口
    #[default]
    Multiple,
    /// 已有窗口时只聚焦
    Singleton,
}

impl From<&str> for SettingsPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "singleton" | "single" => SettingsPolicy::Singleton,
            _ => SettingsPolicy::Multiple,
        }
    }
}

/// 主窗口不存在时 show_main 的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MainWindowPolicy {
    /// 按需创建主窗口
    #[default]
    Lazy,
    /// 什么都不做
    Ignore,
}

impl From<&str> for MainWindowPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ignore" | "none" => MainWindowPolicy::Ignore,
            _ => MainWindowPolicy::Lazy,
        }
    }
}

/// 窗口尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// 窗口标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowLabel(String);

impl WindowLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 主窗口标识
    pub fn main() -> Self {
        WindowRole::Main.base_label()
    }

    /// 聊天窗口标识
    pub fn chat() -> Self {
        WindowRole::Chat.base_label()
    }

    /// 设置窗口标识，`index` 从 1 开始，第一个窗口不带后缀
    pub fn settings(index: u32) -> Self {
        if index <= 1 {
            WindowRole::Settings.base_label()
        } else {
            Self(format!("settings-{}", index))
        }
    }
}

impl From<&str> for WindowLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_labels_are_unique() {
        assert_eq!(WindowLabel::settings(1).as_str(), "settings");
        assert_eq!(WindowLabel::settings(2).as_str(), "settings-2");
        assert_ne!(WindowLabel::settings(2), WindowLabel::settings(3));
    }

    #[test]
    fn test_policies_from_str() {
        assert_eq!(SettingsPolicy::from("Singleton"), SettingsPolicy::Singleton);
        assert_eq!(SettingsPolicy::from("whatever"), SettingsPolicy::Multiple);
        assert_eq!(MainWindowPolicy::from("ignore"), MainWindowPolicy::Ignore);
        assert_eq!(MainWindowPolicy::from(""), MainWindowPolicy::Lazy);
    }
}
