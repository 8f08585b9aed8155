// Hotkey Value Objects
//
// 快捷键相关的值对象定义

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOTKEY: &str = "CommandOrControl+Alt+J";

/// 快捷键组合，使用宿主的 accelerator 语法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotkeyCombination(String);

impl HotkeyCombination {
    pub fn new(keys: impl Into<String>) -> Self {
        Self(keys.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 拆分出的按键，例如 `["CommandOrControl", "Alt", "J"]`
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .split('+')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// 至少一个修饰键加一个主键
    pub fn is_well_formed(&self) -> bool {
        self.keys().len() >= 2
    }
}

impl Default for HotkeyCombination {
    fn default() -> Self {
        Self(DEFAULT_HOTKEY.to_string())
    }
}

impl From<&str> for HotkeyCombination {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for HotkeyCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 快捷键触发的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    ToggleChat,
}
