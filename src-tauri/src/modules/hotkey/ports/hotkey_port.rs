// Hotkey Port
//
// 全局快捷键端口定义

use thiserror::Error;

use crate::modules::hotkey::domain::HotkeyCombination;

/// 快捷键错误类型
#[derive(Error, Debug)]
pub enum HotkeyError {
    #[error("Invalid hotkey combination: {0}")]
    InvalidCombination(String),

    #[error("Hotkey registration rejected: {0}")]
    RegistrationFailed(String),

    #[error("Hotkey release failed: {0}")]
    UnregisterFailed(String),
}

/// 快捷键端口
///
/// 宿主调用都是同步的，要么立即成功要么立即失败
pub trait HotkeyPort: Send + Sync {
    /// 向宿主注册快捷键
    fn register(&self, combination: &HotkeyCombination) -> Result<(), HotkeyError>;

    /// 释放本进程持有的所有快捷键
    fn unregister_all(&self) -> Result<(), HotkeyError>;
}
