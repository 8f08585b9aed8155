// Tauri Hotkey Adapter
//
// 基于 tauri-plugin-global-shortcut 的快捷键适配器

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::modules::hotkey::application::HotkeyBinding;
use crate::modules::hotkey::domain::{HotkeyAction, HotkeyCombination};
use crate::modules::hotkey::ports::{HotkeyError, HotkeyPort};

/// 解析为插件的 Shortcut
pub fn parse_shortcut(combination: &HotkeyCombination) -> Result<Shortcut, HotkeyError> {
    combination
        .as_str()
        .parse::<Shortcut>()
        .map_err(|e| HotkeyError::InvalidCombination(format!("{}: {}", combination, e)))
}

/// 按下的快捷键是否对应该组合
pub fn matches_shortcut(shortcut: &Shortcut, combination: &HotkeyCombination) -> bool {
    parse_shortcut(combination)
        .map(|parsed| &parsed == shortcut)
        .unwrap_or(false)
}

/// 宿主快捷键事件对应的动作
///
/// 只处理按下，松开不触发第二次切换
pub fn resolve_shortcut(
    binding: &HotkeyBinding,
    shortcut: &Shortcut,
    state: ShortcutState,
) -> Option<HotkeyAction> {
    if state != ShortcutState::Pressed {
        return None;
    }
    binding.find_action(|combination| matches_shortcut(shortcut, combination))
}

/// Tauri 快捷键适配器
pub struct TauriHotkeyAdapter {
    app_handle: AppHandle,
}

impl TauriHotkeyAdapter {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl HotkeyPort for TauriHotkeyAdapter {
    fn register(&self, combination: &HotkeyCombination) -> Result<(), HotkeyError> {
        let shortcut = parse_shortcut(combination)?;
        self.app_handle
            .global_shortcut()
            .register(shortcut)
            .map_err(|e| HotkeyError::RegistrationFailed(e.to_string()))
    }

    fn unregister_all(&self) -> Result<(), HotkeyError> {
        self.app_handle
            .global_shortcut()
            .unregister_all()
            .map_err(|e| HotkeyError::UnregisterFailed(e.to_string()))
    }
}
