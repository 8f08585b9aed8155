use crate::modules::hotkey::HotkeyCombination;
use crate::modules::tray::TrayConfig;
use crate::modules::window::{MainWindowPolicy, SettingsPolicy, WindowSettings};

pub const ENV_HOTKEY: &str = "JANDI_HOTKEY";
pub const ENV_SETTINGS_POLICY: &str = "JANDI_SETTINGS_POLICY";
pub const ENV_MAIN_POLICY: &str = "JANDI_MAIN_POLICY";

/// 应用设置
///
/// 编译期默认值，可以用环境变量覆盖，不做持久化
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    /// 切换聊天窗口的全局快捷键
    pub hotkey: HotkeyCombination,
    /// 窗口尺寸与去重策略
    pub window: WindowSettings,
    /// 托盘提示与菜单
    pub tray: TrayConfig,
}

impl AppSettings {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(hotkey) = lookup(ENV_HOTKEY).filter(|v| !v.trim().is_empty()) {
            self.hotkey = HotkeyCombination::new(hotkey.trim());
        }
        if let Some(policy) = lookup(ENV_SETTINGS_POLICY) {
            self.window.settings_policy = SettingsPolicy::from(policy.as_str());
        }
        if let Some(policy) = lookup(ENV_MAIN_POLICY) {
            self.window.main_policy = MainWindowPolicy::from(policy.as_str());
        }

        tracing::debug!(
            "[AppSettings] hotkey={}, settings_policy={:?}, main_policy={:?}",
            self.hotkey,
            self.window.settings_policy,
            self.window.main_policy
        );
        self
    }
}
