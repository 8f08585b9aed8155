// Hotkey Module
//
// 全局快捷键模块
//
// 功能：
// - 启动时把一个组合键绑定到聊天窗口切换
// - 注册失败不影响应用运行
// - 退出时释放全部绑定

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::*;
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;

use std::sync::Arc;
use tauri::AppHandle;

/// Hotkey 模块容器
pub struct HotkeyModule {
    binding: Arc<HotkeyBinding>,
}

impl HotkeyModule {
    /// 使用 Tauri AppHandle 创建
    pub fn new(app_handle: AppHandle) -> Self {
        Self::with_adapter(Arc::new(TauriHotkeyAdapter::new(app_handle)))
    }

    /// 使用自定义适配器创建
    pub fn with_adapter(adapter: Arc<dyn HotkeyPort>) -> Self {
        Self {
            binding: Arc::new(HotkeyBinding::new(adapter)),
        }
    }

    /// 获取快捷键绑定
    pub fn binding(&self) -> &Arc<HotkeyBinding> {
        &self.binding
    }
}
