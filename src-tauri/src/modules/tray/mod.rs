// Tray Module
//
// 系统托盘模块，管理托盘图标和菜单
//
// 功能：
// - 托盘图标显示
// - 托盘菜单（打开应用、设置、退出）
// - 托盘事件处理

pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;

use std::sync::Arc;
use tauri::AppHandle;

/// Tray 模块容器
pub struct TrayModule {
    handler: Arc<dyn TrayPort>,
}

impl TrayModule {
    /// 创建 Tray 模块
    pub fn new(app_handle: AppHandle) -> Self {
        Self::with_handler(Arc::new(TauriTrayHandler::new(app_handle)))
    }

    /// 使用自定义实现创建
    pub fn with_handler(handler: Arc<dyn TrayPort>) -> Self {
        Self { handler }
    }

    /// 获取托盘处理器
    pub fn handler(&self) -> &Arc<dyn TrayPort> {
        &self.handler
    }
}
