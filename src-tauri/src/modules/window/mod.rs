// Window Module
//
// 窗口管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含窗口角色、配置实体和生命周期事件
// - ports: 端口层，定义宿主窗口操作的抽象接口
// - application: 应用层，窗口生命周期控制器
// - infrastructure: 基础设施层，实现 Tauri 与内存窗口适配器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    ChatToggle, LiveWindow, MainWindowPolicy, SettingsPolicy, WindowClosedEvent, WindowConfig,
    WindowLabel, WindowLifecycleEvent, WindowOpenedEvent, WindowRole, WindowSettings, WindowSize,
    PRODUCT_TITLE,
};

// Ports
pub use ports::{WindowError, WindowPort};

// Application
pub use application::WindowLifecycleController;

// Infrastructure
pub use infrastructure::{InMemoryWindowAdapter, TauriWindowAdapter};

use std::sync::Arc;
use tauri::AppHandle;

/// Window 模块容器
///
/// 管理窗口相关的依赖注入
pub struct WindowModule {
    controller: Arc<WindowLifecycleController>,
}

impl WindowModule {
    /// 使用 Tauri AppHandle 创建
    pub fn new(app_handle: AppHandle, settings: WindowSettings) -> Self {
        Self::with_adapter(Arc::new(TauriWindowAdapter::new(app_handle)), settings)
    }

    /// 使用自定义适配器创建
    pub fn with_adapter(adapter: Arc<dyn WindowPort>, settings: WindowSettings) -> Self {
        Self {
            controller: Arc::new(WindowLifecycleController::new(adapter, settings)),
        }
    }

    /// 获取窗口控制器
    pub fn controller(&self) -> &Arc<WindowLifecycleController> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_module_with_memory_adapter() {
        let module = WindowModule::with_adapter(
            Arc::new(InMemoryWindowAdapter::new()),
            WindowSettings::default(),
        );

        module.controller().toggle_chat().await.unwrap();
        let live = module.controller().snapshot().await;
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].role, WindowRole::Chat);
    }
}
