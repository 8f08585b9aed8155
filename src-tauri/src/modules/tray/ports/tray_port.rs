// Tray Port
//
// 托盘管理端口定义

use thiserror::Error;

use crate::modules::tray::domain::{TrayAction, TrayConfig};

/// 托盘错误类型
#[derive(Error, Debug)]
pub enum TrayError {
    #[error("Tray already initialized")]
    AlreadyInitialized,

    #[error("Tray operation failed: {0}")]
    OperationFailed(String),
}

/// 托盘端口 - 定义托盘操作抽象
pub trait TrayPort: Send + Sync {
    /// 创建托盘图标与菜单，动作交给 handler
    fn initialize(
        &self,
        config: &TrayConfig,
        handler: std::sync::Arc<dyn TrayActionHandler>,
    ) -> Result<(), TrayError>;

    /// 托盘是否已显示
    fn is_initialized(&self) -> bool;
}

/// 托盘动作处理器
pub trait TrayActionHandler: Send + Sync {
    /// 处理托盘动作
    fn handle_action(&self, action: TrayAction);
}
