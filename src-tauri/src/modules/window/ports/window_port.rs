// Window Port
//
// 窗口管理端口定义

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::window::domain::{WindowConfig, WindowLabel};

/// 窗口错误类型
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Window not found: {0}")]
    NotFound(String),

    #[error("Window operation failed: {0}")]
    OperationFailed(String),

    #[error("Window already exists: {0}")]
    AlreadyExists(String),
}

/// 窗口管理端口
///
/// 宿主窗口的最小操作集合，窗口句柄只通过 WindowLifecycleController 创建和销毁
#[async_trait]
pub trait WindowPort: Send + Sync {
    /// 创建并显示窗口
    async fn create(&self, config: &WindowConfig) -> Result<(), WindowError>;

    /// 宿主中窗口是否仍然存在
    async fn exists(&self, label: &WindowLabel) -> bool;

    /// 显示窗口
    async fn show(&self, label: &WindowLabel) -> Result<(), WindowError>;

    /// 隐藏窗口
    async fn hide(&self, label: &WindowLabel) -> Result<(), WindowError>;

    /// 设置窗口焦点
    async fn set_focus(&self, label: &WindowLabel) -> Result<(), WindowError>;

    /// 销毁窗口
    async fn destroy(&self, label: &WindowLabel) -> Result<(), WindowError>;
}
