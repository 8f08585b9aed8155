// Tauri Window Adapter
//
// 基于 Tauri 的窗口管理适配器实现

use async_trait::async_trait;
use tauri::{AppHandle, Manager, WebviewWindow};

use crate::modules::window::domain::{WindowConfig, WindowLabel};
use crate::modules::window::ports::{WindowError, WindowPort};

/// Tauri 窗口适配器
pub struct TauriWindowAdapter {
    app_handle: AppHandle,
}

impl TauriWindowAdapter {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }

    /// 获取 Tauri 窗口句柄
    fn get_window(&self, label: &WindowLabel) -> Result<WebviewWindow, WindowError> {
        self.app_handle
            .get_webview_window(label.as_str())
            .ok_or_else(|| WindowError::NotFound(label.to_string()))
    }
}

#[async_trait]
impl WindowPort for TauriWindowAdapter {
    async fn create(&self, config: &WindowConfig) -> Result<(), WindowError> {
        // 检查窗口是否已存在
        if self
            .app_handle
            .get_webview_window(config.label.as_str())
            .is_some()
        {
            return Err(WindowError::AlreadyExists(config.label.to_string()));
        }

        let mut builder = tauri::WebviewWindowBuilder::new(
            &self.app_handle,
            config.label.as_str(),
            tauri::WebviewUrl::App(config.page.clone().into()),
        )
        .title(&config.title)
        .inner_size(config.size.width as f64, config.size.height as f64)
        .decorations(config.decorations)
        .always_on_top(config.always_on_top)
        .resizable(config.resizable);

        if config.center {
            builder = builder.center();
        }

        let window = builder
            .build()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;

        // 窗口已建成，聚焦失败不影响结果
        if let Err(e) = window.set_focus() {
            tracing::warn!("[TauriWindowAdapter] Failed to focus {}: {}", config.label, e);
        }

        Ok(())
    }

    async fn exists(&self, label: &WindowLabel) -> bool {
        self.app_handle.get_webview_window(label.as_str()).is_some()
    }

    async fn show(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let window = self.get_window(label)?;
        window
            .show()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    async fn hide(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let window = self.get_window(label)?;
        window
            .hide()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    async fn set_focus(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let window = self.get_window(label)?;
        window
            .set_focus()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    async fn destroy(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let window = self.get_window(label)?;
        window
            .destroy()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }
}
