// In-Memory Window Adapter
//
// 内存窗口适配器，不依赖宿主运行时

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::modules::window::domain::{WindowConfig, WindowLabel};
use crate::modules::window::ports::{WindowError, WindowPort};

#[derive(Debug, Clone)]
pub struct MemoryWindow {
    pub config: WindowConfig,
    pub visible: bool,
    pub focused: bool,
}

/// 内存窗口适配器
///
/// 用于测试，可以模拟创建失败和用户手动关闭窗口
pub struct InMemoryWindowAdapter {
    windows: RwLock<HashMap<WindowLabel, MemoryWindow>>,
    fail_create: AtomicBool,
    created: AtomicUsize,
}

impl InMemoryWindowAdapter {
    pub fn new() -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            fail_create: AtomicBool::new(false),
            created: AtomicUsize::new(0),
        }
    }

    /// 让之后的 create 调用失败
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// 模拟用户通过标题栏关闭窗口
    pub async fn close_by_user(&self, label: &WindowLabel) -> bool {
        self.windows.write().await.remove(label).is_some()
    }

    pub async fn get(&self, label: &WindowLabel) -> Option<MemoryWindow> {
        self.windows.read().await.get(label).cloned()
    }

    pub async fn labels(&self) -> Vec<WindowLabel> {
        let mut labels: Vec<_> = self.windows.read().await.keys().cloned().collect();
        labels.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        labels
    }

    /// 累计创建过的窗口数量
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryWindowAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowPort for InMemoryWindowAdapter {
    async fn create(&self, config: &WindowConfig) -> Result<(), WindowError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(WindowError::OperationFailed(format!(
                "cannot allocate surface for {}",
                config.label
            )));
        }

        let mut windows = self.windows.write().await;
        if windows.contains_key(&config.label) {
            return Err(WindowError::AlreadyExists(config.label.to_string()));
        }

        // 让出执行权，便于测试并发切换
        tokio::task::yield_now().await;

        windows.insert(
            config.label.clone(),
            MemoryWindow {
                config: config.clone(),
                visible: true,
                focused: true,
            },
        );
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn exists(&self, label: &WindowLabel) -> bool {
        self.windows.read().await.contains_key(label)
    }

    async fn show(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let mut windows = self.windows.write().await;
        let window = windows
            .get_mut(label)
            .ok_or_else(|| WindowError::NotFound(label.to_string()))?;
        window.visible = true;
        Ok(())
    }

    async fn hide(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let mut windows = self.windows.write().await;
        let window = windows
            .get_mut(label)
            .ok_or_else(|| WindowError::NotFound(label.to_string()))?;
        window.visible = false;
        window.focused = false;
        Ok(())
    }

    async fn set_focus(&self, label: &WindowLabel) -> Result<(), WindowError> {
        let mut windows = self.windows.write().await;
        for (key, window) in windows.iter_mut() {
            window.focused = key == label;
        }
        if windows.contains_key(label) {
            Ok(())
        } else {
            Err(WindowError::NotFound(label.to_string()))
        }
    }

    async fn destroy(&self, label: &WindowLabel) -> Result<(), WindowError> {
        self.windows
            .write()
            .await
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| WindowError::NotFound(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_label() {
        let adapter = InMemoryWindowAdapter::new();
        adapter.create(&WindowConfig::chat_window()).await.unwrap();

        let result = adapter.create(&WindowConfig::chat_window()).await;
        assert!(matches!(result, Err(WindowError::AlreadyExists(_))));
        assert_eq!(adapter.created_count(), 1);
    }

    #[tokio::test]
    async fn test_hide_and_destroy() {
        let adapter = InMemoryWindowAdapter::new();
        let label = WindowLabel::chat();
        adapter.create(&WindowConfig::chat_window()).await.unwrap();

        adapter.hide(&label).await.unwrap();
        assert!(!adapter.get(&label).await.unwrap().visible);

        adapter.destroy(&label).await.unwrap();
        assert!(!adapter.exists(&label).await);
        assert!(adapter.destroy(&label).await.is_err());
    }
}
