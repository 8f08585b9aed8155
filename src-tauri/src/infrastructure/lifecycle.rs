use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::modules::hotkey::HotkeyBinding;
use crate::modules::window::WindowLifecycleController;

/// 进程退出回调，参数为退出码
pub type ExitFn = Arc<dyn Fn(i32) + Send + Sync>;

/// 应用生命周期
///
/// 退出流程只有一个入口：`shutdown`。`quit` 和宿主的 Exit 事件都会调用它，
/// 第二次调用直接返回。
pub struct AppLifecycle {
    hotkeys: Arc<HotkeyBinding>,
    windows: Arc<WindowLifecycleController>,
    exit: ExitFn,
    torn_down: AtomicBool,
}

impl AppLifecycle {
    pub fn new(
        hotkeys: Arc<HotkeyBinding>,
        windows: Arc<WindowLifecycleController>,
        exit: ExitFn,
    ) -> Self {
        Self {
            hotkeys,
            windows,
            exit,
            torn_down: AtomicBool::new(false),
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// 释放快捷键并清空窗口槽位，返回本次是否真正执行
    pub async fn shutdown(&self) -> bool {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            tracing::debug!("[AppLifecycle] Shutdown already done");
            return false;
        }

        tracing::info!("[AppLifecycle] Shutting down...");
        match self.hotkeys.unbind_all() {
            Ok(released) => tracing::info!("[AppLifecycle] {} hotkey(s) released", released),
            Err(e) => tracing::error!("[AppLifecycle] Failed to release hotkeys: {}", e),
        }
        self.windows.release_all().await;
        true
    }

    /// 先释放快捷键，再结束进程
    pub async fn quit(&self) {
        self.shutdown().await;
        tracing::info!("[AppLifecycle] Exiting");
        (self.exit)(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::hotkey::{HotkeyAction, HotkeyCombination, InMemoryHotkeyAdapter};
    use crate::modules::window::{InMemoryWindowAdapter, WindowSettings};
    use std::sync::Mutex;

    struct Fixture {
        hotkey_adapter: Arc<InMemoryHotkeyAdapter>,
        hotkeys: Arc<HotkeyBinding>,
        windows: Arc<WindowLifecycleController>,
        exits: Arc<Mutex<Vec<i32>>>,
        lifecycle: AppLifecycle,
    }

    fn fixture() -> Fixture {
        let hotkey_adapter = Arc::new(InMemoryHotkeyAdapter::new());
        let hotkeys = Arc::new(HotkeyBinding::new(hotkey_adapter.clone()));
        let windows = Arc::new(WindowLifecycleController::new(
            Arc::new(InMemoryWindowAdapter::new()),
            WindowSettings::default(),
        ));
        let exits = Arc::new(Mutex::new(Vec::new()));
        let recorded = exits.clone();
        let lifecycle = AppLifecycle::new(
            hotkeys.clone(),
            windows.clone(),
            Arc::new(move |code| recorded.lock().unwrap().push(code)),
        );

        Fixture {
            hotkey_adapter,
            hotkeys,
            windows,
            exits,
            lifecycle,
        }
    }

    #[tokio::test]
    async fn test_shutdown_runs_once() {
        let f = fixture();
        f.hotkeys
            .bind(HotkeyCombination::default(), HotkeyAction::ToggleChat)
            .unwrap();
        f.windows.toggle_chat().await.unwrap();

        assert!(f.lifecycle.shutdown().await);
        assert!(!f.lifecycle.shutdown().await);

        assert!(f.lifecycle.is_torn_down());
        assert!(f.hotkeys.bound().is_empty());
        assert!(f.windows.snapshot().await.is_empty());
        assert_eq!(f.hotkey_adapter.unregister_calls(), 1);
    }

    #[tokio::test]
    async fn test_quit_releases_hotkeys_then_exits() {
        let f = fixture();
        f.hotkeys
            .bind(HotkeyCombination::default(), HotkeyAction::ToggleChat)
            .unwrap();

        f.lifecycle.quit().await;

        assert!(!f.hotkey_adapter.is_registered(&HotkeyCombination::default()));
        assert_eq!(*f.exits.lock().unwrap(), vec![0]);

        // 宿主随后触发的 Exit 事件不会重复释放
        assert!(!f.lifecycle.shutdown().await);
        assert_eq!(f.hotkey_adapter.unregister_calls(), 1);
    }
}
