// In-Memory Tray Handler
//
// 内存托盘实现，可以模拟菜单点击

use std::sync::{Arc, Mutex, PoisonError};

use crate::modules::tray::domain::{TrayAction, TrayConfig};
use crate::modules::tray::ports::{TrayActionHandler, TrayError, TrayPort};

#[derive(Default)]
struct TrayInner {
    config: Option<TrayConfig>,
    handler: Option<Arc<dyn TrayActionHandler>>,
}

#[derive(Default)]
pub struct InMemoryTrayHandler {
    inner: Mutex<TrayInner>,
}

impl InMemoryTrayHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟点击菜单项，返回是否存在该菜单项
    pub fn click(&self, item_id: &str) -> bool {
        let (exists, handler) = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let exists = inner
                .config
                .as_ref()
                .map(|config| config.menu.item_ids().contains(&item_id))
                .unwrap_or(false);
            (exists, inner.handler.clone())
        };

        match handler {
            Some(handler) if exists => {
                handler.handle_action(TrayAction::from(item_id));
                true
            }
            _ => false,
        }
    }

    pub fn config(&self) -> Option<TrayConfig> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .clone()
    }
}

impl TrayPort for InMemoryTrayHandler {
    fn initialize(
        &self,
        config: &TrayConfig,
        handler: Arc<dyn TrayActionHandler>,
    ) -> Result<(), TrayError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.config.is_some() {
            return Err(TrayError::AlreadyInitialized);
        }
        inner.config = Some(config.clone());
        inner.handler = Some(handler);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .is_some()
    }
}
