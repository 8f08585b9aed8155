// Tauri Tray Handler
//
// 基于 Tauri 的托盘处理实现

use std::sync::{Arc, Mutex, PoisonError};
use tauri::menu::{Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};
use tauri::AppHandle;

use crate::modules::tray::domain::{TrayAction, TrayConfig, TrayMenuElement};
use crate::modules::tray::ports::{TrayActionHandler, TrayError, TrayPort};

const TRAY_ID: &str = "main";

/// Tauri 托盘处理器
pub struct TauriTrayHandler {
    app_handle: AppHandle,
    tray: Mutex<Option<TrayIcon>>,
}

impl TauriTrayHandler {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            tray: Mutex::new(None),
        }
    }

    fn build_menu(&self, config: &TrayConfig) -> tauri::Result<Menu<tauri::Wry>> {
        let menu = Menu::new(&self.app_handle)?;

        for element in &config.menu.items {
            match element {
                TrayMenuElement::Item(item) => {
                    let menu_item = MenuItem::with_id(
                        &self.app_handle,
                        item.id.as_str(),
                        &item.title,
                        item.enabled,
                        item.shortcut.as_deref(),
                    )?;
                    menu.append(&menu_item)?;
                }
                TrayMenuElement::Separator => {
                    menu.append(&PredefinedMenuItem::separator(&self.app_handle)?)?;
                }
            }
        }

        Ok(menu)
    }
}

impl TrayPort for TauriTrayHandler {
    fn initialize(
        &self,
        config: &TrayConfig,
        handler: Arc<dyn TrayActionHandler>,
    ) -> Result<(), TrayError> {
        let mut slot = self.tray.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(TrayError::AlreadyInitialized);
        }

        let menu = self
            .build_menu(config)
            .map_err(|e| TrayError::OperationFailed(e.to_string()))?;

        let menu_handler = handler.clone();
        let click_handler = handler;

        let mut builder = TrayIconBuilder::with_id(TRAY_ID)
            .tooltip(&config.tooltip)
            .menu(&menu)
            .show_menu_on_left_click(false)
            .on_menu_event(move |_app, event| {
                tracing::debug!("[Tray] Menu item clicked: {}", event.id().as_ref());
                menu_handler.handle_action(TrayAction::from(event.id().as_ref()));
            })
            .on_tray_icon_event(move |_tray, event| {
                // 左键单击等同于“打开应用”
                if let TrayIconEvent::Click {
                    button: MouseButton::Left,
                    button_state: MouseButtonState::Up,
                    ..
                } = event
                {
                    click_handler.handle_action(TrayAction::ShowMain);
                }
            });

        if let Some(icon) = self.app_handle.default_window_icon() {
            builder = builder.icon(icon.clone());
        }

        let tray = builder
            .build(&self.app_handle)
            .map_err(|e| TrayError::OperationFailed(e.to_string()))?;

        *slot = Some(tray);
        tracing::info!("[Tray] Tray icon ready");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.tray
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
