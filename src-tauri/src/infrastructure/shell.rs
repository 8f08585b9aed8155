use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::infrastructure::event_bus::{AppEvent, EventBus};
use crate::infrastructure::lifecycle::{AppLifecycle, ExitFn};
use crate::infrastructure::state::AppSettings;
use crate::modules::hotkey::{HotkeyAction, HotkeyBinding};
use crate::modules::relay::{ChatMessage, MessageRelay, RelayResponse};
use crate::modules::tray::{TrayAction, TrayActionHandler, TrayPort};
use crate::modules::window::{ChatToggle, WindowLabel, WindowLifecycleController};
use crate::shared::{AppError, AppResult};

/// 启动结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub hotkey_bound: bool,
    pub tray_ready: bool,
}

/// 应用外壳
///
/// 组合窗口控制器、快捷键、托盘与消息中继，宿主回调都经过这里
#[derive(Clone)]
pub struct Shell {
    settings: Arc<AppSettings>,
    windows: Arc<WindowLifecycleController>,
    hotkeys: Arc<HotkeyBinding>,
    lifecycle: Arc<AppLifecycle>,
    relay: MessageRelay,
    event_bus: Arc<RwLock<EventBus>>,
}

impl Shell {
    pub fn new(
        settings: AppSettings,
        windows: Arc<WindowLifecycleController>,
        hotkeys: Arc<HotkeyBinding>,
        exit: ExitFn,
        event_bus: Arc<RwLock<EventBus>>,
    ) -> Self {
        let lifecycle = Arc::new(AppLifecycle::new(hotkeys.clone(), windows.clone(), exit));
        Self {
            settings: Arc::new(settings),
            windows,
            hotkeys,
            lifecycle,
            relay: MessageRelay::new(),
            event_bus,
        }
    }

    pub fn windows(&self) -> &Arc<WindowLifecycleController> {
        &self.windows
    }

    pub fn hotkeys(&self) -> &Arc<HotkeyBinding> {
        &self.hotkeys
    }

    pub fn lifecycle(&self) -> &Arc<AppLifecycle> {
        &self.lifecycle
    }

    async fn publish(&self, event: AppEvent) {
        self.event_bus.read().await.publish(event);
    }

    /// 绑定快捷键并创建托盘
    ///
    /// 快捷键失败只降级，托盘失败则返回错误
    pub async fn startup(&self, tray: &dyn TrayPort) -> AppResult<StartupReport> {
        let combination = self.settings.hotkey.clone();
        let hotkey_bound = match self
            .hotkeys
            .bind(combination.clone(), HotkeyAction::ToggleChat)
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "[Shell] Hotkey {} unavailable, continuing without it: {}",
                    combination,
                    e
                );
                self.publish(AppEvent::HotkeyUnavailable {
                    combination: combination.to_string(),
                    reason: e.to_string(),
                })
                .await;
                false
            }
        };

        tray.initialize(&self.settings.tray, Arc::new(self.clone()))?;

        let report = StartupReport {
            hotkey_bound,
            tray_ready: tray.is_initialized(),
        };
        tracing::info!("[Shell] Startup complete: {:?}", report);
        Ok(report)
    }

    /// 快捷键按下
    pub async fn on_hotkey(&self, action: HotkeyAction) -> AppResult<ChatToggle> {
        match action {
            HotkeyAction::ToggleChat => Ok(self.windows.toggle_chat().await?),
        }
    }

    /// 执行托盘动作
    pub async fn dispatch(&self, action: TrayAction) -> AppResult<()> {
        tracing::debug!("[Shell] Dispatching tray action: {:?}", action);
        match action {
            TrayAction::ShowMain => {
                self.windows.show_main().await?;
            }
            TrayAction::OpenSettings => {
                self.windows.open_settings().await?;
            }
            TrayAction::Quit => {
                self.lifecycle.quit().await;
            }
            TrayAction::Custom(id) => {
                tracing::debug!("[Shell] Ignoring unknown tray action: {}", id);
            }
        }
        Ok(())
    }

    /// 中继消息并把回复发回指定窗口，不做校验
    pub async fn relay(&self, window: &WindowLabel, message: &ChatMessage) -> RelayResponse {
        let response = self.relay.respond(message);
        self.publish(AppEvent::ChatResponse {
            window: window.to_string(),
            response: response.as_str().to_string(),
        })
        .await;
        response
    }

    /// 聊天界面的发送动作：先过输入守卫，再中继
    pub async fn send_from_surface(
        &self,
        window: &WindowLabel,
        raw: &str,
    ) -> AppResult<RelayResponse> {
        let message = ChatMessage::compose(raw).ok_or(AppError::EmptyMessage)?;
        Ok(self.relay(window, &message).await)
    }
}

impl TrayActionHandler for Shell {
    fn handle_action(&self, action: TrayAction) {
        let shell = self.clone();
        tauri::async_runtime::spawn(async move {
            if let Err(e) = shell.dispatch(action.clone()).await {
                tracing::error!("[Shell] Tray action {:?} failed: {}", action, e);
            }
        });
    }
}
