use tauri::{AppHandle, Emitter};
use tokio::sync::broadcast;

use crate::modules::relay::RECEIVE_RESPONSE;
use crate::modules::window::{WindowLifecycleEvent, WindowRole};

#[derive(Clone, Debug)]
pub enum AppEvent {
    ChatResponse {
        window: String,
        response: String,
    },
    WindowOpened {
        role: WindowRole,
        label: String,
    },
    WindowClosed {
        role: WindowRole,
        label: String,
    },
    HotkeyUnavailable {
        combination: String,
        reason: String,
    },
}

impl AppEvent {
    /// 前端事件：(目标窗口, 事件名, 载荷)，目标为 None 时发给所有窗口
    pub fn frontend(&self) -> (Option<&str>, &'static str, serde_json::Value) {
        match self {
            AppEvent::ChatResponse { window, response } => (
                Some(window.as_str()),
                RECEIVE_RESPONSE,
                serde_json::Value::String(response.clone()),
            ),
            AppEvent::WindowOpened { role, label } => (
                None,
                "window:opened",
                serde_json::json!({ "role": role, "label": label }),
            ),
            AppEvent::WindowClosed { role, label } => (
                None,
                "window:closed",
                serde_json::json!({ "role": role, "label": label }),
            ),
            AppEvent::HotkeyUnavailable {
                combination,
                reason,
            } => (
                None,
                "hotkey:unavailable",
                serde_json::json!({ "combination": combination, "reason": reason }),
            ),
        }
    }
}

impl From<WindowLifecycleEvent> for AppEvent {
    fn from(event: WindowLifecycleEvent) -> Self {
        match event {
            WindowLifecycleEvent::Opened(e) => AppEvent::WindowOpened {
                role: e.role,
                label: e.label.to_string(),
            },
            WindowLifecycleEvent::Closed(e) => AppEvent::WindowClosed {
                role: e.role,
                label: e.label.to_string(),
            },
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    app_handle: Option<AppHandle>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self {
            sender,
            app_handle: None,
        }
    }

    pub fn set_app_handle(&mut self, handle: AppHandle) {
        self.app_handle = Some(handle);
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing event: {:?}", event);
        let _ = self.sender.send(event.clone());

        let Some(handle) = &self.app_handle else {
            return;
        };

        let (target, name, payload) = event.frontend();
        tracing::debug!("[EventBus] Emitting {} to {}", name, target.unwrap_or("all"));
        let result = match target {
            Some(window) => handle.emit_to(window, name, payload),
            None => handle.emit(name, payload),
        };
        if let Err(e) = result {
            tracing::warn!("[EventBus] Failed to emit {}: {}", name, e);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::window::WindowLabel;

    #[tokio::test]
    async fn test_publish_without_app_handle_reaches_subscribers() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(WindowLifecycleEvent::opened(WindowRole::Chat, WindowLabel::chat()).into());

        match rx.recv().await.unwrap() {
            AppEvent::WindowOpened { role, label } => {
                assert_eq!(role, WindowRole::Chat);
                assert_eq!(label, "chat");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_chat_response_targets_sender_window() {
        let event = AppEvent::ChatResponse {
            window: "chat".to_string(),
            response: "Default response for: \"hi\"".to_string(),
        };

        let (target, name, payload) = event.frontend();
        assert_eq!(target, Some("chat"));
        assert_eq!(name, RECEIVE_RESPONSE);
        assert_eq!(payload, serde_json::json!("Default response for: \"hi\""));
    }

    #[test]
    fn test_lifecycle_and_hotkey_events_are_broadcast() {
        let closed: AppEvent =
            WindowLifecycleEvent::closed(WindowRole::Settings, WindowLabel::settings(2)).into();
        let (target, name, payload) = closed.frontend();
        assert_eq!(target, None);
        assert_eq!(name, "window:closed");
        assert_eq!(payload["role"], "settings");
        assert_eq!(payload["label"], "settings-2");

        let unavailable = AppEvent::HotkeyUnavailable {
            combination: "CommandOrControl+Alt+J".to_string(),
            reason: "taken".to_string(),
        };
        let (target, name, payload) = unavailable.frontend();
        assert_eq!(target, None);
        assert_eq!(name, "hotkey:unavailable");
        assert_eq!(payload["reason"], "taken");
    }
}
