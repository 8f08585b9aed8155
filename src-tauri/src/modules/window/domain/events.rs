// Window Domain Events
//
// 窗口领域事件定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{WindowLabel, WindowRole};

/// 窗口创建事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOpenedEvent {
    pub role: WindowRole,
    pub label: WindowLabel,
    pub timestamp: DateTime<Utc>,
}

impl WindowOpenedEvent {
    pub fn new(role: WindowRole, label: WindowLabel) -> Self {
        Self {
            role,
            label,
            timestamp: Utc::now(),
        }
    }
}

/// 窗口关闭事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowClosedEvent {
    pub role: WindowRole,
    pub label: WindowLabel,
    pub timestamp: DateTime<Utc>,
}

impl WindowClosedEvent {
    pub fn new(role: WindowRole, label: WindowLabel) -> Self {
        Self {
            role,
            label,
            timestamp: Utc::now(),
        }
    }
}

/// 窗口生命周期事件，由控制器广播
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WindowLifecycleEvent {
    Opened(WindowOpenedEvent),
    Closed(WindowClosedEvent),
}

impl WindowLifecycleEvent {
    pub fn opened(role: WindowRole, label: WindowLabel) -> Self {
        Self::Opened(WindowOpenedEvent::new(role, label))
    }

    pub fn closed(role: WindowRole, label: WindowLabel) -> Self {
        Self::Closed(WindowClosedEvent::new(role, label))
    }
}
