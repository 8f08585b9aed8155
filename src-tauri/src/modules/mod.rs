// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - hotkey: 全局快捷键
// - relay: 聊天消息中继
// - tray: 系统托盘模块
// - window: 窗口生命周期管理

pub mod hotkey;
pub mod relay;
pub mod tray;
pub mod window;

pub use hotkey::HotkeyModule;
pub use tray::TrayModule;
pub use window::WindowModule;
