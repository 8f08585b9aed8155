use thiserror::Error;

use crate::modules::hotkey::HotkeyError;
use crate::modules::tray::TrayError;
use crate::modules::window::WindowError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Window error: {0}")]
    WindowError(#[from] WindowError),

    #[error("Hotkey error: {0}")]
    HotkeyError(#[from] HotkeyError),

    #[error("Tray error: {0}")]
    TrayError(#[from] TrayError),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_serializes_as_message() {
        let err = AppError::from(WindowError::NotFound("chat".to_string()));
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Window error: Window not found: chat\"");
    }
}
