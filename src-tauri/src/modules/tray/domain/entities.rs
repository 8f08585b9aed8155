// Tray Domain Entities
//
// 托盘领域实体定义

use serde::{Deserialize, Serialize};

use crate::modules::window::PRODUCT_TITLE;

/// 托盘菜单项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayMenuItem {
    pub id: String,
    pub title: String,
    pub enabled: bool,
    pub shortcut: Option<String>,
}

impl TrayMenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            enabled: true,
            shortcut: None,
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// 托盘菜单元素
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TrayMenuElement {
    Item(TrayMenuItem),
    Separator,
}

/// 托盘菜单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayMenuConfig {
    pub items: Vec<TrayMenuElement>,
}

impl TrayMenuConfig {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(mut self, item: TrayMenuItem) -> Self {
        self.items.push(TrayMenuElement::Item(item));
        self
    }

    pub fn add_separator(mut self) -> Self {
        self.items.push(TrayMenuElement::Separator);
        self
    }

    /// 菜单项 id，按显示顺序
    pub fn item_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|element| match element {
                TrayMenuElement::Item(item) => Some(item.id.as_str()),
                TrayMenuElement::Separator => None,
            })
            .collect()
    }
}

impl Default for TrayMenuConfig {
    fn default() -> Self {
        Self::new()
            .add_item(TrayMenuItem::new("show", "Open application"))
            .add_item(TrayMenuItem::new("settings", "Settings"))
            .add_separator()
            .add_item(TrayMenuItem::new("quit", "Quit").with_shortcut("CmdOrCtrl+Q"))
    }
}

/// 托盘配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    pub tooltip: String,
    pub menu: TrayMenuConfig,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            tooltip: PRODUCT_TITLE.to_string(),
            menu: TrayMenuConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tray::domain::TrayAction;

    #[test]
    fn test_default_menu_has_three_actions() {
        let menu = TrayMenuConfig::default();
        assert_eq!(menu.item_ids(), vec!["show", "settings", "quit"]);

        let actions: Vec<TrayAction> = menu.item_ids().into_iter().map(TrayAction::from).collect();
        assert_eq!(
            actions,
            vec![TrayAction::ShowMain, TrayAction::OpenSettings, TrayAction::Quit]
        );
    }
}
