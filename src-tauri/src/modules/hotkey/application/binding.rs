// Hotkey Binding
//
// 进程级快捷键注册表：启动时绑定，退出时统一释放

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::hotkey::domain::{HotkeyAction, HotkeyCombination};
use crate::modules::hotkey::ports::{HotkeyError, HotkeyPort};

/// 快捷键绑定
pub struct HotkeyBinding {
    port: Arc<dyn HotkeyPort>,
    bindings: Mutex<HashMap<HotkeyCombination, HotkeyAction>>,
}

impl HotkeyBinding {
    pub fn new(port: Arc<dyn HotkeyPort>) -> Self {
        Self {
            port,
            bindings: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<HotkeyCombination, HotkeyAction>> {
        self.bindings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 绑定快捷键
    ///
    /// 失败时不记录绑定，由调用方决定如何降级
    pub fn bind(
        &self,
        combination: HotkeyCombination,
        action: HotkeyAction,
    ) -> Result<(), HotkeyError> {
        if !combination.is_well_formed() {
            return Err(HotkeyError::InvalidCombination(combination.to_string()));
        }

        let mut bindings = self.lock();
        if bindings.contains_key(&combination) {
            bindings.insert(combination, action);
            return Ok(());
        }

        self.port.register(&combination)?;
        tracing::info!("[HotkeyBinding] Registered {} -> {:?}", combination, action);
        bindings.insert(combination, action);
        Ok(())
    }

    /// 释放所有绑定，返回释放的数量
    ///
    /// 没有绑定时直接返回 0，不会触达宿主
    pub fn unbind_all(&self) -> Result<usize, HotkeyError> {
        let mut bindings = self.lock();
        if bindings.is_empty() {
            return Ok(0);
        }

        self.port.unregister_all()?;
        let released = bindings.len();
        bindings.clear();

        tracing::info!("[HotkeyBinding] Released {} hotkey(s)", released);
        Ok(released)
    }

    /// 第一个满足条件的组合所绑定的动作
    pub fn find_action<F>(&self, mut matches: F) -> Option<HotkeyAction>
    where
        F: FnMut(&HotkeyCombination) -> bool,
    {
        self.lock()
            .iter()
            .find(|(combination, _)| matches(combination))
            .map(|(_, action)| *action)
    }

    pub fn is_bound(&self, combination: &HotkeyCombination) -> bool {
        self.lock().contains_key(combination)
    }

    /// 当前绑定的所有组合
    pub fn bound(&self) -> Vec<(HotkeyCombination, HotkeyAction)> {
        self.lock()
            .iter()
            .map(|(combo, action)| (combo.clone(), *action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::hotkey::infrastructure::InMemoryHotkeyAdapter;

    fn binding() -> (Arc<InMemoryHotkeyAdapter>, HotkeyBinding) {
        let adapter = Arc::new(InMemoryHotkeyAdapter::new());
        (adapter.clone(), HotkeyBinding::new(adapter))
    }

    #[test]
    fn test_bind_registers_with_host() {
        let (adapter, binding) = binding();
        let combo = HotkeyCombination::default();

        binding.bind(combo.clone(), HotkeyAction::ToggleChat).unwrap();

        assert!(binding.is_bound(&combo));
        assert!(adapter.is_registered(&combo));
        assert_eq!(
            binding.find_action(|bound| bound == &combo),
            Some(HotkeyAction::ToggleChat)
        );
        assert_eq!(binding.find_action(|bound| bound.as_str() == "Alt+K"), None);
    }

    #[test]
    fn test_bind_failure_leaves_nothing_bound() {
        let (adapter, binding) = binding();
        let combo = HotkeyCombination::default();
        adapter.occupy(&combo);

        let result = binding.bind(combo.clone(), HotkeyAction::ToggleChat);
        assert!(matches!(result, Err(HotkeyError::RegistrationFailed(_))));
        assert!(!binding.is_bound(&combo));
        assert!(binding.bound().is_empty());
    }

    #[test]
    fn test_bind_rejects_malformed_combination() {
        let (adapter, binding) = binding();
        let result = binding.bind("J".into(), HotkeyAction::ToggleChat);
        assert!(matches!(result, Err(HotkeyError::InvalidCombination(_))));
        assert_eq!(adapter.register_calls(), 0);
    }

    #[test]
    fn test_unbind_all_twice_is_idempotent() {
        let (adapter, binding) = binding();
        binding
            .bind(HotkeyCombination::default(), HotkeyAction::ToggleChat)
            .unwrap();

        assert_eq!(binding.unbind_all().unwrap(), 1);
        assert!(binding.bound().is_empty());

        assert_eq!(binding.unbind_all().unwrap(), 0);
        assert!(binding.bound().is_empty());
        assert_eq!(adapter.unregister_calls(), 1);
        assert!(!adapter.is_registered(&HotkeyCombination::default()));
    }

    #[test]
    fn test_unbind_all_without_bindings() {
        let (adapter, binding) = binding();
        assert_eq!(binding.unbind_all().unwrap(), 0);
        assert_eq!(adapter.unregister_calls(), 0);
    }
}
