// In-Memory Hotkey Adapter
//
// 内存快捷键适配器，可模拟被其他进程占用的组合

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::modules::hotkey::domain::HotkeyCombination;
use crate::modules::hotkey::ports::{HotkeyError, HotkeyPort};

pub struct InMemoryHotkeyAdapter {
    registered: Mutex<HashSet<HotkeyCombination>>,
    occupied: Mutex<HashSet<HotkeyCombination>>,
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
}

impl InMemoryHotkeyAdapter {
    pub fn new() -> Self {
        Self {
            registered: Mutex::new(HashSet::new()),
            occupied: Mutex::new(HashSet::new()),
            register_calls: AtomicUsize::new(0),
            unregister_calls: AtomicUsize::new(0),
        }
    }

    /// 模拟组合已被其他进程占用
    pub fn occupy(&self, combination: &HotkeyCombination) {
        self.occupied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(combination.clone());
    }

    pub fn is_registered(&self, combination: &HotkeyCombination) -> bool {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(combination)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryHotkeyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyPort for InMemoryHotkeyAdapter {
    fn register(&self, combination: &HotkeyCombination) -> Result<(), HotkeyError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);

        let occupied = self.occupied.lock().unwrap_or_else(PoisonError::into_inner);
        if occupied.contains(combination) {
            return Err(HotkeyError::RegistrationFailed(format!(
                "{} is already registered by another process",
                combination
            )));
        }

        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(combination.clone());
        Ok(())
    }

    fn unregister_all(&self) -> Result<(), HotkeyError> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
