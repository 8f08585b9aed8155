// Window Lifecycle Controller
//
// 窗口生命周期控制器：聊天、设置、主窗口的唯一创建与销毁入口
//
// 每个角色一个槽位，所有槽位修改都在同一把锁内完成，
// 检查与创建之间不会被另一次切换插入。

use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

use crate::modules::window::domain::{
    ChatToggle, LiveWindow, MainWindowPolicy, SettingsPolicy, WindowConfig, WindowLabel,
    WindowLifecycleEvent, WindowRole, WindowSettings,
};
use crate::modules::window::ports::{WindowError, WindowPort};

/// 窗口槽位
#[derive(Debug, Default)]
pub struct WindowSlots {
    chat: Option<WindowLabel>,
    main: Option<WindowLabel>,
    settings: Vec<WindowLabel>,
}

impl WindowSlots {
    pub fn live(&self) -> Vec<LiveWindow> {
        let chat = self.chat.iter().map(|label| (WindowRole::Chat, label));
        let main = self.main.iter().map(|label| (WindowRole::Main, label));
        let settings = self
            .settings
            .iter()
            .map(|label| (WindowRole::Settings, label));

        chat.chain(main)
            .chain(settings)
            .map(|(role, label)| LiveWindow {
                role,
                label: label.clone(),
            })
            .collect()
    }

    pub fn count(&self, role: WindowRole) -> usize {
        match role {
            WindowRole::Chat => self.chat.iter().count(),
            WindowRole::Main => self.main.iter().count(),
            WindowRole::Settings => self.settings.len(),
        }
    }

    /// 从槽位中移除标识，返回其角色
    fn release(&mut self, label: &WindowLabel) -> Option<WindowRole> {
        if self.chat.as_ref() == Some(label) {
            self.chat = None;
            return Some(WindowRole::Chat);
        }
        if self.main.as_ref() == Some(label) {
            self.main = None;
            return Some(WindowRole::Main);
        }
        let before = self.settings.len();
        self.settings.retain(|l| l != label);
        (self.settings.len() != before).then_some(WindowRole::Settings)
    }

    fn next_settings_label(&self) -> WindowLabel {
        (1u32..)
            .map(WindowLabel::settings)
            .find(|label| !self.settings.contains(label))
            .unwrap_or_else(|| WindowLabel::settings(1))
    }
}

/// 窗口生命周期控制器
pub struct WindowLifecycleController {
    port: Arc<dyn WindowPort>,
    settings: WindowSettings,
    slots: Mutex<WindowSlots>,
    events: broadcast::Sender<WindowLifecycleEvent>,
}

impl WindowLifecycleController {
    pub fn new(port: Arc<dyn WindowPort>, settings: WindowSettings) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            port,
            settings,
            slots: Mutex::new(WindowSlots::default()),
            events,
        }
    }

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// 订阅窗口生命周期事件
    pub fn subscribe(&self) -> broadcast::Receiver<WindowLifecycleEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: WindowLifecycleEvent) {
        let _ = self.events.send(event);
    }

    /// 切换聊天窗口
    ///
    /// 已存在则隐藏并销毁，否则新建。用户手动关掉的窗口视为不存在，
    /// 槽位为空但宿主仍持有聊天窗口时按已打开处理。
    pub async fn toggle_chat(&self) -> Result<ChatToggle, WindowError> {
        let mut slots = self.slots.lock().await;
        let config = self.settings.chat_config();

        let label = slots.chat.clone().unwrap_or_else(|| config.label.clone());
        if self.port.exists(&label).await {
            if slots.chat.is_none() {
                tracing::warn!("[WindowController] Adopting untracked chat window: {}", label);
            }
            slots.chat = Some(label.clone());

            self.port.hide(&label).await?;
            self.port.destroy(&label).await?;
            slots.chat = None;

            tracing::info!("[WindowController] Chat window closed: {}", label);
            self.publish(WindowLifecycleEvent::closed(WindowRole::Chat, label.clone()));
            return Ok(ChatToggle::Closed(label));
        }

        if let Some(stale) = slots.chat.take() {
            tracing::debug!("[WindowController] Dropping stale chat slot: {}", stale);
        }

        self.create_or_adopt(&config).await?;
        slots.chat = Some(config.label.clone());

        tracing::info!("[WindowController] Chat window opened: {}", config.label);
        self.publish(WindowLifecycleEvent::opened(
            WindowRole::Chat,
            config.label.clone(),
        ));
        Ok(ChatToggle::Opened(config.label))
    }

    /// 创建窗口；宿主已有同名窗口时直接接管
    async fn create_or_adopt(&self, config: &WindowConfig) -> Result<(), WindowError> {
        match self.port.create(config).await {
            Ok(()) => Ok(()),
            Err(WindowError::AlreadyExists(_)) => {
                tracing::warn!(
                    "[WindowController] Adopting existing {} window: {}",
                    config.role,
                    config.label
                );
                self.port.show(&config.label).await?;
                self.port.set_focus(&config.label).await?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// 显示主窗口
    ///
    /// 返回被显示的窗口标识；策略为 Ignore 且主窗口不存在时返回 None
    pub async fn show_main(&self) -> Result<Option<WindowLabel>, WindowError> {
        let mut slots = self.slots.lock().await;

        if let Some(label) = slots.main.clone() {
            if self.port.exists(&label).await {
                self.port.show(&label).await?;
                self.port.set_focus(&label).await?;
                return Ok(Some(label));
            }
            slots.main = None;
        }

        match self.settings.main_policy {
            MainWindowPolicy::Ignore => {
                tracing::warn!("[WindowController] No main window to show");
                Ok(None)
            }
            MainWindowPolicy::Lazy => {
                let config = self.settings.main_config();
                self.create_or_adopt(&config).await?;
                slots.main = Some(config.label.clone());

                tracing::info!("[WindowController] Main window created: {}", config.label);
                self.publish(WindowLifecycleEvent::opened(
                    WindowRole::Main,
                    config.label.clone(),
                ));
                Ok(Some(config.label))
            }
        }
    }

    /// 打开设置窗口
    pub async fn open_settings(&self) -> Result<WindowLabel, WindowError> {
        let mut slots = self.slots.lock().await;

        let candidates = std::mem::take(&mut slots.settings);
        let mut live = Vec::with_capacity(candidates.len());
        for label in candidates {
            if self.port.exists(&label).await {
                live.push(label);
            }
        }
        slots.settings = live;

        if self.settings.settings_policy == SettingsPolicy::Singleton {
            if let Some(label) = slots.settings.first().cloned() {
                self.port.show(&label).await?;
                self.port.set_focus(&label).await?;
                return Ok(label);
            }
        }

        let config = self.settings.settings_config(slots.next_settings_label());
        self.create_or_adopt(&config).await?;
        slots.settings.push(config.label.clone());

        tracing::info!(
            "[WindowController] Settings window opened: {} ({} live)",
            config.label,
            slots.settings.len()
        );
        self.publish(WindowLifecycleEvent::opened(
            WindowRole::Settings,
            config.label.clone(),
        ));
        Ok(config.label)
    }

    /// 宿主报告窗口已销毁
    ///
    /// 标识会被复用，迟到的销毁事件可能指向同名的新窗口，
    /// 宿主仍持有该标识时不释放槽位。
    pub async fn on_window_destroyed(&self, label: &WindowLabel) -> Option<WindowRole> {
        let mut slots = self.slots.lock().await;
        if self.port.exists(label).await {
            tracing::debug!("[WindowController] Ignoring late destroy for live window: {}", label);
            return None;
        }
        let role = slots.release(label)?;

        tracing::debug!("[WindowController] {} window destroyed by host: {}", role, label);
        self.publish(WindowLifecycleEvent::closed(role, label.clone()));
        Some(role)
    }

    /// 清空所有槽位，返回释放的数量
    ///
    /// 只在退出流程中调用，宿主窗口随进程一起销毁
    pub async fn release_all(&self) -> usize {
        let mut slots = self.slots.lock().await;
        let live = slots.live();
        *slots = WindowSlots::default();

        for window in &live {
            self.publish(WindowLifecycleEvent::closed(window.role, window.label.clone()));
        }
        tracing::info!("[WindowController] Released {} window slot(s)", live.len());
        live.len()
    }

    /// 当前存活窗口
    pub async fn snapshot(&self) -> Vec<LiveWindow> {
        self.slots.lock().await.live()
    }

    pub async fn live_count(&self, role: WindowRole) -> usize {
        self.slots.lock().await.count(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::window::infrastructure::InMemoryWindowAdapter;

    fn controller_with(settings: WindowSettings) -> (Arc<InMemoryWindowAdapter>, WindowLifecycleController) {
        let adapter = Arc::new(InMemoryWindowAdapter::new());
        let controller = WindowLifecycleController::new(adapter.clone(), settings);
        (adapter, controller)
    }

    fn controller() -> (Arc<InMemoryWindowAdapter>, WindowLifecycleController) {
        controller_with(WindowSettings::default())
    }

    #[tokio::test]
    async fn test_toggle_chat_round_trip() {
        let (adapter, controller) = controller();

        let first = controller.toggle_chat().await.unwrap();
        assert_eq!(first, ChatToggle::Opened(WindowLabel::chat()));
        assert_eq!(controller.live_count(WindowRole::Chat).await, 1);
        assert!(adapter.exists(&WindowLabel::chat()).await);

        let second = controller.toggle_chat().await.unwrap();
        assert_eq!(second, ChatToggle::Closed(WindowLabel::chat()));
        assert_eq!(controller.live_count(WindowRole::Chat).await, 0);
        assert!(!adapter.exists(&WindowLabel::chat()).await);
    }

    #[tokio::test]
    async fn test_chat_window_is_fixed_and_on_top() {
        let (adapter, controller) = controller();
        controller.toggle_chat().await.unwrap();

        let window = adapter.get(&WindowLabel::chat()).await.unwrap();
        assert!(window.config.always_on_top);
        assert!(!window.config.resizable);
        assert!(window.visible);
    }

    #[tokio::test]
    async fn test_concurrent_toggles_never_create_two_chat_windows() {
        let (adapter, controller) = controller();
        let controller = Arc::new(controller);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let controller = controller.clone();
                tokio::spawn(async move { controller.toggle_chat().await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
            assert!(controller.live_count(WindowRole::Chat).await <= 1);
        }

        // 偶数次切换后回到空状态
        assert_eq!(controller.live_count(WindowRole::Chat).await, 0);
        assert!(adapter.labels().await.is_empty());
        assert_eq!(adapter.created_count(), 4);
    }

    #[tokio::test]
    async fn test_toggle_after_user_closed_chat_reopens() {
        let (adapter, controller) = controller();
        controller.toggle_chat().await.unwrap();
        assert!(adapter.close_by_user(&WindowLabel::chat()).await);

        let result = controller.toggle_chat().await.unwrap();
        assert!(result.is_open());
        assert_eq!(adapter.created_count(), 2);
    }

    #[tokio::test]
    async fn test_chat_creation_failure_propagates_and_keeps_slot_empty() {
        let (adapter, controller) = controller();
        adapter.set_fail_create(true);

        let result = controller.toggle_chat().await;
        assert!(matches!(result, Err(WindowError::OperationFailed(_))));
        assert_eq!(controller.live_count(WindowRole::Chat).await, 0);

        adapter.set_fail_create(false);
        assert!(controller.toggle_chat().await.unwrap().is_open());
    }

    #[tokio::test]
    async fn test_settings_multiple_policy_creates_fresh_windows() {
        let (adapter, controller) = controller();

        let first = controller.open_settings().await.unwrap();
        let second = controller.open_settings().await.unwrap();

        assert_eq!(first.as_str(), "settings");
        assert_eq!(second.as_str(), "settings-2");
        assert_eq!(controller.live_count(WindowRole::Settings).await, 2);

        let window = adapter.get(&second).await.unwrap();
        assert_eq!(window.config.size.width, 400);
        assert_eq!(window.config.size.height, 500);
        assert!(!window.config.resizable);
    }

    #[tokio::test]
    async fn test_settings_singleton_policy_focuses_existing() {
        let settings = WindowSettings {
            settings_policy: SettingsPolicy::Singleton,
            ..WindowSettings::default()
        };
        let (adapter, controller) = controller_with(settings);

        let first = controller.open_settings().await.unwrap();
        let second = controller.open_settings().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(adapter.created_count(), 1);
        assert_eq!(controller.live_count(WindowRole::Settings).await, 1);
    }

    #[tokio::test]
    async fn test_settings_label_reused_after_close() {
        let (adapter, controller) = controller();
        let first = controller.open_settings().await.unwrap();
        adapter.close_by_user(&first).await;

        let reopened = controller.open_settings().await.unwrap();
        assert_eq!(reopened, first);
        assert_eq!(controller.live_count(WindowRole::Settings).await, 1);
    }

    #[tokio::test]
    async fn test_show_main_lazily_creates_then_focuses() {
        let (adapter, controller) = controller();

        let created = controller.show_main().await.unwrap();
        assert_eq!(created, Some(WindowLabel::main()));

        adapter.hide(&WindowLabel::main()).await.unwrap();
        let shown = controller.show_main().await.unwrap();
        assert_eq!(shown, Some(WindowLabel::main()));
        assert_eq!(adapter.created_count(), 1);

        let window = adapter.get(&WindowLabel::main()).await.unwrap();
        assert!(window.visible);
        assert!(window.focused);
    }

    #[tokio::test]
    async fn test_show_main_ignore_policy_is_noop() {
        let settings = WindowSettings {
            main_policy: MainWindowPolicy::Ignore,
            ..WindowSettings::default()
        };
        let (adapter, controller) = controller_with(settings);

        assert_eq!(controller.show_main().await.unwrap(), None);
        assert_eq!(adapter.created_count(), 0);
    }

    #[tokio::test]
    async fn test_on_window_destroyed_clears_slot_and_publishes() {
        let (adapter, controller) = controller();
        let mut events = controller.subscribe();

        controller.toggle_chat().await.unwrap();
        assert!(matches!(events.recv().await.unwrap(), WindowLifecycleEvent::Opened(_)));

        adapter.close_by_user(&WindowLabel::chat()).await;
        let role = controller.on_window_destroyed(&WindowLabel::chat()).await;
        assert_eq!(role, Some(WindowRole::Chat));
        match events.recv().await.unwrap() {
            WindowLifecycleEvent::Closed(event) => assert_eq!(event.role, WindowRole::Chat),
            other => panic!("unexpected event: {:?}", other),
        }

        // 已经释放过的窗口不会再次触发
        assert_eq!(controller.on_window_destroyed(&WindowLabel::chat()).await, None);
    }

    #[tokio::test]
    async fn test_late_destroy_for_reused_label_keeps_live_slot() {
        let (adapter, controller) = controller();

        // 打开、关闭、再打开：宿主上是同名的新窗口
        assert!(controller.toggle_chat().await.unwrap().is_open());
        assert!(!controller.toggle_chat().await.unwrap().is_open());
        assert!(controller.toggle_chat().await.unwrap().is_open());

        // 上一个窗口的销毁事件迟到
        assert_eq!(controller.on_window_destroyed(&WindowLabel::chat()).await, None);
        assert_eq!(controller.live_count(WindowRole::Chat).await, 1);

        let result = controller.toggle_chat().await.unwrap();
        assert_eq!(result, ChatToggle::Closed(WindowLabel::chat()));
        assert!(!adapter.exists(&WindowLabel::chat()).await);
        assert!(controller.toggle_chat().await.unwrap().is_open());
    }

    #[tokio::test]
    async fn test_toggle_adopts_untracked_chat_window() {
        let (adapter, controller) = controller();
        adapter.create(&WindowConfig::chat_window()).await.unwrap();

        let result = controller.toggle_chat().await.unwrap();
        assert_eq!(result, ChatToggle::Closed(WindowLabel::chat()));
        assert!(adapter.labels().await.is_empty());
        assert_eq!(controller.live_count(WindowRole::Chat).await, 0);

        assert!(controller.toggle_chat().await.unwrap().is_open());
        assert_eq!(adapter.created_count(), 2);
    }

    #[tokio::test]
    async fn test_show_main_adopts_existing_host_window() {
        let (adapter, controller) = controller();
        adapter.create(&WindowConfig::main_window()).await.unwrap();
        adapter.hide(&WindowLabel::main()).await.unwrap();

        let shown = controller.show_main().await.unwrap();
        assert_eq!(shown, Some(WindowLabel::main()));
        assert_eq!(adapter.created_count(), 1);
        assert_eq!(controller.live_count(WindowRole::Main).await, 1);

        let window = adapter.get(&WindowLabel::main()).await.unwrap();
        assert!(window.visible);
        assert!(window.focused);
    }

    #[tokio::test]
    async fn test_release_all_empties_every_slot() {
        let (_adapter, controller) = controller();
        controller.toggle_chat().await.unwrap();
        controller.show_main().await.unwrap();
        controller.open_settings().await.unwrap();
        controller.open_settings().await.unwrap();
        assert_eq!(controller.snapshot().await.len(), 4);

        assert_eq!(controller.release_all().await, 4);
        assert!(controller.snapshot().await.is_empty());
        assert_eq!(controller.release_all().await, 0);
    }
}
