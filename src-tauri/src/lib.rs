pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use tauri::{Listener, Manager, RunEvent, WindowEvent};
use tokio::sync::{broadcast, RwLock};
use tracing_subscriber::EnvFilter;

use infrastructure::{AppSettings, EventBus, Shell};
use modules::hotkey::resolve_shortcut;
use modules::relay::{ChatMessage, SEND_MESSAGE};
use modules::tray::TrayAction;
use modules::window::WindowLabel;
use modules::{HotkeyModule, TrayModule, WindowModule};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,jandi_lib=debug")),
        )
        .with_target(true)
        .init();

    tracing::info!("JanDi starting...");

    let settings = AppSettings::from_env();
    let event_bus = Arc::new(RwLock::new(EventBus::new()));

    let global_shortcut = tauri_plugin_global_shortcut::Builder::new()
        .with_handler(|app, shortcut, event| {
            let Some(shell) = app.try_state::<Shell>() else {
                return;
            };
            let shell = shell.inner().clone();

            if let Some(action) = resolve_shortcut(shell.hotkeys(), shortcut, event.state()) {
                tauri::async_runtime::spawn(async move {
                    if let Err(e) = shell.on_hotkey(action).await {
                        tracing::error!("Hotkey action {:?} failed: {}", action, e);
                    }
                });
            }
        })
        .build();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            if let Some(shell) = app.try_state::<Shell>() {
                let shell = shell.inner().clone();
                tauri::async_runtime::spawn(async move {
                    if let Err(e) = shell.dispatch(TrayAction::ShowMain).await {
                        tracing::error!("Failed to show main window: {}", e);
                    }
                });
            }
        }))
        .plugin(global_shortcut)
        .manage(event_bus.clone())
        .setup(move |app| {
            let handle = app.handle().clone();

            // 设置 EventBus 的 AppHandle
            tauri::async_runtime::block_on(async {
                event_bus.write().await.set_app_handle(handle.clone());
            });

            let window_module = WindowModule::new(handle.clone(), settings.window.clone());
            let hotkey_module = HotkeyModule::new(handle.clone());
            let tray_module = TrayModule::new(handle.clone());

            let exit_handle = handle.clone();
            let shell = Shell::new(
                settings,
                window_module.controller().clone(),
                hotkey_module.binding().clone(),
                Arc::new(move |code| exit_handle.exit(code)),
                event_bus.clone(),
            );

            // 窗口生命周期事件转发到前端
            let mut window_events = window_module.controller().subscribe();
            let bus = event_bus.clone();
            tauri::async_runtime::spawn(async move {
                loop {
                    match window_events.recv().await {
                        Ok(event) => bus.read().await.publish(event.into()),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!("Window event forwarder lagged by {}", skipped);
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            });

            // send-message -> receive-response
            let bridge = shell.clone();
            app.listen_any(SEND_MESSAGE, move |event| {
                match serde_json::from_str::<String>(event.payload()) {
                    Ok(text) => {
                        let shell = bridge.clone();
                        tauri::async_runtime::spawn(async move {
                            shell
                                .relay(&WindowLabel::chat(), &ChatMessage::from(text))
                                .await;
                        });
                    }
                    Err(e) => tracing::warn!("Malformed {} payload: {}", SEND_MESSAGE, e),
                }
            });

            let report =
                tauri::async_runtime::block_on(shell.startup(tray_module.handler().as_ref()))?;
            if !report.hotkey_bound {
                tracing::warn!("Running without global hotkey");
            }

            app.manage(shell);
            app.manage(window_module);
            app.manage(hotkey_module);
            app.manage(tray_module);

            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                if let Some(shell) = window.app_handle().try_state::<Shell>() {
                    let shell = shell.inner().clone();
                    let label = WindowLabel::new(window.label());
                    tauri::async_runtime::spawn(async move {
                        shell.windows().on_window_destroyed(&label).await;
                    });
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Chat commands
            commands::chat_send_message,
            // Window commands
            commands::window_toggle_chat,
            commands::window_show_main,
            commands::window_open_settings,
            commands::window_list,
            commands::app_quit,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| match event {
        // 托盘应用：关掉最后一个窗口不退出
        RunEvent::ExitRequested {
            code: None, api, ..
        } => {
            api.prevent_exit();
        }
        RunEvent::Exit => {
            if let Some(shell) = app_handle.try_state::<Shell>() {
                tauri::async_runtime::block_on(shell.lifecycle().shutdown());
            }
        }
        _ => {}
    });
}
