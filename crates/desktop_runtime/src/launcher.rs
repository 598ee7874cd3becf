//! Read-only launcher/taskbar projection of the window registry.

use crate::{
    apps::AppRegistry,
    model::{DesktopState, TaskbarAppSnapshot},
};

/// One snapshot per registry app, in registry order.
pub fn taskbar_snapshot(state: &DesktopState, registry: &AppRegistry) -> Vec<TaskbarAppSnapshot> {
    registry
        .iter()
        .map(|entry| {
            let window = state.window_for_app(&entry.app_id);
            TaskbarAppSnapshot {
                app_id: entry.app_id.clone(),
                title: entry.title.clone(),
                icon_id: entry.icon_id.clone(),
                is_open: window.is_some(),
                is_minimized: window.map(|w| w.is_minimized).unwrap_or(false),
                is_active: window
                    .map(|w| state.is_active(&w.id))
                    .unwrap_or(false),
            }
        })
        .collect()
}

/// Snapshots for apps that currently have a window, as shown in the taskbar strip.
pub fn open_taskbar_apps(state: &DesktopState, registry: &AppRegistry) -> Vec<TaskbarAppSnapshot> {
    taskbar_snapshot(state, registry)
        .into_iter()
        .filter(|app| app.is_open)
        .collect()
}

pub(crate) fn taskbar_button_aria_label(app: &TaskbarAppSnapshot) -> String {
    let mut parts = vec![app.title.clone()];
    if app.is_active {
        parts.push("focused".to_string());
    }
    if app.is_minimized {
        parts.push("minimized".to_string());
    }
    parts.join(", ")
}
