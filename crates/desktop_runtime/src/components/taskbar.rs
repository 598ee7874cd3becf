use std::time::Duration;

use super::*;
use crate::{
    host::{format_clock, format_date},
    launcher::{open_taskbar_apps, taskbar_button_aria_label},
    reducer::DesktopAction,
};

#[component]
pub(super) fn Taskbar(voice_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let running_apps =
        create_memo(move |_| state.with(|s| runtime.config.with_value(|c| open_taskbar_apps(s, &c.apps))));

    let read_clock = move || {
        let host = runtime.host.get_value();
        let (hour, minute) = host.clock_now();
        let (year, month, day) = host.date_now();
        (format_clock(hour, minute), format_date(year, month, day))
    };
    let clock_label = create_rw_signal(read_clock());
    match set_interval_with_handle(
        move || {
            let next = read_clock();
            if clock_label.get_untracked() != next {
                clock_label.set(next);
            }
        },
        Duration::from_secs(1),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    let taskbar_height = runtime
        .config
        .with_value(|config| config.window_manager.taskbar_height);

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            style=format!("height:{taskbar_height}px;")
        >
            <button
                id="taskbar-start-button"
                type="button"
                class=move || {
                    if state.with(|s| s.start_menu_open) { "start-button active" } else { "start-button" }
                }
                aria-haspopup="menu"
                aria-expanded=move || state.with(|s| s.start_menu_open).to_string()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                "Start"
            </button>

            <div class="taskbar-running" role="list">
                <For
                    each=move || running_apps.get()
                    key=|app| (app.app_id.clone(), app.is_minimized, app.is_active)
                    let:app
                >
                    {
                        let app_id = store_value(app.app_id.clone());
                        let mut class = String::from("taskbar-app");
                        if app.is_active {
                            class.push_str(" active");
                        }
                        if app.is_minimized {
                            class.push_str(" minimized");
                        }
                        view! {
                            <button
                                type="button"
                                role="listitem"
                                class=class
                                aria-label=taskbar_button_aria_label(&app)
                                aria-pressed=app.is_active.to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::LauncherClick {
                                        app_id: app_id.get_value(),
                                    });
                                }
                            >
                                <span class=format!("icon icon-{}", app.icon_id) aria-hidden="true"></span>
                                <span class="taskbar-app-title">{app.title.clone()}</span>
                            </button>
                        }
                    }
                </For>
            </div>

            <div class="taskbar-tray">
                <button
                    type="button"
                    class=move || if voice_open.get() { "voice-button active" } else { "voice-button" }
                    aria-label="Voice assistant"
                    on:click=move |_| voice_open.update(|open| *open = !*open)
                >
                    "🎤"
                </button>
                <div class="taskbar-clock">
                    <time class="taskbar-time">{move || clock_label.with(|(time, _)| time.clone())}</time>
                    <time class="taskbar-date">{move || clock_label.with(|(_, date)| date.clone())}</time>
                </div>
            </div>
        </footer>
    }
}
