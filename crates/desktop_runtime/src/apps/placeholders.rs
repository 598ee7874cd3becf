//! Built-in mock app views. The window manager mounts them as opaque bodies.

use desktop_app_contract::AppMountContext;
use leptos::*;

/// Mounts the File Manager mock.
pub(super) fn mount_files_app(context: AppMountContext) -> View {
    let folders = ["Documents", "Downloads", "Pictures", "Music", "Videos"];
    view! {
        <div class="app-shell app-files-shell">
            <div class="app-toolbar" role="group" aria-label="File manager controls">
                <button type="button" class="app-action">"Back"</button>
                <button type="button" class="app-action">"New Folder"</button>
            </div>
            <ul class="app-files-list">
                {folders
                    .into_iter()
                    .map(|name| view! { <li class="app-files-entry">{name}</li> })
                    .collect_view()}
            </ul>
            <LifecycleStatus context=context />
        </div>
    }
    .into_view()
}

/// Mounts the Notes mock.
pub(super) fn mount_notes_app(context: AppMountContext) -> View {
    let text = create_rw_signal(String::new());
    view! {
        <div class="app-shell app-notes-shell">
            <textarea
                class="app-field app-notes-editor"
                placeholder="Start typing..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <div class="app-statusbar">
                <span>{move || format!("{} characters", text.get().chars().count())}</span>
            </div>
            <LifecycleStatus context=context />
        </div>
    }
    .into_view()
}

/// Mounts the Calculator mock.
pub(super) fn mount_calculator_app(context: AppMountContext) -> View {
    let display = create_rw_signal("0".to_string());
    let keys = ["7", "8", "9", "4", "5", "6", "1", "2", "3", "0"];
    view! {
        <div class="app-shell app-calculator-shell">
            <output class="app-calculator-display">{move || display.get()}</output>
            <div class="app-calculator-keys" role="group" aria-label="Calculator keys">
                {keys
                    .into_iter()
                    .map(|key| {
                        view! {
                            <button
                                type="button"
                                class="app-action"
                                on:click=move |_| {
                                    display.update(|value| {
                                        if value == "0" {
                                            value.clear();
                                        }
                                        value.push_str(key);
                                    });
                                }
                            >
                                {key}
                            </button>
                        }
                    })
                    .collect_view()}
                <button type="button" class="app-action" on:click=move |_| display.set("0".to_string())>
                    "C"
                </button>
            </div>
            <LifecycleStatus context=context />
        </div>
    }
    .into_view()
}

/// Mounts the Settings mock.
pub(super) fn mount_settings_app(context: AppMountContext) -> View {
    view! {
        <div class="app-shell app-settings-shell">
            <p><strong>"Settings"</strong></p>
            <label>
                <input type="checkbox" />
                " Reduce motion"
            </label>
            <label>
                <input type="checkbox" />
                " Voice assistant"
            </label>
            <LifecycleStatus context=context />
        </div>
    }
    .into_view()
}

/// Mounts a neutral body for catalog entries without a built-in view.
pub(super) fn mount_generic_app(context: AppMountContext) -> View {
    let app_id = context.app_id.to_string();
    view! {
        <div class="app-shell app-generic-shell">
            <p>{format!("{app_id} is not available in this build.")}</p>
            <LifecycleStatus context=context />
        </div>
    }
    .into_view()
}

#[component]
fn LifecycleStatus(context: AppMountContext) -> impl IntoView {
    let lifecycle = context.lifecycle;
    view! {
        <div
            class="app-statusbar app-lifecycle"
            data-window-key=context.window_key
            data-lifecycle=move || lifecycle.get().token()
        >
            <span>{move || format!("Window: {}", lifecycle.get().token())}</span>
        </div>
    }
}
