use super::*;
use crate::reducer::DesktopAction;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = runtime.config.with_value(|config| config.apps.pinned());

    view! {
        <Show when=move || state.with(|s| s.start_menu_open) fallback=|| ()>
            <div
                class="start-menu-backdrop"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            ></div>
            <div
                id="start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
            >
                {entries
                    .iter()
                    .map(|app| {
                        let app_id = store_value(app.app_id.clone());
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class="start-menu-item"
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::OpenApp {
                                        app_id: app_id.get_value(),
                                    });
                                }
                            >
                                <span class=format!("icon icon-{}", app.icon_id) aria-hidden="true"></span>
                                <span>{app.title.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
