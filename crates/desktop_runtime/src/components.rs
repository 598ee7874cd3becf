//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod mobile;
mod taskbar;
mod voice_overlay;
mod window;

use leptos::*;

use self::{
    menus::StartMenu, taskbar::Taskbar, voice_overlay::VoiceOverlay, window::DesktopWindow,
};

use crate::model::Point;

pub use self::mobile::MobileNavigator;
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: desktop icons, managed windows, start menu and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let voice_open = create_rw_signal(false);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(crate::reducer::DesktopAction::ViewportResized {
            viewport: runtime.viewport(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    let desktop_icons = runtime.config.with_value(|config| config.apps.desktop_icons());

    view! {
        <div id="desktop-shell-root" class="desktop-shell" data-testid="desktop">
            <div class="desktop-icon-grid">
                {desktop_icons
                    .into_iter()
                    .map(|app| {
                        let app_id = store_value(app.app_id.clone());
                        let is_open = move || {
                            state.with(|s| s.window_for_app(&app_id.get_value()).is_some())
                        };
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_open() { "desktop-icon active" } else { "desktop-icon" }
                                }
                                data-testid=format!("desktop-icon-{}", app.app_id)
                                on:click=move |_| {
                                    runtime.dispatch_action(crate::reducer::DesktopAction::OpenApp {
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

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|s| s.windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>())
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <StartMenu />
            <VoiceOverlay open=voice_open />
            <Taskbar voice_open=voice_open />
        </div>
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
