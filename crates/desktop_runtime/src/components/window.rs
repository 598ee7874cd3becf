use desktop_app_contract::{AppLifecycleEvent, AppMountContext};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{model::WindowId, reducer::DesktopAction};

/// Base z-index for managed windows; the taskbar and menus sit above the window layer.
const WINDOW_Z_INDEX_BASE: usize = 50;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let window_id = store_value(window_id);

    let window = create_memo(move |_| window_id.with_value(|id| state.with(|s| s.window(id).cloned())));
    let z_index = create_memo(move |_| {
        window_id.with_value(|id| state.with(|s| WINDOW_Z_INDEX_BASE + s.stack_index(id)))
    });
    let is_active = create_memo(move |_| window_id.with_value(|id| state.with(|s| s.is_active(id))));

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.get_value(),
            });
        }
    };
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: window_id.get_value(),
        })
    };
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        })
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: window_id.get_value(),
            viewport: runtime.viewport(),
        })
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };

    let style = move || {
        window
            .get()
            .map(|win| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.position.x,
                    win.position.y,
                    win.size.width,
                    win.size.height,
                    z_index.get()
                )
            })
            .unwrap_or_default()
    };
    let class = move || {
        let mut class = String::from("desktop-window");
        if is_active.get() {
            class.push_str(" focused");
        }
        if let Some(win) = window.get() {
            if win.is_minimized {
                class.push_str(" minimized");
            }
            if win.is_maximized {
                class.push_str(" maximized");
            }
        }
        class
    };
    let title = move || window.get().map(|win| win.title).unwrap_or_default();
    let is_minimized = move || window.get().map(|win| win.is_minimized).unwrap_or(false);
    let is_maximized = move || window.get().map(|win| win.is_maximized).unwrap_or(false);

    view! {
        <section
            class=class
            style=style
            hidden=is_minimized
            role="dialog"
            aria-label=title
            data-window-id=move || window_id.get_value().to_string()
            on:pointerdown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <span
                        class=move || {
                            window
                                .get()
                                .map(|win| format!("titlebar-app-icon icon icon-{}", win.icon_id))
                                .unwrap_or_default()
                        }
                        aria-hidden="true"
                    ></span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || if is_maximized() { "❐" } else { "□" }}
                    </button>
                    <button
                        type="button"
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id.get_value() />
            </div>
            <Show when=move || !is_maximized() fallback=|| ()>
                <WindowResizeHandle window_id=window_id.get_value() />
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
        });
    };

    view! {
        <div
            class="window-resize-handle resize-se"
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

/// Lifecycle event implied by a change in a window's `(minimized, active)` flags.
fn lifecycle_transition(previous: (bool, bool), current: (bool, bool)) -> Option<AppLifecycleEvent> {
    let (was_minimized, was_active) = previous;
    let (minimized, active) = current;
    match (was_minimized, minimized) {
        (false, true) => return Some(AppLifecycleEvent::Minimized),
        (true, false) if !active => return Some(AppLifecycleEvent::Restored),
        _ => {}
    }
    match (was_active, active) {
        (false, true) => Some(AppLifecycleEvent::Focused),
        (true, false) if !minimized => Some(AppLifecycleEvent::Blurred),
        _ => None,
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let (lifecycle, set_lifecycle) = create_signal(AppLifecycleEvent::Mounted);

    // Mounted once per window; minimizing hides the frame without unmounting the app.
    let contents = state
        .with_untracked(|s| s.window(&window_id).map(|w| w.app_id.clone()))
        .and_then(|app_id| {
            let module = runtime.config.with_value(|config| config.apps.module(&app_id))?;
            Some(module.mount(AppMountContext {
                app_id,
                window_key: window_id.to_string(),
                lifecycle,
            }))
        })
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    let tracked_id = window_id.clone();
    create_effect(move |previous: Option<(bool, bool)>| {
        let current = state.with(|s| {
            (
                s.window(&tracked_id).map(|w| w.is_minimized).unwrap_or(false),
                s.is_active(&tracked_id),
            )
        });
        if let Some(previous) = previous {
            if let Some(event) = lifecycle_transition(previous, current) {
                set_lifecycle.set(event);
            }
        }
        current
    });
    on_cleanup(move || {
        let _ = set_lifecycle.try_set(AppLifecycleEvent::Closed);
    });

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lifecycle_transitions_follow_window_flags() {
        assert_eq!(
            lifecycle_transition((false, true), (true, false)),
            Some(AppLifecycleEvent::Minimized)
        );
        assert_eq!(
            lifecycle_transition((true, false), (false, true)),
            Some(AppLifecycleEvent::Focused)
        );
        assert_eq!(
            lifecycle_transition((true, false), (false, false)),
            Some(AppLifecycleEvent::Restored)
        );
        assert_eq!(
            lifecycle_transition((false, true), (false, false)),
            Some(AppLifecycleEvent::Blurred)
        );
        assert_eq!(lifecycle_transition((false, false), (false, false)), None);
    }
}
