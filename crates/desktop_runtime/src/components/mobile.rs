use desktop_app_contract::{AppLifecycleEvent, AppMountContext, ApplicationId};

use super::*;
use crate::navigator::{NavigatorScreen, NavigatorState};

#[component]
/// Single-screen layout: an app grid home screen and one full-screen app at a time.
pub fn MobileNavigator() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let navigator = create_rw_signal(NavigatorState::default());
    let screen = create_memo(move |_| navigator.with(NavigatorState::current));
    let apps = runtime.config.with_value(|config| config.apps.iter().cloned().collect::<Vec<_>>());

    let back = move |_| {
        navigator.update(|nav| {
            nav.back();
        })
    };
    let home = move |_| navigator.update(NavigatorState::home);

    view! {
        <div class="mobile-shell" data-testid="mobile">
            <header class="mobile-header">
                <button
                    type="button"
                    aria-label="Back"
                    disabled=move || !navigator.with(NavigatorState::can_go_back)
                    on:click=back
                >
                    "‹"
                </button>
                <h1>
                    {move || match screen.get() {
                        NavigatorScreen::Home => "Home".to_string(),
                        NavigatorScreen::App(app_id) => runtime
                            .config
                            .with_value(|config| config.apps.get(&app_id).map(|app| app.title.clone()))
                            .unwrap_or_else(|| app_id.to_string()),
                    }}
                </h1>
                <button type="button" aria-label="Home" on:click=home>
                    "⌂"
                </button>
            </header>
            <main class="mobile-screen">
                {move || match screen.get() {
                    NavigatorScreen::Home => {
                        let apps = apps.clone();
                        view! {
                            <div class="mobile-app-grid">
                                {apps
                                    .into_iter()
                                    .map(|app| {
                                        let app_id = store_value(app.app_id.clone());
                                        view! {
                                            <button
                                                type="button"
                                                class="mobile-app-tile"
                                                on:click=move |_| {
                                                    navigator.update(|nav| nav.open_app(app_id.get_value()))
                                                }
                                            >
                                                <span class=format!("icon icon-{}", app.icon_id) aria-hidden="true"></span>
                                                <span>{app.title}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_view()
                    }
                    NavigatorScreen::App(app_id) => {
                        let depth = navigator.with_untracked(NavigatorState::depth);
                        view! { <MobileAppScreen app_id=app_id depth=depth /> }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn MobileAppScreen(app_id: ApplicationId, depth: usize) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (lifecycle, set_lifecycle) = create_signal(AppLifecycleEvent::Mounted);
    on_cleanup(move || {
        let _ = set_lifecycle.try_set(AppLifecycleEvent::Closed);
    });

    let module = runtime.config.with_value(|config| config.apps.module(&app_id));
    match module {
        Some(module) => module.mount(AppMountContext {
            window_key: format!("mobile-{app_id}-{depth}"),
            app_id,
            lifecycle,
        }),
        None => view! { <p>"Unknown app"</p> }.into_view(),
    }
}
