//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and the pointer
//! listeners of the active gesture. UI composition stays in [`crate::components`].

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use crate::{
    apps::AppRegistry,
    config::{DesktopConfig, WindowManagerConfig},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionMode},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Browser environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Window-manager tunables and the application registry.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionMode>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Global pointer listeners registered for the active gesture only.
    pub pointer_listeners: StoredValue<Vec<WindowListenerHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current desktop area for maximized windows.
    pub fn viewport(&self) -> crate::model::WindowGeometry {
        let taskbar_height = self
            .config
            .with_value(|config| config.window_manager.taskbar_height);
        self.host
            .get_value()
            .desktop_viewport_rect(taskbar_height)
    }
}

fn load_config() -> DesktopConfig {
    DesktopConfig::builtin().unwrap_or_else(|err| {
        logging::warn!("desktop catalog load failed, starting with no apps: {err}");
        DesktopConfig {
            window_manager: WindowManagerConfig::default(),
            apps: AppRegistry::default(),
        }
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let config = store_value(load_config());
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionMode::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let pointer_listeners = store_value(Vec::<WindowListenerHandle>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut mode = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_mode = mode.clone();

        let result =
            config.with_value(|config| reduce_desktop(&mut desktop, &mut mode, config, action));
        match result {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if mode != previous_mode {
                    interaction.set(mode);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer rejected action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        config,
        state,
        interaction,
        effects,
        pointer_listeners,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || effect_executor::detach_pointer_listeners(runtime));

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
