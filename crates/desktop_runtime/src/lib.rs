//! Window-manager core for a browser-hosted simulated desktop.
//!
//! [`reduce_desktop`] owns every state transition; the Leptos components in [`components`] only
//! render [`DesktopState`] and dispatch [`DesktopAction`] values through [`DesktopProvider`].

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod host;
pub mod launcher;
pub mod model;
pub mod navigator;
pub mod reducer;
mod runtime_context;
pub mod voice;
pub mod window_manager;

pub use apps::{AppDescriptor, AppRegistry};
pub use components::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell, MobileNavigator,
};
pub use config::{ConfigError, DesktopConfig, WindowManagerConfig};
pub use launcher::{open_taskbar_apps, taskbar_snapshot};
pub use model::*;
pub use navigator::{NavigatorScreen, NavigatorState};
pub use reducer::{open_app, reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use voice::{parse_voice_command, VoiceIntent};
