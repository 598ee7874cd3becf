//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! The window manager treats every hosted app as an opaque view: it only knows the app's
//! [`ApplicationId`] and a mount function ([`AppModule`]) that produces a [`View`] for a window
//! body. Apps observe their window through the [`AppLifecycleEvent`] signal in
//! [`AppMountContext`] and never touch window state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{ReadSignal, View};
use serde::{Deserialize, Serialize};

/// Maximum accepted length of an application id.
pub const MAX_APPLICATION_ID_LEN: usize = 32;

/// Stable identifier for an application in the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase slug such as `notes` or `file-manager`.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected a lowercase slug of at most {MAX_APPLICATION_ID_LEN} chars"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ApplicationId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApplicationId> for String {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > MAX_APPLICATION_ID_LEN {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle events emitted by the desktop window manager.
pub enum AppLifecycleEvent {
    /// App view has been mounted into a managed window.
    Mounted,
    /// Window became the active window.
    Focused,
    /// Window lost focus to another window.
    Blurred,
    /// Window was minimized.
    Minimized,
    /// Window was restored from the minimized state.
    Restored,
    /// Window was removed from the desktop.
    Closed,
}

impl AppLifecycleEvent {
    /// Returns a stable string token for debugging hooks and DOM data attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Focused => "focused",
            Self::Blurred => "blurred",
            Self::Minimized => "minimized",
            Self::Restored => "restored",
            Self::Closed => "closed",
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// App id from the registry.
    pub app_id: ApplicationId,
    /// Display form of the hosting window id (`{app_id}-{serial}`), or a screen key on mobile.
    pub window_key: String,
    /// Reactive lifecycle signal for the hosting window.
    pub lifecycle: ReadSignal<AppLifecycleEvent>,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// View factory for one application, stored in the application registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
