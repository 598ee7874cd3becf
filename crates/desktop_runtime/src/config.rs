//! Desktop configuration: window-manager tunables and the application catalog.
//!
//! `desktop.toml` is validated and converted to JSON by `build.rs`; this module parses that
//! catalog at startup and assembles the read-only [`AppRegistry`].

use std::collections::BTreeSet;

use desktop_app_contract::ApplicationId;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    apps::{self, AppDescriptor, AppRegistry},
    model::{Point, Size, DEFAULT_MIN_WINDOW_HEIGHT, DEFAULT_MIN_WINDOW_WIDTH},
};

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

#[derive(Debug, Error)]
/// Errors raised while turning a catalog into a [`DesktopConfig`].
pub enum ConfigError {
    /// Catalog JSON could not be parsed.
    #[error("desktop catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// An app entry carries an id that is not a valid [`ApplicationId`].
    #[error("{0}")]
    InvalidAppId(String),
    /// Two entries share an app id.
    #[error("duplicate app id `{0}`")]
    DuplicateApp(ApplicationId),
    /// The catalog lists no apps.
    #[error("desktop catalog declares no apps")]
    EmptyRegistry,
}

/// Window-manager tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowManagerConfig {
    /// Position of the first cascaded window.
    pub cascade_origin: Point,
    /// Per-step offset (both axes) between cascaded windows.
    pub cascade_step: i32,
    /// Number of cascade steps before placement wraps back to the origin.
    pub cascade_wrap: usize,
    /// Minimum size applied to apps that do not declare their own.
    pub default_min_size: Size,
    /// Height reserved for the taskbar strip below maximized windows.
    pub taskbar_height: i32,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            cascade_origin: Point::new(100, 50),
            cascade_step: 30,
            cascade_wrap: 5,
            default_min_size: Size::new(DEFAULT_MIN_WINDOW_WIDTH, DEFAULT_MIN_WINDOW_HEIGHT),
            taskbar_height: 48,
        }
    }
}

/// Full desktop configuration shared by the reducer and the shell.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    pub window_manager: WindowManagerConfig,
    pub apps: AppRegistry,
}

#[derive(Debug, Deserialize)]
struct CatalogOrigin {
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
struct CatalogWindowManager {
    cascade_origin: CatalogOrigin,
    cascade_step: i32,
    cascade_wrap: usize,
    min_width: i32,
    min_height: i32,
    taskbar_height: i32,
}

#[derive(Debug, Deserialize)]
struct CatalogApp {
    app_id: String,
    title: String,
    icon: String,
    width: i32,
    height: i32,
    #[serde(default)]
    min_width: Option<i32>,
    #[serde(default)]
    min_height: Option<i32>,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    voice_aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    window_manager: CatalogWindowManager,
    apps: Vec<CatalogApp>,
}

impl DesktopConfig {
    /// Parses the catalog generated from `desktop.toml` at build time.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(DESKTOP_CATALOG_JSON)
    }

    /// Parses a catalog document and resolves each app's view factory.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        let wm = catalog.window_manager;
        let window_manager = WindowManagerConfig {
            cascade_origin: Point::new(wm.cascade_origin.x, wm.cascade_origin.y),
            cascade_step: wm.cascade_step,
            cascade_wrap: wm.cascade_wrap.max(1),
            default_min_size: Size::new(wm.min_width.max(1), wm.min_height.max(1)),
            taskbar_height: wm.taskbar_height.max(0),
        };

        if catalog.apps.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(catalog.apps.len());
        for app in catalog.apps {
            let app_id = ApplicationId::new(app.app_id).map_err(ConfigError::InvalidAppId)?;
            if !seen.insert(app_id.clone()) {
                return Err(ConfigError::DuplicateApp(app_id));
            }
            let min_size = Size::new(
                app.min_width
                    .unwrap_or(window_manager.default_min_size.width)
                    .max(1),
                app.min_height
                    .unwrap_or(window_manager.default_min_size.height)
                    .max(1),
            );
            entries.push(AppDescriptor {
                module: apps::builtin_module(&app_id),
                app_id,
                title: app.title,
                icon_id: app.icon,
                default_size: Size::new(app.width, app.height).clamped_min(min_size),
                min_size,
                show_on_desktop: app.show_on_desktop,
                pinned: app.pinned,
                voice_aliases: app
                    .voice_aliases
                    .into_iter()
                    .map(|alias| alias.to_lowercase())
                    .collect(),
            });
        }

        Ok(Self {
            window_manager,
            apps: AppRegistry::new(entries),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_loads_four_apps_with_defaults() {
        let config = DesktopConfig::builtin().expect("builtin catalog");
        assert_eq!(config.window_manager, WindowManagerConfig::default());
        let ids: Vec<&str> = config.apps.iter().map(|a| a.app_id.as_str()).collect();
        assert_eq!(ids, vec!["files", "notes", "calculator", "settings"]);

        let notes = config
            .apps
            .get(&ApplicationId::trusted("notes"))
            .expect("notes registered");
        assert_eq!(notes.default_size, Size::new(600, 400));
        assert_eq!(notes.min_size, Size::new(320, 240));

        let calculator = config
            .apps
            .get(&ApplicationId::trusted("calculator"))
            .expect("calculator registered");
        assert_eq!(calculator.default_size, Size::new(320, 450));
        assert_eq!(calculator.min_size, Size::new(280, 400));
    }

    #[test]
    fn duplicate_app_ids_are_rejected() {
        let raw = r#"{
            "window_manager": {"cascade_origin": {"x": 0, "y": 0}, "cascade_step": 10,
                "cascade_wrap": 3, "min_width": 100, "min_height": 100, "taskbar_height": 40},
            "apps": [
                {"app_id": "notes", "title": "Notes", "icon": "notes", "width": 200, "height": 200},
                {"app_id": "notes", "title": "Notes 2", "icon": "notes", "width": 200, "height": 200}
            ]
        }"#;
        let err = DesktopConfig::from_json(raw).expect_err("duplicate id");
        assert!(matches!(err, ConfigError::DuplicateApp(id) if id.as_str() == "notes"));
    }

    #[test]
    fn invalid_app_id_and_empty_catalog_are_rejected() {
        let bad_id = r#"{
            "window_manager": {"cascade_origin": {"x": 0, "y": 0}, "cascade_step": 10,
                "cascade_wrap": 3, "min_width": 100, "min_height": 100, "taskbar_height": 40},
            "apps": [{"app_id": "Bad App", "title": "x", "icon": "x", "width": 1, "height": 1}]
        }"#;
        assert!(matches!(
            DesktopConfig::from_json(bad_id),
            Err(ConfigError::InvalidAppId(_))
        ));

        let empty = r#"{
            "window_manager": {"cascade_origin": {"x": 0, "y": 0}, "cascade_step": 10,
                "cascade_wrap": 0, "min_width": 100, "min_height": 100, "taskbar_height": 40},
            "apps": []
        }"#;
        assert!(matches!(
            DesktopConfig::from_json(empty),
            Err(ConfigError::EmptyRegistry)
        ));
        assert!(matches!(
            DesktopConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn default_size_never_starts_below_minimum() {
        let raw = r#"{
            "window_manager": {"cascade_origin": {"x": 10, "y": 20}, "cascade_step": 15,
                "cascade_wrap": 0, "min_width": 300, "min_height": 200, "taskbar_height": 40},
            "apps": [{"app_id": "tiny", "title": "Tiny", "icon": "tiny", "width": 50, "height": 50,
                "voice_aliases": ["Tiny App"]}]
        }"#;
        let config = DesktopConfig::from_json(raw).expect("valid catalog");
        assert_eq!(config.window_manager.cascade_wrap, 1);
        let tiny = config.apps.iter().next().expect("tiny");
        assert_eq!(tiny.default_size, Size::new(300, 200));
        assert_eq!(tiny.voice_aliases, vec!["tiny app".to_string()]);
    }

    #[test]
    fn non_positive_minimum_sizes_are_floored() {
        let raw = r#"{
            "window_manager": {"cascade_origin": {"x": 0, "y": 0}, "cascade_step": 30,
                "cascade_wrap": 5, "min_width": -10, "min_height": 0, "taskbar_height": 48},
            "apps": [
                {"app_id": "shrinky", "title": "Shrinky", "icon": "shrinky", "width": 400,
                    "height": 300, "min_width": -50, "min_height": 0},
                {"app_id": "plain", "title": "Plain", "icon": "plain", "width": 400, "height": 300}
            ]
        }"#;
        let config = DesktopConfig::from_json(raw).expect("valid catalog");
        assert_eq!(config.window_manager.default_min_size, Size::new(1, 1));
        let sizes: Vec<Size> = config.apps.iter().map(|app| app.min_size).collect();
        assert_eq!(sizes, vec![Size::new(1, 1), Size::new(1, 1)]);

        let shrinky = config.apps.iter().next().expect("shrinky");
        let resized = crate::window_manager::resized_size(
            Point::new(-500, -500),
            Point::new(0, 0),
            shrinky.min_size,
        );
        assert_eq!(resized, Size::new(1, 1));
    }
}

