use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CascadeOrigin {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManagerSection {
    cascade_origin: CascadeOrigin,
    cascade_step: i32,
    cascade_wrap: usize,
    min_width: i32,
    min_height: i32,
    taskbar_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesktopManifest {
    schema_version: u32,
    window_manager: WindowManagerSection,
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: DesktopManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "desktop manifest schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.apps.is_empty() {
        panic!("desktop manifest {} declares no apps", path.display());
    }
    if manifest.window_manager.min_width <= 0 || manifest.window_manager.min_height <= 0 {
        panic!("window_manager minimum size in {} must be positive", path.display());
    }
    if manifest.window_manager.cascade_wrap == 0 {
        panic!("cascade_wrap in {} must be at least 1", path.display());
    }

    let mut seen = BTreeSet::new();
    for app in &manifest.apps {
        if !seen.insert(app.app_id.clone()) {
            panic!("duplicate app id `{}` in {}", app.app_id, path.display());
        }
        if app.width <= 0 || app.height <= 0 {
            panic!("app `{}` has a non-positive default size", app.app_id);
        }
        if app.min_width.is_some_and(|w| w <= 0) || app.min_height.is_some_and(|h| h <= 0) {
            panic!("app `{}` has a non-positive minimum size", app.app_id);
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop catalog");
    let generated = format!(
        "/// Build-time generated desktop configuration catalog JSON.\n\
pub const DESKTOP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
