//! Read-only application registry: display metadata plus the view factory for every app.

mod placeholders;

use desktop_app_contract::{AppModule, ApplicationId};

use crate::model::Size;

/// One registry entry. Immutable after the registry is built.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon_id: String,
    pub default_size: Size,
    pub min_size: Size,
    pub show_on_desktop: bool,
    pub pinned: bool,
    /// Lowercase phrases accepted after "open" in voice commands.
    pub voice_aliases: Vec<String>,
    pub module: AppModule,
}

#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    entries: Vec<AppDescriptor>,
}

impl AppRegistry {
    pub fn new(entries: Vec<AppDescriptor>) -> Self {
        Self { entries }
    }

    pub fn get(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.entries.iter().find(|entry| entry.app_id == *app_id)
    }

    pub fn contains(&self, app_id: &ApplicationId) -> bool {
        self.get(app_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn desktop_icons(&self) -> Vec<AppDescriptor> {
        self.entries
            .iter()
            .filter(|entry| entry.show_on_desktop)
            .cloned()
            .collect()
    }

    pub fn pinned(&self) -> Vec<AppDescriptor> {
        self.entries
            .iter()
            .filter(|entry| entry.pinned)
            .cloned()
            .collect()
    }

    /// View factory for `app_id`.
    pub fn module(&self, app_id: &ApplicationId) -> Option<AppModule> {
        self.get(app_id).map(|entry| entry.module)
    }
}

/// Resolves the built-in view for a catalog id; unknown ids get a generic placeholder.
pub(crate) fn builtin_module(app_id: &ApplicationId) -> AppModule {
    match app_id.as_str() {
        "files" => AppModule::new(placeholders::mount_files_app),
        "notes" => AppModule::new(placeholders::mount_notes_app),
        "calculator" => AppModule::new(placeholders::mount_calculator_app),
        "settings" => AppModule::new(placeholders::mount_settings_app),
        _ => AppModule::new(placeholders::mount_generic_app),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;

    fn registry() -> AppRegistry {
        DesktopConfig::builtin().expect("builtin catalog").apps
    }

    #[test]
    fn lookup_by_app_id() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains(&ApplicationId::trusted("files")));
        assert!(!registry.contains(&ApplicationId::trusted("weather")));
        assert!(registry.module(&ApplicationId::trusted("weather")).is_none());
        assert!(registry.module(&ApplicationId::trusted("notes")).is_some());
        assert_eq!(
            registry
                .get(&ApplicationId::trusted("files"))
                .map(|entry| entry.title.as_str()),
            Some("File Manager")
        );
    }

    #[test]
    fn desktop_icons_and_pins_follow_flags() {
        let registry = registry();
        let icons: Vec<String> = registry
            .desktop_icons()
            .into_iter()
            .map(|entry| entry.app_id.to_string())
            .collect();
        assert_eq!(icons, vec!["files", "notes", "calculator", "settings"]);
        assert_eq!(registry.pinned().len(), 4);
    }
}
