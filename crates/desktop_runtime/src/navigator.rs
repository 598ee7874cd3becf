//! Single-screen mobile navigator with back history.
//!
//! The mobile layout shows one full-screen app at a time instead of floating windows. Opening an
//! app pushes it; "back" returns to whatever was on screen before.

use desktop_app_contract::ApplicationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorScreen {
    Home,
    App(ApplicationId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigatorState {
    /// Screens above home, oldest first.
    history: Vec<ApplicationId>,
}

impl NavigatorState {
    pub fn current(&self) -> NavigatorScreen {
        self.history
            .last()
            .cloned()
            .map(NavigatorScreen::App)
            .unwrap_or(NavigatorScreen::Home)
    }

    /// Pushes `app_id`; re-opening the app already on screen is a no-op.
    pub fn open_app(&mut self, app_id: ApplicationId) {
        if self.history.last() == Some(&app_id) {
            return;
        }
        self.history.push(app_id);
    }

    /// Returns `true` when a screen was popped.
    pub fn back(&mut self) -> bool {
        self.history.pop().is_some()
    }

    pub fn home(&mut self) {
        self.history.clear();
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
