use std::{cmp::Ordering, fmt};

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 320;
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 240;

/// Identifier of one window instance, displayed as `{app_id}-{serial}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId {
    serial: u64,
    app_id: ApplicationId,
}

impl WindowId {
    pub fn new(app_id: ApplicationId, serial: u64) -> Self {
        Self { serial, app_id }
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn app_id(&self) -> &ApplicationId {
        &self.app_id
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.app_id, self.serial)
    }
}

impl PartialOrd for WindowId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WindowId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serial
            .cmp(&other.serial)
            .then_with(|| self.app_id.cmp(&other.app_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    pub fn minus(self, other: Point) -> Self {
        Self {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WINDOW_WIDTH, DEFAULT_MIN_WINDOW_HEIGHT)
    }
}

/// Position and size pair; also used for the desktop viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
}

impl WindowGeometry {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub icon_id: String,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub saved_geometry: Option<WindowGeometry>,
}

impl WindowDescriptor {
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::new(self.position, self.size)
    }

    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.position = geometry.position;
        self.size = geometry.size;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    /// Creation order; focus transfer walks this from the back.
    pub windows: Vec<WindowDescriptor>,
    pub active_window_id: Option<WindowId>,
    pub next_window_serial: u64,
    /// Back-to-front stacking order.
    pub z_order: Vec<WindowId>,
    pub start_menu_open: bool,
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.id == *window_id)
    }

    pub fn window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowDescriptor> {
        self.windows.iter_mut().find(|w| w.id == *window_id)
    }

    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<&WindowDescriptor> {
        self.windows.iter().find(|w| w.app_id == *app_id)
    }

    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_window_id.as_ref() == Some(window_id)
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter().filter(|w| !w.is_minimized)
    }

    /// Stacking index (1-based) of `window_id`, or 0 when it is not on the desktop.
    pub fn stack_index(&self, window_id: &WindowId) -> usize {
        self.z_order
            .iter()
            .position(|id| id == window_id)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position minus window position at press time.
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
}

/// Pointer gesture state; at most one gesture is active across the desktop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(&session.window_id),
            Self::Resizing(session) => Some(&session.window_id),
        }
    }
}

/// Read-only per-app view handed to the launcher and taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarAppSnapshot {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon_id: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_id_displays_app_and_serial() {
        let id = WindowId::new(ApplicationId::trusted("notes"), 3);
        assert_eq!(id.to_string(), "notes-3");
    }

    #[test]
    fn window_ids_order_by_serial() {
        let older = WindowId::new(ApplicationId::trusted("notes"), 2);
        let newer = WindowId::new(ApplicationId::trusted("calculator"), 7);
        assert!(older < newer);
    }

    #[test]
    fn size_clamp_only_raises_below_minimum() {
        let min = Size::new(320, 240);
        assert_eq!(Size::new(100, 500).clamped_min(min), Size::new(320, 500));
        assert_eq!(Size::new(640, 480).clamped_min(min), Size::new(640, 480));
    }

    #[test]
    fn interaction_mode_reports_target_window() {
        let id = WindowId::new(ApplicationId::trusted("files"), 0);
        let mode = InteractionMode::Resizing(ResizeSession {
            window_id: id.clone(),
        });
        assert!(!mode.is_idle());
        assert_eq!(mode.window_id(), Some(&id));
        assert_eq!(InteractionMode::default().window_id(), None);
    }
}
