//! Window-frame geometry and focus helpers used by the desktop reducer.

use crate::{
    config::WindowManagerConfig,
    model::{DesktopState, Point, Size, WindowDescriptor, WindowGeometry, WindowId},
};

/// Placement for a new window given how many windows are already open.
///
/// Successive windows step diagonally from the cascade origin and wrap after
/// `cascade_wrap` steps so repeated opens never drift off-screen.
pub fn cascade_position(config: &WindowManagerConfig, open_window_count: usize) -> Point {
    let step = (open_window_count % config.cascade_wrap.max(1)) as i32;
    let offset = step.saturating_mul(config.cascade_step);
    config.cascade_origin.offset(offset, offset)
}

/// Offset between the pointer and the window's top-left corner at drag start.
pub fn drag_offset(pointer: Point, position: Point) -> Point {
    pointer.minus(position)
}

/// Window position for a drag update. Only `y` is clamped: the title bar may not leave the top
/// edge, but windows may be dragged past the left and right edges.
pub fn dragged_position(pointer: Point, offset: Point) -> Point {
    let raw = pointer.minus(offset);
    Point {
        x: raw.x,
        y: raw.y.max(0),
    }
}

/// Size for a bottom-right resize update; the top-left corner stays anchored.
pub fn resized_size(pointer: Point, position: Point, min_size: Size) -> Size {
    Size::new(
        pointer.x.saturating_sub(position.x),
        pointer.y.saturating_sub(position.y),
    )
    .clamped_min(min_size)
}

/// Desktop area available to maximized windows, below which the taskbar strip is reserved.
pub fn viewport_rect(width: i32, height: i32, taskbar_height: i32) -> WindowGeometry {
    WindowGeometry::new(
        Point::new(0, 0),
        Size::new(width.max(1), height.saturating_sub(taskbar_height).max(1)),
    )
}

/// Saves the current geometry and fills `viewport`. Returns `false` if already maximized.
pub fn maximize(window: &mut WindowDescriptor, viewport: WindowGeometry) -> bool {
    if window.is_maximized {
        return false;
    }
    window.saved_geometry = Some(window.geometry());
    window.set_geometry(viewport);
    window.is_maximized = true;
    true
}

/// Restores the geometry captured by [`maximize`]. Returns `false` if not maximized.
pub fn restore(window: &mut WindowDescriptor) -> bool {
    if !window.is_maximized {
        return false;
    }
    if let Some(saved) = window.saved_geometry {
        window.set_geometry(saved);
    }
    window.is_maximized = false;
    true
}

/// Most recently created non-minimized window, skipping `excluding`.
pub fn most_recent_visible(state: &DesktopState, excluding: Option<&WindowId>) -> Option<WindowId> {
    state
        .windows
        .iter()
        .rev()
        .find(|w| !w.is_minimized && Some(&w.id) != excluding)
        .map(|w| w.id.clone())
}

/// Hands focus to the most recent visible window other than `excluding` and raises it, or clears
/// focus when every remaining window is minimized.
pub fn transfer_focus(state: &mut DesktopState, excluding: Option<&WindowId>) {
    match most_recent_visible(state, excluding) {
        Some(next) => raise_and_activate(state, &next),
        None => state.active_window_id = None,
    }
}

/// Makes `window_id` active and raises it to the top of the stacking order.
pub fn raise_and_activate(state: &mut DesktopState, window_id: &WindowId) {
    state.z_order.retain(|id| id != window_id);
    state.z_order.push(window_id.clone());
    state.active_window_id = Some(window_id.clone());
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(position: Point, size: Size) -> WindowDescriptor {
        let app_id = ApplicationId::trusted("notes");
        WindowDescriptor {
            id: WindowId::new(app_id.clone(), 0),
            app_id,
            title: "Notes".to_string(),
            icon_id: "notes".to_string(),
            position,
            size,
            min_size: Size::new(320, 240),
            is_minimized: false,
            is_maximized: false,
            saved_geometry: None,
        }
    }

    #[test]
    fn cascade_steps_thirty_pixels_and_wraps_after_five() {
        let config = WindowManagerConfig::default();
        assert_eq!(cascade_position(&config, 0), Point::new(100, 50));
        assert_eq!(cascade_position(&config, 1), Point::new(130, 80));
        assert_eq!(cascade_position(&config, 4), Point::new(220, 170));
        assert_eq!(cascade_position(&config, 5), Point::new(100, 50));
        assert_eq!(cascade_position(&config, 7), Point::new(160, 110));
    }

    #[test]
    fn drag_clamps_top_edge_but_not_horizontal_edges() {
        let offset = drag_offset(Point::new(150, 60), Point::new(100, 50));
        assert_eq!(offset, Point::new(50, 10));
        assert_eq!(
            dragged_position(Point::new(300, -500), offset),
            Point::new(250, 0)
        );
        assert_eq!(
            dragged_position(Point::new(-900, 400), offset),
            Point::new(-950, 390)
        );
    }

    #[test]
    fn resize_never_drops_below_minimum() {
        let min = Size::new(320, 240);
        assert_eq!(
            resized_size(Point::new(0, 0), Point::new(100, 50), min),
            min
        );
        assert_eq!(
            resized_size(Point::new(900, 700), Point::new(100, 50), min),
            Size::new(800, 650)
        );
    }

    #[test]
    fn geometry_saturates_on_extreme_pointers() {
        let offset = drag_offset(Point::new(i32::MIN, i32::MAX), Point::new(100, -100));
        assert_eq!(offset, Point::new(i32::MIN, i32::MAX));
        assert_eq!(
            dragged_position(Point::new(i32::MIN, i32::MIN), Point::new(50, 10)),
            Point::new(i32::MIN, 0)
        );
        let min = Size::new(320, 240);
        assert_eq!(
            resized_size(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), min),
            min
        );
        assert_eq!(
            resized_size(Point::new(i32::MAX, i32::MAX), Point::new(-10, -10), min),
            Size::new(i32::MAX, i32::MAX)
        );
    }

    #[test]
    fn maximize_then_restore_round_trips_geometry() {
        let mut window = descriptor(Point::new(130, 80), Size::new(600, 400));
        let before = window.geometry();
        let viewport = viewport_rect(1280, 800, 48);

        assert!(maximize(&mut window, viewport));
        assert!(window.is_maximized);
        assert_eq!(window.geometry(), viewport);
        assert!(!maximize(&mut window, viewport));
        assert_eq!(window.saved_geometry, Some(before));

        assert!(restore(&mut window));
        assert!(!window.is_maximized);
        assert_eq!(window.geometry(), before);
        assert!(!restore(&mut window));
    }

    #[test]
    fn viewport_reserves_taskbar_strip() {
        assert_eq!(
            viewport_rect(1024, 768, 48),
            WindowGeometry::new(Point::new(0, 0), Size::new(1024, 720))
        );
        assert_eq!(viewport_rect(0, 10, 48).size, Size::new(1, 1));
    }
}
