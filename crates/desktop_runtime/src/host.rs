//! Browser environment queries used by the desktop shell.
//!
//! Everything here degrades to fixed values off wasm32 so the runtime can be exercised by native
//! tests.

use crate::{model::WindowGeometry, window_manager::viewport_rect};

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, Default)]
/// Host handle for viewport queries.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Returns the desktop area available to the window manager, minus the taskbar strip.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowGeometry {
        let (width, height) = inner_size();
        viewport_rect(width, height, taskbar_height_px)
    }

    /// Local wall-clock time as `(hour, minute)`.
    pub fn clock_now(&self) -> (u32, u32) {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return (date.get_hours(), date.get_minutes());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            (0, 0)
        }
    }

    /// Local calendar date as `(year, month, day)`, with `month` in `1..=12`.
    pub fn date_now(&self) -> (u32, u32, u32) {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return (date.get_full_year(), date.get_month() + 1, date.get_date());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            (1970, 1, 1)
        }
    }
}

fn inner_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
            return (width, height);
        }
    }

    (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
}

/// Formats a 12-hour taskbar clock label such as `3:07 PM`.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let mut display_hour = hour % 12;
    if display_hour == 0 {
        display_hour = 12;
    }
    format!("{display_hour}:{minute:02} {suffix}")
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats the taskbar date label such as `Oct 17, 2026`.
pub fn format_date(year: u32, month: u32, day: u32) -> String {
    let index = month.clamp(1, 12) as usize - 1;
    format!("{} {day}, {year}", MONTH_ABBREVIATIONS[index])
}
