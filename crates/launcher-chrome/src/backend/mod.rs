//! Native windowing backends.
//!
//! [`WindowSystem`] is the seam between the chrome adapter and the host
//! windowing system. Each method maps onto a single native call.
//!
//! | Backend | Platform | Purpose |
//! |---------|----------|---------|
//! | [`Win32WindowSystem`] | Windows | Production |
//! | [`InMemoryWindowSystem`] | Any | Simulation for tests and headless hosts |

mod memory;
#[cfg(target_os = "windows")]
mod win32;

pub use memory::{FlashRequest, InMemoryWindowSystem, SimulatedWindow};
#[cfg(target_os = "windows")]
pub use win32::Win32WindowSystem;

use std::path::Path;

use crate::error::PlatformError;
use crate::geometry::Rect;
use crate::handle::{MonitorHandle, WindowHandle};
use crate::icon::{ExtractedIcons, IconClass, IconHandle};
use crate::progress::ProgressState;
use crate::style::WindowStyle;

/// Primitive operations of the host windowing system.
///
/// Methods that return `()` are fire-and-forget: the native call's result is
/// not reported to the caller.
pub trait WindowSystem {
    /// The monitor hosting `window`, falling back to the primary monitor.
    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle>;

    /// The usable area of `monitor`, excluding taskbars and docked toolbars.
    fn monitor_work_area(&self, monitor: MonitorHandle) -> Result<Rect, PlatformError>;

    /// The current bounds of `window`.
    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError>;

    /// Move `window` without resizing it or changing z-order or activation.
    fn move_window(&self, window: WindowHandle, x: i32, y: i32);

    /// Resize `window` without moving it or changing z-order or activation.
    fn resize_window(&self, window: WindowHandle, width: i32, height: i32);

    /// Flash the taskbar button of `window` `count` times and stop.
    fn flash_window(&self, window: WindowHandle, count: u32);

    /// Extract the first large and small icon embedded in `binary_path`.
    fn extract_icons(&self, binary_path: &Path) -> ExtractedIcons;

    /// Assign `icon` to the `class` slot of `window`.
    fn set_icon(&self, window: WindowHandle, class: IconClass, icon: IconHandle);

    /// The current style bits of `window`.
    fn window_style(&self, window: WindowHandle) -> WindowStyle;

    /// Replace the style bits of `window`.
    fn set_window_style(&self, window: WindowHandle, style: WindowStyle);

    /// Send a state-change message to a progress bar control.
    fn send_progress_state(&self, bar: WindowHandle, state: ProgressState);
}

impl<S: WindowSystem + ?Sized> WindowSystem for &S {
    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle> {
        (**self).monitor_from_window(window)
    }

    fn monitor_work_area(&self, monitor: MonitorHandle) -> Result<Rect, PlatformError> {
        (**self).monitor_work_area(monitor)
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        (**self).window_rect(window)
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32) {
        (**self).move_window(window, x, y)
    }

    fn resize_window(&self, window: WindowHandle, width: i32, height: i32) {
        (**self).resize_window(window, width, height)
    }

    fn flash_window(&self, window: WindowHandle, count: u32) {
        (**self).flash_window(window, count)
    }

    fn extract_icons(&self, binary_path: &Path) -> ExtractedIcons {
        (**self).extract_icons(binary_path)
    }

    fn set_icon(&self, window: WindowHandle, class: IconClass, icon: IconHandle) {
        (**self).set_icon(window, class, icon)
    }

    fn window_style(&self, window: WindowHandle) -> WindowStyle {
        (**self).window_style(window)
    }

    fn set_window_style(&self, window: WindowHandle, style: WindowStyle) {
        (**self).set_window_style(window, style)
    }

    fn send_progress_state(&self, bar: WindowHandle, state: ProgressState) {
        (**self).send_progress_state(bar, state)
    }
}
