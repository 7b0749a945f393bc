//! The window chrome adapter.
//!
//! [`WindowChrome`] turns the launcher's intents (center this window, give
//! it the launcher icon, stop it from being resized) into native calls on a
//! [`WindowSystem`]. Each operation is one short native exchange; results are
//! reported through a `Result`, a defined fallback value or a count, and the
//! adapter itself never logs.
//!
//! # Example
//!
//! ```ignore
//! use launcher_chrome::{Win32WindowSystem, WindowChrome, WindowHandle};
//!
//! let mut chrome = WindowChrome::new(Win32WindowSystem::new());
//! let window = WindowHandle::from_window(&winit_window)?;
//!
//! chrome.load_icon_pair(std::env::current_exe()?);
//! chrome.apply_cached_icon(window);
//! chrome.disable_resize_affordances(window);
//! chrome.center_on_active_monitor(window)?;
//! ```

use std::path::Path;

use crate::backend::WindowSystem;
use crate::config::ChromeConfig;
use crate::error::CenterError;
use crate::handle::WindowHandle;
use crate::icon::{IconCache, IconPair};
use crate::progress::ProgressState;

/// Native window chrome operations on caller-supplied handles.
///
/// The adapter owns exactly one piece of state: the icon cache filled by
/// [`load_icon_pair`](Self::load_icon_pair). It does no locking; all calls
/// belong on the thread that owns the windows.
#[derive(Debug)]
pub struct WindowChrome<S> {
    system: S,
    config: ChromeConfig,
    icons: IconCache,
}

impl<S: WindowSystem> WindowChrome<S> {
    /// Create an adapter with the default configuration.
    pub fn new(system: S) -> Self {
        Self::with_config(system, ChromeConfig::default())
    }

    /// Create an adapter with an explicit configuration.
    pub fn with_config(system: S, config: ChromeConfig) -> Self {
        Self {
            system,
            config,
            icons: IconCache::NotLoaded,
        }
    }

    /// The underlying window system.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// The active configuration.
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// The icon cache.
    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    /// Center `window` in the work area of the monitor it is on.
    ///
    /// Falls back to the primary monitor when the window is not on any
    /// monitor. The window keeps its size, z-order and activation state. On
    /// failure the window is left where it was.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`CenterError::MonitorLookup`] if no monitor can be resolved
    /// - [`CenterError::MonitorInfo`] if the monitor's work area cannot be read
    /// - [`CenterError::WindowBounds`] if the window's bounds cannot be read
    pub fn center_on_active_monitor(&self, window: WindowHandle) -> Result<(), CenterError> {
        let monitor = self
            .system
            .monitor_from_window(window)
            .ok_or(CenterError::MonitorLookup)?;
        let work_area = self
            .system
            .monitor_work_area(monitor)
            .map_err(CenterError::MonitorInfo)?;
        let bounds = self
            .system
            .window_rect(window)
            .map_err(CenterError::WindowBounds)?;

        let (x, y) = work_area.centered_origin(bounds.width(), bounds.height());
        self.system.move_window(window, x, y);
        Ok(())
    }

    /// Current width of `window`, or the fallback width if it cannot be read.
    pub fn width(&self, window: WindowHandle) -> i32 {
        self.system
            .window_rect(window)
            .map_or(self.config.fallback_width(), |rect| rect.width())
    }

    /// Current height of `window`, or the fallback height if it cannot be read.
    pub fn height(&self, window: WindowHandle) -> i32 {
        self.system
            .window_rect(window)
            .map_or(self.config.fallback_height(), |rect| rect.height())
    }

    /// Resize `window`, keeping its top-left corner, z-order and activation.
    ///
    /// Values are passed to the native layer as given; keeping them sensible
    /// is the caller's job.
    pub fn set_dimensions(&self, window: WindowHandle, width: i32, height: i32) {
        self.system.resize_window(window, width, height);
    }

    /// Flash the taskbar button of `window` a fixed number of times.
    ///
    /// Returns immediately; the flashing stops on its own.
    pub fn flash_taskbar_entry(&self, window: WindowHandle) {
        self.system.flash_window(window, self.config.flash_count());
    }

    /// Extract the first large/small icon pair from `binary_path` into the cache.
    ///
    /// Replaces whatever was cached before, without releasing it. Returns the
    /// number of icons the system extracted.
    pub fn load_icon_pair(&mut self, binary_path: impl AsRef<Path>) -> u32 {
        let extracted = self.system.extract_icons(binary_path.as_ref());
        self.icons.store(extracted.icons);
        extracted.count
    }

    /// Record that no icons are available without attempting an extraction.
    pub(crate) fn mark_icons_unavailable(&mut self) {
        self.icons.store(IconPair::empty());
    }

    /// Assign the cached icons to `window`.
    ///
    /// The large and small icons are applied independently, each only if it
    /// was extracted. Does nothing before the first load.
    pub fn apply_cached_icon(&self, window: WindowHandle) {
        let Some(icons) = self.icons.icons() else {
            return;
        };
        for (class, icon) in icons.assignments() {
            self.system.set_icon(window, class, icon);
        }
    }

    /// Remove the sizing border and maximize button from `window`.
    ///
    /// Minimize, close and move are unaffected. Applying it again is a no-op.
    pub fn disable_resize_affordances(&self, window: WindowHandle) {
        let style = self.system.window_style(window);
        self.system
            .set_window_style(window, style.without_resize_affordances());
    }

    /// Forward `state` to a progress bar control unchanged.
    pub fn set_progress_state(&self, bar: WindowHandle, state: impl Into<ProgressState>) {
        self.system.send_progress_state(bar, state.into());
    }
}

#[cfg(target_os = "windows")]
impl WindowChrome<crate::backend::Win32WindowSystem> {
    /// Create an adapter on the native Win32 window system.
    pub fn native() -> Self {
        Self::new(crate::backend::Win32WindowSystem::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::InMemoryWindowSystem;
    use crate::geometry::Rect;
    use crate::icon::{ExtractedIcons, IconClass, IconHandle};
    use crate::style::WindowStyle;

    fn single_monitor() -> InMemoryWindowSystem {
        let system = InMemoryWindowSystem::new();
        system.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
        system
    }

    #[test]
    fn test_center_moves_without_resizing() {
        let system = single_monitor();
        let window = system.add_window(Rect::from_origin_size(5, 5, 500, 320));
        let chrome = WindowChrome::new(&system);

        assert_eq!(chrome.center_on_active_monitor(window), Ok(()));
        assert_eq!(
            system.window(window).unwrap().bounds,
            Rect::from_origin_size(710, 360, 500, 320)
        );
    }

    #[test]
    fn test_center_stage_failures() {
        let system = InMemoryWindowSystem::new();
        let window = system.add_window(Rect::from_origin_size(0, 0, 100, 100));
        let chrome = WindowChrome::new(&system);
        assert_eq!(chrome.center_on_active_monitor(window), Err(CenterError::MonitorLookup));

        let monitor = system.add_monitor(Rect::new(0, 0, 800, 600), Rect::new(0, 0, 800, 560));
        system.fail_window_rect(window);
        let err = chrome.center_on_active_monitor(window).unwrap_err();
        assert_eq!(err.code(), 3);

        system.fail_monitor_info(monitor);
        let err = chrome.center_on_active_monitor(window).unwrap_err();
        assert_eq!(err.code(), 2);

        assert_eq!(system.window(window).unwrap().bounds, Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn test_dimension_fallbacks() {
        let system = single_monitor();
        let chrome = WindowChrome::new(&system);
        let stale = WindowHandle::from_raw(0x4242);

        assert_eq!(chrome.width(stale), 200);
        assert_eq!(chrome.height(stale), 100);
    }

    #[test]
    fn test_configured_fallbacks() {
        let system = single_monitor();
        let config = ChromeConfig::new().with_fallback_size(1, 2);
        let chrome = WindowChrome::with_config(&system, config);
        let stale = WindowHandle::from_raw(0x4242);

        assert_eq!((chrome.width(stale), chrome.height(stale)), (1, 2));
    }

    #[test]
    fn test_load_replaces_cache() {
        let system = single_monitor();
        let first = IconPair {
            large: IconHandle::from_raw(1),
            small: IconHandle::from_raw(2),
        };
        system.add_icon_resource("a.exe", ExtractedIcons { count: 2, icons: first });
        system.add_icon_resource("b.exe", ExtractedIcons::default());

        let mut chrome = WindowChrome::new(&system);
        assert!(!chrome.icons().is_loaded());

        assert_eq!(chrome.load_icon_pair("a.exe"), 2);
        assert_eq!(chrome.icons().icons(), Some(&first));

        assert_eq!(chrome.load_icon_pair("b.exe"), 0);
        assert_eq!(chrome.icons().icons(), Some(&IconPair::empty()));
    }

    #[test]
    fn test_apply_only_small_icon() {
        let system = single_monitor();
        let window = system.add_window(Rect::from_origin_size(0, 0, 100, 100));
        let small = IconHandle::from_raw(9);
        system.add_icon_resource(
            "small-only.exe",
            ExtractedIcons {
                count: 1,
                icons: IconPair { large: None, small },
            },
        );

        let mut chrome = WindowChrome::new(&system);
        chrome.load_icon_pair("small-only.exe");
        chrome.apply_cached_icon(window);

        assert_eq!(
            system.icon_assignments(),
            vec![(window, IconClass::Small, small.unwrap())]
        );
    }

    #[test]
    fn test_disable_resize_keeps_other_bits() {
        let system = single_monitor();
        let style = WindowStyle::CAPTION | WindowStyle::SYSMENU | WindowStyle::SIZE_BOX;
        let window = system.add_window_with_style(Rect::from_origin_size(0, 0, 100, 100), style);
        let chrome = WindowChrome::new(&system);

        chrome.disable_resize_affordances(window);
        assert_eq!(
            system.window(window).unwrap().style,
            WindowStyle::CAPTION | WindowStyle::SYSMENU
        );
    }

    #[test]
    fn test_flash_uses_configured_count() {
        let system = single_monitor();
        let window = system.add_window(Rect::from_origin_size(0, 0, 100, 100));
        let chrome = WindowChrome::with_config(&system, ChromeConfig::new().with_flash_count(4));

        chrome.flash_taskbar_entry(window);
        assert_eq!(system.flashes()[0].count, 4);
    }
}
