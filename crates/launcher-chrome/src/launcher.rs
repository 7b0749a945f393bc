//! Launcher-facing window chrome.
//!
//! [`LauncherChrome`] drives a [`WindowChrome`] the way the launcher's
//! dialogs need it: every new dialog gets the launcher icon and a fixed-size
//! frame, and is then centered. Failures are logged here instead of being
//! returned, since none of them should stop a dialog from showing.

use std::io;
use std::path::PathBuf;

use crate::backend::WindowSystem;
use crate::chrome::WindowChrome;
use crate::config::ChromeConfig;
use crate::handle::WindowHandle;
use crate::logging::targets;
use crate::progress::ProgressState;

/// Number of icons a launcher binary is expected to carry (large + small).
const EXPECTED_ICON_COUNT: u32 = 2;

/// Window chrome with lazy icon loading and logged failures.
#[derive(Debug)]
pub struct LauncherChrome<S> {
    chrome: WindowChrome<S>,
    locate_binary: fn() -> io::Result<PathBuf>,
}

impl<S: WindowSystem> LauncherChrome<S> {
    /// Create launcher chrome with the default configuration.
    pub fn new(system: S) -> Self {
        Self::with_config(system, ChromeConfig::default())
    }

    /// Create launcher chrome with an explicit configuration.
    pub fn with_config(system: S, config: ChromeConfig) -> Self {
        Self {
            chrome: WindowChrome::with_config(system, config),
            locate_binary: std::env::current_exe,
        }
    }

    /// The wrapped adapter.
    pub fn chrome(&self) -> &WindowChrome<S> {
        &self.chrome
    }

    /// Give a freshly created dialog the launcher icon, a fixed-size frame
    /// and a centered position.
    pub fn prepare_window(&mut self, window: WindowHandle) {
        self.apply_icon_to_window(window);
        self.apply_window_style(window);
        self.center_window(window);
    }

    /// Center `window`, logging the failing stage if it cannot be centered.
    pub fn center_window(&self, window: WindowHandle) {
        if let Err(err) = self.chrome.center_on_active_monitor(window) {
            tracing::error!(
                target: targets::CHROME,
                ?window,
                code = err.code(),
                "could not center window: {err}"
            );
        }
    }

    /// Apply the launcher icon to `window`, loading it on first use.
    pub fn apply_icon_to_window(&mut self, window: WindowHandle) {
        if !self.chrome.icons().is_loaded() {
            self.load_icons();
        }
        self.chrome.apply_cached_icon(window);
    }

    /// Load the launcher icons from the configured source and log how many
    /// were found. Returns the extracted count.
    ///
    /// The source defaults to the running executable. If that path cannot be
    /// determined, nothing is extracted and windows keep their default icons.
    pub fn load_icons(&mut self) -> u32 {
        let Some(source) = self.icon_source() else {
            return 0;
        };

        let count = self.chrome.load_icon_pair(&source);
        match count {
            0 => tracing::error!(
                target: targets::CHROME,
                source = %source.display(),
                "extracted no icons, expected {EXPECTED_ICON_COUNT}"
            ),
            1 => tracing::warn!(
                target: targets::CHROME,
                source = %source.display(),
                "extracted only one icon, expected {EXPECTED_ICON_COUNT}"
            ),
            EXPECTED_ICON_COUNT => tracing::debug!(
                target: targets::CHROME,
                source = %source.display(),
                "extracted {count} icons"
            ),
            _ => tracing::error!(
                target: targets::CHROME,
                source = %source.display(),
                "extracted {count} icons, expected {EXPECTED_ICON_COUNT}"
            ),
        }
        count
    }

    fn icon_source(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.chrome.config().icon_source() {
            return Some(path.to_path_buf());
        }
        match (self.locate_binary)() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::error!(
                    target: targets::CHROME,
                    %err,
                    "could not determine launcher binary path"
                );
                // Not retried for later windows.
                self.chrome.mark_icons_unavailable();
                None
            }
        }
    }

    /// Remove resize and maximize affordances from `window`.
    pub fn apply_window_style(&self, window: WindowHandle) {
        self.chrome.disable_resize_affordances(window);
    }

    /// Current width of `window`, or the configured fallback.
    pub fn width(&self, window: WindowHandle) -> i32 {
        self.chrome.width(window)
    }

    /// Current height of `window`, or the configured fallback.
    pub fn height(&self, window: WindowHandle) -> i32 {
        self.chrome.height(window)
    }

    /// Resize `window` in place.
    pub fn set_dimensions(&self, window: WindowHandle, width: i32, height: i32) {
        self.chrome.set_dimensions(window, width, height);
    }

    /// Draw the user's attention to `window` via its taskbar button.
    pub fn flash_taskbar_entry(&self, window: WindowHandle) {
        self.chrome.flash_taskbar_entry(window);
    }

    /// Forward a progress bar state.
    pub fn set_progress_state(&self, bar: WindowHandle, state: impl Into<ProgressState>) {
        self.chrome.set_progress_state(bar, state);
    }
}
