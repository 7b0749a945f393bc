//! Native window chrome for launcher windows.
//!
//! This crate lets a launcher UI perform a handful of native operations on
//! its top-level windows and progress bar control:
//!
//! - **Centering** a window in the work area of its monitor
//! - **Icons**: extracting the launcher binary's icon pair once and applying
//!   it to each window
//! - **Style**: removing the sizing border and maximize button
//! - **Dimensions**: reading (with fallbacks) and setting window size
//! - **Attention**: a bounded taskbar flash
//! - **Progress**: forwarding a state to a native progress bar
//!
//! Window creation, message loops and layout belong to the host; this crate
//! only receives window handles.
//!
//! # Example
//!
//! ```
//! use launcher_chrome::{InMemoryWindowSystem, ProgressState, Rect, WindowChrome, WindowStyle};
//!
//! let system = InMemoryWindowSystem::new();
//! system.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
//! let window = system.add_window(Rect::from_origin_size(0, 0, 640, 480));
//! let bar = system.add_window(Rect::from_origin_size(10, 400, 620, 20));
//!
//! let chrome = WindowChrome::new(&system);
//! chrome.disable_resize_affordances(window);
//! chrome.set_dimensions(window, 800, 600);
//! chrome.center_on_active_monitor(window).unwrap();
//! chrome.set_progress_state(bar, ProgressState::PAUSED);
//!
//! assert_eq!((chrome.width(window), chrome.height(window)), (800, 600));
//! assert!(!system.window(window).unwrap().style.intersects(WindowStyle::RESIZE_AFFORDANCES));
//! ```
//!
//! On Windows, use [`Win32WindowSystem`] (or [`WindowChrome::native`]) to
//! talk to the real window manager. [`LauncherChrome`] adds lazy icon
//! loading and logs failures through `tracing`.

pub mod backend;
mod chrome;
mod config;
mod error;
mod geometry;
mod handle;
mod icon;
mod launcher;
pub mod logging;
mod progress;
mod style;

#[cfg(target_os = "windows")]
pub use backend::Win32WindowSystem;
pub use backend::{FlashRequest, InMemoryWindowSystem, SimulatedWindow, WindowSystem};
pub use chrome::WindowChrome;
pub use config::{
    ChromeConfig, DEFAULT_FALLBACK_HEIGHT, DEFAULT_FALLBACK_WIDTH, DEFAULT_FLASH_COUNT,
};
pub use error::{
    CenterError, ConfigError, ConfigResult, HandleError, PlatformError, center_status,
};
pub use geometry::Rect;
pub use handle::{MonitorHandle, WindowHandle};
pub use icon::{ExtractedIcons, IconCache, IconClass, IconHandle, IconPair};
pub use launcher::LauncherChrome;
pub use progress::{PBM_SETSTATE, ProgressState};
pub use style::WindowStyle;
