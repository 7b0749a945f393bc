//! In-memory window system.
//!
//! Simulates monitors, top-level windows and icon resources closely enough to
//! exercise every chrome operation without a display. Every native request is
//! also recorded so callers can assert on what would have been sent.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::WindowSystem;
use crate::error::PlatformError;
use crate::geometry::Rect;
use crate::handle::{MonitorHandle, WindowHandle};
use crate::icon::{ExtractedIcons, IconClass, IconHandle};
use crate::progress::ProgressState;
use crate::style::WindowStyle;

/// State of a simulated window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedWindow {
    /// Current bounds.
    pub bounds: Rect,
    /// Current style bits.
    pub style: WindowStyle,
    /// Icon in the big slot.
    pub big_icon: Option<IconHandle>,
    /// Icon in the small slot.
    pub small_icon: Option<IconHandle>,
    /// Number of style writes received.
    pub style_writes: usize,
}

/// A recorded taskbar flash request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashRequest {
    /// Window whose taskbar button flashes.
    pub window: WindowHandle,
    /// Number of flashes requested.
    pub count: u32,
}

#[derive(Debug)]
struct SimulatedMonitor {
    handle: MonitorHandle,
    geometry: Rect,
    work_area: Rect,
    info_fails: bool,
}

#[derive(Debug)]
struct Entry {
    window: SimulatedWindow,
    bounds_fail: bool,
}

#[derive(Debug, Default)]
struct State {
    next_handle: isize,
    monitors: Vec<SimulatedMonitor>,
    windows: HashMap<WindowHandle, Entry>,
    icon_resources: HashMap<PathBuf, ExtractedIcons>,
    extraction_requests: Vec<PathBuf>,
    icon_assignments: Vec<(WindowHandle, IconClass, IconHandle)>,
    flashes: Vec<FlashRequest>,
    progress_messages: Vec<(WindowHandle, ProgressState)>,
}

impl State {
    fn allocate(&mut self) -> isize {
        self.next_handle += 4;
        0x0001_0000 + self.next_handle
    }
}

/// A [`WindowSystem`] backed by plain data.
///
/// The first monitor added is the primary monitor. A window belongs to the
/// monitor whose geometry contains its center point; windows outside every
/// monitor fall back to the primary one, as does an unknown handle.
///
/// # Example
///
/// ```
/// use launcher_chrome::{InMemoryWindowSystem, Rect, WindowChrome};
///
/// let system = InMemoryWindowSystem::new();
/// system.add_monitor(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
/// let window = system.add_window(Rect::from_origin_size(0, 0, 400, 300));
///
/// let chrome = WindowChrome::new(&system);
/// chrome.center_on_active_monitor(window).unwrap();
///
/// let bounds = system.window(window).unwrap().bounds;
/// assert_eq!((bounds.left, bounds.top), (760, 370));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryWindowSystem {
    state: RefCell<State>,
}

impl InMemoryWindowSystem {
    /// Create an empty system with no monitors or windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a monitor with the given full geometry and work area.
    pub fn add_monitor(&self, geometry: Rect, work_area: Rect) -> MonitorHandle {
        let mut state = self.state.borrow_mut();
        let handle = MonitorHandle::from_raw(state.allocate());
        state.monitors.push(SimulatedMonitor {
            handle,
            geometry,
            work_area,
            info_fails: false,
        });
        handle
    }

    /// Add a standard overlapped window with the given bounds.
    pub fn add_window(&self, bounds: Rect) -> WindowHandle {
        self.add_window_with_style(bounds, WindowStyle::OVERLAPPED_WINDOW)
    }

    /// Add a window with explicit style bits.
    pub fn add_window_with_style(&self, bounds: Rect, style: WindowStyle) -> WindowHandle {
        let mut state = self.state.borrow_mut();
        let handle = WindowHandle::from_raw(state.allocate());
        state.windows.insert(
            handle,
            Entry {
                window: SimulatedWindow {
                    bounds,
                    style,
                    big_icon: None,
                    small_icon: None,
                    style_writes: 0,
                },
                bounds_fail: false,
            },
        );
        handle
    }

    /// Destroy a window. Later calls with its handle behave like a stale handle.
    pub fn destroy_window(&self, window: WindowHandle) {
        self.state.borrow_mut().windows.remove(&window);
    }

    /// Register the icons that extraction from `path` yields.
    pub fn add_icon_resource(&self, path: impl Into<PathBuf>, icons: ExtractedIcons) {
        self.state
            .borrow_mut()
            .icon_resources
            .insert(path.into(), icons);
    }

    /// Make work-area queries for `monitor` fail.
    pub fn fail_monitor_info(&self, monitor: MonitorHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(m) = state.monitors.iter_mut().find(|m| m.handle == monitor) {
            m.info_fails = true;
        }
    }

    /// Make bounds queries for `window` fail.
    pub fn fail_window_rect(&self, window: WindowHandle) {
        if let Some(entry) = self.state.borrow_mut().windows.get_mut(&window) {
            entry.bounds_fail = true;
        }
    }

    /// Snapshot of a window's state.
    pub fn window(&self, window: WindowHandle) -> Option<SimulatedWindow> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|entry| entry.window.clone())
    }

    /// Paths passed to icon extraction, in call order.
    pub fn extraction_requests(&self) -> Vec<PathBuf> {
        self.state.borrow().extraction_requests.clone()
    }

    /// Icon assignments, in call order.
    pub fn icon_assignments(&self) -> Vec<(WindowHandle, IconClass, IconHandle)> {
        self.state.borrow().icon_assignments.clone()
    }

    /// Taskbar flash requests, in call order.
    pub fn flashes(&self) -> Vec<FlashRequest> {
        self.state.borrow().flashes.clone()
    }

    /// Progress state messages, in call order.
    pub fn progress_messages(&self) -> Vec<(WindowHandle, ProgressState)> {
        self.state.borrow().progress_messages.clone()
    }
}

impl WindowSystem for InMemoryWindowSystem {
    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle> {
        let state = self.state.borrow();
        let primary = state.monitors.first()?;
        let Some(entry) = state.windows.get(&window) else {
            return Some(primary.handle);
        };

        let (x, y) = entry.window.bounds.center();
        let containing = state.monitors.iter().find(|m| {
            let geometry = m.geometry;
            (geometry.left..geometry.right).contains(&x)
                && (geometry.top..geometry.bottom).contains(&y)
        });
        Some(containing.unwrap_or(primary).handle)
    }

    fn monitor_work_area(&self, monitor: MonitorHandle) -> Result<Rect, PlatformError> {
        let state = self.state.borrow();
        match state.monitors.iter().find(|m| m.handle == monitor) {
            Some(m) if !m.info_fails => Ok(m.work_area),
            Some(_) => Err(PlatformError::new("GetMonitorInfoW", "monitor info unavailable")),
            None => Err(PlatformError::new("GetMonitorInfoW", "invalid monitor handle")),
        }
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        let state = self.state.borrow();
        match state.windows.get(&window) {
            Some(entry) if !entry.bounds_fail => Ok(entry.window.bounds),
            Some(_) => Err(PlatformError::new("GetWindowRect", "window rect unavailable")),
            None => Err(PlatformError::new("GetWindowRect", "invalid window handle")),
        }
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32) {
        if let Some(entry) = self.state.borrow_mut().windows.get_mut(&window) {
            let bounds = entry.window.bounds;
            entry.window.bounds = Rect::from_origin_size(x, y, bounds.width(), bounds.height());
        }
    }

    fn resize_window(&self, window: WindowHandle, width: i32, height: i32) {
        if let Some(entry) = self.state.borrow_mut().windows.get_mut(&window) {
            let bounds = entry.window.bounds;
            entry.window.bounds = Rect::from_origin_size(bounds.left, bounds.top, width, height);
        }
    }

    fn flash_window(&self, window: WindowHandle, count: u32) {
        self.state
            .borrow_mut()
            .flashes
            .push(FlashRequest { window, count });
    }

    fn extract_icons(&self, binary_path: &Path) -> ExtractedIcons {
        let mut state = self.state.borrow_mut();
        state.extraction_requests.push(binary_path.to_path_buf());
        state
            .icon_resources
            .get(binary_path)
            .copied()
            .unwrap_or_default()
    }

    fn set_icon(&self, window: WindowHandle, class: IconClass, icon: IconHandle) {
        let mut state = self.state.borrow_mut();
        state.icon_assignments.push((window, class, icon));
        if let Some(entry) = state.windows.get_mut(&window) {
            match class {
                IconClass::Big => entry.window.big_icon = Some(icon),
                IconClass::Small => entry.window.small_icon = Some(icon),
            }
        }
    }

    fn window_style(&self, window: WindowHandle) -> WindowStyle {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|entry| entry.window.style)
            .unwrap_or_default()
    }

    fn set_window_style(&self, window: WindowHandle, style: WindowStyle) {
        if let Some(entry) = self.state.borrow_mut().windows.get_mut(&window) {
            entry.window.style = style;
            entry.window.style_writes += 1;
        }
    }

    fn send_progress_state(&self, bar: WindowHandle, state: ProgressState) {
        self.state
            .borrow_mut()
            .progress_messages
            .push((bar, state));
    }
}
