//! Win32 window system.

use std::ffi::c_void;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use static_assertions::const_assert_eq;
use windows::Win32::Foundation::{
    ERROR_SUCCESS, GetLastError, HWND, LPARAM, RECT, SetLastError, WIN32_ERROR, WPARAM,
};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::Shell::ExtractIconExW;
use windows::Win32::UI::WindowsAndMessaging::{
    FLASHW_TRAY, FLASHWINFO, FlashWindowEx, GWL_STYLE, GetWindowLongW, GetWindowRect, HICON,
    HWND_TOP, ICON_BIG, ICON_SMALL, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOOWNERZORDER, SWP_NOSIZE,
    SWP_NOZORDER, SendMessageW, SetWindowLongW, SetWindowPos, WM_SETICON, WS_CAPTION,
    WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_SIZEBOX, WS_SYSMENU,
};
use windows::core::PCWSTR;

use super::WindowSystem;
use crate::error::PlatformError;
use crate::geometry::Rect;
use crate::handle::{MonitorHandle, WindowHandle};
use crate::icon::{ExtractedIcons, IconClass, IconHandle, IconPair};
use crate::logging::targets;
use crate::progress::{PBM_SETSTATE, ProgressState};
use crate::style::WindowStyle;

const_assert_eq!(WindowStyle::CAPTION.bits(), WS_CAPTION.0);
const_assert_eq!(WindowStyle::SYSMENU.bits(), WS_SYSMENU.0);
const_assert_eq!(WindowStyle::SIZE_BOX.bits(), WS_SIZEBOX.0);
const_assert_eq!(WindowStyle::MINIMIZE_BOX.bits(), WS_MINIMIZEBOX.0);
const_assert_eq!(WindowStyle::MAXIMIZE_BOX.bits(), WS_MAXIMIZEBOX.0);

/// The native Win32 window system.
///
/// All calls must be made from the thread that owns the windows involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    /// Create the Win32 backend.
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.raw() as *mut c_void)
}

fn to_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn to_wide(path: &Path) -> Vec<u16> {
    path.as_os_str().encode_wide().chain(Some(0)).collect()
}

/// `SetWindowLongW` returns the previous value, which is legitimately 0 for a
/// window that had no style bits set.
fn style_write_failed(previous: i32, last_error: WIN32_ERROR) -> bool {
    previous == 0 && last_error != ERROR_SUCCESS
}

impl WindowSystem for Win32WindowSystem {
    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle> {
        // SAFETY: MonitorFromWindow accepts any HWND value and reports an
        // unusable one by returning the primary monitor or null.
        let monitor = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTOPRIMARY) };
        if monitor.0.is_null() {
            None
        } else {
            Some(MonitorHandle::from_raw(monitor.0 as isize))
        }
    }

    fn monitor_work_area(&self, monitor: MonitorHandle) -> Result<Rect, PlatformError> {
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        // SAFETY: info is a stack-allocated MONITORINFO with cbSize set, and
        // the API only writes within its bounds.
        let ok = unsafe { GetMonitorInfoW(HMONITOR(monitor.raw() as *mut c_void), &mut info) };
        if ok.as_bool() {
            Ok(to_rect(info.rcWork))
        } else {
            Err(PlatformError::from_win32(
                "GetMonitorInfoW",
                windows::core::Error::from_win32(),
            ))
        }
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        let mut rect = RECT::default();

        // SAFETY: rect is a valid, writable RECT for the duration of the call.
        unsafe { GetWindowRect(hwnd(window), &mut rect) }
            .map_err(|e| PlatformError::from_win32("GetWindowRect", e))?;
        Ok(to_rect(rect))
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32) {
        let flags = SWP_NOACTIVATE | SWP_NOOWNERZORDER | SWP_NOSIZE | SWP_NOZORDER;

        // SAFETY: SetWindowPos validates the HWND and fails on stale handles.
        if let Err(err) = unsafe { SetWindowPos(hwnd(window), HWND_TOP, x, y, 0, 0, flags) } {
            tracing::debug!(target: targets::WIN32, ?window, %err, "SetWindowPos (move) failed");
        }
    }

    fn resize_window(&self, window: WindowHandle, width: i32, height: i32) {
        let flags = SWP_NOACTIVATE | SWP_NOMOVE | SWP_NOZORDER;

        // SAFETY: SetWindowPos validates the HWND and fails on stale handles.
        if let Err(err) =
            unsafe { SetWindowPos(hwnd(window), HWND_TOP, 0, 0, width, height, flags) }
        {
            tracing::debug!(target: targets::WIN32, ?window, %err, "SetWindowPos (resize) failed");
        }
    }

    fn flash_window(&self, window: WindowHandle, count: u32) {
        let info = FLASHWINFO {
            cbSize: std::mem::size_of::<FLASHWINFO>() as u32,
            hwnd: hwnd(window),
            dwFlags: FLASHW_TRAY,
            uCount: count,
            dwTimeout: 0,
        };

        // SAFETY: info is fully initialized and outlives the call. The return
        // value is the previous caption state, not an error indicator.
        let _ = unsafe { FlashWindowEx(&info) };
    }

    fn extract_icons(&self, binary_path: &Path) -> ExtractedIcons {
        let path = to_wide(binary_path);
        let mut large = HICON::default();
        let mut small = HICON::default();

        // SAFETY: path is NUL-terminated and lives until the call returns;
        // each output pointer refers to exactly one HICON, matching nIcons = 1.
        let count = unsafe {
            ExtractIconExW(
                PCWSTR(path.as_ptr()),
                0,
                Some(&mut large as *mut HICON),
                Some(&mut small as *mut HICON),
                1,
            )
        };

        ExtractedIcons {
            count,
            icons: IconPair {
                large: IconHandle::from_raw(large.0 as isize),
                small: IconHandle::from_raw(small.0 as isize),
            },
        }
    }

    fn set_icon(&self, window: WindowHandle, class: IconClass, icon: IconHandle) {
        let slot = match class {
            IconClass::Big => ICON_BIG,
            IconClass::Small => ICON_SMALL,
        };

        // SAFETY: WM_SETICON takes an icon handle by value; the icon outlives
        // the window because cached icons are never destroyed.
        unsafe {
            SendMessageW(
                hwnd(window),
                WM_SETICON,
                WPARAM(slot as usize),
                LPARAM(icon.raw()),
            );
        }
    }

    fn window_style(&self, window: WindowHandle) -> WindowStyle {
        // SAFETY: GetWindowLongW returns 0 for invalid handles.
        let bits = unsafe { GetWindowLongW(hwnd(window), GWL_STYLE) };
        WindowStyle::from_bits(bits as u32)
    }

    fn set_window_style(&self, window: WindowHandle, style: WindowStyle) {
        // A previous style of 0 is only a failure if the last error was set.
        // SAFETY: resetting the calling thread's last-error value has no preconditions.
        unsafe { SetLastError(ERROR_SUCCESS) };
        // SAFETY: SetWindowLongW returns 0 for invalid handles.
        let previous = unsafe { SetWindowLongW(hwnd(window), GWL_STYLE, style.bits() as i32) };
        // SAFETY: reads the calling thread's last-error value.
        let last_error = unsafe { GetLastError() };
        if style_write_failed(previous, last_error) {
            tracing::debug!(
                target: targets::WIN32,
                ?window,
                code = last_error.0,
                "SetWindowLongW (style) failed"
            );
        }
    }

    fn send_progress_state(&self, bar: WindowHandle, state: ProgressState) {
        // SAFETY: PBM_SETSTATE carries the state in wParam and no pointers.
        unsafe {
            SendMessageW(
                hwnd(bar),
                PBM_SETSTATE,
                WPARAM(state.raw() as usize),
                LPARAM(0),
            );
        }
    }
}
