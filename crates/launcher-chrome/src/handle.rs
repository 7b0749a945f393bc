//! Opaque native handles.
//!
//! Handles are plain values wrapping the native integer or address that the
//! host windowing system hands out. They carry no ownership: dropping one does
//! nothing, and a handle must never be used after the host destroys the
//! window or control it refers to.
//!
//! # Example
//!
//! ```
//! use launcher_chrome::WindowHandle;
//!
//! let handle = WindowHandle::from_raw(0x0001_02a4);
//! assert_eq!(handle.raw(), 0x0001_02a4);
//! assert!(!handle.is_null());
//! ```

use std::fmt;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

use crate::error::HandleError;

/// A non-owning reference to a native top-level window or control.
///
/// The adapter never creates or destroys the underlying window. The host owns
/// it and may destroy it between calls; operations on a stale handle fail in
/// the native layer and are reported through each operation's own contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    /// Wrap a raw native handle value.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw native handle value.
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Returns `true` for the null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Extract the native handle from anything exposing a `raw-window-handle`.
    ///
    /// Only Win32 handles are accepted, since every operation in this crate
    /// targets Win32 windows.
    pub fn from_window<W: HasWindowHandle + ?Sized>(window: &W) -> Result<Self, HandleError> {
        let handle = window
            .window_handle()
            .map_err(|e| HandleError::Unavailable(e.to_string()))?;
        Self::try_from(handle.as_raw())
    }
}

impl TryFrom<RawWindowHandle> for WindowHandle {
    type Error = HandleError;

    fn try_from(raw: RawWindowHandle) -> Result<Self, Self::Error> {
        match raw {
            RawWindowHandle::Win32(handle) => Ok(Self(handle.hwnd.get())),
            other => Err(HandleError::UnsupportedPlatform(format!("{other:?}"))),
        }
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowHandle({:#x})", self.0)
    }
}

/// A non-owning reference to a native monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorHandle(isize);

impl MonitorHandle {
    /// Wrap a raw native monitor handle.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw native monitor handle.
    pub const fn raw(self) -> isize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_window_handle::{Win32WindowHandle, XlibWindowHandle};
    use std::num::NonZeroIsize;

    #[test]
    fn test_from_raw_round_trip() {
        let handle = WindowHandle::from_raw(0x1234);
        assert_eq!(handle.raw(), 0x1234);
        assert!(!handle.is_null());
        assert!(WindowHandle::from_raw(0).is_null());
    }

    #[test]
    fn test_try_from_win32_raw_handle() {
        let hwnd = NonZeroIsize::new(0x00ab_cdef).unwrap();
        let raw = RawWindowHandle::Win32(Win32WindowHandle::new(hwnd));

        let handle = WindowHandle::try_from(raw).unwrap();
        assert_eq!(handle.raw(), 0x00ab_cdef);
    }

    #[test]
    fn test_try_from_foreign_raw_handle_is_rejected() {
        let raw = RawWindowHandle::Xlib(XlibWindowHandle::new(42));

        let err = WindowHandle::try_from(raw).unwrap_err();
        assert!(matches!(err, HandleError::UnsupportedPlatform(_)));
    }

    #[test]
    fn test_debug_shows_hex() {
        let handle = WindowHandle::from_raw(255);
        assert_eq!(format!("{handle:?}"), "WindowHandle(0xff)");
    }
}
