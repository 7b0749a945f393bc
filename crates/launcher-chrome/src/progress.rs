//! Progress bar state forwarding.

/// Visual state of a native progress bar.
///
/// The value is owned and interpreted by the native control; it is forwarded
/// without validation. The named constants cover the states the common
/// controls library defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressState(i32);

impl ProgressState {
    /// In progress (green).
    pub const NORMAL: Self = Self(1);
    /// Stopped on error (red).
    pub const ERROR: Self = Self(2);
    /// Paused (yellow).
    pub const PAUSED: Self = Self(3);

    /// Wrap an arbitrary state code.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// The state code sent to the control.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProgressState {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// Message id that changes a progress bar's state (`WM_USER + 16`).
pub const PBM_SETSTATE: u32 = 0x0410;
