//! Error types for window chrome operations.

use thiserror::Error;

/// A native windowing call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[error("{call} failed: {message}")]
pub struct PlatformError {
    call: &'static str,
    message: String,
}

impl PlatformError {
    /// Create an error for the named native call.
    pub fn new(call: &'static str, message: impl Into<String>) -> Self {
        Self {
            call,
            message: message.into(),
        }
    }

    /// Name of the native call that failed.
    pub fn call(&self) -> &'static str {
        self.call
    }

    /// Platform-provided failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(target_os = "windows")]
impl PlatformError {
    pub(crate) fn from_win32(call: &'static str, err: windows::core::Error) -> Self {
        Self::new(call, err.to_string())
    }
}

/// Why a window could not be centered.
///
/// Variants are ordered by the stage at which centering gave up, so
/// `MonitorLookup < MonitorInfo < WindowBounds`. A window that could not be
/// centered keeps its previous position.
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CenterError {
    /// No monitor could be resolved for the window, not even the primary one.
    #[error("getting monitor from window failed")]
    MonitorLookup,

    /// The monitor's work area could not be read.
    #[error("getting monitor info failed: {0}")]
    MonitorInfo(#[source] PlatformError),

    /// The window's current bounds could not be read.
    #[error("getting window rect failed: {0}")]
    WindowBounds(#[source] PlatformError),
}

impl CenterError {
    /// Numeric status code for this failure: 1, 2 or 3.
    pub fn code(&self) -> i32 {
        match self {
            Self::MonitorLookup => 1,
            Self::MonitorInfo(_) => 2,
            Self::WindowBounds(_) => 3,
        }
    }
}

/// Convert a centering result into its numeric status (0 on success).
pub fn center_status(result: &std::result::Result<(), CenterError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.code(),
    }
}

/// Errors converting host window handles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The host could not provide a window handle.
    #[error("window handle unavailable: {0}")]
    Unavailable(String),

    /// The host provided a handle for a windowing system other than Win32.
    #[error("expected Win32 window handle, got {0}")]
    UnsupportedPlatform(String),
}

/// Errors loading chrome configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid chrome configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read chrome configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_error_codes() {
        let info = PlatformError::new("GetMonitorInfoW", "bad monitor");
        let rect = PlatformError::new("GetWindowRect", "invalid window handle");

        assert_eq!(CenterError::MonitorLookup.code(), 1);
        assert_eq!(CenterError::MonitorInfo(info).code(), 2);
        assert_eq!(CenterError::WindowBounds(rect).code(), 3);
    }

    #[test]
    fn test_center_error_ordering_follows_stage() {
        let lookup = CenterError::MonitorLookup;
        let info = CenterError::MonitorInfo(PlatformError::new("GetMonitorInfoW", "x"));
        let rect = CenterError::WindowBounds(PlatformError::new("GetWindowRect", "x"));

        assert!(lookup < info);
        assert!(info < rect);
    }

    #[test]
    fn test_center_status() {
        assert_eq!(center_status(&Ok(())), 0);
        assert_eq!(center_status(&Err(CenterError::MonitorLookup)), 1);
    }

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::new("GetWindowRect", "invalid window handle");
        assert_eq!(err.to_string(), "GetWindowRect failed: invalid window handle");
        assert_eq!(err.call(), "GetWindowRect");
        assert_eq!(err.message(), "invalid window handle");

        let center = CenterError::WindowBounds(err);
        assert_eq!(
            center.to_string(),
            "getting window rect failed: GetWindowRect failed: invalid window handle"
        );
    }
}
