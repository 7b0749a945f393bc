//! Logging targets.
//!
//! All diagnostics go through the `tracing` crate. Install a subscriber in
//! the host application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("launcher_chrome=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Host-facing launcher chrome target.
    pub const CHROME: &str = "launcher_chrome::chrome";
    /// Win32 backend target.
    pub const WIN32: &str = "launcher_chrome::win32";
}
