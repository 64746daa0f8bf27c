//! Per-request server status data.

use chrono::{DateTime, Local, TimeZone};

/// Format used for the human-readable `datetime` field.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The platform family the server was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Win32,
}

impl Platform {
    /// The platform of the running binary, fixed at compile time.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Win32
        } else {
            Platform::Unix
        }
    }

    /// Short label reported as `platform` in the JSON status.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Win32 => "win32",
        }
    }

    /// Operating system name shown on the status page and as `os`.
    pub fn os_name(&self) -> &'static str {
        match self {
            Platform::Unix => "Linux/Unix",
            Platform::Win32 => "Windows",
        }
    }
}

/// Wall-clock time captured for one status response.
///
/// Both fields come from the same clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Local time as `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl StatusSnapshot {
    /// Sample the clock now.
    pub fn capture() -> Self {
        Self::at(&Local::now())
    }

    /// Build a snapshot from a given instant.
    pub fn at<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            datetime: instant.format(DATETIME_FORMAT).to_string(),
            timestamp: instant.timestamp(),
        }
    }
}
