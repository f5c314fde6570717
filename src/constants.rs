//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL for the remote data demo endpoints (`/posts`, `/users`)
pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default profile name when no preferences are saved yet
pub const DEFAULT_NAME: &str = "Jose Mallo";

/// Default profile email when no preferences are saved yet
pub const DEFAULT_EMAIL: &str = "Mallojose791@gmail.com";

/// Directory (under the home directory) holding saved preferences
pub const PREFS_DIR: &str = ".miniprofile";

/// Preferences file name inside [`PREFS_DIR`]
pub const PREFS_FILE: &str = "prefs.yaml";

/// Log file written next to the working directory
pub const LOG_FILE: &str = "miniprofile.log";

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "MiniProfile TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
