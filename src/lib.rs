//! # MiniProfile TUI
//!
//! A terminal-based profile editor with informational sub-screens and a
//! remote-data demo screen that lists posts and users from a public REST
//! API.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)
//!
//! The reusable piece is the [`loader`] module: a four-state fetch
//! lifecycle (`Idle -> Loading -> Success/Error`) driven per data kind.

pub mod app;
pub mod constants;
pub mod loader;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use loader::{FetchError, FetchState, Loader};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Post, Profile, User};
pub use network::NetworkActor;
pub use storage::Prefs;
