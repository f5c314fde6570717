//! Network layer - remote list fetches against the public REST API
//!
//! The Network actor receives fetch commands and sends back completions.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
