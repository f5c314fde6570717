//! Network messages - communication between App and Network layers

use crate::loader::FetchError;
use crate::models::{Post, User};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full list of posts
    FetchPosts { id: u64 },
    /// Fetch the full list of users
    FetchUsers { id: u64 },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Responses arrive in completion order, not dispatch order; the app layer
/// applies them as they land.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Posts {
        id: u64,
        outcome: Result<Vec<Post>, FetchError>,
    },
    Users {
        id: u64,
        outcome: Result<Vec<User>, FetchError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    #[allow(dead_code)] // Used by tests and library consumers
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Posts { id, .. } => *id,
            NetworkResponse::Users { id, .. } => *id,
        }
    }
}
