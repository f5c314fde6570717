use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMAIL, DEFAULT_NAME};

/// A post record fetched from the remote API.
///
/// Deserialized field-for-field from the server's JSON; the loader treats
/// the list as opaque and preserves server order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// A user record fetched from the remote API. No validation is performed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// The locally-editable profile shown on the home screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// URI string of the chosen profile image, if any
    pub profile_image: Option<String>,
    pub is_publisher: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: String::from(DEFAULT_NAME),
            email: String::from(DEFAULT_EMAIL),
            profile_image: None,
            is_publisher: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_from_api_shape() {
        let json = r#"{"userId": 1, "id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
    }

    #[test]
    fn test_user_deserializes_from_api_shape() {
        let json = r#"{
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "address": {"street": "Victor Plains"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.username, "Antonette");
    }

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Jose Mallo");
        assert!(!profile.is_publisher);
        assert!(profile.profile_image.is_none());
    }
}
