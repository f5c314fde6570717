//! HTTP client wrapper - fetches record lists and normalizes failures

use serde::de::DeserializeOwned;

use crate::loader::FetchError;
use crate::models::{Post, User};

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::new(e.to_string())
    }
}

/// Fetch a JSON array and deserialize it, preserving server order.
///
/// Transport failures, non-2xx statuses, and deserialization failures all
/// collapse into one [`FetchError`] carrying the failure's description.
async fn fetch_list<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<T>, FetchError> {
    let resp = client.get(url).send().await?.error_for_status()?;
    let records = resp.json::<Vec<T>>().await?;
    Ok(records)
}

/// GET `{base}/posts`
pub async fn fetch_posts(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Post>, FetchError> {
    fetch_list(client, &format!("{}/posts", base_url)).await
}

/// GET `{base}/users`
pub async fn fetch_users(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<User>, FetchError> {
    fetch_list(client, &format!("{}/users", base_url)).await
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
