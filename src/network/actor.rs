//! Network actor - runs fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::API_BASE_URL;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_posts, fetch_users};

/// Network actor that processes fetch commands.
///
/// Each fetch is spawned on a [`JoinSet`]; completions are forwarded to
/// the app layer in the order they land, which is where the
/// last-completion-wins behavior of overlapping fetches comes from.
/// There is no per-fetch cancellation; anything still in flight at
/// shutdown is dropped with the `JoinSet`.
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        Self::with_base_url(response_tx, API_BASE_URL)
    }

    pub fn with_base_url(
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
        base_url: impl Into<String>,
    ) -> Self {
        NetworkActor {
            client: create_client(),
            base_url: base_url.into(),
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPosts { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, "Fetching posts");
                                let outcome = fetch_posts(&client, &base_url).await;
                                tracing::info!(id, ok = outcome.is_ok(), "Posts fetch completed");
                                let _ = response_tx.send(NetworkResponse::Posts { id, outcome });
                            });
                        }

                        Some(NetworkCommand::FetchUsers { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, "Fetching users");
                                let outcome = fetch_users(&client, &base_url).await;
                                tracing::info!(id, ok = outcome.is_ok(), "Users fetch completed");
                                let _ = response_tx.send(NetworkResponse::Users { id, outcome });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_error_response() {
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let actor = NetworkActor::with_base_url(resp_tx, "http://127.0.0.1:9");
        let handle = tokio::spawn(actor.run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchPosts { id: 1 }).unwrap();

        let response = resp_rx.recv().await.unwrap();
        match response {
            NetworkResponse::Posts { id, outcome } => {
                assert_eq!(id, 1);
                assert!(outcome.is_err());
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
