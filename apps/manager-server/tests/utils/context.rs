use std::sync::Arc;

use json_data_provider::FileStore;
use manager_core::model::participant::{Participant, ParticipantStatus};
use manager_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::store_clients::StoreClient;
use crate::fixtures;

pub struct TestContext {
    pub store: StoreClient,
    pub api: Client,
    _store_dir: tempfile::TempDir,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new(additional_config: Option<String>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let store_dir = tempfile::tempdir().unwrap();
        let store_path = store_dir.path().join("db.json");
        let config = fixtures::create_config(store_path.to_string_lossy(), additional_config);

        let store = Arc::new(FileStore::open(&store_path).await.unwrap());
        let _handle = tokio::spawn({
            let store = store.clone();
            async move { start_server(listener, config, store).await }
        });

        Self {
            store: StoreClient::new(store),
            api: Client::new(base_url),
            _store_dir: store_dir,
            _handle,
        }
    }

    pub async fn new_with_participant(status: ParticipantStatus) -> (Self, Participant) {
        let context = Self::new(None).await;
        let participant = context
            .store
            .participants
            .create(&fixtures::random_participant_name(), status)
            .await;

        (context, participant)
    }
}
