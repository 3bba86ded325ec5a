// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use social_backend::{
    config::Config, routes, state::AppState, store::memory::MemoryDirectory, utils::jwt::sign_jwt,
};
use uuid::Uuid;

const SECRET: &str = "test_secret_for_integration_tests";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub users: Arc<MemoryDirectory>,
}

impl TestApp {
    /// Registers a fresh user and returns its id with a bearer token.
    pub async fn user(&self) -> (Uuid, String) {
        let id = Uuid::new_v4();
        self.users.insert(id).await;
        (id, self.token(id))
    }

    /// A token for a user that is not in the directory.
    pub fn token(&self, id: Uuid) -> String {
        bearer(id)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: SECRET.to_string(),
        rust_log: "error".to_string(),
        port: 0,
    }
}

/// A bearer token for `id`, signed with the test secret.
pub fn bearer(id: Uuid) -> String {
    sign_jwt(id, SECRET, 600).expect("Failed to sign token")
}

/// Serves `state` on a random port and returns the base address.
pub async fn serve(state: AppState) -> String {
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

/// Spawns the app on a random port with in-memory storage.
pub async fn spawn_app() -> TestApp {
    let users = Arc::new(MemoryDirectory::new());
    let state = AppState::in_memory(users.clone(), test_config());

    TestApp {
        address: serve(state).await,
        client: reqwest::Client::new(),
        users,
    }
}
