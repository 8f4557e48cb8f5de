use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{Value, json};

use game_catalog::AppState;
use game_catalog::api::routes::create_router;
use game_catalog::config::ApiConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start the full router on an ephemeral port with in-memory storage.
    pub async fn new() -> Self {
        Self::with_api(ApiConfig::default()).await
    }

    pub async fn with_api(api: ApiConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = create_router(AppState::in_memory(), &api);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            client: reqwest::Client::new(),
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn games_url(&self) -> String {
        format!("{}/api/v1/games", self.base_url())
    }

    /// POST a game and return the raw response.
    pub async fn post_game(&self, name: &str, producer: &str, price: f64) -> reqwest::Response {
        self.client
            .post(self.games_url())
            .json(&game_body(name, producer, price))
            .send()
            .await
            .unwrap()
    }

    /// POST a game that must be accepted and return its view.
    pub async fn create_game(&self, name: &str, producer: &str, price: f64) -> Value {
        let resp = self.post_game(name, producer, price).await;
        assert_eq!(resp.status(), 200, "create {name}/{producer} failed");
        resp.json().await.unwrap()
    }

    pub async fn get_game(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/{}", self.games_url(), id))
            .send()
            .await
            .unwrap()
    }

    pub async fn list(&self, page: u32, quantity: u32) -> reqwest::Response {
        self.client
            .get(format!(
                "{}?page={}&quantity={}",
                self.games_url(),
                page,
                quantity
            ))
            .send()
            .await
            .unwrap()
    }
}

pub fn game_body(name: &str, producer: &str, price: f64) -> Value {
    json!({ "Name": name, "Producer": producer, "Price": price })
}
