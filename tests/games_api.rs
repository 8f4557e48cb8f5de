#[allow(dead_code)]
mod common;

use common::{TestServer, game_body};
use serde_json::Value;
use uuid::Uuid;

const DUPLICATE_MESSAGE: &str =
    "There is already a registered game with that name for this producer";

#[tokio::test]
async fn empty_catalog_lists_no_content() {
    let server = TestServer::new().await;

    let resp = server.list(1, 5).await;
    assert_eq!(resp.status(), 204);
    assert!(resp.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_defaults_page_and_quantity_to_one() {
    let server = TestServer::new().await;
    server.create_game("Chess", "Acme", 10.0).await;
    server.create_game("Go Board", "Acme", 20.0).await;

    let resp = server.client.get(server.games_url()).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let games: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["Name"], "Chess");
}

#[tokio::test]
async fn create_game_returns_view_with_pascal_case_keys() {
    let server = TestServer::new().await;

    let game = server.create_game("Chess", "Acme", 10.0).await;
    assert_eq!(game["Name"], "Chess");
    assert_eq!(game["Producer"], "Acme");
    assert_eq!(game["Price"], 10.0);
    let id = game["Id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn created_game_is_readable_by_returned_id() {
    let server = TestServer::new().await;
    let created = server.create_game("Chess", "Acme", 10.0).await;

    let resp = server.get_game(created["Id"].as_str().unwrap()).await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_game_is_unprocessable() {
    let server = TestServer::new().await;
    server.create_game("Chess", "Acme", 10.0).await;

    let resp = server.post_game("Chess", "Acme", 99.0).await;
    assert_eq!(resp.status(), 422);
    assert_eq!(resp.text().await.unwrap(), DUPLICATE_MESSAGE);

    let games: Vec<Value> = server.list(1, 10).await.json().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["Price"], 10.0);
}

#[tokio::test]
async fn same_name_from_another_producer_is_allowed() {
    let server = TestServer::new().await;
    server.create_game("Chess", "Acme", 10.0).await;

    let resp = server.post_game("Chess", "Globex", 12.0).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn unknown_id_reads_as_no_content() {
    let server = TestServer::new().await;

    let resp = server.get_game(&Uuid::new_v4().to_string()).await;
    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn mutations_on_unknown_id_are_not_found() {
    let server = TestServer::new().await;
    let url = format!("{}/{}", server.games_url(), Uuid::new_v4());

    let put = server
        .client
        .put(&url)
        .json(&game_body("Chess", "Acme", 10.0))
        .send()
        .await
        .unwrap();
    let patch = server
        .client
        .patch(format!("{url}/price/15"))
        .send()
        .await
        .unwrap();
    let delete = server.client.delete(&url).send().await.unwrap();

    for resp in [put, patch, delete] {
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.text().await.unwrap(), "Game not found");
    }
}

#[tokio::test]
async fn full_update_replaces_every_field() {
    let server = TestServer::new().await;
    let created = server.create_game("Chess", "Acme", 10.0).await;
    let id = created["Id"].as_str().unwrap();

    let resp = server
        .client
        .put(format!("{}/{}", server.games_url(), id))
        .json(&game_body("Chess Deluxe", "Globex", 42.5))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = server.get_game(id).await.json().await.unwrap();
    assert_eq!(fetched["Id"], id);
    assert_eq!(fetched["Name"], "Chess Deluxe");
    assert_eq!(fetched["Producer"], "Globex");
    assert_eq!(fetched["Price"], 42.5);
}

#[tokio::test]
async fn price_update_changes_only_price() {
    let server = TestServer::new().await;
    let created = server.create_game("Chess", "Acme", 10.0).await;
    let id = created["Id"].as_str().unwrap();

    let resp = server
        .client
        .patch(format!("{}/{}/price/15", server.games_url(), id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = server.get_game(id).await.json().await.unwrap();
    assert_eq!(fetched["Name"], "Chess");
    assert_eq!(fetched["Producer"], "Acme");
    assert_eq!(fetched["Price"], 15.0);
}

#[tokio::test]
async fn delete_removes_game() {
    let server = TestServer::new().await;
    let created = server.create_game("Chess", "Acme", 10.0).await;
    let id = created["Id"].as_str().unwrap();

    let resp = server
        .client
        .delete(format!("{}/{}", server.games_url(), id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    assert_eq!(server.get_game(id).await.status(), 204);
    assert_eq!(server.list(1, 10).await.status(), 204);
}

#[tokio::test]
async fn pages_are_ordered_and_sliced() {
    let server = TestServer::new().await;
    for (name, price) in [("Mahjong", 30.0), ("Chess", 10.0), ("Go Board", 20.0)] {
        server.create_game(name, "Acme", price).await;
    }

    let first: Vec<Value> = server.list(1, 2).await.json().await.unwrap();
    let names: Vec<&str> = first.iter().map(|g| g["Name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Chess", "Go Board"]);

    let second: Vec<Value> = server.list(2, 2).await.json().await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0]["Name"], "Mahjong");

    assert_eq!(server.list(3, 2).await.status(), 204);
}

#[tokio::test]
async fn invalid_input_is_bad_request() {
    let server = TestServer::new().await;

    let short_name = server.post_game("Go", "Acme", 10.0).await;
    assert_eq!(short_name.status(), 400);
    let body: Value = short_name.json().await.unwrap();
    assert_eq!(body["errors"][0]["field"], "name");

    let cheap = server.post_game("Chess", "Acme", 0.5).await;
    assert_eq!(cheap.status(), 400);

    let expensive = server.post_game("Chess", "Acme", 1000.01).await;
    assert_eq!(expensive.status(), 400);

    let missing_field = server
        .client
        .post(server.games_url())
        .json(&serde_json::json!({ "Name": "Chess", "Producer": "Acme" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_field.status(), 400);

    assert_eq!(server.list(1, 10).await.status(), 204);
}

#[tokio::test]
async fn invalid_paging_and_path_values_are_bad_request() {
    let server = TestServer::new().await;
    let created = server.create_game("Chess", "Acme", 10.0).await;
    let id = created["Id"].as_str().unwrap();

    assert_eq!(server.list(0, 5).await.status(), 400);
    assert_eq!(server.list(1, 0).await.status(), 400);
    assert_eq!(server.get_game("not-a-uuid").await.status(), 400);

    for price in ["abc", "0", "1001", "NaN", "inf", "-inf"] {
        let resp = server
            .client
            .patch(format!("{}/{}/price/{}", server.games_url(), id, price))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "price {price} should be rejected");
    }

    let fetched: Value = server.get_game(id).await.json().await.unwrap();
    assert_eq!(fetched["Price"], 10.0);
}

#[tokio::test]
async fn malformed_ids_share_the_json_error_body() {
    let server = TestServer::new().await;
    let bad = format!("{}/not-a-uuid", server.games_url());

    let responses = [
        server.client.get(&bad).send().await.unwrap(),
        server
            .client
            .put(&bad)
            .json(&game_body("Chess", "Acme", 10.0))
            .send()
            .await
            .unwrap(),
        server.client.delete(&bad).send().await.unwrap(),
        server
            .client
            .patch(format!("{bad}/price/15"))
            .send()
            .await
            .unwrap(),
    ];

    for response in responses {
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}
