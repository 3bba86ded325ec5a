// tests/comment_tests.rs

mod common;

use common::spawn_app;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn requests_without_token_are_rejected() {
    // Arrange
    let app = spawn_app().await;
    let video = Uuid::new_v4();

    // Act
    let response = app
        .client
        .get(app.url(&format!("/videos/{}/comments", video)))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 401);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn add_comment_returns_201_envelope() {
    let app = spawn_app().await;
    let (user, token) = app.user().await;
    let video = Uuid::new_v4();

    let response = app
        .client
        .post(app.url(&format!("/videos/{}/comments", video)))
        .bearer_auth(&token)
        .json(&json!({ "content": "First!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 201);
    assert_eq!(body["message"], "Comment added successfully");
    assert_eq!(body["data"]["content"], "First!");
    assert_eq!(body["data"]["owner"], user.to_string());
    assert_eq!(body["data"]["video"], video.to_string());
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn add_comment_rejects_blank_or_missing_content() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;
    let url = app.url(&format!("/videos/{}/comments", Uuid::new_v4()));

    for payload in [
        json!({ "content": "   " }),
        json!({}),
        json!({ "content": null }),
    ] {
        let response = app
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Content is required");
        assert_eq!(body["data"], Value::Null);
    }
}

#[tokio::test]
async fn undecodable_body_is_a_400_envelope() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;

    let response = app
        .client
        .post(app.url(&format!("/videos/{}/comments", Uuid::new_v4())))
        .bearer_auth(&token)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn listing_paginates_newest_first() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;
    let video = Uuid::new_v4();
    let url = app.url(&format!("/videos/{}/comments", video));

    for i in 0..25 {
        app.client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({ "content": format!("comment {}", i) }))
            .send()
            .await
            .unwrap();
    }

    let response = app
        .client
        .get(format!("{}?page=2&limit=10", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Comments fetched successfully");

    let contents: Vec<&str> = body["data"]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    let expected: Vec<String> = (5..15).rev().map(|i| format!("comment {}", i)).collect();
    assert_eq!(contents, expected);

    assert_eq!(
        body["data"]["pagination"],
        json!({ "total": 25, "page": 2, "limit": 10, "totalPages": 3 })
    );
}

#[tokio::test]
async fn junk_paging_values_fall_back_to_defaults() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;
    let url = app.url(&format!("/videos/{}/comments", Uuid::new_v4()));

    app.client
        .post(&url)
        .bearer_auth(&token)
        .json(&json!({ "content": "only one" }))
        .send()
        .await
        .unwrap();

    let body: Value = app
        .client
        .get(format!("{}?page=abc&limit=-4", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["limit"], 10);
    assert_eq!(body["data"]["comments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_video_is_reported_as_not_found() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;

    let response = app
        .client
        .get(app.url(&format!("/videos/{}/comments", Uuid::new_v4())))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": 404, "data": [], "message": "No comments found for this video" })
    );
}

#[tokio::test]
async fn owner_can_update_and_delete() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;
    let video = Uuid::new_v4();

    let created: Value = app
        .client
        .post(app.url(&format!("/videos/{}/comments", video)))
        .bearer_auth(&token)
        .json(&json!({ "content": "draft" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let updated = app
        .client
        .patch(app.url(&format!("/comments/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "content": "final" }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status().as_u16(), 200);
    let updated: Value = updated.json().await.unwrap();
    assert_eq!(updated["message"], "Comment updated successfully");
    assert_eq!(updated["data"]["content"], "final");
    assert_eq!(updated["data"]["createdAt"], created["data"]["createdAt"]);
    assert_eq!(updated["data"]["video"], created["data"]["video"]);

    let deleted = app
        .client
        .delete(app.url(&format!("/comments/{}", id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 200);
    let deleted: Value = deleted.json().await.unwrap();
    assert_eq!(deleted["message"], "Comment deleted successfully");
    assert_eq!(deleted["data"]["id"], id.as_str());
    assert_eq!(deleted["data"]["content"], "final");

    let again = app
        .client
        .delete(app.url(&format!("/comments/{}", id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
}

#[tokio::test]
async fn non_owner_delete_is_forbidden_and_comment_survives() {
    let app = spawn_app().await;
    let (_, owner_token) = app.user().await;
    let (_, other_token) = app.user().await;
    let url = app.url(&format!("/videos/{}/comments", Uuid::new_v4()));

    let created: Value = app
        .client
        .post(&url)
        .bearer_auth(&owner_token)
        .json(&json!({ "content": "keep me" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .client
        .delete(app.url(&format!("/comments/{}", id)))
        .bearer_auth(&other_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "You are not allowed to delete this comment");

    let response = app
        .client
        .patch(app.url(&format!("/comments/{}", id)))
        .bearer_auth(&other_token)
        .json(&json!({ "content": "hijacked" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let listing: Value = app
        .client
        .get(&url)
        .bearer_auth(&other_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let comments = listing["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "keep me");
}

#[tokio::test]
async fn malformed_comment_id_is_a_400() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;

    let response = app
        .client
        .delete(app.url("/comments/not-a-valid-id"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid comment id");
}

#[tokio::test]
async fn repeated_paging_keys_fall_back_to_defaults() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;
    let url = app.url(&format!("/videos/{}/comments", Uuid::new_v4()));

    app.client
        .post(&url)
        .bearer_auth(&token)
        .json(&json!({ "content": "still listed" }))
        .send()
        .await
        .unwrap();

    let response = app
        .client
        .get(format!("{}?page=1&page=2&limit=5&limit=6", url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Comments fetched successfully");
    assert_eq!(
        body["data"]["pagination"],
        json!({ "total": 1, "page": 1, "limit": 10, "totalPages": 1 })
    );
}

#[tokio::test]
async fn undecodable_path_ids_are_400_envelopes() {
    let app = spawn_app().await;
    let (_, token) = app.user().await;

    let response = app
        .client
        .delete(app.url("/comments/%FF"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": 400, "data": null, "message": "Invalid comment id" })
    );

    let response = app
        .client
        .patch(app.url("/comments/%FF"))
        .bearer_auth(&token)
        .json(&json!({ "content": "edit" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid comment id");

    let response = app
        .client
        .get(app.url("/videos/%FF/comments"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid video id");
}
