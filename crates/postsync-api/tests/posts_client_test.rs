#![allow(clippy::unwrap_used)]
// Integration tests for `PostsClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postsync_api::{AuthorRef, Error, NewPost, PostsClient, RemotePost, StatusCode};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PostsClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = PostsClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Read ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_posts() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "A", "body": "x", "userId": 7},
            {"id": 2, "title": "B", "body": "y", "userId": 8}
        ])))
        .mount(&server)
        .await;

    let posts = client.list_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, Some(1));
    assert_eq!(posts[0].title, "A");
    assert_eq!(posts[1].user_id, Some(AuthorRef::Number(8)));
}

#[tokio::test]
async fn test_list_posts_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let result = client.list_posts().await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_posts_garbage_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client.list_posts().await;

    assert!(
        matches!(result, Err(Error::Deserialization { ref body, .. }) if body == "<html>"),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Write ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_post_echoes_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(json!({"title": "T", "body": "B", "userId": "3"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 101, "title": "T", "body": "B", "userId": "3"
        })))
        .mount(&server)
        .await;

    let created = client
        .create_post(&NewPost {
            title: "T".into(),
            body: "B".into(),
            user_id: AuthorRef::from("3"),
        })
        .await
        .unwrap();

    assert_eq!(created.id, Some(101));
    assert_eq!(created.user_id.and_then(|a| a.coerce()), Some(3));
}

#[tokio::test]
async fn test_update_post_puts_full_record() {
    let (server, client) = setup().await;

    let record = RemotePost {
        id: Some(4),
        title: "new".into(),
        body: "text".into(),
        user_id: Some(AuthorRef::Number(1)),
    };

    Mock::given(method("PUT"))
        .and(path("/posts/4"))
        .and(body_json(json!({"id": 4, "title": "new", "body": "text", "userId": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&record))
        .mount(&server)
        .await;

    let updated = client.update_post("4", &record).await.unwrap();
    assert_eq!(updated, record);
}

#[tokio::test]
async fn test_update_post_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/posts/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .update_post("999", &RemotePost::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404), "expected 404, got: {err:?}");
}

#[tokio::test]
async fn test_delete_post() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let status = client.delete_post("1").await.unwrap();
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_post_no_content() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let status = client.delete_post("1").await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_post_failure_uses_reason_phrase() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/posts/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    match client.delete_post("1").await {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
