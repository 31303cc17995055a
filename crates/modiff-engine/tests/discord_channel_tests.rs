//! Discord reply channel against a local mock REST endpoint.

use std::num::NonZeroUsize;

use mockito::{Matcher, Server};
use modiff_core::errors::ModiffError;
use modiff_core_types::Sensitive;
use modiff_engine::config::DiscordConfig;
use modiff_engine::reply::{deliver, DiscordChannel, ReplyChannel};
use serde_json::json;

fn channel(server: &Server) -> DiscordChannel {
    let config = DiscordConfig {
        bot_token: None,
        api_url: server.url(),
    };
    DiscordChannel::new(
        &config,
        Sensitive::new("bot-secret".to_string()),
        "4242",
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn test_send_posts_content_with_bot_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/channels/4242/messages")
        .match_header("authorization", "Bot bot-secret")
        .match_body(Matcher::Json(json!({"content": "hello → world"})))
        .with_status(200)
        .with_body(r#"{"id":"1"}"#)
        .create_async()
        .await;

    channel(&server).send("hello → world").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_messages_url_format() {
    let server = Server::new_async().await;
    assert_eq!(
        channel(&server).messages_url(),
        format!("{}/channels/4242/messages", server.url())
    );
}

#[tokio::test]
async fn test_rejected_send_is_error_with_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/channels/4242/messages")
        .with_status(403)
        .with_body(r#"{"message":"Missing Permissions"}"#)
        .create_async()
        .await;

    let err = channel(&server).send("x").await.unwrap_err();
    assert!(err.0.starts_with("HTTP 403"));
    assert!(err.0.contains("Missing Permissions"));
}

#[tokio::test]
async fn test_deliver_posts_every_chunk() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/channels/4242/messages")
        .with_status(200)
        .expect(3)
        .create_async()
        .await;

    let sent = deliver(
        &"y".repeat(25),
        NonZeroUsize::new(10).unwrap(),
        &channel(&server),
    )
    .await
    .unwrap();

    assert_eq!(sent, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deliver_stops_at_first_rejection() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/channels/4242/messages")
        .with_status(500)
        .create_async()
        .await;

    let err = deliver(
        &"z".repeat(25),
        NonZeroUsize::new(10).unwrap(),
        &channel(&server),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ModiffError::Delivery {
            delivered: 0,
            total: 3,
            ..
        }
    ));
}
