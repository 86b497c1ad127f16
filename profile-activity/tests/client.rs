mod common;

use common::client_for;
use profile_activity::{ApiError, ClientConfig, GitHubClient};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn requests_carry_one_accept_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .and(header("user-agent", "GitHub-Profile-Updater"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octo" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user: Value = client.get_json("/users/octo", None::<&()>).await.unwrap();
    assert_eq!(user["login"], "octo");

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers.get_all("user-agent").iter().count(), 1);
    assert_eq!(headers.get_all("accept").iter().count(), 1);
    assert!(headers.get("authorization").is_none());
}

#[tokio::test]
async fn token_is_sent_as_bearer_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer ghp_test"))
        .and(header("user-agent", "GitHub-Profile-Updater"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(Some("ghp_test".to_string())).with_base_uri(server.uri());
    let client = GitHubClient::new(&config).unwrap();
    let response: Value = client.graphql("{ viewer { login } }").await.unwrap();
    assert!(response["data"].is_null());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get_all("authorization").iter().count(), 1);
    assert_eq!(client.failed_requests(), 0);
}

#[tokio::test]
async fn slow_response_times_out_and_is_counted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(None)
        .with_base_uri(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = GitHubClient::new(&config).unwrap();

    let started = Instant::now();
    let result = client.owned_repositories("octo").await;

    assert!(matches!(result, Err(ApiError::Timeout { .. })));
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(client.failed_requests(), 1);
}
