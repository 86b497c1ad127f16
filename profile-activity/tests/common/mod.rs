#![allow(dead_code)]

use profile_activity::{ClientConfig, GitHubClient};
use serde_json::{json, Value};
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_root().join(name)).unwrap()
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(&ClientConfig::new(None).with_base_uri(server.uri())).unwrap()
}

pub fn repo_json(name: &str, fork: bool, pushed_at: Option<&str>) -> Value {
    json!({
        "name": name,
        "full_name": format!("octo/{name}"),
        "html_url": format!("https://github.com/octo/{name}"),
        "fork": fork,
        "pushed_at": pushed_at,
    })
}

pub fn release_json(repo: &str, tag: &str, published_at: Option<&str>) -> Value {
    json!({
        "tag_name": tag,
        "html_url": format!("https://github.com/octo/{repo}/releases/tag/{tag}"),
        "published_at": published_at,
    })
}

pub fn commits_json(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({ "sha": format!("{i:040x}") }))
            .collect(),
    )
}

pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_graphql(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}
