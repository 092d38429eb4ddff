//! Helpers for standing up a mock Azure DevOps organization

use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azdo_mutation_reports::Config;

use super::fixtures::REPORT_TYPE;

/// Project every pipeline test runs against
pub const PROJECT: &str = "web";

/// Config pointed at the mock organization
pub fn config_for(server: &MockServer) -> Config {
    Config {
        organization_url: server.uri(),
        ..Config::default()
    }
}

/// Listing route for the given build
pub fn listing_path(build_id: i64) -> String {
    format!("/{PROJECT}/_apis/build/builds/{build_id}/attachments/{REPORT_TYPE}")
}

/// Content route for one attachment
pub fn content_path(build_id: i64, timeline_id: &str, record_id: &str, name: &str) -> String {
    format!(
        "/{PROJECT}/_apis/build/builds/{build_id}/{timeline_id}/{record_id}/attachments/{REPORT_TYPE}/{name}"
    )
}

/// Mount a successful attachment listing
pub async fn mount_listing(server: &MockServer, build_id: i64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(listing_path(build_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a failing attachment listing
pub async fn mount_listing_error(server: &MockServer, build_id: i64, status: u16) {
    Mock::given(method("GET"))
        .and(path(listing_path(build_id)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount one attachment's content
pub async fn mount_content(
    server: &MockServer,
    build_id: i64,
    timeline_id: &str,
    record_id: &str,
    name: &str,
    body: &str,
) {
    Mock::given(method("GET"))
        .and(path(content_path(build_id, timeline_id, record_id, name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount one attachment's content with an artificial response delay
pub async fn mount_content_delayed(
    server: &MockServer,
    build_id: i64,
    timeline_id: &str,
    record_id: &str,
    name: &str,
    body: &str,
    delay: Duration,
) {
    Mock::given(method("GET"))
        .and(path(content_path(build_id, timeline_id, record_id, name)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Mount a failing content route for one attachment
pub async fn mount_content_error(
    server: &MockServer,
    build_id: i64,
    timeline_id: &str,
    record_id: &str,
    name: &str,
    status: u16,
) {
    Mock::given(method("GET"))
        .and(path(content_path(build_id, timeline_id, record_id, name)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
