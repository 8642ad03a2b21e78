//! HTTP-level integration tests: the reqwest-backed fetcher and the full
//! search pipeline against a mock Searchcode API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitscout::{PageFetcher, SearchConfig, SearchError, SearchcodeClient};

const API_PATH: &str = "/api/codesearch_I/";

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        base_url: format!("{}{API_PATH}", server.uri()),
        worker_count: 4,
        ..Default::default()
    }
}

fn page_body(repos: &[&str]) -> serde_json::Value {
    json!({
        "results": repos
            .iter()
            .map(|r| json!({ "repo": r, "filename": "config.yml" }))
            .collect::<Vec<_>>(),
    })
}

/// Mount a page mock for one offset. Page requests carry `p`; the
/// discovery call does not, so these never shadow it.
async fn mount_page(server: &MockServer, offset: usize, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("p", offset.to_string()))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_discovery(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn full_search_over_mock_api() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        0,
        ResponseTemplate::new(200).set_body_json(page_body(&["org/a", "org/b"])),
    )
    .await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(page_body(&["org/a"])),
    )
    .await;
    mount_discovery(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "total": 2, "results": [] })),
    )
    .await;

    let matches = gitscout::search_searchcode("uniquetoken1337", &config_for(&server))
        .await
        .expect("search should succeed");

    let mut repos: Vec<&str> = matches.iter().map(|m| m.repo.as_str()).collect();
    repos.sort_unstable();
    assert_eq!(repos, vec!["org/a", "org/b"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_page_body_is_dropped() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        0,
        ResponseTemplate::new(200).set_body_json(page_body(&["org/keep"])),
    )
    .await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;
    mount_discovery(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "total": 2, "results": [] })),
    )
    .await;

    let matches = gitscout::search_searchcode("token", &config_for(&server))
        .await
        .expect("decode failure is not fatal");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].repo, "org/keep");
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_page_status_is_dropped() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        0,
        ResponseTemplate::new(200).set_body_json(page_body(&["org/keep"])),
    )
    .await;
    mount_page(&server, 1, ResponseTemplate::new(500)).await;
    mount_discovery(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "total": 2, "results": [] })),
    )
    .await;

    let matches = gitscout::search_searchcode("token", &config_for(&server))
        .await
        .expect("transport failure is not fatal");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].repo, "org/keep");
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_discovery_yields_empty() {
    let server = MockServer::start().await;
    mount_discovery(&server, ResponseTemplate::new(503)).await;

    let matches = gitscout::search_searchcode("token", &config_for(&server))
        .await
        .expect("fail-soft");
    assert!(matches.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn client_decodes_discovery_response() {
    let server = MockServer::start().await;
    mount_discovery(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "total": 25, "results": [] })),
    )
    .await;

    let config = config_for(&server);
    let client = SearchcodeClient::new(&config).expect("client builds");
    let response = client
        .fetch_page(&format!("{}{API_PATH}?q=token", server.uri()))
        .await
        .expect("fetch should succeed");

    assert_eq!(response.total, Some(25));
}

#[tokio::test(flavor = "multi_thread")]
async fn client_maps_error_status_to_http_error() {
    let server = MockServer::start().await;
    mount_discovery(&server, ResponseTemplate::new(404)).await;

    let config = config_for(&server);
    let client = SearchcodeClient::new(&config).expect("client builds");
    let result = client
        .fetch_page(&format!("{}{API_PATH}?q=token", server.uri()))
        .await;

    assert!(matches!(result, Err(SearchError::Http(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn client_maps_bad_body_to_parse_error() {
    let server = MockServer::start().await;
    mount_discovery(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>splash page</html>"),
    )
    .await;

    let config = config_for(&server);
    let client = SearchcodeClient::new(&config).expect("client builds");
    let result = client
        .fetch_page(&format!("{}{API_PATH}?q=token", server.uri()))
        .await;

    assert!(matches!(result, Err(SearchError::Parse(_))));
}
