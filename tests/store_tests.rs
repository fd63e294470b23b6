//! GitHub file store integration tests against a mock contents API

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitcms::application::ports::{FileStore, FileStoreError, Revision};
use gitcms::domain::asset::SiteRepo;
use gitcms::infrastructure::GithubFileStore;

fn test_repo() -> SiteRepo {
    SiteRepo::new("acme", "site", "main")
}

fn store(server: &MockServer, token: Option<&str>) -> GithubFileStore {
    GithubFileStore::with_base_url(test_repo(), token.map(String::from), server.uri())
}

/// Contents API GET payload for `bytes`, wrapped the way GitHub wraps it
fn contents_body(bytes: &[u8], sha: &str) -> serde_json::Value {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    // GitHub inserts a newline every 60 chars; one in the middle is enough
    // to prove the client strips them
    let mid = encoded.len() / 2;
    let wrapped = format!("{}\n{}\n", &encoded[..mid], &encoded[mid..]);
    json!({
        "name": "content.json",
        "path": "content.json",
        "sha": sha,
        "content": wrapped,
        "encoding": "base64"
    })
}

#[tokio::test]
async fn fetch_decodes_wrapped_base64_and_returns_revision() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_body(
            br#"{"brandName":"Solast_art"}"#,
            "abc123",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let file = store(&server, None).fetch_file("content.json").await.unwrap();

    assert_eq!(file.bytes, br#"{"brandName":"Solast_art"}"#);
    assert_eq!(file.revision.as_str(), "abc123");
    assert_eq!(file.path, "content.json");
}

#[tokio::test]
async fn fetch_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let err = store(&server, None)
        .fetch_file("content.json")
        .await
        .unwrap_err();

    assert!(matches!(err, FileStoreError::NotFound));
}

#[tokio::test]
async fn fetch_surfaces_server_errors_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = store(&server, None)
        .fetch_file("content.json")
        .await
        .unwrap_err();

    match err {
        FileStoreError::Remote { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("Expected Remote error, got: {:?}", other),
    }
}

#[tokio::test]
async fn fetch_sends_api_headers_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(header("Authorization", "token ghp_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_body(b"{}", "abc")))
        .expect(1)
        .mount(&server)
        .await;

    store(&server, Some("ghp_secret"))
        .fetch_file("content.json")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("user-agent").is_some());
}

#[tokio::test]
async fn fetch_without_token_is_anonymous() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_body(b"{}", "abc")))
        .mount(&server)
        .await;

    store(&server, None).fetch_file("content.json").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn write_sends_message_branch_and_content_without_sha_on_create() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/site/contents/content.json"))
        .and(body_partial_json(json!({
            "message": "Create initial content.json",
            "branch": "main"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": { "sha": "created-sha" },
            "commit": { "sha": "deadbeef" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = store(&server, Some("ghp_secret"))
        .write_file("content.json", b"{}", "Create initial content.json", None)
        .await
        .unwrap();

    assert_eq!(file.revision.as_str(), "created-sha");
    assert_eq!(file.bytes, b"{}");

    // No sha key at all when creating
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("sha").is_none());
}

#[tokio::test]
async fn write_carries_the_expected_revision_as_sha() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/site/contents/content.json"))
        .and(body_partial_json(json!({ "sha": "old-sha" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": { "sha": "new-sha" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let revision = Revision::new("old-sha");
    let file = store(&server, Some("ghp_secret"))
        .write_file("content.json", b"{}", "Update content.json", Some(&revision))
        .await
        .unwrap();

    assert_eq!(file.revision.as_str(), "new-sha");
}

#[tokio::test]
async fn write_without_token_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = store(&server, None)
        .write_file("content.json", b"{}", "Update content.json", None)
        .await
        .unwrap_err();

    assert!(matches!(err, FileStoreError::MissingCredential));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn write_surfaces_conflicts_as_remote_errors() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/repos/acme/site/contents/content.json"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "content.json does not match sha"
        })))
        .mount(&server)
        .await;

    let err = store(&server, Some("ghp_secret"))
        .write_file("content.json", b"{}", "Update content.json", None)
        .await
        .unwrap_err();

    match err {
        FileStoreError::Remote { status, body } => {
            assert_eq!(status, 409);
            assert!(body.contains("does not match"));
        }
        other => panic!("Expected Remote error, got: {:?}", other),
    }
}

#[tokio::test]
async fn fetch_rejects_a_payload_without_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/site/contents/content.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "unexpected shape"
        })))
        .mount(&server)
        .await;

    let err = store(&server, None)
        .fetch_file("content.json")
        .await
        .unwrap_err();

    assert!(matches!(err, FileStoreError::InvalidResponse(_)));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn fetch_from_the_real_api() {
    // Anonymous read of a well-known public file
    let store = GithubFileStore::new(
        SiteRepo::new("octocat", "Hello-World", "master"),
        None,
    );

    let file = store.fetch_file("README").await.unwrap();
    assert!(!file.bytes.is_empty());
    assert!(!file.revision.as_str().is_empty());
}
