//! Bearer token on the wire: requests built with `EngineAuth` headers reach the
//! endpoint with a token the shared secret verifies.

use beacond_core::{EngineAuth, JwtSecret};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_engine_request_carries_verifiable_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let secret_path = tmp.path().join("jwt.hex");
    let secret = JwtSecret::random();
    secret.write(&secret_path, false).unwrap();

    let auth = EngineAuth::from_file(&secret_path).unwrap();
    let mut headers = auth.headers().unwrap();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let response = reqwest::Client::new()
        .post(mock_server.uri())
        .headers(headers)
        .body(r#"{"jsonrpc":"2.0","id":1,"method":"eth_chainId","params":[]}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let authorization = requests[0]
        .headers
        .get("authorization")
        .unwrap()
        .to_str()
        .unwrap();
    let token = authorization
        .strip_prefix("Bearer ")
        .expect("Bearer scheme");
    assert!(secret.verify(token).is_ok());
    assert!(JwtSecret::random().verify(token).is_err());
}

#[tokio::test]
async fn test_unconfigured_auth_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let auth = EngineAuth::new(None);
    // Header construction fails before any request is made.
    assert!(auth.headers().is_err());
}
