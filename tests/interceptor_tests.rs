//! Integration tests for the request interceptor chain.

use maillon::interceptor::{RequestInterceptor, StaticHeaderInterceptor, TrackingIdInterceptor};
use maillon::{Error, HttpClient, HyperClient, Request, Result};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path},
};

fn request_for(mock_server: &MockServer, path: &str) -> Request {
    let url = url::Url::parse(&format!("{}{path}", mock_server.uri())).expect("url");
    Request::builder(http::Method::GET, url).build()
}

/// Every outgoing request carries the three headers added by the chain.
#[tokio::test]
async fn test_composite_headers_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/internal/foo"))
        .and(header("X-Auth-Token", "mockedTokenValue"))
        .and(header_exists("X-Tracking-ID"))
        .and(header("X-Library", "libValue"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
        .interceptor(TrackingIdInterceptor::default())
        .interceptor(StaticHeaderInterceptor::new("X-Library", "libValue"))
        .build();

    let response = client
        .execute(request_for(&mock_server, "/api/internal/foo"))
        .await
        .expect("response");

    assert!(response.is_success());
    assert_eq!(response.text().expect("utf-8"), "OK");

    // The tracking header the server received is a canonical 36-char UUID.
    let received = mock_server.received_requests().await.expect("recording");
    let request = received.first().expect("one request");
    let tracking = request
        .headers
        .get("X-Tracking-ID")
        .expect("tracking header")
        .to_str()
        .expect("ascii");
    assert_eq!(tracking.len(), 36);
    assert!(
        tracking
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '-')
    );
}

/// Each request gets a fresh tracking identifier.
#[tokio::test]
async fn test_tracking_id_fresh_per_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracked"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .interceptor(TrackingIdInterceptor::default())
        .build();

    for _ in 0..2 {
        client
            .execute(request_for(&mock_server, "/tracked"))
            .await
            .expect("response");
    }

    let received = mock_server.received_requests().await.expect("recording");
    let ids: Vec<&str> = received
        .iter()
        .map(|r| {
            r.headers
                .get("X-Tracking-ID")
                .expect("tracking header")
                .to_str()
                .expect("ascii")
        })
        .collect();

    assert_eq!(ids.len(), 2);
    assert_ne!(ids.first(), ids.last());
}

/// When two interceptors set the same header, the server sees the later value.
#[tokio::test]
async fn test_last_write_wins_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collide"))
        .and(header("X-Library", "second"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .interceptor(StaticHeaderInterceptor::new("X-Library", "first"))
        .interceptor(StaticHeaderInterceptor::new("X-Library", "second"))
        .build();

    let response = client
        .execute(request_for(&mock_server, "/collide"))
        .await
        .expect("response");

    assert!(response.is_success());
}

/// A failing interceptor aborts the request before anything is sent.
#[tokio::test]
async fn test_interceptor_failure_aborts_request() {
    struct FailingInterceptor;

    impl RequestInterceptor for FailingInterceptor {
        fn apply(&self, _request: &mut Request) -> Result<()> {
            Err(Error::interceptor("failing", "token store unavailable"))
        }
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/never"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
        .interceptor(FailingInterceptor)
        .build();

    let err = client
        .execute(request_for(&mock_server, "/never"))
        .await
        .expect_err("should fail");

    assert!(err.is_interceptor());
    assert_eq!(err.interceptor_name(), Some("failing"));
}

/// A client without interceptors still works.
#[tokio::test]
async fn test_empty_chain_passthrough() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"plain": true})),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();

    let response = client
        .execute(request_for(&mock_server, "/plain"))
        .await
        .expect("response");

    assert!(response.is_success());
}

/// Headers set on the request itself survive unless an interceptor overwrites them.
#[tokio::test]
async fn test_interceptors_overwrite_caller_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/overwrite"))
        .and(header("X-Auth-Token", "mockedTokenValue"))
        .and(header("Accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
        .build();

    let url = url::Url::parse(&format!("{}/overwrite", mock_server.uri())).expect("url");
    let request = Request::builder(http::Method::GET, url)
        .header("X-Auth-Token", "caller-supplied")
        .header("Accept", "text/plain")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
}
