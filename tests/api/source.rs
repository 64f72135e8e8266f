//! tests/api/source.rs
use crate::helpers::{TestServer, closed_address, setup_tracing, test_data_dir};
use claims::{assert_err, assert_matches, assert_ok};
use wordfreq::configuration::SourceSettings;
use wordfreq::error::RetrievalError;
use wordfreq::source::{DocumentSource, FileSource, HttpSource, LocatorSource};

fn http_source() -> HttpSource {
    HttpSource::from_settings(&SourceSettings::default()).expect("Failed to build HTTP client")
}

#[tokio::test]
async fn a_successful_download_returns_the_body() {
    setup_tracing();
    let server = TestServer::serve(200, "Call me Ishmael.").await;

    let text = assert_ok!(http_source().fetch(&server.url("moby.txt")).await);

    assert_eq!(text, "Call me Ishmael.");
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn bodies_are_decoded_with_the_declared_charset() {
    setup_tracing();
    // "Café Noël" in ISO-8859-1.
    let latin1 = b"Caf\xe9 No\xebl";
    let server = TestServer::serve_bytes(200, "text/plain; charset=iso-8859-1", latin1).await;

    let text = assert_ok!(http_source().fetch(&server.url("latin1.txt")).await);

    assert_eq!(text, "Café Noël");
}

#[tokio::test]
async fn a_non_success_status_is_a_retrieval_error_without_retries() {
    setup_tracing();
    let server = TestServer::serve(503, "try later").await;

    let err = assert_err!(http_source().fetch(&server.url("moby.txt")).await);

    match err {
        RetrievalError::Status { url, status } => {
            assert_eq!(status.as_u16(), 503);
            assert!(url.ends_with("/moby.txt"));
        }
        other => panic!("Expected a status error, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn client_errors_are_not_success() {
    setup_tracing();
    let server = TestServer::serve(404, "not here").await;
    let err = assert_err!(http_source().fetch(&server.url("gone.txt")).await);
    assert_matches!(err, RetrievalError::Status { .. });
}

#[tokio::test]
async fn an_unreachable_host_is_a_request_error() {
    setup_tracing();
    let address = closed_address().await;

    let err = assert_err!(http_source().fetch(&format!("http://{address}/moby.txt")).await);

    assert_matches!(err, RetrievalError::Request { .. });
}

#[tokio::test]
async fn the_locator_source_routes_by_scheme() {
    setup_tracing();
    let server = TestServer::serve(200, "over the wire").await;
    let source = LocatorSource::new(http_source(), FileSource);

    let remote = assert_ok!(source.fetch(&server.url("remote.txt")).await);
    assert_eq!(remote, "over the wire");

    let mut path = test_data_dir();
    path.push("small_test.txt");
    let local = assert_ok!(source.fetch(path.to_str().unwrap()).await);
    assert!(local.starts_with("Call me Ishmael."));

    let err = assert_err!(source.fetch("ftp://example.com/moby.txt").await);
    assert_matches!(err, RetrievalError::UnsupportedScheme { .. });
}
