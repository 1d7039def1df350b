use hltb_rs::{HltbError, ResolveStrategy};

use crate::common::{client_for, mock_chunk, mock_root_page, mock_token, setup_server};

#[tokio::test]
async fn scans_every_chunk_when_only_the_last_matches() {
    let server = setup_server();
    let token = mock_token(&server);
    let root = mock_root_page(&server, 4);
    let misses: Vec<_> = (0..3).map(|i| mock_chunk(&server, i, None)).collect();
    let hit = mock_chunk(&server, 3, Some("/api/seek"));

    let client = client_for(&server, ResolveStrategy::DiscoverEndpoint);
    let cfg = client.resolve().await.unwrap();

    assert_eq!(cfg.endpoint_path(), "/api/seek");
    token.assert();
    root.assert();
    for m in &misses {
        m.assert();
    }
    hit.assert();
}

#[tokio::test]
async fn stops_at_the_first_matching_chunk() {
    let server = setup_server();
    let token = mock_token(&server);
    let root = mock_root_page(&server, 5);
    let c0 = mock_chunk(&server, 0, None);
    let c1 = mock_chunk(&server, 1, Some("/api/lookup"));
    let c2 = mock_chunk(&server, 2, Some("/api/other"));
    let c3 = mock_chunk(&server, 3, None);
    let c4 = mock_chunk(&server, 4, None);

    let client = client_for(&server, ResolveStrategy::DiscoverEndpoint);
    let cfg = client.resolve().await.unwrap();

    assert_eq!(cfg.endpoint_path(), "/api/lookup");
    // token + root page + two chunks
    assert_eq!(token.hits() + root.hits() + c0.hits() + c1.hits(), 4);
    assert_eq!(c2.hits() + c3.hits() + c4.hits(), 0);
}

#[tokio::test]
async fn no_matching_chunk_is_endpoint_not_found() {
    let server = setup_server();
    let _token = mock_token(&server);
    let _root = mock_root_page(&server, 2);
    let _c0 = mock_chunk(&server, 0, None);
    let _c1 = mock_chunk(&server, 1, None);

    let client = client_for(&server, ResolveStrategy::DiscoverEndpoint);
    let err = client.resolve().await.unwrap_err();

    assert!(
        matches!(err, HltbError::EndpointNotFound { scanned: 2 }),
        "got {err:?}"
    );
    assert!(client.resolved().await.is_none());
}

#[tokio::test]
async fn root_page_without_chunks_scans_nothing() {
    let server = setup_server();
    let _token = mock_token(&server);
    let root = mock_root_page(&server, 0);

    let client = client_for(&server, ResolveStrategy::DiscoverEndpoint);
    let err = client.resolve().await.unwrap_err();

    root.assert();
    assert!(
        matches!(err, HltbError::EndpointNotFound { scanned: 0 }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn discovered_endpoint_is_cached() {
    let server = setup_server();
    let token = mock_token(&server);
    let root = mock_root_page(&server, 1);
    let chunk = mock_chunk(&server, 0, Some("/api/seek"));

    let client = client_for(&server, ResolveStrategy::DiscoverEndpoint);
    client.resolve().await.unwrap();
    let cfg = client.resolve().await.unwrap();

    assert_eq!(cfg.endpoint_path(), "/api/seek");
    assert_eq!(token.hits(), 1);
    assert_eq!(root.hits(), 1);
    assert_eq!(chunk.hits(), 1);
}
