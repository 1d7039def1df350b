#![allow(dead_code)]

use hltb_rs::{HltbClient, ResolveStrategy};
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path, time::Duration};
use url::Url;

pub const TOKEN: &str = "b1c0ffee-5eed-4a1e-9bad-00000000cafe";

pub fn setup_server() -> MockServer {
    init_tracing();
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose every upstream URL points at the mock server.
pub fn client_for(server: &MockServer, strategy: ResolveStrategy) -> HltbClient {
    HltbClient::builder()
        .base_url(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .token_url(Url::parse(&format!("{}/api/finder/init", server.base_url())).unwrap())
        .detail_base(Url::parse(&format!("{}/game/", server.base_url())).unwrap())
        .resolve_strategy(strategy)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn mock_token(server: &'_ MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/finder/init")
            .query_param_exists("t");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(r#"{{"token":"{TOKEN}"}}"#));
    })
}

/// A root page referencing `n` chunks, `/_next/static/chunks/chunk-{i}.js`.
pub fn root_page_with_chunks(n: usize) -> String {
    let tags: String = (0..n)
        .map(|i| format!(r#"<script src="/_next/static/chunks/chunk-{i}.js" defer=""></script>"#))
        .collect();
    format!("<!DOCTYPE html><html><head>{tags}</head><body><div id=\"__next\"></div></body></html>")
}

pub fn mock_root_page(server: &'_ MockServer, chunks: usize) -> Mock<'_> {
    let html = root_page_with_chunks(chunks);
    server.mock(move |when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "text/html")
            .body(html);
    })
}

/// Chunk `i`; serves a POST fetch to `endpoint` when one is given.
pub fn mock_chunk<'a>(server: &'a MockServer, i: usize, endpoint: Option<&str>) -> Mock<'a> {
    let body = match endpoint {
        Some(ep) => format!(
            r#"(self.webpackChunk_N_E=self.webpackChunk_N_E||[]).push([[{i}],{{1:function(e,t,n){{let r=await fetch("{ep}/".concat("4f1c").concat("9a"),{{method:"POST",headers:h,body:JSON.stringify(b)}})}}}}]);"#
        ),
        None => format!(
            r#"(self.webpackChunk_N_E=self.webpackChunk_N_E||[]).push([[{i}],{{1:function(e,t,n){{fetch("/api/user/me",{{method:"GET"}})}}}}]);"#
        ),
    };
    server.mock(move |when, then| {
        when.method(GET)
            .path(format!("/_next/static/chunks/chunk-{i}.js"));
        then.status(200)
            .header("content-type", "application/javascript")
            .body(body);
    })
}

#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_tracing() {}

/// Live tests hit howlongtobeat.com and only run with `HLTB_LIVE=1`.
pub fn live_enabled() -> bool {
    std::env::var("HLTB_LIVE").is_ok_and(|v| v == "1")
}
