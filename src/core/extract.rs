//! Response body extractors: plain JSON, JSON embedded in a `<script id=...>`
//! element, and the two pattern scans used by endpoint discovery.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::core::error::HltbError;
use crate::core::wire::drop_nulls;

/// `<script ... src="/_next/static/chunks/....js">` tags on the root page.
static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]*\ssrc=["'](/_next/static/chunks/[^"']+\.js)["']"#)
        .expect("script src regex")
});

/// A `fetch("/api/...", { ... method: "POST" ...` call in client code. The path
/// may be built with trailing `.concat(...)` calls before the options object,
/// and the options may hold one level of nested objects (e.g. `headers`)
/// ahead of `method`.
static FETCH_POST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"fetch\(\s*["'](/api/[A-Za-z0-9_\-/]+)["']"#,
        r#"(?:\s*\.concat\([^)]*\))*\s*,\s*"#,
        r#"\{(?:[^{}]|\{[^{}]*\})*?method\s*:\s*["']POST["']"#,
    ))
    .expect("fetch regex")
});

/// Decode a whole body as JSON. `null` members count as absent.
pub(crate) fn json<T: DeserializeOwned>(body: &[u8]) -> Result<T, HltbError> {
    decode(serde_json::from_slice(body)?)
}

fn decode<T: DeserializeOwned>(mut value: serde_json::Value) -> Result<T, HltbError> {
    drop_nulls(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Locate `<script id="{id}" type="application/json">`, take everything up to
/// the next `</script>` and decode it as JSON.
pub(crate) fn embedded_json<T: DeserializeOwned>(body: &[u8], id: &str) -> Result<T, HltbError> {
    let inner = embedded_script(body, id)?;
    decode(serde_json::from_slice(inner)?)
}

fn embedded_script<'a>(body: &'a [u8], id: &str) -> Result<&'a [u8], HltbError> {
    let open = format!(r#"<script id="{id}" type="application/json">"#);
    let close = b"</script>";

    let start = find(body, open.as_bytes())
        .map(|i| i + open.len())
        .ok_or_else(|| HltbError::ElementNotFound { id: id.to_string() })?;
    let rest = &body[start..];
    let end = find(rest, close).unwrap_or(rest.len());
    let inner = &rest[..end];

    if inner.iter().all(u8::is_ascii_whitespace) {
        return Err(HltbError::EmptyElement { id: id.to_string() });
    }
    Ok(inner)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Every static chunk path referenced by a `<script src>` tag, in document order.
pub(crate) fn script_paths(html: &str) -> Result<Vec<String>, HltbError> {
    let paths: Vec<String> = SCRIPT_SRC
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if paths.is_empty() {
        return Err(HltbError::PatternNotFound("script chunk paths"));
    }
    Ok(paths)
}

/// The search endpoint POSTed to by client code, trimmed to `/api/<segment>`.
pub(crate) fn endpoint_path(script: &str) -> Result<String, HltbError> {
    FETCH_POST
        .captures_iter(script)
        .filter_map(|caps| caps.get(1))
        .find_map(|m| first_api_segment(m.as_str()))
        .ok_or(HltbError::PatternNotFound("search endpoint fetch call"))
}

fn first_api_segment(path: &str) -> Option<String> {
    let segment = path.strip_prefix("/api/")?.split('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(format!("/api/{segment}"))
}
