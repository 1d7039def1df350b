//! Outbound requests: pure builders for every upstream call, and a single
//! `execute` that enforces the `200 OK` contract before handing the body on.

use chrono::Utc;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    ORIGIN, PRAGMA, REFERER, USER_AGENT,
};
use reqwest::{Method, Request, StatusCode};
use serde::Serialize;
use url::Url;

use crate::core::client::{HltbClient, constants as c};
use crate::core::error::HltbError;

/// Headers carried by every request: UA, `Origin` and `Referer`.
fn base_headers(user_agent: &str) -> Result<HeaderMap, HltbError> {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, header_value(user_agent)?);
    h.insert(ORIGIN, HeaderValue::from_static(c::ORIGIN));
    h.insert(REFERER, HeaderValue::from_static(c::ORIGIN));
    Ok(h)
}

/// Base headers plus the browser fingerprint sent with search and detail requests.
fn browser_headers(user_agent: &str) -> Result<HeaderMap, HltbError> {
    let mut h = base_headers(user_agent)?;
    h.insert(ACCEPT, HeaderValue::from_static(c::ACCEPT));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(c::ACCEPT_LANGUAGE));
    h.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    h.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    h.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static(c::SEC_CH_UA),
    );
    h.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static(c::SEC_CH_UA_MOBILE),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static(c::SEC_FETCH_MODE),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static(c::SEC_FETCH_DEST),
    );
    h.insert(HeaderName::from_static("dnt"), HeaderValue::from_static("1"));
    Ok(h)
}

/// Browser headers plus JSON content type and the issued token.
fn search_headers(user_agent: &str, token: &str) -> Result<HeaderMap, HltbError> {
    let mut h = browser_headers(user_agent)?;
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static(c::AUTH_TOKEN_HEADER),
        header_value(token)?,
    );
    Ok(h)
}

fn header_value(s: &str) -> Result<HeaderValue, HltbError> {
    Ok(HeaderValue::from_str(s)?)
}

impl HltbClient {
    fn build(&self, method: Method, url: Url, headers: HeaderMap) -> reqwest::RequestBuilder {
        // Timeout is applied per request so a caller-supplied transport never loses it.
        self.http()
            .request(method, url)
            .headers(headers)
            .timeout(self.timeout())
    }

    /// `GET {token_url}?t=<now>`; the timestamp only defeats HTTP caching.
    pub(crate) fn token_request(&self) -> Result<Request, HltbError> {
        let mut url = self.token_url().clone();
        url.query_pairs_mut()
            .append_pair("t", &Utc::now().timestamp_millis().to_string());
        Ok(self
            .build(Method::GET, url, base_headers(self.user_agent())?)
            .build()?)
    }

    /// `GET {base}`: the page whose `<script src>` tags list the chunks.
    pub(crate) fn root_page_request(&self) -> Result<Request, HltbError> {
        Ok(self
            .build(
                Method::GET,
                self.base_url().clone(),
                base_headers(self.user_agent())?,
            )
            .build()?)
    }

    /// `GET {base}{path}` for one script chunk.
    pub(crate) fn script_request(&self, path: &str) -> Result<Request, HltbError> {
        let url = self.base_url().join(path)?;
        Ok(self
            .build(Method::GET, url, base_headers(self.user_agent())?)
            .build()?)
    }

    /// `POST {base}{endpoint_path}` with the token header and a JSON body.
    pub(crate) fn search_request<B: Serialize + ?Sized>(
        &self,
        endpoint_path: &str,
        token: &str,
        body: &B,
    ) -> Result<Request, HltbError> {
        let url = self.base_url().join(endpoint_path)?;
        let payload = serde_json::to_vec(body)?;
        Ok(self
            .build(
                Method::POST,
                url,
                search_headers(self.user_agent(), token)?,
            )
            .body(payload)
            .build()?)
    }

    /// `GET {detail_base}{game_id}`.
    pub(crate) fn detail_request(&self, game_id: u64) -> Result<Request, HltbError> {
        let url = self.detail_base().join(&game_id.to_string())?;
        Ok(self
            .build(Method::GET, url, browser_headers(self.user_agent())?)
            .build()?)
    }

    /// Sends `req` and passes the body of a `200 OK` response to `handler`.
    ///
    /// Any other status is an [`HltbError::UnexpectedStatus`]. The response is
    /// owned here and dropped on every path, including a failing handler, whose
    /// error is returned unchanged.
    pub(crate) async fn execute<T, F>(&self, req: Request, handler: F) -> Result<T, HltbError>
    where
        F: FnOnce(&[u8]) -> Result<T, HltbError>,
    {
        let url = req.url().to_string();
        #[cfg(feature = "tracing")]
        tracing::trace!(method = %req.method(), %url, "sending request");

        let resp = self.http().execute(req).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HltbError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        let body = resp.bytes().await?;
        handler(&body)
    }
}
