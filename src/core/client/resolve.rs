//! Token acquisition and search endpoint resolution.
//!
//! Resolution walks `Unresolved -> TokenFetched -> EndpointKnown`. Only a
//! completed walk is stored on the client; any failure leaves the slot empty so
//! the next call starts over from `Unresolved`.

use serde::Deserialize;

use super::constants::DEFAULT_SEARCH_ENDPOINT;
use crate::core::error::HltbError;
use crate::core::extract;

/// How the search endpoint path is determined once a token has been issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// Use the hardcoded primary search route. One request, no verification.
    #[default]
    FixedEndpoint,
    /// Scan the site's script chunks for the route client code POSTs to.
    /// Costs `2 + k` requests where `k` is the first chunk containing it.
    DiscoverEndpoint,
}

/// A token plus the search endpoint it is used against.
///
/// Produced once per client and reused verbatim until the client is dropped or
/// [`HltbClient::reset`](super::HltbClient::reset) is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    token: String,
    endpoint_path: String,
}

impl ResolvedConfig {
    /// The issued auth token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Server-relative search route, e.g. `/api/finder`.
    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

enum Resolution {
    Unresolved,
    TokenFetched { token: String },
    EndpointKnown(ResolvedConfig),
}

impl super::HltbClient {
    /// Return the cached configuration, resolving it first if needed.
    ///
    /// Concurrent first callers share one resolution: the first acquires the
    /// gate and runs the protocol, the rest wait and read its result. A failed
    /// resolution caches nothing.
    ///
    /// # Errors
    ///
    /// [`HltbError::TokenFetch`], [`HltbError::ScriptListFetch`],
    /// [`HltbError::ScriptFetch`] or [`HltbError::EndpointNotFound`] depending on
    /// the step that failed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn resolve(&self) -> Result<ResolvedConfig, HltbError> {
        if let Some(cfg) = self.resolved().await {
            return Ok(cfg);
        }

        let _guard = self.resolve_lock.lock().await;

        // Another task may have finished while we waited on the gate.
        if let Some(cfg) = self.resolved().await {
            return Ok(cfg);
        }

        let cfg = self.run_resolution().await?;
        *self.resolved.write().await = Some(cfg.clone());
        Ok(cfg)
    }

    /// The cached configuration, if resolution has completed.
    pub async fn resolved(&self) -> Option<ResolvedConfig> {
        self.resolved.read().await.clone()
    }

    /// Drop the cached configuration so the next call resolves from scratch.
    ///
    /// Nothing calls this automatically; use it when search starts failing
    /// because the upstream token has expired.
    pub async fn reset(&self) {
        let _guard = self.resolve_lock.lock().await;
        *self.resolved.write().await = None;
    }

    async fn run_resolution(&self) -> Result<ResolvedConfig, HltbError> {
        let mut state = Resolution::Unresolved;
        loop {
            state = match state {
                Resolution::Unresolved => Resolution::TokenFetched {
                    token: self.fetch_token().await?,
                },
                Resolution::TokenFetched { token } => {
                    let endpoint_path = match self.resolve_strategy() {
                        ResolveStrategy::FixedEndpoint => DEFAULT_SEARCH_ENDPOINT.to_string(),
                        ResolveStrategy::DiscoverEndpoint => self.discover_endpoint().await?,
                    };
                    Resolution::EndpointKnown(ResolvedConfig {
                        token,
                        endpoint_path,
                    })
                }
                Resolution::EndpointKnown(cfg) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(endpoint = %cfg.endpoint_path, "search endpoint resolved");
                    return Ok(cfg);
                }
            };
        }
    }

    async fn fetch_token(&self) -> Result<String, HltbError> {
        let req = self.token_request().map_err(HltbError::token)?;
        let resp: TokenResponse = self
            .execute(req, extract::json::<TokenResponse>)
            .await
            .map_err(HltbError::token)?;

        match resp.token {
            Some(token) if !token.is_empty() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("token acquired");
                Ok(token)
            }
            _ => Err(HltbError::token(HltbError::PatternNotFound("token field"))),
        }
    }

    /// Fetch the root page, then each chunk in document order until one yields
    /// the search endpoint. Stops at the first match.
    async fn discover_endpoint(&self) -> Result<String, HltbError> {
        let req = self.root_page_request().map_err(HltbError::script_list)?;
        let html = self
            .execute(req, |body| Ok(String::from_utf8_lossy(body).into_owned()))
            .await
            .map_err(HltbError::script_list)?;

        let paths = match extract::script_paths(&html) {
            Ok(paths) => paths,
            Err(HltbError::PatternNotFound(_)) => {
                return Err(HltbError::EndpointNotFound { scanned: 0 });
            }
            Err(e) => return Err(HltbError::script_list(e)),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(scripts = paths.len(), "scanning script chunks");

        for path in &paths {
            let req = self
                .script_request(path)
                .map_err(|e| HltbError::script(path, e))?;
            let found = self
                .execute(req, |body| {
                    Ok(extract::endpoint_path(&String::from_utf8_lossy(body)).ok())
                })
                .await
                .map_err(|e| HltbError::script(path, e))?;

            if let Some(endpoint) = found {
                #[cfg(feature = "tracing")]
                tracing::debug!(script = %path, "endpoint found");
                return Ok(endpoint);
            }
        }

        Err(HltbError::EndpointNotFound {
            scanned: paths.len(),
        })
    }
}
