//! Public client surface + builder.
//! Internals are split into `resolve` (token + endpoint discovery) and `constants` (UA + defaults).

pub(crate) mod constants;
mod resolve;

pub use resolve::{ResolveStrategy, ResolvedConfig};

use crate::core::HltbError;
use constants::{
    CONNECT_TIMEOUT, DEFAULT_BASE_URL, DEFAULT_DETAIL_BASE, DEFAULT_TIMEOUT, DEFAULT_TOKEN_URL,
    POOL_IDLE_TIMEOUT, POOL_MAX_IDLE_PER_HOST, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

/// Handle to the HowLongToBeat site.
///
/// Cloning is cheap and clones share the resolved token/endpoint slot, so a
/// single resolution serves every clone for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct HltbClient {
    http: Client,
    timeout: Duration,
    user_agent: String,
    base_url: Url,
    token_url: Url,
    detail_base: Url,
    strategy: ResolveStrategy,

    resolved: Arc<RwLock<Option<ResolvedConfig>>>,
    resolve_lock: Arc<Mutex<()>>,
}

impl Default for HltbClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl HltbClient {
    /// Create a new builder.
    pub fn builder() -> HltbClientBuilder {
        HltbClientBuilder::default()
    }

    /// The endpoint resolution strategy this client was built with.
    pub fn resolve_strategy(&self) -> ResolveStrategy {
        self.strategy
    }

    /// The per-request timeout applied to every outbound call.
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn token_url(&self) -> &Url {
        &self.token_url
    }
    pub(crate) fn detail_base(&self) -> &Url {
        &self.detail_base
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct HltbClientBuilder {
    http: Option<Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    base_url: Option<Url>,
    token_url: Option<Url>,
    detail_base: Option<Url>,
    strategy: Option<ResolveStrategy>,
}

impl HltbClientBuilder {
    /// Use a caller-configured `reqwest::Client` instead of the default pooled one.
    ///
    /// The request timeout is applied per request, so it holds no matter whether
    /// this is called before or after [`timeout`](Self::timeout).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Set the per-request timeout. Default: 30 seconds. A zero duration keeps the default.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Choose how the search endpoint is resolved. Default: [`ResolveStrategy::FixedEndpoint`].
    pub fn resolve_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the site origin (e.g., `https://howlongtobeat.com/`). Root page,
    /// script chunks and the search endpoint are resolved against it.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the token issuance URL (e.g., `https://howlongtobeat.com/api/finder/init`).
    pub fn token_url(mut self, url: Url) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Override the game detail base (e.g., `https://howlongtobeat.com/game/`).
    pub fn detail_base(mut self, url: Url) -> Self {
        self.detail_base = Some(url);
        self
    }

    pub fn build(self) -> Result<HltbClient, HltbError> {
        let base_url = self.base_url.unwrap_or(Url::parse(DEFAULT_BASE_URL)?);
        let token_url = self.token_url.unwrap_or(Url::parse(DEFAULT_TOKEN_URL)?);
        let detail_base = self.detail_base.unwrap_or(Url::parse(DEFAULT_DETAIL_BASE)?);

        let timeout = self
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        let http = match self.http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
                .pool_idle_timeout(POOL_IDLE_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(timeout)
                .build()?,
        };

        Ok(HltbClient {
            http,
            timeout,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            base_url,
            token_url,
            detail_base,
            strategy: self.strategy.unwrap_or_default(),
            resolved: Arc::new(RwLock::new(None)),
            resolve_lock: Arc::new(Mutex::new(())),
        })
    }
}
