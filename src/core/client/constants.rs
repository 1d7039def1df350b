//! Centralized constants for default endpoints, headers and timeouts.

use std::time::Duration;

/// Desktop Chrome UA; the site rejects obviously scripted agents.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/115.0.0.0 Safari/537.36"
);

/// Site origin. Root page, script chunks and the search endpoint hang off it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://howlongtobeat.com/";

/// Token issuance route (a cache-busting `t` query parameter is appended).
pub(crate) const DEFAULT_TOKEN_URL: &str = "https://howlongtobeat.com/api/finder/init";

/// Game detail pages (numeric id is appended).
pub(crate) const DEFAULT_DETAIL_BASE: &str = "https://howlongtobeat.com/game/";

/// The site's current primary search route, used by `ResolveStrategy::FixedEndpoint`.
pub(crate) const DEFAULT_SEARCH_ENDPOINT: &str = "/api/finder";

/// Id of the Next.js data blob embedded in every game page.
pub(crate) const NEXT_DATA_ID: &str = "__NEXT_DATA__";

/// Overall per-request timeout unless overridden.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Idle pool size and connect/idle timeouts for the default transport.
pub(crate) const POOL_MAX_IDLE_PER_HOST: usize = 10;
pub(crate) const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(15);
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// `Origin` / `Referer` sent with every request.
pub(crate) const ORIGIN: &str = "https://howlongtobeat.com/";

pub(crate) const ACCEPT: &str = "*/*";
pub(crate) const ACCEPT_LANGUAGE: &str = "en";
pub(crate) const SEC_CH_UA: &str =
    r#"Not;A Brand;v="99", "Google Chrome";v="115", "Chromium";v="115""#;
pub(crate) const SEC_CH_UA_MOBILE: &str = "?0";
pub(crate) const SEC_FETCH_MODE: &str = "cors";
pub(crate) const SEC_FETCH_DEST: &str = "empty";

/// Header carrying the issued token on search requests.
pub(crate) const AUTH_TOKEN_HEADER: &str = "x-auth-token";
