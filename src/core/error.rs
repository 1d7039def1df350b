use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum HltbError {
    /// The request could not be completed (DNS, connect, timeout, cancellation).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A header value (user agent or token) contained invalid characters.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A provided or derived URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with anything other than `200 OK`.
    #[error("unexpected status code: {status} at {url}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the status.
        url: String,
    },

    /// A response body was not the JSON document we expected.
    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The `<script id=...>` element carrying embedded JSON was not found.
    #[error("script element `{id}` not found")]
    ElementNotFound {
        /// The element identifier that was searched for.
        id: String,
    },

    /// The `<script id=...>` element was found but has no content.
    #[error("script element `{id}` is empty")]
    EmptyElement {
        /// The element identifier that was searched for.
        id: String,
    },

    /// A body did not contain any match for the named pattern.
    #[error("no match for {0}")]
    PatternNotFound(&'static str),

    /// The token issuance step failed.
    #[error("failed to fetch token: {0}")]
    TokenFetch(#[source] Box<HltbError>),

    /// Loading the root page to enumerate script chunks failed.
    #[error("failed to fetch script list: {0}")]
    ScriptListFetch(#[source] Box<HltbError>),

    /// Loading a single script chunk during endpoint discovery failed.
    #[error("failed to fetch script {path}: {source}")]
    ScriptFetch {
        /// The server-relative script path.
        path: String,
        /// The underlying failure.
        #[source]
        source: Box<HltbError>,
    },

    /// Every candidate script was scanned without finding a search endpoint.
    #[error("search endpoint not found after scanning {scanned} scripts")]
    EndpointNotFound {
        /// How many scripts were inspected.
        scanned: usize,
    },

    /// `search` was called with an empty term.
    #[error("search term cannot be empty")]
    EmptySearchTerm,

    /// `detail` was called with game id `0`.
    #[error("game id is required")]
    MissingGameId,

    /// The wiki navigation field was neither an object nor an array of objects.
    #[error("invalid wiki navigation format: {0}")]
    MalformedNavigationData(#[source] serde_json::Error),

    /// The search request failed after resolution succeeded.
    #[error("failed to search: {0}")]
    Search(#[source] Box<HltbError>),

    /// The detail request failed.
    #[error("failed to execute game details request: {0}")]
    Detail(#[source] Box<HltbError>),
}

impl HltbError {
    pub(crate) fn token(e: HltbError) -> Self {
        HltbError::TokenFetch(Box::new(e))
    }

    pub(crate) fn script_list(e: HltbError) -> Self {
        HltbError::ScriptListFetch(Box::new(e))
    }

    pub(crate) fn script(path: &str, e: HltbError) -> Self {
        HltbError::ScriptFetch {
            path: path.to_string(),
            source: Box::new(e),
        }
    }

    pub(crate) fn search(e: HltbError) -> Self {
        HltbError::Search(Box::new(e))
    }

    pub(crate) fn detail(e: HltbError) -> Self {
        HltbError::Detail(Box::new(e))
    }

    /// Returns the innermost error, skipping the step wrappers.
    ///
    /// Useful to match on the actual cause (e.g. `UnexpectedStatus`) regardless of
    /// which step of resolution or which operation produced it.
    pub fn root_cause(&self) -> &HltbError {
        match self {
            HltbError::TokenFetch(inner)
            | HltbError::ScriptListFetch(inner)
            | HltbError::Search(inner)
            | HltbError::Detail(inner)
            | HltbError::ScriptFetch { source: inner, .. } => inner.root_cause(),
            other => other,
        }
    }
}
