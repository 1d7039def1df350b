mod model;
mod wire;

pub use model::{Pagination, SearchModifier, SearchResult, SearchResultItem};

use crate::core::extract;
use crate::similarity::similarity;
use crate::{HltbClient, HltbError};
use wire::SearchRequest;

/* ---------------- Public API ---------------- */

/// Searches for games matching `term`, ranked by title similarity.
///
/// # Errors
///
/// See [`SearchBuilder::fetch`].
pub async fn search(client: &HltbClient, term: &str) -> Result<SearchResult, HltbError> {
    SearchBuilder::new(client, term).fetch().await
}

/// A builder for a HowLongToBeat game search.
#[derive(Debug)]
pub struct SearchBuilder {
    client: HltbClient,
    term: String,
    modifier: SearchModifier,
    pagination: Option<Pagination>,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` for a given search term.
    pub fn new(client: &HltbClient, term: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            term: term.into(),
            modifier: SearchModifier::None,
            pagination: None,
        }
    }

    /// Include or exclude downloadable content.
    #[must_use]
    pub const fn modifier(mut self, modifier: SearchModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Request a specific page. Non-positive values fall back to page 1 / size 20.
    #[must_use]
    pub const fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Executes the search.
    ///
    /// The term is split on whitespace into independent search terms. Results
    /// are scored against the full term with [`similarity`] and stably sorted by
    /// descending score, so equal scores keep upstream order.
    ///
    /// # Errors
    ///
    /// - [`HltbError::EmptySearchTerm`] for an empty term, before any request.
    /// - Any resolution error from [`HltbClient::resolve`].
    /// - [`HltbError::Search`] wrapping the transport, status or decode failure
    ///   of the search request itself. An expired token shows up here as an
    ///   upstream status error; it is not retried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(term = %self.term)))]
    pub async fn fetch(self) -> Result<SearchResult, HltbError> {
        if self.term.is_empty() {
            return Err(HltbError::EmptySearchTerm);
        }

        let cfg = self.client.resolve().await?;
        let body = SearchRequest::new(&self.term, self.modifier, self.pagination);

        let req = self
            .client
            .search_request(cfg.endpoint_path(), cfg.token(), &body)
            .map_err(HltbError::search)?;
        let mut result: SearchResult = self
            .client
            .execute(req, extract::json::<SearchResult>)
            .await
            .map_err(HltbError::search)?;

        rank(&self.term, &mut result.data);

        #[cfg(feature = "tracing")]
        tracing::debug!(results = result.data.len(), "search complete");

        Ok(result)
    }
}

/// Score every item against `term` and stably sort by descending similarity.
fn rank(term: &str, items: &mut [SearchResultItem]) {
    for item in items.iter_mut() {
        item.similarity = similarity(term, &item.game_name);
    }
    items.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
}

impl HltbClient {
    /// Searches for games; see [`SearchBuilder::fetch`].
    ///
    /// # Errors
    ///
    /// See [`SearchBuilder::fetch`].
    pub async fn search(
        &self,
        term: &str,
        modifier: SearchModifier,
        pagination: Option<Pagination>,
    ) -> Result<SearchResult, HltbError> {
        let mut builder = SearchBuilder::new(self, term).modifier(modifier);
        if let Some(p) = pagination {
            builder = builder.pagination(p);
        }
        builder.fetch().await
    }
}
