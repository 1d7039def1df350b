//! Compact views of search results and game details with durations in hours.

use serde::Serialize;

use crate::detail::{GameDetail, GameRecord};
use crate::search::{SearchModifier, SearchResult, SearchResultItem};
use crate::{HltbClient, HltbError};

/// The handful of fields most callers want, with durations rounded to whole hours.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GameSummary {
    pub game_id: u64,
    pub game_name: String,
    pub profile_platform: String,
    pub game_image: String,
    pub comp_main: f64,
    pub comp_plus: f64,
    pub comp_all: f64,
    /// Similarity to the search term; `None` for summaries built from details.
    pub similarity: Option<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn hours(seconds: i64) -> f64 {
    (seconds as f64 / 3600.0).round()
}

impl From<&SearchResultItem> for GameSummary {
    fn from(item: &SearchResultItem) -> Self {
        Self {
            game_id: item.game_id,
            game_name: item.game_name.clone(),
            profile_platform: item.profile_platform.clone(),
            game_image: item.game_image.clone(),
            comp_main: hours(item.comp_main),
            comp_plus: hours(item.comp_plus),
            comp_all: hours(item.comp_all),
            similarity: Some(item.similarity),
        }
    }
}

impl From<&GameRecord> for GameSummary {
    fn from(game: &GameRecord) -> Self {
        Self {
            game_id: game.game_id,
            game_name: game.game_name.clone(),
            profile_platform: game.profile_platform.clone(),
            game_image: game.game_image.clone(),
            comp_main: hours(game.comp_main),
            comp_plus: hours(game.comp_plus),
            comp_all: hours(game.comp_all),
            similarity: None,
        }
    }
}

impl SearchResult {
    /// One summary per result, in ranked order.
    pub fn reduce(&self) -> Vec<GameSummary> {
        self.data.iter().map(GameSummary::from).collect()
    }
}

impl GameDetail {
    /// Summary of the requested game; `None` when the page carried no game record.
    pub fn reduce(&self) -> Option<GameSummary> {
        self.game().map(GameSummary::from)
    }
}

impl HltbClient {
    /// [`search`](HltbClient::search) of the first page, reduced to summaries.
    ///
    /// # Errors
    ///
    /// Same as [`HltbClient::search`].
    pub async fn search_simple(
        &self,
        term: &str,
        modifier: SearchModifier,
    ) -> Result<Vec<GameSummary>, HltbError> {
        Ok(self.search(term, modifier, None).await?.reduce())
    }

    /// [`detail`](HltbClient::detail) reduced to a summary.
    ///
    /// # Errors
    ///
    /// Same as [`HltbClient::detail`]; `Ok(None)` if the page had no game record.
    pub async fn detail_simple(&self, game_id: u64) -> Result<Option<GameSummary>, HltbError> {
        Ok(self.detail(game_id).await?.reduce())
    }
}
