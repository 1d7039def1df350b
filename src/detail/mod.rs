mod model;
mod wire;

pub use model::{
    GameDetail, GameRecord, IgnMap, PageMetadata, PlatformStats, PlatformVersion, RelatedGame,
    UserReviews, WikiNavLink,
};

use crate::core::client::constants::NEXT_DATA_ID;
use crate::core::extract;
use crate::{HltbClient, HltbError};
use wire::NextData;

impl HltbClient {
    /// Fetches the detail page of a game and decodes its embedded data blob.
    ///
    /// No token is needed, so this never triggers endpoint resolution.
    ///
    /// # Errors
    ///
    /// - [`HltbError::MissingGameId`] for `game_id == 0`, before any request.
    /// - [`HltbError::Detail`] wrapping the transport, status, missing or
    ///   undecodable `__NEXT_DATA__` failure.
    /// - [`HltbError::MalformedNavigationData`] if the wiki navigation field has
    ///   an unexpected shape.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn detail(&self, game_id: u64) -> Result<GameDetail, HltbError> {
        if game_id == 0 {
            return Err(HltbError::MissingGameId);
        }

        let req = self.detail_request(game_id).map_err(HltbError::detail)?;
        let raw: NextData = self
            .execute(req, |body| extract::embedded_json(body, NEXT_DATA_ID))
            .await
            .map_err(HltbError::detail)?;

        raw.into_detail()
    }
}
