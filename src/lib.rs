//! hltb-rs: ergonomic HowLongToBeat client.
//!
//! The site has no public API. Search requests need a short-lived token and
//! are POSTed to an endpoint whose path changes from time to time, so the
//! client resolves both on first use and caches them for its lifetime.
//!
//! ```no_run
//! # async fn run() -> Result<(), hltb_rs::HltbError> {
//! use hltb_rs::{HltbClient, ResolveStrategy, SearchModifier};
//!
//! let client = HltbClient::builder()
//!     .resolve_strategy(ResolveStrategy::DiscoverEndpoint)
//!     .build()?;
//!
//! let results = client.search("The Witcher 3", SearchModifier::None, None).await?;
//! if let Some(best) = results.data.first() {
//!     let detail = client.detail(best.game_id).await?;
//!     println!("{:?}", detail.reduce());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod detail;
pub mod reduce;
pub mod search;
pub mod similarity;

pub use crate::core::{HltbClient, HltbClientBuilder, HltbError, ResolveStrategy, ResolvedConfig};
pub use crate::detail::{
    GameDetail, GameRecord, IgnMap, PageMetadata, PlatformStats, PlatformVersion, RelatedGame,
    UserReviews, WikiNavLink,
};
pub use crate::reduce::GameSummary;
pub use crate::search::{
    Pagination, SearchBuilder, SearchModifier, SearchResult, SearchResultItem, search,
};
pub use crate::similarity::similarity;
