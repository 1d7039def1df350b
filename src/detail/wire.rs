//! `__NEXT_DATA__` payload of the game detail page and its normalization.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::model::{
    GameDetail, GameRecord, IgnMap, PageMetadata, PlatformStats, PlatformVersion, RelatedGame,
    UserReviews, WikiNavLink,
};
use crate::HltbError;
use crate::core::wire::{de_i64_lenient, de_string_lenient};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct NextData {
    props: Props,
    page: String,
    query: Query,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct Props {
    page_props: PageProps,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct PageProps {
    game: GameEnvelope,
    ign_wiki_slug: String,
    ign_map: Option<IgnMap>,
    // Object or array depending on the game; see `WikiNav`.
    ign_wiki_nav: Option<Value>,
    page_metadata: PageMetadata,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct GameEnvelope {
    count: i64,
    data: GameData,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct GameData {
    game: Vec<GameRecord>,
    individuality: Vec<PlatformVersion>,
    relationships: Vec<RelatedGame>,
    user_reviews: Option<ReviewHistogram>,
    platform_data: Vec<PlatformStats>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
struct Query {
    #[serde(deserialize_with = "de_string_lenient")]
    game_id: String,
}

/// `{"5": "1", "10": "0", ..., "100": "42", "review_count": 97}`
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
struct ReviewHistogram(HashMap<String, Count>);

#[derive(Deserialize, Debug, Default, Clone, Copy)]
struct Count(#[serde(deserialize_with = "de_i64_lenient")] i64);

impl ReviewHistogram {
    fn into_reviews(self) -> UserReviews {
        let mut buckets: Vec<(u8, i64)> = Vec::new();
        let mut review_count = 0;
        for (key, Count(n)) in self.0 {
            if key == "review_count" {
                review_count = n;
            } else if let Ok(score) = key.parse::<u8>() {
                buckets.push((score, n));
            }
        }
        buckets.sort_unstable_by_key(|(score, _)| *score);
        UserReviews {
            buckets,
            review_count,
        }
    }
}

/// The two shapes `ignWikiNav` is served in.
#[derive(Debug, PartialEq)]
enum WikiNav {
    Single(WikiNavLink),
    List(Vec<WikiNavLink>),
}

impl WikiNav {
    /// Try a single object first, then an array of objects.
    fn decode(value: Value) -> Result<Self, HltbError> {
        if value.is_object() {
            if let Ok(link) = serde_json::from_value::<WikiNavLink>(value.clone()) {
                return Ok(WikiNav::Single(link));
            }
        }
        serde_json::from_value::<Vec<WikiNavLink>>(value)
            .map(WikiNav::List)
            .map_err(HltbError::MalformedNavigationData)
    }

    fn into_links(self) -> Vec<WikiNavLink> {
        match self {
            WikiNav::Single(link) if link.is_empty() => Vec::new(),
            WikiNav::Single(link) => vec![link],
            WikiNav::List(links) => links,
        }
    }
}

fn normalize_wiki_nav(raw: Option<Value>) -> Result<Vec<WikiNavLink>, HltbError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => WikiNav::decode(value).map(WikiNav::into_links),
    }
}

impl NextData {
    /// Flatten the page payload into a [`GameDetail`].
    ///
    /// # Errors
    ///
    /// [`HltbError::MalformedNavigationData`] if `ignWikiNav` is neither an
    /// object nor an array of objects.
    pub(crate) fn into_detail(self) -> Result<GameDetail, HltbError> {
        let NextData { props, page, query } = self;
        let pp = props.page_props;
        let data = pp.game.data;

        Ok(GameDetail {
            count: pp.game.count,
            games: data.game,
            individuality: data.individuality,
            relationships: data.relationships,
            user_reviews: data
                .user_reviews
                .map(ReviewHistogram::into_reviews)
                .unwrap_or_default(),
            platform_data: data.platform_data,
            ign_wiki_slug: pp.ign_wiki_slug,
            ign_map: pp.ign_map,
            ign_wiki_nav: normalize_wiki_nav(pp.ign_wiki_nav)?,
            page_metadata: pp.page_metadata,
            page,
            query_game_id: query.game_id,
        })
    }
}
