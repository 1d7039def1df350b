use serde::{Deserialize, Serialize};

use crate::core::wire::{de_i64_lenient, de_string_lenient};

/// Everything the detail page embeds about one game, normalized.
///
/// Durations are raw seconds as served upstream.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GameDetail {
    /// Upstream record count for the `games` list.
    pub count: i64,
    /// Usually exactly one record: the requested game.
    pub games: Vec<GameRecord>,
    /// Completion times per platform release (PC, last-gen consoles, ...).
    pub individuality: Vec<PlatformVersion>,
    /// DLCs, expansions and other related titles.
    pub relationships: Vec<RelatedGame>,
    pub user_reviews: UserReviews,
    pub platform_data: Vec<PlatformStats>,
    pub ign_wiki_slug: String,
    /// Interactive map descriptor; only some games have one.
    pub ign_map: Option<IgnMap>,
    /// Wiki navigation links, always a list regardless of the upstream shape.
    pub ign_wiki_nav: Vec<WikiNavLink>,
    pub page_metadata: PageMetadata,
    /// Route template of the page, e.g. `/game/[gameId]`.
    pub page: String,
    /// The game id echoed back by the page router.
    pub query_game_id: String,
}

impl GameDetail {
    /// The requested game's record, if the page carried one.
    pub fn game(&self) -> Option<&GameRecord> {
        self.games.first()
    }
}

/// Metadata and completion statistics of a game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRecord {
    pub game_id: u64,
    pub game_name: String,
    pub game_name_date: i64,
    pub count_playing: i64,
    pub count_backlog: i64,
    pub count_replay: i64,
    pub count_custom: i64,
    pub count_comp: i64,
    pub count_retired: i64,
    pub count_review: i64,
    pub review_score: i64,
    pub game_alias: String,
    pub game_image: String,
    pub game_type: String,
    pub game_parent: i64,
    pub profile_summary: String,
    pub profile_dev: String,
    pub profile_pub: String,
    pub profile_platform: String,
    pub profile_genre: String,
    pub profile_steam: i64,
    pub profile_steam_alt: i64,
    pub profile_itch: i64,
    pub profile_ign: String,
    #[serde(deserialize_with = "de_string_lenient")]
    pub release_world: String,
    #[serde(deserialize_with = "de_string_lenient")]
    pub release_na: String,
    #[serde(deserialize_with = "de_string_lenient")]
    pub release_eu: String,
    #[serde(deserialize_with = "de_string_lenient")]
    pub release_jp: String,
    pub rating_esrb: String,
    pub rating_pegi: String,
    pub rating_cero: String,
    pub comp_lvl_sp: i64,
    pub comp_lvl_spd: i64,
    pub comp_lvl_co: i64,
    pub comp_lvl_mp: i64,
    pub comp_lvl_combine: i64,
    pub comp_lvl_platform: i64,
    pub comp_all_count: i64,
    pub comp_all: i64,
    pub comp_all_l: i64,
    pub comp_all_h: i64,
    pub comp_all_avg: i64,
    pub comp_all_med: i64,
    pub comp_main_count: i64,
    pub comp_main: i64,
    pub comp_main_l: i64,
    pub comp_main_h: i64,
    pub comp_main_avg: i64,
    pub comp_main_med: i64,
    pub comp_plus_count: i64,
    pub comp_plus: i64,
    pub comp_plus_l: i64,
    pub comp_plus_h: i64,
    pub comp_plus_avg: i64,
    pub comp_plus_med: i64,
    pub comp_100_count: i64,
    pub comp_100: i64,
    pub comp_100_l: i64,
    pub comp_100_h: i64,
    pub comp_100_avg: i64,
    pub comp_100_med: i64,
    pub comp_speed_count: i64,
    pub comp_speed: i64,
    pub comp_speed_min: i64,
    pub comp_speed_max: i64,
    pub comp_speed_avg: i64,
    pub comp_speed_med: i64,
    pub comp_speed100_count: i64,
    pub comp_speed100: i64,
    pub comp_speed100_min: i64,
    pub comp_speed100_max: i64,
    pub comp_speed100_avg: i64,
    pub comp_speed100_med: i64,
    pub count_total: i64,
    pub invested_co_count: i64,
    pub invested_co: i64,
    pub invested_co_l: i64,
    pub invested_co_h: i64,
    pub invested_co_avg: i64,
    pub invested_co_med: i64,
    pub invested_mp_count: i64,
    pub invested_mp: i64,
    pub invested_mp_l: i64,
    pub invested_mp_h: i64,
    pub invested_mp_avg: i64,
    pub invested_mp_med: i64,
    #[serde(deserialize_with = "de_string_lenient")]
    pub added_stats: String,
}

/// Completion times of one platform release. Upstream serves these counters
/// as strings; they are parsed into numbers here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformVersion {
    pub platform: String,
    #[serde(deserialize_with = "de_i64_lenient")]
    pub count_comp: i64,
    #[serde(deserialize_with = "de_i64_lenient")]
    pub comp_main: i64,
    #[serde(deserialize_with = "de_i64_lenient")]
    pub comp_plus: i64,
    #[serde(deserialize_with = "de_i64_lenient")]
    pub comp_100: i64,
    #[serde(deserialize_with = "de_i64_lenient")]
    pub comp_all: i64,
    #[serde(deserialize_with = "de_string_lenient")]
    pub compare: String,
}

/// A DLC, expansion or other title related to the game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedGame {
    pub game_id: u64,
    pub game_name: String,
    pub game_type: String,
    pub comp_main: i64,
    pub comp_plus: i64,
    pub comp_100: i64,
    pub comp_all: i64,
    pub comp_all_count: i64,
    pub count_backlog: i64,
    pub review_score: i64,
}

/// Review histogram: how many users gave each score, in steps of five.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserReviews {
    /// `(score, count)` pairs for every bucket present upstream, ascending by score.
    pub buckets: Vec<(u8, i64)>,
    /// Total number of reviews.
    pub review_count: i64,
}

impl UserReviews {
    /// Number of reviews that gave exactly `score`, `0` if the bucket is absent.
    pub fn count_for(&self, score: u8) -> i64 {
        self.buckets
            .iter()
            .find(|(s, _)| *s == score)
            .map_or(0, |(_, n)| *n)
    }
}

/// Completion statistics on one platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    pub platform: String,
    pub count_comp: i64,
    pub count_total: i64,
    pub comp_main: i64,
    pub comp_plus: i64,
    pub comp_100: i64,
    pub comp_low: i64,
    pub comp_high: i64,
}

/// Interactive map descriptor attached to some games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IgnMap {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub map_type: String,
    pub map_name: String,
    pub map_slug: String,
    pub object_slug: String,
    pub object_name: String,
    pub width: f64,
    pub height: f64,
    pub min_zoom: i64,
    pub max_zoom: i64,
    pub tilesets: Vec<String>,
    pub initial_lat: f64,
    pub initial_lng: f64,
    pub initial_zoom: i64,
}

/// One wiki navigation entry. `url` is relative to the game's wiki root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiNavLink {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub label: String,
    pub url: String,
}

impl WikiNavLink {
    pub(crate) fn is_empty(&self) -> bool {
        self.typename.is_empty() && self.label.is_empty() && self.url.is_empty()
    }
}

/// SEO metadata of the detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: String,
    pub image: String,
    pub description: String,
    pub canonical: String,
    pub template: String,
}
