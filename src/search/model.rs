use serde::{Deserialize, Serialize};

/// Narrows a search to, or away from, downloadable content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchModifier {
    /// Games and DLC alike.
    #[default]
    #[serde(rename = "")]
    None,
    /// Only DLC.
    #[serde(rename = "only_dlc")]
    OnlyDlc,
    /// Everything except DLC.
    #[serde(rename = "hide_dlc")]
    HideDlc,
}

impl SearchModifier {
    /// The value sent upstream.
    pub const fn as_str(self) -> &'static str {
        match self {
            SearchModifier::None => "",
            SearchModifier::OnlyDlc => "only_dlc",
            SearchModifier::HideDlc => "hide_dlc",
        }
    }

    pub(crate) const fn is_none(&self) -> bool {
        matches!(self, SearchModifier::None)
    }
}

impl std::fmt::Display for SearchModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested result page. Non-positive values fall back to page 1 / 20 per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// `(page, page_size)` with non-positive values replaced by the defaults.
    #[must_use]
    pub fn normalized(&self) -> (u32, u32) {
        (
            normalize(self.page, Self::DEFAULT_PAGE),
            normalize(self.page_size, Self::DEFAULT_PAGE_SIZE),
        )
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(
            i64::from(Self::DEFAULT_PAGE),
            i64::from(Self::DEFAULT_PAGE_SIZE),
        )
    }
}

fn normalize(value: i64, default: u32) -> u32 {
    if value < 1 {
        return default;
    }
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// One page of search results, ranked by similarity to the query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub color: String,
    pub title: String,
    pub category: String,
    pub count: i64,
    pub page_current: i64,
    pub page_total: i64,
    pub page_size: i64,
    pub data: Vec<SearchResultItem>,
}

/// A single game in a search page. Durations are raw seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResultItem {
    pub count: i64,
    pub game_id: u64,
    pub game_name: String,
    pub game_name_date: i64,
    pub game_alias: String,
    pub game_type: String,
    pub game_image: String,
    pub comp_lvl_combine: i64,
    pub comp_lvl_sp: i64,
    pub comp_lvl_co: i64,
    pub comp_lvl_mp: i64,
    pub comp_lvl_spd: i64,
    pub comp_main: i64,
    pub comp_plus: i64,
    pub comp_100: i64,
    pub comp_all: i64,
    pub comp_main_count: i64,
    pub comp_plus_count: i64,
    pub comp_100_count: i64,
    pub comp_all_count: i64,
    pub invested_co: i64,
    pub invested_mp: i64,
    pub invested_co_count: i64,
    pub invested_mp_count: i64,
    pub count_comp: i64,
    pub count_speedrun: i64,
    pub count_backlog: i64,
    pub count_review: i64,
    pub review_score: i64,
    pub count_playing: i64,
    pub count_retired: i64,
    pub profile_dev: String,
    pub profile_popular: i64,
    pub profile_steam: i64,
    pub profile_platform: String,
    pub release_world: i64,

    /// Similarity of `game_name` to the query, in `[0, 1]`. Computed locally,
    /// never part of the upstream payload.
    #[serde(skip_deserializing)]
    pub similarity: f64,
}
