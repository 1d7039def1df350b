//! JSON body POSTed to the search endpoint.

use serde::Serialize;

use super::model::{Pagination, SearchModifier};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequest<'a> {
    search_type: &'static str,
    search_terms: Vec<&'a str>,
    search_page: u32,
    size: u32,
    search_options: SearchOptions,
}

#[derive(Serialize, Debug)]
struct SearchOptions {
    games: GameOptions,
    users: UserOptions,
    #[serde(skip_serializing_if = "str::is_empty")]
    filter: &'static str,
    #[serde(skip_serializing_if = "is_zero")]
    sort: u32,
    #[serde(skip_serializing_if = "is_zero")]
    randomizer: u32,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GameOptions {
    #[serde(skip_serializing_if = "is_zero")]
    user_id: u32,
    platform: &'static str,
    sort_category: &'static str,
    range_category: &'static str,
    range_time: RangeTime,
    gameplay: Gameplay,
    #[serde(skip_serializing_if = "SearchModifier::is_none")]
    modifier: SearchModifier,
}

#[derive(Serialize, Debug, Default)]
struct RangeTime {
    min: u32,
    max: u32,
}

#[derive(Serialize, Debug, Default)]
struct Gameplay {
    difficulty: &'static str,
    flow: &'static str,
    genre: &'static str,
    perspective: &'static str,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct UserOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_category: Option<&'static str>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl<'a> SearchRequest<'a> {
    /// Games search sorted by popularity over the main-story range.
    pub(crate) fn new(
        term: &'a str,
        modifier: SearchModifier,
        pagination: Option<Pagination>,
    ) -> Self {
        let (search_page, size) = pagination.unwrap_or_default().normalized();
        Self {
            search_type: "games",
            search_terms: term.split_whitespace().collect(),
            search_page,
            size,
            search_options: SearchOptions {
                games: GameOptions {
                    user_id: 0,
                    platform: "",
                    sort_category: "popular",
                    range_category: "main",
                    range_time: RangeTime::default(),
                    gameplay: Gameplay::default(),
                    modifier,
                },
                users: UserOptions::default(),
                filter: "",
                sort: 0,
                randomizer: 0,
            },
        }
    }
}
