use hltb_rs::{HltbClient, ResolveStrategy, SearchModifier};

#[tokio::test]
#[ignore]
async fn live_search_finds_the_witcher() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = HltbClient::builder()
        .resolve_strategy(ResolveStrategy::DiscoverEndpoint)
        .build()
        .unwrap();

    let result = client
        .search("The Witcher 3: Wild Hunt", SearchModifier::None, None)
        .await
        .unwrap();

    assert!(!result.data.is_empty());
    assert_eq!(result.data[0].game_id, 10270);
    assert_eq!(result.data[0].similarity, 1.0);
}
