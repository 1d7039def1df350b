use httpmock::Method::GET;
use hltb_rs::{HltbError, ResolveStrategy};

use crate::common::{client_for, fixture, mock_token, setup_server};

#[tokio::test]
async fn detail_page_is_decoded_and_flattened() {
    let server = setup_server();
    let token = mock_token(&server);
    let page = server.mock(|when, then| {
        when.method(GET)
            .path("/game/10270")
            .header("accept", "*/*")
            .header("accept-language", "en")
            .header("cache-control", "no-cache")
            .header("sec-fetch-mode", "cors");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(fixture("game_detail_10270.html"));
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let d = client.detail(10270).await.unwrap();

    page.assert();
    // Detail pages need no token.
    assert_eq!(token.hits(), 0);

    assert_eq!(d.count, 1);
    assert_eq!(d.page, "/game/[gameId]");
    assert_eq!(d.query_game_id, "10270");

    let game = d.game().unwrap();
    assert_eq!(game.game_id, 10270);
    assert_eq!(game.game_name, "The Witcher 3: Wild Hunt");
    assert_eq!(game.profile_dev, "CD Projekt RED");
    assert_eq!(game.release_world, "2015-05-19");
    assert_eq!(game.comp_main, 185_400);
    assert_eq!(game.comp_100_med, 612_000);

    assert_eq!(d.individuality.len(), 2);
    assert_eq!(d.individuality[0].platform, "PC");
    assert_eq!(d.individuality[0].count_comp, 9315);
    assert_eq!(d.individuality[1].compare, "");

    assert_eq!(d.relationships.len(), 2);
    assert_eq!(d.relationships[1].game_name, "The Witcher 3: Wild Hunt - Hearts of Stone");

    assert_eq!(d.user_reviews.review_count, 12431);
    assert_eq!(d.user_reviews.count_for(100), 7104);
    assert_eq!(d.user_reviews.buckets.first(), Some(&(5, 12)));

    assert_eq!(d.platform_data.len(), 2);
    assert_eq!(d.platform_data[0].comp_high, 1_123_200);

    assert_eq!(d.ign_wiki_slug, "The_Witcher_3_Wild_Hunt");
    let map = d.ign_map.as_ref().unwrap();
    assert_eq!(map.map_name, "Velen");
    assert_eq!(map.tilesets, vec!["satellite", "terrain"]);

    assert_eq!(d.ign_wiki_nav.len(), 1);
    assert_eq!(d.ign_wiki_nav[0].label, "Walkthrough");
    assert_eq!(d.page_metadata.canonical, "https://howlongtobeat.com/game/10270");
}

#[tokio::test]
async fn detail_simple_reduces_to_hours() {
    let server = setup_server();
    let _page = server.mock(|when, then| {
        when.method(GET).path("/game/10270");
        then.status(200).body(fixture("game_detail_10270.html"));
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let summary = client.detail_simple(10270).await.unwrap().unwrap();

    assert_eq!(summary.game_id, 10270);
    assert_eq!(summary.comp_main, 52.0);
    assert_eq!(summary.comp_plus, 102.0);
    assert_eq!(summary.comp_all, 103.0);
    assert_eq!(summary.similarity, None);
}

#[tokio::test]
async fn zero_game_id_makes_no_requests() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let err = client.detail(0).await.unwrap_err();

    assert!(matches!(err, HltbError::MissingGameId));
    assert_eq!(any.hits(), 0);
}

#[tokio::test]
async fn missing_game_is_a_status_error() {
    let server = setup_server();
    let _page = server.mock(|when, then| {
        when.method(GET).path("/game/999999999");
        then.status(404).body("<html>Not Found</html>");
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let err = client.detail(999_999_999).await.unwrap_err();

    assert!(matches!(err, HltbError::Detail(_)), "got {err:?}");
    assert!(matches!(
        err.root_cause(),
        HltbError::UnexpectedStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn page_without_data_blob() {
    let server = setup_server();
    let _page = server.mock(|when, then| {
        when.method(GET).path("/game/42");
        then.status(200).body("<html><body>maintenance</body></html>");
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let err = client.detail(42).await.unwrap_err();

    assert!(matches!(err, HltbError::Detail(_)));
    assert!(matches!(err.root_cause(), HltbError::ElementNotFound { .. }));
}

#[tokio::test]
async fn empty_data_blob() {
    let server = setup_server();
    let _page = server.mock(|when, then| {
        when.method(GET).path("/game/42");
        then.status(200)
            .body(r#"<script id="__NEXT_DATA__" type="application/json"></script>"#);
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let err = client.detail(42).await.unwrap_err();

    assert!(matches!(err.root_cause(), HltbError::EmptyElement { .. }));
}

#[tokio::test]
async fn null_members_decode_as_defaults() {
    let server = setup_server();
    let _page = server.mock(|when, then| {
        when.method(GET).path("/game/7231");
        then.status(200).body(concat!(
            r#"<html><body><script id="__NEXT_DATA__" type="application/json">"#,
            r#"{"props":{"pageProps":{"game":{"count":1,"data":{"#,
            r#""game":[{"game_id":7231,"game_name":"Portal","game_alias":null,"game_parent":null,"#,
            r#""profile_steam":null,"release_world":null,"comp_main":null,"comp_plus":16200}],"#,
            r#""individuality":null,"userReviews":null,"#,
            r#""relationships":[{"game_id":7232,"game_name":null,"comp_main":null}],"#,
            r#""platformData":[{"platform":"PC","comp_high":null}]}},"#,
            r#""ignWikiSlug":null,"ignWikiNav":null,"#,
            r#""ignMap":{"__typename":"Map","mapName":"Aperture","width":null,"tilesets":null},"#,
            r#""pageMetadata":{"title":"Portal","image":null}}},"#,
            r#""page":"/game/[gameId]","query":{"gameId":null}}"#,
            r#"</script></body></html>"#
        ));
    });

    let client = client_for(&server, ResolveStrategy::FixedEndpoint);
    let d = client.detail(7231).await.unwrap();

    let game = d.game().unwrap();
    assert_eq!(game.game_name, "Portal");
    assert_eq!(game.game_alias, "");
    assert_eq!(game.game_parent, 0);
    assert_eq!(game.profile_steam, 0);
    assert_eq!(game.release_world, "");
    assert_eq!(game.comp_main, 0);
    assert_eq!(game.comp_plus, 16_200);

    assert!(d.individuality.is_empty());
    assert_eq!(d.user_reviews.review_count, 0);
    assert_eq!(d.relationships[0].game_id, 7232);
    assert_eq!(d.relationships[0].game_name, "");
    assert_eq!(d.platform_data[0].comp_high, 0);

    assert_eq!(d.ign_wiki_slug, "");
    assert!(d.ign_wiki_nav.is_empty());
    let map = d.ign_map.as_ref().unwrap();
    assert_eq!(map.map_name, "Aperture");
    assert_eq!(map.width, 0.0);
    assert!(map.tilesets.is_empty());
    assert_eq!(d.page_metadata.title, "Portal");
    assert_eq!(d.page_metadata.image, "");
    assert_eq!(d.query_game_id, "");
}
