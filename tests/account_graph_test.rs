mod utils;

use mockito::Matcher;
use serde_json::json;
use utils::{data, fixtures, user_session, TestGraph};

#[tokio::test]
async fn rejected_write_does_not_affect_sibling_mutation() {
    let mut graph = TestGraph::start().await;
    let watchlist = graph
        .server
        .mock("POST", "/3/account/7/watchlist")
        .match_query(Matcher::UrlEncoded("session_id".into(), "sess-1".into()))
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            fixtures::status(
                false,
                "Authentication failed: You do not have permissions to access the service.",
            )
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    graph
        .server
        .mock("POST", "/3/account/7/favorite")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "media_type": "movie",
            "media_id": 348,
            "favorite": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(fixtures::status(true, "Success.").to_string())
        .create_async()
        .await;

    let response = graph
        .execute_as(
            r#"mutation {
                addToWatchlist(mediaType: MOVIE, mediaId: 348) { success message }
                addToFavorites(mediaType: MOVIE, mediaId: 348) { success message }
            }"#,
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let body = data(&response);
    assert_eq!(body["addToWatchlist"]["success"], false);
    assert_eq!(
        body["addToWatchlist"]["message"],
        "Authentication failed: You do not have permissions to access the service."
    );
    assert_eq!(body["addToFavorites"], json!({"success": true, "message": "Success."}));
    watchlist.assert_async().await;
}

#[tokio::test]
async fn invalid_rating_is_rejected_without_calling_upstream() {
    let mut graph = TestGraph::start().await;
    let rating = graph
        .respond("POST", "/3/movie/348/rating", 201, &fixtures::status(true, "Success."))
        .expect(0)
        .create_async()
        .await;

    let response = graph
        .execute_as(
            "mutation { updateRating(mediaType: MOVIE, mediaId: 348, value: 7.3) { success message } }",
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let outcome = &data(&response)["updateRating"];
    assert_eq!(outcome["success"], false);
    assert!(outcome["message"]
        .as_str()
        .unwrap_or_default()
        .contains("steps of 0.5"));
    rating.assert_async().await;
}

#[tokio::test]
async fn clearing_a_rating_deletes_it() {
    let mut graph = TestGraph::start().await;
    let delete = graph
        .respond("DELETE", "/3/tv/1399/rating", 200, &fixtures::status(true, "The item/record was deleted successfully."))
        .expect(1)
        .create_async()
        .await;

    let response = graph
        .execute_as(
            "mutation { updateRating(mediaType: TV, mediaId: 1399) { __typename success } }",
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        data(&response)["updateRating"],
        json!({"__typename": "StatusMutationResponse", "success": true})
    );
    delete.assert_async().await;
}

#[tokio::test]
async fn account_states_are_null_for_anonymous_requests() {
    let mut graph = TestGraph::start().await;
    graph
        .respond("GET", "/3/movie/348", 200, &fixtures::movie_detail())
        .create_async()
        .await;
    let states = graph
        .respond("GET", "/3/movie/348/account_states", 200, &json!({"id": 348}))
        .expect(0)
        .create_async()
        .await;

    let response = graph
        .execute("{ movie(id: 348) { accountStates { favorite } } }")
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert!(data(&response)["movie"]["accountStates"].is_null());
    states.assert_async().await;
}

#[tokio::test]
async fn signed_in_account_reads_are_never_cached() {
    let mut graph = TestGraph::start().await;
    let account = graph
        .respond(
            "GET",
            "/3/account",
            200,
            &json!({"id": 7, "username": "ripley", "include_adult": false, "iso_639_1": "en", "iso_3166_1": "US"}),
        )
        .expect(2)
        .create_async()
        .await;
    graph
        .respond(
            "GET",
            "/3/account/7/watchlist/movies",
            200,
            &json!({"page": 1, "total_pages": 1, "total_results": 1, "results": [{"id": 348, "title": "Alien"}]}),
        )
        .create_async()
        .await;

    for _ in 0..2 {
        let response = graph
            .execute_as(
                "{ myAccount { username country watchlist(mediaType: MOVIE) { results { __typename ... on Movie { title } } } } }",
                Some(user_session()),
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let me = &data(&response)["myAccount"];
        assert_eq!(me["username"], "ripley");
        assert_eq!(me["country"], "US");
        assert_eq!(
            me["watchlist"]["results"],
            json!([{"__typename": "Movie", "title": "Alien"}])
        );
    }
    account.assert_async().await;
}

#[tokio::test]
async fn empty_write_response_counts_as_success() {
    let mut graph = TestGraph::start().await;
    let favorite = graph
        .server
        .mock("POST", "/3/account/7/favorite")
        .match_query(Matcher::Any)
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let response = graph
        .execute_as(
            "mutation { addToFavorites(mediaType: TV, mediaId: 1399) { success message } }",
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        data(&response)["addToFavorites"],
        json!({"success": true, "message": "Success."})
    );
    favorite.assert_async().await;
}
