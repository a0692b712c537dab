mod utils;

use mockito::Matcher;
use serde_json::json;
use utils::{data, fixtures, user_session, TestGraph};

#[tokio::test]
async fn list_envelope_becomes_items_and_count() {
    let mut graph = TestGraph::start().await;
    graph
        .respond("GET", "/4/list/8213", 200, &fixtures::list_page())
        .create_async()
        .await;

    let response = graph
        .execute(
            r#"{
                list(id: 8213) {
                    id
                    name
                    public
                    language
                    numberOfItems
                    sortBy
                    items {
                        page
                        totalPages
                        totalResults
                        results { __typename ... on Movie { title } ... on Show { name } }
                    }
                }
            }"#,
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let list = &data(&response)["list"];
    assert_eq!(list["name"], "Sci-fi essentials");
    assert_eq!(list["public"], true);
    assert_eq!(list["language"], "en");
    assert_eq!(list["numberOfItems"], 42);
    assert_eq!(list["sortBy"], "ORIGINAL_ORDER_ASC");
    assert_eq!(list["items"]["page"], 1);
    assert_eq!(list["items"]["totalPages"], 3);
    assert_eq!(list["items"]["totalResults"], 42);
    assert_eq!(
        list["items"]["results"],
        json!([
            {"__typename": "Movie", "title": "Alien"},
            {"__typename": "Show", "name": "Game of Thrones"}
        ])
    );
}

#[tokio::test]
async fn my_lists_fetch_items_lazily() {
    let mut graph = TestGraph::start().await;
    graph
        .server
        .mock("GET", "/4/account/5e7f00/lists")
        .match_header("authorization", "Bearer user-token")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "page": 1,
                "total_pages": 1,
                "total_results": 1,
                "results": [{"id": 8213, "name": "Sci-fi essentials", "public": 1, "number_of_items": 42}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let items = graph
        .respond("GET", "/4/list/8213", 200, &fixtures::list_page())
        .expect(1)
        .create_async()
        .await;

    let response = graph
        .execute_as(
            "{ myLists { results { name public numberOfItems items { totalResults } } } }",
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let list = &data(&response)["myLists"]["results"][0];
    assert_eq!(list["public"], true);
    assert_eq!(list["numberOfItems"], 42);
    assert_eq!(list["items"]["totalResults"], 42);
    items.assert_async().await;
}

#[tokio::test]
async fn my_lists_without_session_is_unauthenticated() {
    let graph = TestGraph::start().await;

    let response = graph.execute("{ myLists { totalResults } }").await;

    assert_eq!(response.errors.len(), 1);
    assert!(data(&response)["myLists"].is_null());
    let code = response.errors[0]
        .extensions
        .as_ref()
        .and_then(|extensions| extensions.get("code"))
        .cloned();
    assert_eq!(
        code,
        Some(async_graphql::Value::String("UNAUTHENTICATED".to_string()))
    );
}

#[tokio::test]
async fn item_missing_from_list_reports_not_on_list() {
    let mut graph = TestGraph::start().await;
    graph
        .respond(
            "GET",
            "/4/list/8213/item_status",
            404,
            &json!({"success": false, "status_code": 34, "status_message": "The resource you requested could not be found."}),
        )
        .create_async()
        .await;

    let response = graph
        .execute_as(
            "{ listItemStatus(listId: 8213, mediaId: 550, mediaType: MOVIE) { onList mediaType } }",
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        data(&response)["listItemStatus"],
        json!({"onList": false, "mediaType": "MOVIE"})
    );
}

#[tokio::test]
async fn adding_items_reports_per_item_results_and_refreshes_the_list() {
    let mut graph = TestGraph::start().await;
    let reads = graph
        .respond("GET", "/4/list/8213", 200, &fixtures::list_page())
        .expect(2)
        .create_async()
        .await;
    let write = graph
        .server
        .mock("POST", "/4/list/8213/items")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "items": [
                {"media_type": "movie", "media_id": 550},
                {"media_type": "tv", "media_id": 1}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "status_code": 1,
                "status_message": "Success.",
                "results": [
                    {"media_type": "movie", "media_id": 550, "success": true},
                    {"media_type": "tv", "media_id": 1, "success": false}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let before = graph.execute("{ list(id: 8213) { numberOfItems } }").await;
    assert!(before.errors.is_empty(), "{:?}", before.errors);

    let response = graph
        .execute_as(
            r#"mutation {
                addListItems(id: 8213, items: [
                    { mediaId: 550, mediaType: MOVIE },
                    { mediaId: 1, mediaType: TV }
                ]) {
                    __typename
                    success
                    ... on ListItemsMutationResponse { id results { mediaId success } }
                }
            }"#,
            Some(user_session()),
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let outcome = &data(&response)["addListItems"];
    assert_eq!(outcome["__typename"], "ListItemsMutationResponse");
    assert_eq!(outcome["success"], true);
    assert_eq!(outcome["id"], 8213);
    assert_eq!(
        outcome["results"],
        json!([{"mediaId": 550, "success": true}, {"mediaId": 1, "success": false}])
    );

    // The cached anonymous read was dropped by the write
    let after = graph.execute("{ list(id: 8213) { numberOfItems } }").await;
    assert!(after.errors.is_empty(), "{:?}", after.errors);

    write.assert_async().await;
    reads.assert_async().await;
}

#[tokio::test]
async fn list_writes_without_a_session_fail_softly() {
    let graph = TestGraph::start().await;

    let response = graph
        .execute(
            r#"mutation { createList(input: { name: "Favourites" }) { __typename success message } }"#,
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let outcome = &data(&response)["createList"];
    assert_eq!(outcome["__typename"], "StatusMutationResponse");
    assert_eq!(outcome["success"], false);
    assert_eq!(
        outcome["message"],
        "Unauthorized: this operation requires a signed-in user"
    );
}
