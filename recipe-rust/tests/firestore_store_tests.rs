mod common;

use common::recipe;
use recipe_finder::{
    store::{BookmarkStore, FirestoreBookmarkStore, FirestoreOptions},
    ErrorKind, RecipeError, StoreError,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const COLLECTION_PATH: &str = "/v1/projects/test-project/databases/(default)/documents/recipes";

fn store_for(server: &MockServer) -> FirestoreBookmarkStore {
    FirestoreBookmarkStore::new(FirestoreOptions {
        project_id: "test-project".to_string(),
        api_key: Some("AIza-test".to_string()),
        base_url: Some(format!("{}/v1", server.uri())),
        ..Default::default()
    })
}

fn document(id: &str, calories: &str) -> serde_json::Value {
    json!({
        "name": format!("projects/test-project/databases/(default)/documents/recipes/{id}"),
        "fields": {
            "name": { "stringValue": id },
            "calories": { "integerValue": calories },
            "carbohydrate": { "integerValue": "10" },
            "fat": { "integerValue": "5" },
            "protain": { "integerValue": "7" },
            "ingredients": { "arrayValue": { "values": [
                { "mapValue": { "fields": {
                    "name": { "stringValue": "kimchi" },
                    "amount": { "stringValue": "1 cup" }
                } } }
            ] } },
            "steps": { "arrayValue": { "values": [
                { "mapValue": { "fields": {
                    "step": { "integerValue": "1" },
                    "description": { "stringValue": "boil" }
                } } }
            ] } }
        },
        "createTime": "2024-06-12T00:00:00Z",
        "updateTime": "2024-06-12T00:00:00Z"
    })
}

#[tokio::test]
async fn save_patches_document_named_after_recipe() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{COLLECTION_PATH}/kimchi-stew")))
        .and(query_param("key", "AIza-test"))
        .and(body_partial_json(json!({
            "fields": {
                "name": { "stringValue": "kimchi-stew" },
                "calories": { "integerValue": "300" },
                "time": { "integerValue": "20" },
                "protain": { "integerValue": "18" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("kimchi-stew", "300")))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server)
        .save(&recipe(Some("kimchi-stew"), 300))
        .await
        .expect("save succeeds");
}

#[tokio::test]
async fn save_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{COLLECTION_PATH}/kimchi-stew")))
        .and(header("authorization", "Bearer id-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreBookmarkStore::new(FirestoreOptions {
        project_id: "test-project".to_string(),
        access_token: Some("id-token".to_string()),
        base_url: Some(format!("{}/v1", server.uri())),
        ..Default::default()
    });

    store.save(&recipe(Some("kimchi-stew"), 300)).await.unwrap();
}

#[tokio::test]
async fn save_without_name_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = store_for(&server).save(&recipe(None, 300)).await.unwrap_err();
    assert!(matches!(error, RecipeError::MissingName));
}

#[tokio::test]
async fn rejected_write_is_store_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
        .mount(&server)
        .await;

    let error = store_for(&server)
        .save(&recipe(Some("kimchi-stew"), 300))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Store);
    match error {
        RecipeError::Store(StoreError::StatusCode(status, body)) => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "PERMISSION_DENIED");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_follows_pages_and_skips_corrupt_documents() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [document("budae-jjigae", "600")]
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(query_param("key", "AIza-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                document("kimchi-stew", "300"),
                document("broken", "a lot")
            ],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = store_for(&server).fetch_all().await.expect("fetch succeeds");

    let names = listing
        .recipes
        .iter()
        .map(|recipe| recipe.name.clone().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["kimchi-stew", "budae-jjigae"]);
    assert_eq!(listing.recipes[1].calories, 600);
    assert_eq!(listing.recipes[0].steps[0].step_number, 1);
    assert_eq!(listing.skipped.len(), 1);
    assert_eq!(listing.skipped[0].document_id, "broken");
}

#[tokio::test]
async fn fetch_all_on_empty_collection_returns_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let listing = store_for(&server).fetch_all().await.unwrap();
    assert!(listing.recipes.is_empty());
    assert!(listing.skipped.is_empty());
}

#[tokio::test]
async fn unreadable_list_response_is_store_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = store_for(&server).fetch_all().await.unwrap_err();
    assert!(matches!(
        error,
        RecipeError::Store(StoreError::Invariant("firestore", _))
    ));
}

#[tokio::test]
async fn save_keeps_reserved_characters_in_document_name() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!(
            "{COLLECTION_PATH}/%EA%B9%80%EC%B9%98%EC%B0%8C%EA%B0%9C%3F%EB%A7%A4%EC%9A%B4%EB%A7%9B"
        )))
        .and(query_param("key", "AIza-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(format!(
            "{COLLECTION_PATH}/%EA%B9%80%EC%B9%98%EC%B0%8C%EA%B0%9C%232"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.save(&recipe(Some("김치찌개?매운맛"), 300)).await.unwrap();
    store.save(&recipe(Some("김치찌개#2"), 310)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.url.query(), Some("key=AIza-test"));
    }
}

#[tokio::test]
async fn saved_document_reads_back_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(format!("{COLLECTION_PATH}/kimchi-stew")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let mut saved = recipe(Some("kimchi-stew"), 300);
    saved.id = Some(uuid::Uuid::new_v4());
    saved.ingredients[0].image_url = Some(String::new());
    store.save(&saved).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["fields"]["id"]["stringValue"],
        json!(saved.id.unwrap().to_string())
    );
    assert_eq!(body["fields"]["time"]["integerValue"], json!("20"));

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{
                "name": "projects/test-project/databases/(default)/documents/recipes/kimchi-stew",
                "fields": body["fields"].clone(),
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = store.fetch_all().await.unwrap();
    assert!(listing.skipped.is_empty());
    assert_eq!(listing.recipes, vec![saved]);
}
