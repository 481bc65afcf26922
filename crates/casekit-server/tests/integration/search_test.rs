//! History search endpoint tests

use rocket::http::{ContentType, Status};
use tempfile::TempDir;

use crate::test_utils::{client, client_for_dir, json_body};

fn ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|case| case["id"].as_str().expect("case id").to_string())
        .collect()
}

#[rocket::async_test]
async fn test_empty_body_object_returns_everything() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(ids(&json), vec!["HTC001", "HTC002", "HTC003"]);
    assert_eq!(
        json["filters"],
        serde_json::json!({"caseLibrary": "all", "searchMethod": "keyword", "searchText": ""})
    );
}

#[rocket::async_test]
async fn test_search_by_name_fragment() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"searchText":"账单"}"#)
        .dispatch()
        .await;

    let json = json_body(response).await;

    assert_eq!(ids(&json), vec!["HTC001"]);
    assert_eq!(json["data"][0]["expectedResults"][0]["id"], "he1");
    assert_eq!(json["filters"]["searchText"], "账单");
}

#[rocket::async_test]
async fn test_no_match_is_still_success() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"searchText":"nonexistent"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"], serde_json::json!([]));
}

#[rocket::async_test]
async fn test_library_and_method_are_echoed_not_applied() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"caseLibrary":"archived","searchMethod":"semantic"}"#)
        .dispatch()
        .await;

    let json = json_body(response).await;

    assert_eq!(ids(&json).len(), 3);
    assert_eq!(json["filters"]["caseLibrary"], "archived");
    assert_eq!(json["filters"]["searchMethod"], "semantic");
    assert_eq!(json["filters"]["searchText"], "");
}

#[rocket::async_test]
async fn test_null_fields_are_echoed_as_null() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"caseLibrary":null,"searchText":null}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;

    assert_eq!(ids(&json).len(), 3);
    assert_eq!(
        json["filters"],
        serde_json::json!({"caseLibrary": null, "searchMethod": "keyword", "searchText": null})
    );
}

#[rocket::async_test]
async fn test_numeric_case_library_is_echoed() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"caseLibrary":1}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;

    assert_eq!(ids(&json).len(), 3);
    assert_eq!(json["filters"]["caseLibrary"], 1);
}

#[rocket::async_test]
async fn test_boolean_search_method_still_filters_by_text() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body(r#"{"searchMethod":true,"searchText":"账单"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;

    assert_eq!(ids(&json), vec!["HTC001"]);
    assert_eq!(json["filters"]["searchMethod"], true);
}

#[rocket::async_test]
async fn test_body_without_content_type_is_accepted() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .body(r#"{"searchText":"停机"}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(ids(&json_body(response).await), vec!["HTC003"]);
}

#[rocket::async_test]
async fn test_malformed_body_is_rejected_by_framework() {
    let client = client().await;
    let response = client
        .post("/api/search-history-cases")
        .header(ContentType::JSON)
        .body("{\"searchText\":")
        .dispatch()
        .await;

    assert!(response.status().class().is_client_error());
}

#[rocket::async_test]
async fn test_search_ignores_ascii_case() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("history_cases.json"),
        r#"[
            {"id":"A1","name":"SOAP Payment flow","preconditions":[],"steps":[],"expectedResults":[]},
            {"id":"A2","name":"rest user sync","preconditions":[],"steps":[],"expectedResults":[]},
            {"id":"A3","name":"Soap adjustment 调账","preconditions":[],"steps":[],"expectedResults":[]}
        ]"#,
    )
    .expect("write table");
    let client = client_for_dir(dir.path()).await;

    let mut results = Vec::new();
    for text in ["soap", "SOAP", "sOaP"] {
        let response = client
            .post("/api/search-history-cases")
            .header(ContentType::JSON)
            .body(format!(r#"{{"searchText":"{text}"}}"#))
            .dispatch()
            .await;
        results.push(ids(&json_body(response).await));
    }

    assert_eq!(results[0], vec!["A1", "A3"]);
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
}
