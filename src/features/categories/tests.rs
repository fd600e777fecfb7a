use axum::http::StatusCode;
use axum_test::TestServer;
use fake::{faker::lorem::en::Sentence, Fake};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::shared::test_helpers::test_server;

async fn create_category(server: &TestServer, name: &str) -> Value {
    let description: String = Sentence(3..8).fake();
    let response = server
        .post("/api/categories")
        .json(&json!({ "name": name, "description": description }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    let server = test_server();

    let response = server
        .post("/api/categories")
        .json(&json!({
            "name": "Fire Hazard",
            "description": "Fires, explosions and flammable materials",
            "color": "#FF4500"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created = response.json::<Value>();
    assert_eq!(created["name"], "Fire Hazard");
    assert_eq!(created["color"], "#FF4500");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());

    let id = created["id"].as_str().unwrap();
    let fetched = server.get(&format!("/api/category/{}", id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_defaults_color() {
    let server = test_server();
    let created = create_category(&server, "Chemical Hazard").await;
    assert_eq!(created["color"], "#FF0000");
}

#[tokio::test]
async fn test_create_rejects_name_with_digits() {
    let server = test_server();

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "Fire 2", "description": "Second fire category" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Name cannot contain numbers");
}

#[tokio::test]
async fn test_create_reports_missing_fields() {
    let server = test_server();

    let response = server.post("/api/categories").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(
        body["errors"],
        json!([
            "Please enter the category description",
            "Please enter the category name"
        ])
    );
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts() {
    let server = test_server();
    create_category(&server, "Fire Hazard").await;

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "Fire Hazard", "description": "Again" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let server = test_server();

    let response = server
        .post("/api/categories")
        .content_type("application/json")
        .text("{ not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_list_pagination_window() {
    let server = test_server();
    let names = ["Alpha", "Bravo", "Charlie", "Delta", "Echo"];
    for name in names {
        create_category(&server, name).await;
    }
    let total = names.len() as i64;

    for (limit, offset) in [(2_i64, 0_i64), (2, 4), (3, 2), (10, 0), (5, 5), (1, 9)] {
        let response = server
            .get("/api/categories")
            .add_query_param("limit", limit)
            .add_query_param("offset", offset)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.json::<Value>();
        let returned = body["data"].as_array().unwrap().len() as i64;
        assert_eq!(returned, limit.min((total - offset).max(0)));
        assert_eq!(body["pagination"]["total"], total);
        assert_eq!(body["pagination"]["limit"], limit);
        assert_eq!(body["pagination"]["offset"], offset);
        assert_eq!(body["pagination"]["hasMore"], offset + returned < total);
    }
}

#[tokio::test]
async fn test_list_returns_records_in_insertion_order() {
    let server = test_server();
    create_category(&server, "Alpha").await;
    create_category(&server, "Bravo").await;

    let body = server.get("/api/categories").await.json::<Value>();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
}

#[tokio::test]
async fn test_list_invalid_params_fall_back_to_defaults() {
    let server = test_server();

    let response = server
        .get("/api/categories")
        .add_query_param("limit", "lots")
        .add_query_param("offset", "-4")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_search_requires_query() {
    let server = test_server();

    let response = server.get("/api/categories/search").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Search query 'q' is required"
    );

    let response = server
        .get("/api/categories/search")
        .add_query_param("q", "")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_is_case_insensitive_on_name() {
    let server = test_server();
    create_category(&server, "Fire Hazard").await;
    create_category(&server, "Chemical Hazard").await;

    let response = server
        .get("/api/categories/search")
        .add_query_param("q", "FIRE")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let hits = response.json::<Vec<Value>>();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Fire Hazard");
}

#[tokio::test]
async fn test_search_without_matches_returns_empty_array() {
    let server = test_server();
    create_category(&server, "Fire Hazard").await;

    let response = server
        .get("/api/categories/search")
        .add_query_param("q", "radiation")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_get_unknown_category_is_not_found() {
    let server = test_server();

    let response = server
        .get(&format!("/api/category/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Category not found");
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let server = test_server();

    let response = server.get("/api/category/not-a-uuid").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_update_applies_only_supplied_fields() {
    let server = test_server();
    let created = create_category(&server, "Physical Hazard").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/category/{}", id))
        .json(&json!({ "color": "#4682B4" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["color"], "#4682B4");
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["description"], created["description"]);

    let fetched = server.get(&format!("/api/category/{}", id)).await;
    assert_eq!(fetched.json::<Value>(), updated);
}

#[tokio::test]
async fn test_update_unknown_category_is_not_found() {
    let server = test_server();

    let response = server
        .put(&format!("/api/category/{}", Uuid::new_v4()))
        .json(&json!({ "description": "Nothing here" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validates_name() {
    let server = test_server();
    let created = create_category(&server, "Ergonomic Hazard").await;

    let response = server
        .put(&format!("/api/category/{}", created["id"].as_str().unwrap()))
        .json(&json!({ "name": "Ergonomic 101" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Name cannot contain numbers");
}

#[tokio::test]
async fn test_update_to_taken_name_conflicts() {
    let server = test_server();
    create_category(&server, "Fire Hazard").await;
    let other = create_category(&server, "Chemical Hazard").await;

    let response = server
        .put(&format!("/api/category/{}", other["id"].as_str().unwrap()))
        .json(&json!({ "name": "Fire Hazard" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_lifecycle() {
    let server = test_server();

    let missing = server
        .delete(&format!("/api/category/{}", Uuid::new_v4()))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let created = create_category(&server, "Radiation Hazard").await;
    let path = format!("/api/category/{}", created["id"].as_str().unwrap());

    let deleted = server.delete(&path).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "Category deleted successfully" })
    );

    let fetched = server.get(&path).await;
    assert_eq!(fetched.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_repeated_params_keep_first_value() {
    let server = test_server();

    let response = server
        .get("/api/categories")
        .add_raw_query_param("limit=5&limit=7&offset=1&offset=3")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["limit"], 5);
    assert_eq!(body["pagination"]["offset"], 1);
}

#[tokio::test]
async fn test_list_uses_leading_integer_of_params() {
    let server = test_server();

    let response = server
        .get("/api/categories")
        .add_raw_query_param("limit=5.7&offset=2abc")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["limit"], 5);
    assert_eq!(body["pagination"]["offset"], 2);
}

#[tokio::test]
async fn test_search_repeated_query_is_json_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/categories/search")
        .add_raw_query_param("q=a&q=b")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid query string"));
}
