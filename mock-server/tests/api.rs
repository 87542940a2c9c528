use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, throttled_app, Employee, THROTTLED_BODY};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_returns_seeded_envelope() {
    let resp = app().oneshot(get("/employees")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["employee_name"], "Tiger Nixon");
    assert_eq!(json["message"], "Successfully! All records has been fetched.");
}

#[tokio::test]
async fn list_keeps_seed_order() {
    let resp = app().oneshot(get("/employees")).await.unwrap();
    let json = body_json(resp).await;
    let ids: Vec<u64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_over_no_records_returns_empty_data() {
    let resp = app_with(Vec::new()).oneshot(get("/employees")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

// --- details ---

#[tokio::test]
async fn details_returns_matching_record() {
    let resp = app().oneshot(get("/employee/2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["id"], 2);
    assert_eq!(json["data"]["employee_name"], "Garrett Winters");
}

#[tokio::test]
async fn details_unknown_id_returns_null_data_with_message() {
    let resp = app().oneshot(get("/employee/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "error");
    assert!(json["data"].is_null());
    assert_eq!(json["message"], "Record not found");
}

#[tokio::test]
async fn details_custom_records_are_served() {
    let app = app_with(vec![Employee {
        id: 42,
        employee_name: "Custom".to_string(),
        employee_salary: 1,
        employee_age: 30,
        profile_image: "img.png".to_string(),
    }]);
    let resp = app.oneshot(get("/employee/42")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["data"]["profile_image"], "img.png");
}

// --- throttling ---

#[tokio::test]
async fn throttled_app_answers_429_html_everywhere() {
    let resp = throttled_app().oneshot(get("/employees")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], THROTTLED_BODY.as_bytes());

    let resp = throttled_app().oneshot(get("/employee/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
}
