//! Mock employee directory API for tests and local development.
//!
//! Reproduces the upstream wire behavior: every JSON route answers with a
//! `{status, data, message}` envelope, an unknown record id answers with a
//! null `data` and a message, and `throttled_app` reproduces the upstream
//! rate limiter, which drops JSON entirely and returns an HTML error page.
//! The employee DTOs here are deliberately independent from the core
//! crate's; integration tests catch schema drift between the two.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub employee_name: String,
    pub employee_salary: i64,
    pub employee_age: u32,
    pub profile_image: String,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub status: String,
    pub data: Option<Vec<Employee>>,
    pub message: String,
}

#[derive(Serialize)]
pub struct DetailResponse {
    pub status: String,
    pub data: Option<Employee>,
    pub message: String,
}

/// Body served by the throttled variant, shaped like the upstream rate
/// limiter's HTML error page.
pub const THROTTLED_BODY: &str =
    "<html><head><title>429 Too Many Requests</title></head>\
     <body><h1>429 Too Many Requests</h1></body></html>";

pub type Db = Arc<Vec<Employee>>;

/// Router over the default seeded records.
pub fn app() -> Router {
    app_with(seed_employees())
}

/// Router over caller-provided records.
pub fn app_with(employees: Vec<Employee>) -> Router {
    let db: Db = Arc::new(employees);
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employee/{id}", get(employee_details))
        .with_state(db)
}

/// Router that answers every request the way the upstream rate limiter
/// does: status 429 and an HTML body, no JSON envelope.
pub fn throttled_app() -> Router {
    Router::new().fallback(throttled)
}

/// Records matching the upstream service's fixture data.
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            employee_name: "Tiger Nixon".to_string(),
            employee_salary: 320_800,
            employee_age: 61,
            profile_image: String::new(),
        },
        Employee {
            id: 2,
            employee_name: "Garrett Winters".to_string(),
            employee_salary: 170_750,
            employee_age: 63,
            profile_image: String::new(),
        },
        Employee {
            id: 3,
            employee_name: "Ashton Cox".to_string(),
            employee_salary: 86_000,
            employee_age: 66,
            profile_image: String::new(),
        },
    ]
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

/// Serve an arbitrary router variant (e.g. `throttled_app`).
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_employees(State(db): State<Db>) -> Json<ListResponse> {
    Json(ListResponse {
        status: "success".to_string(),
        data: Some(db.to_vec()),
        message: "Successfully! All records has been fetched.".to_string(),
    })
}

async fn employee_details(State(db): State<Db>, Path(id): Path<u64>) -> Json<DetailResponse> {
    match db.iter().find(|e| e.id == id) {
        Some(employee) => Json(DetailResponse {
            status: "success".to_string(),
            data: Some(employee.clone()),
            message: "Successfully! Record has been fetched.".to_string(),
        }),
        None => Json(DetailResponse {
            status: "error".to_string(),
            data: None,
            message: "Record not found".to_string(),
        }),
    }
}

async fn throttled() -> impl IntoResponse {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [(header::CONTENT_TYPE, "text/html")],
        THROTTLED_BODY,
    )
}
