use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use landdev_core_api::TokenService;
use landdev_core_db::repository::{DeleteByUsername, UserRepository};
use landdev_core_document::DocumentRepositories;
use landdev_core_server::{app_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    users: Arc<dyn UserRepository>,
}

fn test_app() -> TestApp {
    let repos = DocumentRepositories::new().create_all_repositories();
    let users: Arc<dyn UserRepository> = repos.user_repository;
    let state = AppState::new(
        repos.agreement_repository,
        users.clone(),
        TokenService::new(b"integration-secret", 60),
        4,
    );
    TestApp {
        router: app_router(state),
        users,
    }
}

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, value)
}

async fn register_and_login(app: &TestApp, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });
    let (status, _) = send(app, Method::POST, "/api/auth/register", None, Some(credentials.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, Method::POST, "/api/auth/login", None, Some(credentials)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

fn agreement_body(survey_no: &str, area: &str) -> Value {
    json!({
        "survey_no": survey_no,
        "area": area,
        "doc_no_1": "DOC-1",
        "agreement_date": "01-01-2023",
        "development_months": 6,
        "possession_status": "pending",
        "rent_per_sqft": 2,
        "free_area_bu": 1388,
        "free_area_cp": 900,
        "agreement_value": 500000,
        "deposit_da": 10000
    })
}

#[tokio::test]
async fn public_routes_answer_without_token() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Land Agreement Management API");

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/forgot-password",
        None,
        Some(json!({ "username": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "If user exists, reset instructions sent");
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/agreements", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["category"], "Unauthorized");

    let (status, _) = send(&app, Method::GET, "/api/dashboard/summary", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/agreements",
        None,
        Some(agreement_body("S-1", "1.00.0")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn agreement_lifecycle() {
    let app = test_app();
    let token = register_and_login(&app, "surveyor", "field-work").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/agreements",
        Some(&token),
        Some(agreement_body("S-1", "0.69.4")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["area_in_guntas"].as_f64(), Some(69.4));
    assert_eq!(created["development_end_date"], "01-07-2023");
    assert_eq!(created["firm_name"], "");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/agreements/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["survey_no"], "S-1");
    assert_eq!(fetched["created_at"], created["created_at"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/agreements/{id}"),
        Some(&token),
        Some(agreement_body("S-1", "2.00.0")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["area_in_guntas"].as_f64(), Some(80.0));
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, listed) = send(
        &app,
        Method::GET,
        "/api/agreements?skip=0&limit=10&sort_by=survey_no&sort_order=1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, summary) = send(&app, Method::GET, "/api/dashboard/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_land_count"], 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/agreements/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, Method::GET, &format!("/api/agreements/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["category"], "NotFound");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/agreements/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_on_unknown_id_creates_the_record() {
    let app = test_app();
    let token = register_and_login(&app, "owner", "pw").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/agreements/legacy-42",
        Some(&token),
        Some(agreement_body("S-42", "0.10.0")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "legacy-42");

    let (status, _) = send(&app, Method::GET, "/api/agreements/legacy-42", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn caller_cannot_supply_derived_fields_or_created_at() {
    let app = test_app();
    let token = register_and_login(&app, "auditor", "pw").await;

    let (status, honest) = send(
        &app,
        Method::POST,
        "/api/agreements",
        Some(&token),
        Some(agreement_body("S-1", "0.69.4")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let forged_fields = json!({
        "id": "chosen-id",
        "area_in_guntas": 1,
        "development_end_date": "01-01-1999",
        "total_months": 999,
        "total_rent": 999,
        "agreement_1_expense": 999,
        "total_agreement_expense": 999,
        "real_value_per_acre": 999,
        "created_at": "2001-01-01T00:00:00Z"
    });
    let mut forged = agreement_body("S-2", "0.69.4");
    for (key, value) in forged_fields.as_object().unwrap() {
        forged[key] = value.clone();
    }

    let (status, created) = send(&app, Method::POST, "/api/agreements", Some(&token), Some(forged.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], "chosen-id");
    assert_ne!(created["created_at"], "2001-01-01T00:00:00Z");
    for field in [
        "area_in_guntas",
        "development_end_date",
        "total_months",
        "total_rent",
        "agreement_1_expense",
        "total_agreement_expense",
        "real_value_per_acre",
    ] {
        assert_eq!(created[field], honest[field], "{field} was taken from the request");
    }

    let id = created["id"].as_str().unwrap().to_string();
    let (status, updated) = send(&app, Method::PUT, &format!("/api/agreements/{id}"), Some(&token), Some(forged)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["total_rent"], honest["total_rent"]);
    assert_eq!(updated["area_in_guntas"], honest["area_in_guntas"]);

    let (_, stored) = send(&app, Method::GET, &format!("/api/agreements/{id}"), Some(&token), None).await;
    assert_eq!(stored["created_at"], created["created_at"]);
    assert_eq!(stored["total_months"], honest["total_months"]);
}

#[tokio::test]
async fn multibyte_owner_name_is_stored_whole() {
    let app = test_app();
    let token = register_and_login(&app, "registrar", "pw").await;

    let owner = "रा".repeat(35);
    let mut body = agreement_body("S-3", "1.00.0");
    body["land_owner"] = Value::String(owner.clone());

    let (status, created) = send(&app, Method::POST, "/api/agreements", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["land_owner"], owner.as_str());

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/agreements?sort_by=agreement_1_expense&sort_order=-1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_requests_are_validation_errors() {
    let app = test_app();
    let token = register_and_login(&app, "checker", "pw").await;

    let mut missing_survey = agreement_body("S-1", "1.00.0");
    missing_survey.as_object_mut().unwrap().remove("survey_no");
    let (status, body) = send(&app, Method::POST, "/api/agreements", Some(&token), Some(missing_survey)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["category"], "ValidationError");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/agreements?sort_by=not_a_field",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/api/agreements?skip=-1", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn duplicate_registration_and_bad_login() {
    let app = test_app();
    register_and_login(&app, "dup", "first").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "dup", "password": "second" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["category"], "Conflict");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": "dup", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_is_rejected_once_its_user_is_deleted() {
    let app = test_app();
    let token = register_and_login(&app, "leaver", "bye").await;

    let (status, _) = send(&app, Method::GET, "/api/agreements", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    assert!(app.users.delete_by_username("leaver").await.unwrap());

    let (status, body) = send(&app, Method::GET, "/api/agreements", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["category"], "Unauthorized");
}
