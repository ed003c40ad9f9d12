//! Route-level tests driving the router with `tower::ServiceExt::oneshot`

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use fusion_api::{AppState, create_app};
use fusion_core::ResolvedConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::new(ResolvedConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let res = app().oneshot(request).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = axum::body::to_bytes(res.into_body(), 2 * 1024 * 1024).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, body) = send(request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_dashboard_serves_resolved_config() {
    let (status, body) = get_json("/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["defaultTotal"], 6639);
    assert_eq!(body["defaultFunctionShare"][4]["team"], "Engineering");
    assert_eq!(body["common"]["adoptionGAR"][0]["name"], "Green");
    assert_eq!(body["lenses"]["CIO"]["shadowAI"], 41.0);
}

#[tokio::test]
async fn test_snapshot_with_empty_body_uses_defaults() {
    let (status, body) = post_json("/api/snapshot", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lens"], "CEO");
    assert_eq!(body["totals"]["total"], 6639);
    assert_eq!(body["functions"][0]["total"], 1328);
    assert_eq!(body["functions"][0]["employees"], 982);
}

#[tokio::test]
async fn test_snapshot_with_overrides() {
    let (status, body) =
        post_json("/api/snapshot", r#"{ "lens": "CFO", "totalHeadcount": 1000, "horizon": "Future" }"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lens"], "CFO");
    assert_eq!(body["totals"]["total"], 1000);
    assert_eq!(body["horizon"]["headcount"], 1100);
}

#[tokio::test]
async fn test_snapshot_rejects_malformed_json() {
    let (status, body) = post_json("/api/snapshot", "{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_snapshot_rejects_unknown_lens() {
    let (status, body) = post_json("/api/snapshot", r#"{ "lens": "COO" }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_snapshot_share_edits_keep_the_default_total() {
    for pct in [3, 17, 41, 58] {
        let (status, body) =
            post_json("/api/snapshot", &format!(r#"{{ "shareEdits": {{ "Ops": {pct} }} }}"#)).await;
        assert_eq!(status, StatusCode::OK, "Ops={pct}: {body}");
        assert_eq!(body["totals"]["total"], 6639);
    }
}

#[tokio::test]
async fn test_snapshot_negative_share_is_unprocessable() {
    let (status, body) = post_json(
        "/api/snapshot",
        r#"{ "functionShares": [ { "team": "A", "sharePct": -10 }, { "team": "B", "sharePct": 60 } ] }"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "CALCULATION_ERROR");
    assert!(body["error"]["message"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn test_export_csv() {
    let (status, headers, body) =
        send(Request::get("/api/export.csv").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/csv"));

    let csv = String::from_utf8(body).unwrap();
    assert!(csv.starts_with("Function,Total,Employees,Contractors,Employee%\n"));
    assert!(csv.ends_with("TOTAL,6639,4764,1875,"));
}

#[tokio::test]
async fn test_calculate_allocate_by_share() {
    let (status, body) = post_json(
        "/api/calculate/allocate_by_share",
        r#"{ "total": 6639, "rows": [
            { "team": "Reactive", "sharePct": 42 }, { "team": "Proactive", "sharePct": 58 }
        ] }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calculator"], "allocate_by_share");
    assert_eq!(body["result"][0]["count"], 2788);
    assert_eq!(body["result"][1]["count"], 3851);
    assert_eq!(body["result"][1]["team"], "Proactive");
}

#[tokio::test]
async fn test_calculate_binary_split() {
    let (status, body) =
        post_json("/api/calculate/binary_split", r#"{ "total": 101, "primary_pct": 74 }"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({ "primary": 74, "secondary": 27 }));
}

#[tokio::test]
async fn test_calculate_unknown_calculator() {
    let (status, body) = post_json("/api/calculate/percentage_add", "{}").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_calculate_requires_object_arguments() {
    let (status, body) = post_json("/api/calculate/average", "[1, 2, 3]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_calculate_malformed_argument_is_bad_request() {
    let (status, body) =
        post_json("/api/calculate/binary_split", r#"{ "total": "lots", "primary_pct": 74 }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].as_str().unwrap().contains("Invalid argument 'total'"));
}

#[tokio::test]
async fn test_calculate_bad_arguments_are_unprocessable() {
    let (status, body) = post_json("/api/calculate/allocate_by_share", r#"{ "total": -5, "rows": [] }"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "CALCULATION_ERROR");
}
