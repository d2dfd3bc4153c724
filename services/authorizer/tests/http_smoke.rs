mod common;

use axum::http::StatusCode;
use common::{app, read_json};
use http_helpers::{get_request, json_request};
use serde_json::json;
use tower::ServiceExt;

fn quality_employee() -> serde_json::Value {
    json!({
        "role": "COMPANY_EMPLOYEE",
        "department": "QUALITY",
        "id": 7,
        "companyId": "acme"
    })
}

#[tokio::test]
async fn system_endpoints() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get_request("/v1/system/health"))
        .await
        .expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "ok");

    let response = app
        .oneshot(get_request("/v1/system/info"))
        .await
        .expect("info");
    let body = read_json(response).await;
    assert_eq!(body["api_version"], "v1");
    assert_eq!(body["permission_count"], 30);
}

#[tokio::test]
async fn catalog_lists_labels_and_domains() {
    let response = app()
        .oneshot(get_request("/v1/permissions"))
        .await
        .expect("permissions");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let entries = body.as_array().expect("array");
    assert_eq!(entries.len(), 30);
    let approve = entries
        .iter()
        .find(|entry| entry["id"] == "order:approve")
        .expect("order:approve");
    assert_eq!(approve["label"], "Approve orders");
    assert_eq!(approve["domain"], "order");
}

#[tokio::test]
async fn single_permission_lookup() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get_request("/v1/permissions/quality:inspect"))
        .await
        .expect("known");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["id"], "quality:inspect");
    assert_eq!(body["domain"], "quality");

    let response = app
        .oneshot(get_request("/v1/permissions/order:ship"))
        .await
        .expect("unknown");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "unknown permission: order:ship");
}

#[tokio::test]
async fn grant_tables_by_role_and_department() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get_request("/v1/roles/COMPANY_EMPLOYEE/permissions"))
        .await
        .expect("role");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["permissions"], json!([]));

    let response = app
        .clone()
        .oneshot(get_request("/v1/departments/MANAGEMENT/permissions"))
        .await
        .expect("department");
    let body = read_json(response).await;
    assert_eq!(body["permissions"].as_array().expect("array").len(), 30);

    let response = app
        .oneshot(get_request("/v1/roles/ROOT/permissions"))
        .await
        .expect("unknown role");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["code"], "not_found");
}

#[tokio::test]
async fn effective_permissions_for_employee() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/v1/authz/effective",
            json!({ "principal": quality_employee() }),
        ))
        .await
        .expect("effective");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let permissions: Vec<&str> = body["permissions"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert!(permissions.contains(&"quality:approve"));
    assert!(permissions.contains(&"sample:approve"));
    assert!(!permissions.contains(&"production:manage"));
}

#[tokio::test]
async fn check_allows_and_denies() {
    let app = app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": quality_employee(),
                "guard": { "kind": "permission", "permission": "quality:approve" }
            }),
        ))
        .await
        .expect("allowed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["allowed"], true);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": quality_employee(),
                "guard": { "kind": "permission", "permission": "production:manage" }
            }),
        ))
        .await
        .expect("denied");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["message"], "missing permission: production:manage");
}

#[tokio::test]
async fn check_without_principal_is_forbidden() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "guard": { "kind": "all", "permissions": [] },
                "message": "sign in to continue"
            }),
        ))
        .await
        .expect("denied");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["message"], "sign in to continue");
}

#[tokio::test]
async fn check_owner_and_company_guards() {
    let app = app();
    let customer = json!({ "role": "INDIVIDUAL_CUSTOMER", "id": "7" });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": customer,
                "guard": { "kind": "owner_or", "owner_id": 7, "permission": "order:delete" }
            }),
        ))
        .await
        .expect("owner");
    assert_eq!(response.status(), StatusCode::OK);

    let admin = json!({ "role": "ADMIN", "id": 1, "companyId": "platform" });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": admin,
                "guard": { "kind": "same_company_or", "company_id": "acme", "permission": "company:manage" }
            }),
        ))
        .await
        .expect("admin");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": quality_employee(),
                "guard": { "kind": "same_company_or", "company_id": "globex", "permission": "company:manage" }
            }),
        ))
        .await
        .expect("other company");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn check_rejects_unknown_permission() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": quality_employee(),
                "guard": { "kind": "permission", "permission": "order:ship" }
            }),
        ))
        .await
        .expect("invalid");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["code"], "validation_error");
    assert!(
        body["message"]
            .as_str()
            .expect("message")
            .contains("order:ship")
    );
}

#[tokio::test]
async fn route_checks() {
    let app = app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/route",
            json!({ "principal": quality_employee(), "route": "/production/manage" }),
        ))
        .await
        .expect("guarded route");
    let body = read_json(response).await;
    assert_eq!(body["public"], false);
    assert_eq!(body["allowed"], false);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/authz/route",
            json!({ "principal": quality_employee(), "route": "/unmapped-route" }),
        ))
        .await
        .expect("public route");
    let body = read_json(response).await;
    assert_eq!(body["public"], true);
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn unknown_department_claims_grant_nothing() {
    let app = app();
    let legal = json!({
        "role": "COMPANY_EMPLOYEE",
        "department": "LEGAL",
        "id": 7,
        "companyId": "acme"
    });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": legal,
                "guard": { "kind": "permission", "permission": "quality:view" }
            }),
        ))
        .await
        .expect("check");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["message"], "missing permission: quality:view");

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/authz/effective",
            json!({ "principal": legal }),
        ))
        .await
        .expect("effective");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["permissions"], json!([]));
}

#[tokio::test]
async fn unknown_role_claims_count_as_no_principal() {
    let app = app();
    let root = json!({ "role": "ROOT", "id": 1, "companyId": "acme" });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/check",
            json!({
                "principal": root,
                "guard": { "kind": "permission", "permission": "order:view" }
            }),
        ))
        .await
        .expect("check");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        read_json(response).await["message"],
        "authentication required"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/effective",
            json!({ "principal": root }),
        ))
        .await
        .expect("effective");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["permissions"], json!([]));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/authz/route",
            json!({ "principal": root, "route": "/orders" }),
        ))
        .await
        .expect("guarded route");
    assert_eq!(read_json(response).await["allowed"], false);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/authz/route",
            json!({ "principal": root, "route": "/unmapped-route" }),
        ))
        .await
        .expect("public route");
    assert_eq!(read_json(response).await["allowed"], true);
}

#[tokio::test]
async fn malformed_bodies_use_error_shape() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/v1/authz/effective",
            json!({ "principal": { "role": "ADMIN" } }),
        ))
        .await
        .expect("missing id");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let body = read_json(response).await;
    assert_eq!(body["code"], "validation_error");
    assert!(body["message"].as_str().expect("message").contains("id"));
}
