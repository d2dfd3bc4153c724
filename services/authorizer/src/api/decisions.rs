//! Authorization decision handlers.
//!
//! # Purpose and responsibility
//! Exposes the evaluator to resolvers running outside this process. Each
//! request carries the session claims an external verifier has already
//! validated; they are mapped to a principal here with
//! [`Principal::from_claims`].
//!
//! # Key invariants and assumptions
//! - Claims with an unknown role resolve to no principal. Claims with an
//!   unknown department resolve to a principal without a department.
//! - Guard checks either return 200 `{allowed: true}` or 403 `forbidden`;
//!   the denial reason is logged but not returned.
//! - Malformed bodies return 400 `validation_error` in the shared error shape.
//! - Every decision is counted in `textura_authz_decisions_total`.
use crate::api::error::{ApiError, api_validation_error};
use crate::api::types::{
    CheckRequest, CheckResponse, EffectivePermissionsRequest, EffectivePermissionsResponse,
    RouteCheckRequest, RouteCheckResponse,
};
use crate::observability::record_decision;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use textura_rbac::{
    Guard, Principal, SessionClaims, can_access_route, effective_permissions, route_guard,
};

fn resolve_principal(claims: SessionClaims) -> Option<Principal> {
    match Principal::from_claims(claims) {
        Ok(principal) => Some(principal),
        Err(err) => {
            tracing::warn!(error = %err, "claims rejected, treating as no principal");
            None
        }
    }
}

/// Enumerate the permissions a principal currently holds.
///
/// Claims with an unknown role hold nothing.
///
/// # Errors
/// - 400 `validation_error` if the body is malformed.
pub(crate) async fn effective(
    payload: Result<Json<EffectivePermissionsRequest>, JsonRejection>,
) -> Result<Json<EffectivePermissionsResponse>, ApiError> {
    let Json(request) = payload?;
    let Some(principal) = resolve_principal(request.principal) else {
        return Ok(Json(EffectivePermissionsResponse {
            permissions: Vec::new(),
        }));
    };
    let permissions: Vec<_> = effective_permissions(&principal).into_iter().collect();
    tracing::debug!(
        user_id = %principal.user_id,
        role = %principal.role,
        count = permissions.len(),
        "effective permissions resolved"
    );
    Ok(Json(EffectivePermissionsResponse { permissions }))
}

/// Evaluate a guard against optional claims.
///
/// # Errors
/// - 400 `validation_error` if the body or guard is malformed, or the guard
///   names an unknown permission.
/// - 403 `forbidden` if the guard denies.
pub(crate) async fn check(
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Json(request) = payload?;
    let guard: Guard = serde_json::from_value(request.guard)
        .map_err(|err| api_validation_error(&format!("invalid guard: {err}")))?;
    let principal = request.principal.and_then(resolve_principal);
    let principal = principal.as_ref();
    let user_id = principal.map(|p| p.user_id.as_str()).unwrap_or("-");
    match guard.check(principal, request.message.as_deref()) {
        Ok(()) => {
            record_decision(guard.kind(), true);
            tracing::debug!(
                kind = guard.kind(),
                user_id,
                "authorization granted"
            );
            Ok(Json(CheckResponse {
                allowed: true,
                guard,
            }))
        }
        Err(denied) => {
            record_decision(guard.kind(), false);
            tracing::info!(
                kind = guard.kind(),
                reason = %denied.reason(),
                user_id,
                "authorization denied"
            );
            Err(denied.into())
        }
    }
}

/// Decide whether a principal may open a dashboard route.
///
/// Without a principal only public routes are allowed.
///
/// # Errors
/// - 400 `validation_error` if the body is malformed.
pub(crate) async fn route(
    payload: Result<Json<RouteCheckRequest>, JsonRejection>,
) -> Result<Json<RouteCheckResponse>, ApiError> {
    let Json(request) = payload?;
    let public = route_guard(&request.route).is_public();
    let allowed = match request.principal.and_then(resolve_principal) {
        Some(principal) => can_access_route(&principal, &request.route),
        None => public,
    };
    record_decision("route", allowed);
    tracing::debug!(route = %request.route, public, allowed, "route access evaluated");
    Ok(Json(RouteCheckResponse {
        route: request.route,
        public,
        allowed,
    }))
}
