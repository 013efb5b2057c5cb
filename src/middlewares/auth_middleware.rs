use crate::utils::jwt::{Claims, verify_token};
use crate::utils::response::ApiResponse;

use axum::{
    Json,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

type AuthError = (StatusCode, Json<ApiResponse<()>>);

pub async fn auth(headers: HeaderMap, mut req: Request, next: Next) -> Result<Response, AuthError> {
    // Extract bearer token from the Authorization header
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error(
                    "Missing or invalid Authorization header",
                )),
            )
        })?;

    let claims = verify_token(token).map_err(|e| {
        println!("JWT Verification Error: {:?}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Invalid or expired token")),
        )
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Same as `auth`, but additionally requires the `admin` role. Layered onto
/// every `/api/admin` router; the UI hiding admin screens is not a boundary.
pub async fn admin_auth(
    headers: HeaderMap,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::error(
                    "Missing or invalid Authorization header",
                )),
            )
        })?;

    let claims: Claims = verify_token(token).map_err(|e| {
        println!("JWT Verification Error: {:?}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Invalid or expired token")),
        )
    })?;

    if claims.role != "admin" {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<()>::error("Admin access required")),
        ));
    }

    let mut req = req;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
