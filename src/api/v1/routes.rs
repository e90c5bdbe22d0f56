/*
 * Responsibility
 * - v1 URL layout
 * - Each token route is its own Router so its layer covers only that route
 *   - optional: token bound when valid, request always served
 *   - required: 401 (empty body) unless a valid token is sent
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    health::health,
    tokens::{access_token, refresh_token},
};
use crate::middleware::auth;

pub fn routes() -> Router {
    let optional_access =
        auth::add_access_token(Router::new().route("/access/optional", get(access_token)));
    let required_access =
        auth::require_access_token(Router::new().route("/access/required", get(access_token)));
    let optional_refresh =
        auth::add_refresh_token(Router::new().route("/refresh/optional", get(refresh_token)));
    let required_refresh =
        auth::require_refresh_token(Router::new().route("/refresh/required", get(refresh_token)));

    Router::new()
        .route("/health", get(health))
        .merge(optional_access)
        .merge(required_access)
        .merge(optional_refresh)
        .merge(required_refresh)
}
