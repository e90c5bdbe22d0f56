//! Fixed access / refresh token middleware.
//!
//! Same factory as [`super::token`], with the keys and type labels fixed:
//! - access token: `TokenKey::AccessToken`, `Authorization: Bearer <token>`
//! - refresh token: `TokenKey::RefreshToken`, `Authorization: Basic <token>`
//!
//! The `require_*` variants answer `401` with an empty body.
//!
//! Example:
//! ```ignore
//! let me = Router::new().route("/me", get(me));
//! let me = middleware::auth::access::require_access_token(me);
//! app = app.merge(me);
//! ```

use axum::Router;

use super::token::{add_token, require_token_or_unauthorized};
use crate::api::v1::extractors::TokenKey;
use crate::token::{ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE};

pub fn add_access_token<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    add_token(router, TokenKey::AccessToken, ACCESS_TOKEN_TYPE)
}

pub fn require_access_token<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    require_token_or_unauthorized(router, TokenKey::AccessToken, ACCESS_TOKEN_TYPE)
}

pub fn add_refresh_token<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    add_token(router, TokenKey::RefreshToken, REFRESH_TOKEN_TYPE)
}

pub fn require_refresh_token<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    require_token_or_unauthorized(router, TokenKey::RefreshToken, REFRESH_TOKEN_TYPE)
}
