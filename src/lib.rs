//! Authorization header token extraction and axum middleware.
//!
//! - [`token`]: read `Authorization: <type> <token>`, check the type, return the token
//! - [`middleware::auth`]: bind the token into [`TokenCtx`] (`add_*`) or require it (`require_*`)
//! - [`TokenCtxExtractor`]: read the bound tokens in a handler
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use oauth_helpers::{TokenCtxExtractor, TokenKey, middleware::auth};
//!
//! async fn me(TokenCtxExtractor(ctx): TokenCtxExtractor) -> String {
//!     ctx.get(TokenKey::AccessToken).unwrap_or_default().to_owned()
//! }
//!
//! let app = auth::require_access_token(Router::new().route("/me", get(me)));
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod middleware;
pub mod token;

pub use api::v1::extractors::{TokenCtx, TokenCtxExtractor, TokenKey};
pub use token::{TokenError, TokenWithType};
