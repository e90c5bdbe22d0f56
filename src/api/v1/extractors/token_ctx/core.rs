use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::TokenCtx;

/// Extractor that gives a handler the [`TokenCtx`] bound by the token middleware.
///
/// Never rejects: without middleware, or when every layer passed the request
/// through unchanged, the handler gets an empty context.
#[derive(Debug, Clone)]
pub struct TokenCtxExtractor(pub TokenCtx);

impl<S> FromRequestParts<S> for TokenCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<TokenCtx>()
            .cloned()
            .unwrap_or_default();

        Ok(TokenCtxExtractor(ctx))
    }
}
