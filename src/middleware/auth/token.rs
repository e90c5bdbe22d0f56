//! Authorization token -> TokenCtx in request extensions.
//!
//! Two shapes over the same extraction:
//! - `add_token`: best effort. The request always reaches the handler; the token is bound only when valid.
//! - `require_token`: the handler runs only with a valid token, otherwise the failure handler answers.
//!
//! Nothing here verifies the token itself. It is carried as an opaque string for a later layer to check.
//!
//! The layers cover only the routes already on the router when they are applied.
//! Add routes first, then wrap. A router with no routes is returned unchanged.
//!
//! Example:
//! ```ignore
//! let me = Router::new().route("/me", get(me));
//! let me = auth::token::require_token(me, TokenKey::Named("session"), "Session", unauthorized_page);
//! ```

use std::convert::Infallible;

use axum::{
    Router,
    extract::{Request, State},
    handler::Handler,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower::util::BoxCloneSyncService;

use crate::api::v1::extractors::{TokenCtx, TokenKey};
use crate::token::{self, TokenError};

/// Where a token goes and which declared type it must carry.
#[derive(Debug, Clone)]
pub(crate) struct TokenRule {
    key: TokenKey,
    token_type: String,
}

impl TokenRule {
    fn new(key: TokenKey, token_type: impl Into<String>) -> Self {
        Self {
            key,
            token_type: token_type.into(),
        }
    }

    fn extract(&self, req: &Request) -> Result<String, TokenError> {
        token::token_from_headers(req.headers(), &self.token_type)
    }
}

type FailureService = BoxCloneSyncService<Request, Response, Infallible>;

/// A [`TokenRule`] plus the handler that answers when the rule is not met.
#[derive(Clone)]
struct TokenGuard {
    rule: TokenRule,
    on_failure: FailureService,
}

/// Binds the token to `key` when the request carries a `token_type` token; passes every request on.
pub fn add_token<S>(router: Router<S>, key: TokenKey, token_type: impl Into<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if !router.has_routes() {
        tracing::warn!(key = ?key, "add_token applied to a router without routes, nothing to guard");
        return router;
    }

    let rule = TokenRule::new(key, token_type);
    router.route_layer(middleware::from_fn_with_state(rule, add_token_middleware))
}

/// Binds the token to `key` and runs the route, or runs `on_failure` instead when
/// the header is missing, malformed or of another type.
///
/// `on_failure` is an ordinary handler and decides the response (status and body).
/// It is not told which of the failures happened. It runs outside the router's
/// state, so it can use request extractors but not `State<S>`.
pub fn require_token<S, H, T>(
    router: Router<S>,
    key: TokenKey,
    token_type: impl Into<String>,
    on_failure: H,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    H: Handler<T, ()>,
    T: 'static,
{
    if !router.has_routes() {
        tracing::warn!(key = ?key, "require_token applied to a router without routes, nothing to guard");
        return router;
    }

    let guard = TokenGuard {
        rule: TokenRule::new(key, token_type),
        on_failure: BoxCloneSyncService::new(on_failure.with_state(())),
    };
    router.route_layer(middleware::from_fn_with_state(guard, require_token_middleware))
}

/// [`require_token`] with the fixed failure response: `401 Unauthorized`, empty body.
pub fn require_token_or_unauthorized<S>(
    router: Router<S>,
    key: TokenKey,
    token_type: impl Into<String>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    require_token(router, key, token_type, unauthorized)
}

async fn unauthorized() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn add_token_middleware(
    State(rule): State<TokenRule>,
    mut req: Request,
    next: Next,
) -> Response {
    match rule.extract(&req) {
        Ok(token) => bind_token(&mut req, rule.key, token),
        Err(err) => {
            tracing::debug!(error = %err, key = ?rule.key, "token not added, passing request through");
        }
    }

    next.run(req).await
}

async fn require_token_middleware(
    State(guard): State<TokenGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    match guard.rule.extract(&req) {
        Ok(token) => {
            bind_token(&mut req, guard.rule.key, token);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, key = ?guard.rule.key, "required token rejected");
            guard.on_failure.oneshot(req).await.into_response()
        }
    }
}

// middleware -> extractor
fn bind_token(req: &mut Request, key: TokenKey, token: String) {
    let ctx = match req.extensions().get::<TokenCtx>() {
        Some(ctx) => ctx.with_token(key, token),
        None => TokenCtx::new().with_token(key, token),
    };

    tracing::trace!(key = ?key, "token bound to request");
    req.extensions_mut().insert(ctx);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::header,
        routing::get,
    };

    use crate::api::v1::extractors::TokenCtxExtractor;

    const KEY: TokenKey = TokenKey::Named("custom_token");
    const ERROR_TEXT: &str = "Error happened";

    #[derive(Clone, Default)]
    struct Calls {
        next: Arc<AtomicUsize>,
        failure: Arc<AtomicUsize>,
    }

    async fn echo(
        Extension(calls): Extension<Calls>,
        TokenCtxExtractor(ctx): TokenCtxExtractor,
    ) -> String {
        calls.next.fetch_add(1, Ordering::SeqCst);
        ctx.get(KEY).unwrap_or_default().to_string()
    }

    async fn failure(Extension(calls): Extension<Calls>) -> (StatusCode, &'static str) {
        calls.failure.fetch_add(1, Ordering::SeqCst);
        (StatusCode::UNAUTHORIZED, ERROR_TEXT)
    }

    fn base() -> Router {
        Router::new().route("/", get(echo))
    }

    // Outermost, so the failure handler sees it too.
    fn with_calls(router: Router, calls: &Calls) -> Router {
        router.layer(Extension(calls.clone()))
    }

    fn request(auth: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn call(router: Router, auth: Option<&str>) -> (StatusCode, String) {
        let resp = router.oneshot(request(auth)).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn add_token_binds_matching_token() {
        let calls = Calls::default();
        let app = with_calls(add_token(base(), KEY, "Custom"), &calls);

        let (status, body) = call(app, Some("Custom 123")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "123");
        assert_eq!(calls.next.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn add_token_passes_every_failure_through() {
        for auth in [None, Some("foo"), Some("Other 123"), Some("Custom 1 2")] {
            let calls = Calls::default();
            let app = with_calls(add_token(base(), KEY, "Custom"), &calls);

            let (status, body) = call(app, auth).await;

            assert_eq!(status, StatusCode::OK, "{auth:?}");
            assert_eq!(body, "", "{auth:?}");
            assert_eq!(calls.next.load(Ordering::SeqCst), 1, "{auth:?}");
        }
    }

    #[tokio::test]
    async fn require_token_runs_next_on_success() {
        let calls = Calls::default();
        let app = with_calls(require_token(base(), KEY, "Custom", failure), &calls);

        let (status, body) = call(app, Some("Custom 123")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "123");
        assert_eq!(calls.next.load(Ordering::SeqCst), 1);
        assert_eq!(calls.failure.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn require_token_runs_failure_handler_instead_of_next() {
        for auth in [None, Some("foo"), Some("SomeCustomTokenType 123")] {
            let calls = Calls::default();
            let app = with_calls(require_token(base(), KEY, "Custom", failure), &calls);

            let (status, body) = call(app, auth).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{auth:?}");
            assert_eq!(body, ERROR_TEXT, "{auth:?}");
            assert_eq!(calls.next.load(Ordering::SeqCst), 0, "{auth:?}");
            assert_eq!(calls.failure.load(Ordering::SeqCst), 1, "{auth:?}");
        }
    }

    #[tokio::test]
    async fn fixed_failure_is_empty_unauthorized() {
        let calls = Calls::default();
        let app = with_calls(require_token_or_unauthorized(base(), KEY, "Custom"), &calls);

        let (status, body) = call(app, Some("foo")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_empty());
        assert_eq!(calls.next.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn nested_layers_keep_earlier_bindings() {
        const OUTER: TokenKey = TokenKey::Named("outer");

        async fn both(TokenCtxExtractor(ctx): TokenCtxExtractor) -> String {
            format!(
                "{}|{}",
                ctx.get(OUTER).unwrap_or_default(),
                ctx.get(KEY).unwrap_or_default()
            )
        }

        let app = Router::new().route("/", get(both));
        let app = add_token(app, KEY, "Custom");
        let app = add_token(app, OUTER, "Custom");

        let (status, body) = call(app, Some("Custom abc")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "abc|abc");
    }

    #[tokio::test]
    async fn failed_layer_leaves_context_untouched() {
        async fn keys(TokenCtxExtractor(ctx): TokenCtxExtractor) -> String {
            format!(
                "{}|{}",
                ctx.get(TokenKey::AccessToken).is_some(),
                ctx.get(TokenKey::RefreshToken).is_some()
            )
        }

        let app = Router::new().route("/", get(keys));
        let app = add_token(app, TokenKey::RefreshToken, "Basic");
        let app = add_token(app, TokenKey::AccessToken, "Bearer");

        let (_, body) = call(app, Some("Bearer abc")).await;

        assert_eq!(body, "true|false");
    }

    #[test]
    fn router_without_routes_is_returned_unchanged() {
        let router = require_token_or_unauthorized(Router::<()>::new(), KEY, "Custom");
        assert!(!router.has_routes());

        let router = add_token(Router::<()>::new(), KEY, "Custom");
        assert!(!router.has_routes());
    }

    #[tokio::test]
    async fn routes_added_after_the_layer_are_not_guarded() {
        let guarded = require_token_or_unauthorized(
            Router::new().route("/a", get(|| async { "a" })),
            KEY,
            "Custom",
        );
        let app = guarded.route("/b", get(|| async { "b" }));

        let a = app
            .clone()
            .oneshot(axum::http::Request::builder().uri("/a").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let b = app
            .oneshot(axum::http::Request::builder().uri("/b").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(a.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(b.status(), StatusCode::OK);
    }
}
