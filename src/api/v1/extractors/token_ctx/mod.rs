/*!
 * Token context extractor
 *
 * Responsibility:
 * - Hand the tokens bound by the auth middleware (TokenCtx) to handlers
 * - axum specifics live in core, the context type lives in types
 *
 * Public API:
 * - TokenKey
 * - TokenCtx
 * - TokenCtxExtractor
 */

mod core;
mod types;

pub use self::core::TokenCtxExtractor;
pub use types::{TokenCtx, TokenKey};
