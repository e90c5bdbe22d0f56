/*
 * Responsibility
 * - Extractors handlers use to read what the middleware attached to the request
 */
mod token_ctx;

pub use token_ctx::{TokenCtx, TokenCtxExtractor, TokenKey};
