/*
 * Responsibility
 * - Echo the bound token back as the body (empty when none was bound)
 * - Lets a client check which token the middleware accepted
 */
use crate::api::v1::extractors::{TokenCtxExtractor, TokenKey};

pub async fn access_token(TokenCtxExtractor(ctx): TokenCtxExtractor) -> String {
    ctx.get(TokenKey::AccessToken).unwrap_or_default().to_owned()
}

pub async fn refresh_token(TokenCtxExtractor(ctx): TokenCtxExtractor) -> String {
    ctx.get(TokenKey::RefreshToken).unwrap_or_default().to_owned()
}
