/*
 * Responsibility
 * - The (type, token) pair taken from the header
 * - Labels that tell access and refresh tokens apart
 *
 * Notes
 * - "Basic" as the refresh token label is a local convention, unrelated to RFC 6750
 */

use axum::http::header;

/// Header the token is read from.
pub const HEADER_NAME: header::HeaderName = header::AUTHORIZATION;

/// Declared type expected for access tokens.
pub const ACCESS_TOKEN_TYPE: &str = "Bearer";

/// Declared type expected for refresh tokens.
pub const REFRESH_TOKEN_TYPE: &str = "Basic";

/// A parsed `Authorization` value: the declared scheme and the opaque credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWithType {
    pub token_type: String,
    pub token: String,
}

impl TokenWithType {
    pub fn new(token_type: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            token: token.into(),
        }
    }

    pub fn into_token(self) -> String {
        self.token
    }
}
