use axum::http::{HeaderMap, HeaderValue};

use super::{ACCESS_TOKEN_TYPE, HEADER_NAME, REFRESH_TOKEN_TYPE, TokenError};

/// Appends `Authorization: <token_type> <token>`.
///
/// Existing values are kept, so a previously set header still wins on read.
pub fn add_token_header(
    headers: &mut HeaderMap,
    token_type: &str,
    token: &str,
) -> Result<(), TokenError> {
    let value = HeaderValue::try_from(format!("{token_type} {token}"))
        .map_err(|_| TokenError::WrongFormat)?;

    headers.append(HEADER_NAME, value);
    Ok(())
}

pub fn add_access_token_header(headers: &mut HeaderMap, token: &str) -> Result<(), TokenError> {
    add_token_header(headers, ACCESS_TOKEN_TYPE, token)
}

pub fn add_refresh_token_header(headers: &mut HeaderMap, token: &str) -> Result<(), TokenError> {
    add_token_header(headers, REFRESH_TOKEN_TYPE, token)
}
