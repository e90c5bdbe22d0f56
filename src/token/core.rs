use axum::http::HeaderMap;

use super::{ACCESS_TOKEN_TYPE, HEADER_NAME, REFRESH_TOKEN_TYPE, TokenError, TokenWithType};

/// Returns the first `Authorization` value. Further values for the same name are ignored.
pub fn read_auth_header(headers: &HeaderMap) -> Result<&str, TokenError> {
    let value = headers
        .get(HEADER_NAME)
        .ok_or(TokenError::NoAuthHeaderFound)?;

    // Present but not visible ASCII: found, just not something we can split.
    value.to_str().map_err(|_| TokenError::WrongFormat)
}

/// Splits `"<type> <token>"` on every single space.
///
/// Exactly two shards are accepted, so a second space anywhere (including a
/// doubled separator) is a format error.
pub fn split_auth_header(value: &str) -> Result<TokenWithType, TokenError> {
    let mut shards = value.split(' ');

    match (shards.next(), shards.next(), shards.next()) {
        (Some(token_type), Some(token), None) => Ok(TokenWithType::new(token_type, token)),
        _ => Err(TokenError::WrongFormat),
    }
}

pub fn token_with_type_from_headers(headers: &HeaderMap) -> Result<TokenWithType, TokenError> {
    let value = read_auth_header(headers)?;
    split_auth_header(value)
}

/// Extracts the token value, provided the declared type is exactly `wanted_type`.
pub fn token_from_headers(headers: &HeaderMap, wanted_type: &str) -> Result<String, TokenError> {
    let token_with_type = token_with_type_from_headers(headers)?;

    if token_with_type.token_type != wanted_type {
        return Err(TokenError::wrong_token_type(
            token_with_type.token_type,
            wanted_type,
        ));
    }

    Ok(token_with_type.into_token())
}

pub fn access_token_from_headers(headers: &HeaderMap) -> Result<String, TokenError> {
    token_from_headers(headers, ACCESS_TOKEN_TYPE)
}

pub fn refresh_token_from_headers(headers: &HeaderMap) -> Result<String, TokenError> {
    token_from_headers(headers, REFRESH_TOKEN_TYPE)
}
