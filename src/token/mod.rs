/*!
 * Authorization header token extraction
 *
 * Responsibility:
 * - Read `Authorization: <type> <token>` and split it into (type, token)
 * - Compare the declared type with the expected one (no signature checks here)
 *
 * Public API:
 * - TokenWithType / TokenError
 * - *_from_headers
 * - add_*_header (for clients and tests)
 */

mod core;
mod error;
mod header;
mod types;

pub use self::core::{
    access_token_from_headers, read_auth_header, refresh_token_from_headers, split_auth_header,
    token_from_headers, token_with_type_from_headers,
};
pub use error::TokenError;
pub use header::{add_access_token_header, add_refresh_token_header, add_token_header};
pub use types::{ACCESS_TOKEN_TYPE, HEADER_NAME, REFRESH_TOKEN_TYPE, TokenWithType};
