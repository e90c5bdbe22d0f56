/*
 * Responsibility
 * - Authorization header -> TokenCtx middleware
 * - token: generic factory (any key / type, custom failure handler)
 * - access: fixed access / refresh entry points
 */
pub mod access;
pub mod token;

pub use access::{add_access_token, add_refresh_token, require_access_token, require_refresh_token};
pub use token::{add_token, require_token, require_token_or_unauthorized};
