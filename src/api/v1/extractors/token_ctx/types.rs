/*
 * Responsibility
 * - The per-request context the middleware fills in and handlers read
 *
 * Notes
 * - Keys are enumerated so two layers cannot collide on a typo
 * - A layer never edits a context in place: it derives a new one and replaces it in extensions
 */

use std::collections::HashMap;

/// Identifies a token slot in [`TokenCtx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    AccessToken,
    RefreshToken,
    /// Caller-chosen slot for token types beyond access/refresh.
    Named(&'static str),
}

/// Tokens bound to the current request, keyed by [`TokenKey`].
///
/// A missing key means no token was supplied, or it did not pass the check of the layer that owns that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCtx {
    tokens: HashMap<TokenKey, String>,
}

impl TokenCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context with `key` bound to `token`; `self` is left as it was.
    pub fn with_token(&self, key: TokenKey, token: impl Into<String>) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.insert(key, token.into());
        Self { tokens }
    }

    pub fn get(&self, key: TokenKey) -> Option<&str> {
        self.tokens.get(&key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_token_derives_a_new_context() {
        let base = TokenCtx::new();
        let derived = base.with_token(TokenKey::AccessToken, "123");

        assert_eq!(base, TokenCtx::new());
        assert_eq!(derived.get(TokenKey::AccessToken), Some("123"));
        assert_eq!(derived.get(TokenKey::RefreshToken), None);
    }

    #[test]
    fn named_keys_do_not_collide_with_builtin_ones() {
        let ctx = TokenCtx::new()
            .with_token(TokenKey::AccessToken, "a")
            .with_token(TokenKey::Named("access_token"), "b");

        assert_eq!(ctx.get(TokenKey::AccessToken), Some("a"));
        assert_eq!(ctx.get(TokenKey::Named("access_token")), Some("b"));
    }
}
