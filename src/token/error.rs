use thiserror::Error;

/// Why a token could not be taken from the request headers.
///
/// Checked in declaration order; the first failure ends the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("No auth header found")]
    NoAuthHeaderFound,

    #[error("Wrong format of auth header")]
    WrongFormat,

    #[error("Unsupported auth type: {actual}. I accept only {wanted}")]
    WrongTokenType { actual: String, wanted: String },
}

impl TokenError {
    pub fn wrong_token_type(actual: impl Into<String>, wanted: impl Into<String>) -> Self {
        Self::WrongTokenType {
            actual: actual.into(),
            wanted: wanted.into(),
        }
    }
}
