//! Error types shared across Snake Arena crates

use thiserror::Error;

/// Authentication error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingToken,

    #[error("Invalid authorization format")]
    InvalidScheme,

    #[error("User not found")]
    UnknownUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::InvalidToken("ExpiredSignature".to_string()).to_string(),
            "Invalid token: ExpiredSignature"
        );
    }
}
