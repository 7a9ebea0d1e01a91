//! Error types for wallet RPC operations.
//!
//! This module defines the error types surfaced by the wallet client and the
//! unit conversion helpers. Both are shown to the user through the error sink
//! without tearing down the current view.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for wallet backend operations.
///
/// Each variant maps to a distinct failure mode of the RPC boundary so the
/// UI can render a message that tells the user what actually went wrong.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Transport-level failure (connection refused, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a structured error.
    #[error("{kind} error: {reason}")]
    Api {
        /// Error category reported by the backend (e.g. "Wallet", "Api").
        kind: String,
        /// Human readable reason.
        reason: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Requested entity does not exist in the wallet.
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// The type of entity that was not found (e.g., "nft", "did").
        entity: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Invalid user input rejected before reaching the backend.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WalletError {
    /// Create a new backend error.
    #[must_use]
    pub fn api(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Api {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new not found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for the CLI entry points.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

/// Errors raised while converting between display and base units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input is not a plain non-negative decimal number.
    #[error("'{0}' is not a valid amount")]
    Invalid(String),

    /// The input has more fractional digits than the unit supports.
    #[error("'{input}' has more than {decimals} decimal places")]
    TooPrecise {
        /// The offending input.
        input: String,
        /// Number of decimal places the unit supports.
        decimals: u8,
    },

    /// The amount does not fit in 128 bits of base units.
    #[error("'{0}' is too large")]
    Overflow(String),
}

impl From<AmountError> for WalletError {
    fn from(err: AmountError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_display() {
        let api_err = WalletError::api("Wallet", "insufficient funds");
        assert_eq!(format!("{api_err}"), "Wallet error: insufficient funds");

        let not_found_err = WalletError::not_found("nft", "nft1abc");
        assert_eq!(format!("{not_found_err}"), "nft 'nft1abc' not found");

        let parse_err = WalletError::parse("missing field `offer`");
        assert_eq!(format!("{parse_err}"), "Parse error: missing field `offer`");
    }

    #[test]
    fn test_amount_error_converts_to_invalid_input() {
        let err: WalletError = AmountError::Invalid("abc".to_string()).into();
        match err {
            WalletError::InvalidInput(msg) => assert!(msg.contains("abc")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_too_precise_message_names_decimals() {
        let err = AmountError::TooPrecise {
            input: "1.2345".to_string(),
            decimals: 3,
        };
        assert_eq!(err.to_string(), "'1.2345' has more than 3 decimal places");
    }
}
