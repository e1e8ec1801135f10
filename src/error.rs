//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, the PokeAPI client and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a TTL that cannot drive the sweep timer
    #[error("Invalid cache TTL: {0:?} (must be greater than zero)")]
    InvalidTtl(Duration),

    /// Cache constructed outside a tokio runtime, so its sweep cannot be spawned
    #[error("No tokio runtime available to run the cache sweep: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// Network failure while talking to PokeAPI
    #[error("Error getting resource: {0}")]
    Request(#[from] reqwest::Error),

    /// PokeAPI answered with something other than 200 OK
    #[error("Response from {url} returned with status: {status}")]
    Status { url: String, status: StatusCode },

    /// Payload could not be decoded or re-encoded
    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("No {0} specified")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ttl_message() {
        let err = PokedexError::InvalidTtl(Duration::ZERO);
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_status_message_names_url() {
        let err = PokedexError::Status {
            url: "https://pokeapi.co/api/v2/abcd/invalid".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let msg = err.to_string();
        assert!(msg.contains("abcd/invalid"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_no_runtime_message() {
        let err: PokedexError = tokio::runtime::Handle::try_current().unwrap_err().into();
        assert!(err.to_string().starts_with("No tokio runtime available"));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument("area");
        assert_eq!(err.to_string(), "No area specified");
    }
}
