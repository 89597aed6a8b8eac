use thiserror::Error;

use crate::cookies::CookiePair;
use crate::models::MultifactorInfo;

/// Riot session authentication error types
#[derive(Error, Debug)]
pub enum VaAuthError {
    #[error("Multifactor authentication required")]
    MultifactorRequired {
        /// Cookie jar issued with the challenge, needed to submit the code
        cookies: Vec<CookiePair>,
        /// Challenge details reported by the identity provider
        challenge: Option<MultifactorInfo>,
    },

    #[error("Failed to extract {0} from cookies")]
    TokenExtraction(TokenField),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body_snippet}")]
    Http {
        status: reqwest::StatusCode,
        body_snippet: String,
    },

    #[error("Authentication failed: {0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Token fields recovered from the authorize redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    AccessToken,
    IdToken,
    ExpireAt,
    EntitlementsToken,
}

impl std::fmt::Display for TokenField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::AccessToken => "access token",
            Self::IdToken => "id token",
            Self::ExpireAt => "expire at",
            Self::EntitlementsToken => "entitlements token",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a [`VaAuthError`] for callers that route on failure type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential login needs a code; resolve with `handle_multifactor`
    MultifactorRequired,
    /// Redirect or response lacked a required token
    TokenExtraction,
    /// Network failure, non-success status or undecodable body
    Transport,
    /// Identity provider rejected the request
    Provider,
    /// Caller supplied unusable input
    InvalidInput,
}

impl VaAuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MultifactorRequired { .. } => ErrorKind::MultifactorRequired,
            Self::TokenExtraction(_) => ErrorKind::TokenExtraction,
            Self::Provider(_) => ErrorKind::Provider,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Network(_)
            | Self::Http { .. }
            | Self::Serde(_)
            | Self::UrlParse(_)
            | Self::InvalidResponse(_)
            | Self::Transport(_) => ErrorKind::Transport,
        }
    }

    pub fn is_multifactor_required(&self) -> bool {
        self.kind() == ErrorKind::MultifactorRequired
    }
}

pub type Result<T> = std::result::Result<T, VaAuthError>;
