use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cookies::CookiePair;

/// Tokens needed to call the game APIs, plus what is needed to renew them
///
/// A session is a plain value: refreshing produces a new one and the client
/// never keeps a copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    /// Empty when the session came from a credential or multifactor login
    pub id_token: String,
    pub entitlements_token: String,
    /// Expiry of the access and id tokens, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    /// Cookie jar able to mint a new session without credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<Vec<CookiePair>>,
}

impl Session {
    /// Whether the session can be used for API calls right now
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Whether the session is usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty()
            && !self.entitlements_token.is_empty()
            && self.tokens_live_at(now)
    }

    /// Access and id tokens are known to outlive `now`
    pub(crate) fn tokens_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at.is_some_and(|at| at > now)
    }

    /// Cookie jar, if it holds at least one cookie
    pub fn reusable_cookies(&self) -> Option<&[CookiePair]> {
        self.cookies.as_deref().filter(|c| !c.is_empty())
    }
}
