use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Tokens carried in the fragment of an implicit-grant redirect
///
/// Every field is optional: a missing, empty or unparsable value leaves the
/// field unset instead of failing, so callers check each field they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTokens {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl RedirectTokens {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.id_token.is_none() && self.expire_at.is_none()
    }
}

/// Parse the tokens out of a redirect `Location` such as
/// `https://playvalorant.com/opt_in#access_token=...&id_token=...&expires_in=3600`
pub fn parse_redirect(redirect_url: &str) -> RedirectTokens {
    parse_redirect_at(redirect_url, Utc::now())
}

/// Same as [`parse_redirect`], with `expires_in` counted from `now`
pub fn parse_redirect_at(redirect_url: &str, now: DateTime<Utc>) -> RedirectTokens {
    let Some((_, fragment)) = redirect_url.split_once('#') else {
        debug!("Redirect URL has no fragment");
        return RedirectTokens::default();
    };

    let pairs: Vec<_> = url::form_urlencoded::parse(fragment.as_bytes()).collect();
    // First occurrence of a key wins; an empty first value means absent
    let first = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| &**value)
            .filter(|value| !value.is_empty())
    };

    RedirectTokens {
        access_token: first("access_token").map(str::to_string),
        id_token: first("id_token").map(str::to_string),
        expire_at: first("expires_in")
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl)),
    }
}
