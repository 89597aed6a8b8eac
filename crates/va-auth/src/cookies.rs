use serde::{Deserialize, Serialize};

const SEPARATOR: &str = "; ";

/// A single `name=value` cookie as sent in a `Cookie` header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
}

impl CookiePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn parse(segment: &str) -> Option<Self> {
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, value))
    }
}

/// Join cookies into a `Cookie` header value, preserving order
pub fn encode(cookies: &[CookiePair]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Split a `Cookie` header value back into pairs
///
/// Values keep any `=` after the first one. Segments without a name are dropped.
pub fn decode(raw: &str) -> Vec<CookiePair> {
    raw.split(SEPARATOR).filter_map(CookiePair::parse).collect()
}

/// Extract the `name=value` part of `Set-Cookie` header values
pub fn from_set_cookie<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<CookiePair> {
    headers
        .into_iter()
        .filter_map(|h| h.split(';').next())
        .filter_map(|pair| CookiePair::parse(pair.trim()))
        .collect()
}
