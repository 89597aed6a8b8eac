use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

/// Riot authentication endpoints
pub mod endpoints {
    pub const AUTH_BASE: &str = "https://auth.riotgames.com";
    pub const ENTITLEMENTS_BASE: &str = "https://entitlements.auth.riotgames.com";

    pub const AUTHORIZE: &str = "/authorize";
    pub const MULTIFACTOR: &str = "/api/v1/authorization";
    pub const ENTITLEMENTS: &str = "/api/token/v1";
    pub const USER_INFO: &str = "/userinfo";
}

/// Client parameters of the official web client
pub mod official {
    pub const CLIENT_ID: &str = "play-valorant-web-prod";
    pub const CLIENT_SECRET: &str = "RiotClientSecret";
    pub const REDIRECT_URI: &str = "https://playvalorant.com/opt_in";
    pub const NONCE: &str = "1";
    pub const RESPONSE_TYPE: &str = "token id_token";
    pub const SCOPE: &str = "account openid";
    pub const USER_AGENT: &str =
        "RiotClient/58.0.0.6400294126 (Windows; 10; Professional (Build 19041))";
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            request: Duration::from_secs(10),
        }
    }
}

/// Configuration for VaAuthClient
#[derive(Debug, Clone)]
pub struct VaAuthConfig {
    /// Base URL of the identity provider (authorize, multifactor, userinfo)
    pub auth_base: Url,

    /// Base URL of the entitlements service
    pub entitlements_base: Url,

    /// OAuth client ID sent on authorize and entitlement calls
    pub client_id: String,

    pub client_secret: String,

    /// Redirect target of the implicit grant; never followed
    pub redirect_uri: String,

    pub nonce: String,

    /// HTTP client timeouts
    pub http_timeouts: HttpTimeouts,

    /// Custom user agent (optional)
    pub user_agent: Option<String>,
}

impl VaAuthConfig {
    /// Config for the official web client against the production endpoints
    pub fn official() -> Self {
        Self {
            auth_base: Url::parse(endpoints::AUTH_BASE).expect("valid auth URL"),
            entitlements_base: Url::parse(endpoints::ENTITLEMENTS_BASE)
                .expect("valid entitlements URL"),
            client_id: official::CLIENT_ID.to_string(),
            client_secret: official::CLIENT_SECRET.to_string(),
            redirect_uri: official::REDIRECT_URI.to_string(),
            nonce: official::NONCE.to_string(),
            http_timeouts: HttpTimeouts::default(),
            user_agent: Some(official::USER_AGENT.to_string()),
        }
    }

    /// Point identity provider calls at another host
    pub fn with_auth_base(mut self, url: Url) -> Self {
        self.auth_base = url;
        self
    }

    /// Point entitlement calls at another host
    pub fn with_entitlements_base(mut self, url: Url) -> Self {
        self.entitlements_base = url;
        self
    }

    pub(crate) fn auth_url(&self, path: &str) -> crate::Result<Url> {
        Ok(self.auth_base.join(path)?)
    }

    pub(crate) fn entitlements_url(&self) -> crate::Result<Url> {
        Ok(self.entitlements_base.join(endpoints::ENTITLEMENTS)?)
    }
}

impl Default for VaAuthConfig {
    fn default() -> Self {
        Self::official()
    }
}

/// Username and password for a credential login
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Zeroizing<String>,
    /// Ask the provider for a long-lived cookie jar
    pub remember: bool,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            remember: true,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_urls() {
        let config = VaAuthConfig::official();
        assert_eq!(
            config.auth_url(endpoints::AUTHORIZE).unwrap().as_str(),
            "https://auth.riotgames.com/authorize"
        );
        assert_eq!(
            config.entitlements_url().unwrap().as_str(),
            "https://entitlements.auth.riotgames.com/api/token/v1"
        );
    }

    #[test]
    fn test_base_override() {
        let config = VaAuthConfig::default()
            .with_auth_base(Url::parse("http://127.0.0.1:4000").unwrap());
        assert_eq!(
            config.auth_url(endpoints::MULTIFACTOR).unwrap().as_str(),
            "http://127.0.0.1:4000/api/v1/authorization"
        );
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("player", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("player"));
        assert!(!debug.contains("hunter2"));
        assert!(creds.remember);
    }
}
