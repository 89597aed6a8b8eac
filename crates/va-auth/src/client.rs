use std::sync::Arc;

use chrono::Utc;
use reqwest::Method;
use reqwest::header::{LOCATION, SET_COOKIE};
use tracing::{debug, info, instrument, warn};

use crate::config::{Credentials, VaAuthConfig, endpoints, official};
use crate::cookies::{self, CookiePair};
use crate::errors::{Result, TokenField, VaAuthError};
use crate::models::*;
use crate::session::Session;
use crate::token;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// Session lifecycle client for Riot authentication
///
/// Holds configuration and a transport only. Every call builds its result
/// from its arguments, so one client can serve any number of sessions
/// concurrently.
#[derive(Debug, Clone)]
pub struct VaAuthClient {
    config: VaAuthConfig,
    transport: Arc<dyn Transport>,
}

impl VaAuthClient {
    /// Create a new authentication client over reqwest
    pub fn new(config: VaAuthConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client issuing its calls through `transport`
    pub fn with_transport(config: VaAuthConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Log in with username and password
    ///
    /// Fails with [`VaAuthError::MultifactorRequired`] when the account needs a
    /// code; pass the carried cookies and the code to
    /// [`handle_multifactor`](Self::handle_multifactor).
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(VaAuthError::InvalidInput(
                "username and password are required".to_string(),
            ));
        }

        let cookies: Vec<CookiePair> = Vec::new();
        let body = LoginRequest {
            kind: "auth",
            username: &credentials.username,
            password: credentials.password.as_str(),
            remember: credentials.remember,
        };

        debug!("Logging in with credentials");
        let request = HttpRequest::new(Method::POST, self.config.auth_url(endpoints::AUTHORIZE)?)
            .cookies(&cookies::encode(&cookies))
            .json(&body)?;
        let response = self.transport.send(request).await?.require_success()?;

        let issued = cookies::from_set_cookie(response.header_all(SET_COOKIE.as_str()));
        let auth: AuthResponse = response.json()?;

        if let Some(error) = auth.error_message() {
            return Err(VaAuthError::Provider(error.to_string()));
        }

        if auth.is_multifactor() {
            info!("Multifactor authentication required");
            return Err(VaAuthError::MultifactorRequired {
                cookies: issued,
                challenge: auth.multifactor,
            });
        }

        let access_token = auth
            .session_cookie
            .filter(|t| !t.is_empty())
            .ok_or_else(|| VaAuthError::InvalidResponse("missing session-cookie".to_string()))?;

        let entitlements_token = self.exchange_entitlements(&access_token).await?;

        Ok(Session {
            access_token,
            id_token: String::new(),
            entitlements_token,
            expire_at: None,
            cookies: Some(cookies),
        })
    }

    /// Mint a fresh session from a `Cookie` header value
    #[instrument(skip(self, cookie_header))]
    pub async fn re_authenticate(&self, cookie_header: &str) -> Result<Session> {
        if cookie_header.trim().is_empty() {
            return Err(VaAuthError::InvalidInput("cookie string is empty".to_string()));
        }

        let request = HttpRequest::new(Method::GET, self.config.auth_url(endpoints::AUTHORIZE)?)
            .cookies(cookie_header)
            .query("client_id", &self.config.client_id)
            .query("nonce", &self.config.nonce)
            .query("redirect_uri", &self.config.redirect_uri)
            .query("response_type", official::RESPONSE_TYPE)
            .query("scope", official::SCOPE)
            .no_redirects();

        debug!("Requesting implicit grant with cookies");
        let response = self.transport.send(request).await?.error_for_status()?;

        let location = response.header(LOCATION.as_str()).unwrap_or_default();
        if location.is_empty() {
            warn!(status = %response.status, "Authorize response carried no redirect");
        }

        let tokens = token::parse_redirect(location);
        let access_token = tokens
            .access_token
            .ok_or(VaAuthError::TokenExtraction(TokenField::AccessToken))?;
        let id_token = tokens
            .id_token
            .ok_or(VaAuthError::TokenExtraction(TokenField::IdToken))?;
        let expire_at = tokens
            .expire_at
            .ok_or(VaAuthError::TokenExtraction(TokenField::ExpireAt))?;

        let entitlements_token = self.exchange_entitlements(&access_token).await?;

        Ok(Session {
            access_token,
            id_token,
            entitlements_token,
            expire_at: Some(expire_at),
            cookies: Some(cookies::decode(cookie_header)),
        })
    }

    /// Complete a credential login that answered with a multifactor challenge
    #[instrument(skip(self, cookies, code))]
    pub async fn handle_multifactor(&self, cookies: &[CookiePair], code: &str) -> Result<Session> {
        if cookies.is_empty() {
            return Err(VaAuthError::InvalidInput(
                "No active session found. Please authenticate first.".to_string(),
            ));
        }
        if code.trim().is_empty() {
            return Err(VaAuthError::InvalidInput(
                "multifactor code is empty".to_string(),
            ));
        }

        let body = MultifactorRequest {
            kind: "multifactor",
            code,
            remember_device: true,
        };

        debug!("Submitting multifactor code");
        let request =
            HttpRequest::new(Method::PUT, self.config.auth_url(endpoints::MULTIFACTOR)?)
                .cookies(&cookies::encode(cookies))
                .json(&body)?;
        let response = self.transport.send(request).await?.require_success()?;
        let auth: AuthResponse = response.json()?;

        if let Some(error) = auth.error_message() {
            return Err(VaAuthError::Provider(error.to_string()));
        }

        let access_token = auth
            .session_cookie
            .filter(|t| !t.is_empty())
            .ok_or_else(|| VaAuthError::InvalidResponse("missing session-cookie".to_string()))?;

        let entitlements_token = self.exchange_entitlements(&access_token).await?;

        Ok(Session {
            access_token,
            id_token: String::new(),
            entitlements_token,
            expire_at: None,
            cookies: Some(cookies.to_vec()),
        })
    }

    /// Bring a session up to date
    ///
    /// - tokens not yet expired: only the entitlements token is renewed
    /// - expired or unknown expiry with a cookie jar: full re-authentication
    /// - neither: the session is returned unchanged
    ///
    /// ```
    /// use va_auth::{Session, VaAuthClient, VaAuthConfig};
    ///
    /// # tokio_test::block_on(async {
    /// let client = VaAuthClient::new(VaAuthConfig::official()).unwrap();
    /// let stale = Session {
    ///     access_token: "at".to_string(),
    ///     id_token: String::new(),
    ///     entitlements_token: "et".to_string(),
    ///     expire_at: None,
    ///     cookies: None,
    /// };
    /// assert_eq!(client.refresh_session(&stale).await.unwrap(), stale);
    /// # });
    /// ```
    #[instrument(skip(self, session))]
    pub async fn refresh_session(&self, session: &Session) -> Result<Session> {
        if session.tokens_live_at(Utc::now()) {
            debug!("Token is still valid, only refreshing entitlements token");
            let entitlements_token = self.exchange_entitlements(&session.access_token).await?;

            // id_token is carried over, its lifetime follows the access token
            return Ok(Session {
                entitlements_token,
                ..session.clone()
            });
        }

        if let Some(jar) = session.reusable_cookies() {
            debug!("Token is expired, re-authenticating with cookies");
            return self.re_authenticate(&cookies::encode(jar)).await;
        }

        warn!("Session has no expiry and no cookies, cannot refresh");
        Ok(session.clone())
    }

    /// Exchange an access token for an entitlements token
    #[instrument(skip(self, access_token))]
    pub async fn exchange_entitlements(&self, access_token: &str) -> Result<String> {
        let body = EntitlementsRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            grant_type: "client_credentials",
        };

        debug!("Fetching entitlements token");
        let request = HttpRequest::new(Method::POST, self.config.entitlements_url()?)
            .bearer(access_token)
            .json(&body)?;
        let response = self.transport.send(request).await?.require_success()?;
        let entitlements: EntitlementsResponse = response.json()?;

        if entitlements.entitlements_token.is_empty() {
            return Err(VaAuthError::TokenExtraction(TokenField::EntitlementsToken));
        }

        Ok(entitlements.entitlements_token)
    }

    /// Fetch the account summary of the session's player
    #[instrument(skip(self, session))]
    pub async fn user_info(&self, session: &Session) -> Result<UserInfo> {
        debug!("Fetching user info");
        let request = HttpRequest::new(Method::GET, self.config.auth_url(endpoints::USER_INFO)?)
            .bearer(&session.access_token);
        let response = self.transport.send(request).await?.require_success()?;
        let raw: UserInfoResponse = response.json()?;
        Ok(raw.into())
    }
}
