use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::VaAuthConfig;
use crate::errors::{Result, VaAuthError};

const BODY_SNIPPET_LEN: usize = 200;

/// Outbound request handed to a [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// When false the transport must hand back 3xx responses untouched
    pub follow_redirects: bool,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            follow_redirects: true,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION.as_str(), format!("Bearer {}", token))
    }

    /// Attach a `Cookie` header unless the jar is empty
    pub fn cookies(self, cookie_header: &str) -> Self {
        if cookie_header.is_empty() {
            return self;
        }
        self.header(header::COOKIE.as_str(), cookie_header)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn no_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }

    /// Final URL with query parameters applied
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

/// Response returned by a [`Transport`], whatever its status
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First value of a header, if it is valid text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// All values of a repeated header such as `Set-Cookie`
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a 4xx/5xx response into [`VaAuthError::Http`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_client_error() || self.status.is_server_error() {
            return Err(self.into_http_error());
        }
        Ok(self)
    }

    /// Turn anything but 2xx into [`VaAuthError::Http`]
    pub fn require_success(self) -> Result<Self> {
        if !self.status.is_success() {
            return Err(self.into_http_error());
        }
        Ok(self)
    }

    fn into_http_error(self) -> VaAuthError {
        VaAuthError::Http {
            status: self.status,
            body_snippet: self.text().chars().take(BODY_SNIPPET_LEN).collect(),
        }
    }
}

/// HTTP collaborator the session engine issues its calls through
///
/// Implementations return every received response, including 3xx/4xx/5xx,
/// and reserve `Err` for failures where no response was obtained.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    /// Same settings with redirect following disabled
    http_no_redirect: Client,
}

impl ReqwestTransport {
    pub fn new(config: &VaAuthConfig) -> Result<Self> {
        Ok(Self {
            http: Self::builder(config).build()?,
            http_no_redirect: Self::builder(config)
                .redirect(redirect::Policy::none())
                .build()?,
        })
    }

    fn builder(config: &VaAuthConfig) -> reqwest::ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );

        Client::builder()
            .connect_timeout(config.http_timeouts.connect)
            .timeout(config.http_timeouts.request)
            .user_agent(config.user_agent.as_deref().unwrap_or("valauth"))
            .default_headers(headers)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = request.url.path()))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let client = if request.follow_redirects {
            &self.http
        } else {
            &self.http_no_redirect
        };

        let mut builder = client.request(request.method.clone(), request.full_url());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        debug!(%status, "Received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
