//! Riot cookie-based session management
//!
//! This crate obtains and renews the tokens needed to call the Valorant game
//! APIs: an access token, an id token and an entitlements token.
//!
//! # Authentication Flow
//!
//! A session can be created three ways:
//!
//! 1. From an existing cookie jar (`ssid`, `tdid`, ...) via the implicit grant
//!    redirect of the `/authorize` endpoint
//! 2. From a username and password
//! 3. By completing a multifactor challenge raised by step 2
//!
//! Every path ends with an entitlement exchange. Refreshing picks the cheapest
//! route available: entitlements only while the access token is still live,
//! otherwise a full re-authentication from the cookie jar.
//!
//! # Example
//!
//! ```no_run
//! use va_auth::{VaAuthClient, VaAuthConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = VaAuthClient::new(VaAuthConfig::official())?;
//!
//!     let session = client.re_authenticate("ssid=...; tdid=...").await?;
//!     println!("valid: {}", session.is_valid());
//!
//!     // Later, before calling the game APIs
//!     let session = client.refresh_session(&session).await?;
//!     println!("entitlements: {}", session.entitlements_token);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Multifactor
//!
//! ```no_run
//! use va_auth::{Credentials, VaAuthClient, VaAuthConfig, VaAuthError};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VaAuthClient::new(VaAuthConfig::official())?;
//!
//! let session = match client.authenticate(&Credentials::new("player", "secret")).await {
//!     Ok(session) => session,
//!     Err(VaAuthError::MultifactorRequired { cookies, .. }) => {
//!         let code = "123456"; // From the user
//!         client.handle_multifactor(&cookies, code).await?
//!     }
//!     Err(e) => return Err(e.into()),
//! };
//! # let _ = session;
//! # Ok(())
//! # }
//! ```
//!
//! # Cookie Strings
//!
//! ```
//! use va_auth::cookies::{decode, encode};
//!
//! let jar = decode("ssid=abc==; tdid=xyz");
//! assert_eq!(jar[0].value, "abc==");
//! assert_eq!(encode(&jar), "ssid=abc==; tdid=xyz");
//! ```
//!
//! # Important Notes
//!
//! - Sessions are plain values; persisting them is up to the caller
//! - Tokens should be stored securely and never logged
//! - Sessions from a credential or multifactor login have no expiry and no
//!   reusable cookies, so `refresh_session` returns them unchanged

pub mod client;
pub mod config;
pub mod cookies;
pub mod errors;
pub mod models;
pub mod session;
pub mod token;
pub mod transport;

// Re-export main types
pub use client::VaAuthClient;
pub use config::{Credentials, HttpTimeouts, VaAuthConfig};
pub use cookies::CookiePair;
pub use errors::{ErrorKind, Result, TokenField, VaAuthError};
pub use models::{MultifactorInfo, UserInfo};
pub use session::Session;
pub use token::RedirectTokens;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
