use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use va_auth::{VaAuthClient, VaAuthConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cookies = std::env::var("VALID_COOKIES").context("VALID_COOKIES is not set")?;
    let client = VaAuthClient::new(VaAuthConfig::official())?;

    let session = match client.re_authenticate(&cookies).await {
        Ok(session) => session,
        Err(e) => {
            error!(kind = ?e.kind(), "Cookie authentication failed: {}", e);
            return Err(e.into());
        }
    };

    if session.is_valid() {
        info!("User is authenticated");
    } else {
        info!("User is not authenticated");
    }

    let user = client.user_info(&session).await?;
    info!(puuid = %user.puuid, tag = %user.tag_name, country = %user.country, "Fetched user info");

    let refreshed = client.refresh_session(&session).await?;
    info!(
        expire_at = ?refreshed.expire_at,
        "Session refreshed"
    );

    Ok(())
}
