use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    error::{KkboxError, Result},
    types::AccessToken,
};

/// Client-credentials token provider.
///
/// KKBOX Open API tokens are application tokens: there is no user consent
/// step and no refresh token, a new token is simply requested again once the
/// old one expires.
#[derive(Debug, Clone)]
pub struct Auth {
    client_id: String,
    client_secret: String,
    token_url: String,
}

impl Auth {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: config::kkbox_token_url(),
        }
    }

    /// Builds a provider from `KKBOX_CLIENT_ID` / `KKBOX_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            config::kkbox_client_id()?,
            config::kkbox_client_secret()?,
        ))
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Exchanges the client credentials for an access token.
    ///
    /// # Errors
    ///
    /// - [`KkboxError::Transport`] when the token endpoint cannot be reached
    /// - [`KkboxError::Auth`] on a non-2xx answer or a body without `access_token`
    pub async fn fetch_access_token(&self) -> Result<AccessToken> {
        log::debug!("requesting access token from {}", self.token_url);

        let res = Client::new()
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;
        if !(200..300).contains(&status) {
            log::warn!("token endpoint answered with status {}", status);
            return Err(KkboxError::Auth { status, body });
        }

        let mut token: AccessToken =
            serde_json::from_str(&body).map_err(|_| KkboxError::Auth {
                status,
                body: body.clone(),
            })?;
        if token.access_token.is_empty() {
            return Err(KkboxError::Auth { status, body });
        }

        token.obtained_at = Utc::now().timestamp() as u64;
        log::info!("obtained access token valid for {}s", token.expires_in);
        Ok(token)
    }
}
