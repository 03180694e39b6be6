use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{
    config,
    error::Result,
    kkbox::auth::Auth,
    types::AccessToken,
};

/// Seconds before the real expiry at which a cached token is treated as stale.
const EXPIRY_MARGIN: u64 = 60;

/// Keeps the client-credentials token on disk between CLI runs.
pub struct TokenManager {
    token: AccessToken,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: AccessToken) -> Self {
        TokenManager {
            token,
            path: Self::token_path(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = async_fs::read_to_string(path).await?;
        let token: AccessToken = serde_json::from_str(&content)?;
        Ok(Self {
            token,
            path: path.to_path_buf(),
        })
    }

    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        log::debug!("token cached at {}", self.path.display());
        Ok(())
    }

    /// Loads the cached token, or runs the client-credentials exchange when
    /// there is none (or it cannot be read).
    pub async fn obtain(auth: &Auth) -> Result<Self> {
        match Self::load().await {
            Ok(mgr) => Ok(mgr),
            Err(e) => {
                log::debug!("no usable cached token: {}", e);
                let mgr = Self::new(auth.fetch_access_token().await?);
                mgr.persist().await?;
                Ok(mgr)
            }
        }
    }

    /// Returns an access token that is not about to expire, requesting and
    /// caching a new one when needed.
    pub async fn get_valid_token(&mut self, auth: &Auth) -> Result<String> {
        if self.is_expired() {
            log::info!("cached access token expired, requesting a new one");
            self.token = auth.fetch_access_token().await?;
            if let Err(e) = self.persist().await {
                log::warn!("failed to cache token: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at + self.token.expires_in;
        now + EXPIRY_MARGIN >= expires_at
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn current_token(&self) -> &AccessToken {
        &self.token
    }
}
