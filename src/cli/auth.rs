use crate::{error, info, kkbox::auth::Auth, management::TokenManager, success};

/// Requests an access token with the configured client credentials and
/// caches it. Without `force` an unexpired cached token is kept.
pub async fn auth(force: bool) {
    let auth = match Auth::from_env() {
        Ok(auth) => auth,
        Err(e) => error!("{}. Add it to the environment or the .env file.", e),
    };

    if !force {
        if let Ok(mgr) = TokenManager::load().await {
            if !mgr.is_expired() {
                info!("Cached access token is still valid. Use --force to replace it.");
                return;
            }
        }
    }

    let pb = super::spinner("Requesting access token...");
    let token = auth.fetch_access_token().await;
    pb.finish_and_clear();

    let token = match token {
        Ok(token) => token,
        Err(e) => error!("Authentication failed. Err: {}", e),
    };

    let expires_in = token.expires_in;
    if let Err(e) = TokenManager::new(token).persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!(
        "Authentication successful! Token valid for {} days.",
        expires_in / 86_400
    );
}
