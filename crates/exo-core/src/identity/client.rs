//! REST client for the identity provider's credential endpoints.

use anyhow::{Context, Result, anyhow};

use super::Identity;
use super::types::{ApiErrorBody, CredentialRequest, CredentialResponse, describe_error_code};
use crate::config::IdentityProviderConfig;

/// Default base URL for the identity provider.
pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

const SIGN_UP_PATH: &str = "/v1/accounts:signUp";
const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

/// Configuration for the identity client.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// The project API key sent as a query parameter.
    pub api_key: String,
    pub base_url: String,
}

impl IdentityConfig {
    /// Creates a new config from the config file and environment.
    ///
    /// API key resolution order:
    /// 1. `api_key` in `[identity]` (config file)
    /// 2. `EXO_API_KEY` environment variable
    ///
    /// Base URL resolution order:
    /// 1. `EXO_AUTH_BASE_URL` env var (if set and non-empty)
    /// 2. `base_url` in `[identity]` (if set and non-empty)
    /// 3. Default: `https://identitytoolkit.googleapis.com`
    pub fn from_env(config: &IdentityProviderConfig) -> Result<Self> {
        let api_key = resolve_api_key(config.api_key.as_deref())?;
        let base_url = resolve_base_url(config.base_url.as_deref())?;

        Ok(Self { api_key, base_url })
    }
}

fn resolve_api_key(config_api_key: Option<&str>) -> Result<String> {
    // Try config value first
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    // Fall back to env var
    std::env::var("EXO_API_KEY")
        .context("No API key available. Set EXO_API_KEY or api_key in [identity].")
}

fn resolve_base_url(config_base_url: Option<&str>) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var("EXO_AUTH_BASE_URL") {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Default
    Ok(DEFAULT_BASE_URL.to_string())
}

fn validate_url(raw: &str) -> Result<()> {
    url::Url::parse(raw)
        .with_context(|| format!("Invalid identity provider base URL: {raw}"))
        .map(|_| ())
}

/// Identity provider API client.
pub struct IdentityClient {
    config: IdentityConfig,
    http: reqwest::Client,
}

impl IdentityClient {
    /// Creates a new identity client with the given configuration.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the production API.
    /// - At runtime, panics if `EXO_BLOCK_REAL_API=1` and `base_url` is the production API.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Use `EXO_AUTH_BASE_URL` env var or config to point to a mock server.
    pub fn new(config: IdentityConfig) -> Self {
        // Compile-time guard for unit tests
        #[cfg(test)]
        if config.base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production identity provider!\n\
                 Set EXO_AUTH_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        // Runtime guard for integration tests (set EXO_BLOCK_REAL_API=1 in test harness)
        #[cfg(not(test))]
        if std::env::var("EXO_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && config.base_url == DEFAULT_BASE_URL
        {
            panic!(
                "EXO_BLOCK_REAL_API=1 but trying to use the production identity provider!\n\
                 Set EXO_AUTH_BASE_URL to a mock server.\n\
                 Found base_url: {}",
                config.base_url
            );
        }

        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a new account from an email and password.
    ///
    /// The account-holder's display name never reaches the provider; it is
    /// local to the app.
    pub async fn create_account(&self, email: &str, password: &str) -> Result<Identity> {
        self.post_credentials(SIGN_UP_PATH, email, password).await
    }

    /// Signs in with an existing email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        self.post_credentials(SIGN_IN_PATH, email, password).await
    }

    async fn post_credentials(&self, path: &str, email: &str, password: &str) -> Result<Identity> {
        let request = CredentialRequest {
            email,
            password,
            return_secure_token: true,
        };

        let url = format!("{}{}?key={}", self.config.base_url, path, self.config.api_key);
        tracing::debug!(%path, %email, "calling identity provider");

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => describe_error_code(&parsed.error.message),
                Err(_) => format!("identity provider returned HTTP {}", status.as_u16()),
            };
            tracing::debug!(%path, status = status.as_u16(), %description, "identity call failed");
            return Err(anyhow!(description));
        }

        let parsed: CredentialResponse = response
            .json()
            .await
            .context("Failed to parse identity provider response")?;

        Ok(Identity {
            uid: parsed.local_id,
            email: parsed.email.unwrap_or_else(|| email.to_string()),
        })
    }
}
