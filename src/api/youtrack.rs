//! YouTrack REST client for resolving issue summaries.
//!
//! The report only stores task keys (e.g. `CB-123`); the full task name is
//! fetched from YouTrack per key. Authentication uses a permanent token,
//! taken from the `YOUTRACK_TOKEN` environment variable when set (a `.env`
//! file is honored) and falling back to the stored configuration.

use crate::libs::config::ConfigModule;
use crate::libs::error::{Result, TabelError};
use crate::libs::messages::Message;
use crate::libs::window::TaskNames;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the stored token.
pub const TOKEN_ENV: &str = "YOUTRACK_TOKEN";

const ISSUES_URL: &str = "api/issues";

#[derive(Deserialize, Debug)]
struct IssueSummary {
    summary: String,
}

#[derive(Debug)]
pub struct YouTrack {
    client: Client,
    config: YouTrackConfig,
    token: String,
}

impl YouTrack {
    pub fn new(config: &YouTrackConfig) -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| config.token.clone())
            .ok_or(TabelError::MissingToken)?;
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            token,
        })
    }

    /// Fetches the issue summary for a task key.
    ///
    /// Requests only the `summary` field to keep the payload minimal. Any
    /// transport or HTTP error is surfaced as-is; there is no retry.
    pub async fn fetch_summary(&self, key: &str) -> Result<String> {
        let url = format!("{}/{}/{}?fields=summary", self.config.api_url.trim_end_matches('/'), ISSUES_URL, key);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let res = self
            .client
            .get(&url)
            .headers(headers)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| TabelError::NameService {
                key: key.to_string(),
                source,
            })?;

        if !res.status().is_success() {
            return Err(TabelError::NameServiceStatus {
                key: key.to_string(),
                status: res.status(),
            });
        }

        let issue = res.json::<IssueSummary>().await.map_err(|source| TabelError::NameService {
            key: key.to_string(),
            source,
        })?;
        Ok(issue.summary)
    }
}

impl TaskNames for YouTrack {
    async fn full_name(&self, key: &str) -> Result<String> {
        self.fetch_summary(key).await
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct YouTrackConfig {
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl YouTrackConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "youtrack".to_string(),
            name: "YouTrack".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            token: None,
        });
        msg_print!(Message::ConfigModuleYouTrack);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptYouTrackUrl.to_string())
            .default(config.api_url)
            .interact_text()?;
        let token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptYouTrackToken.to_string())
            .default(config.token.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        Ok(Self {
            api_url,
            token: if token.is_empty() { None } else { Some(token) },
        })
    }
}
