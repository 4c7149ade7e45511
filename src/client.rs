//! GitHub events API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ActivityError;
use crate::events::{records_from_json, ActivityRecord};

const USER_AGENT: &str = concat!("github-activity/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Anything that can produce a user's activity records.
#[async_trait]
pub trait ActivitySource {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityRecord>, ActivityError>;
}

/// Fetches public events from the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: Url,
}

impl GithubClient {
    /// Build a client from the app configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ActivityError> {
        let api_base = parse_api_base(&config.api_base)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs.filter(|s| *s > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_base,
        })
    }

    /// The events URL for a user: `{api_base}/users/{username}/events`.
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.api_base.clone();
        // parse_api_base rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["users", username, "events"]);
        }
        url
    }
}

#[async_trait]
impl ActivitySource for GithubClient {
    async fn fetch_activity(&self, username: &str) -> Result<Vec<ActivityRecord>, ActivityError> {
        let url = self.events_url(username);
        debug!(%url, "Fetching user activity");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, username, "Events request was not successful");
            return Err(ActivityError::UserNotFound {
                username: username.to_string(),
                status,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let records = records_from_json(body);
        debug!(count = records.len(), "Fetched activity records");

        Ok(records)
    }
}

fn parse_api_base(raw: &str) -> Result<Url, ActivityError> {
    let invalid = |reason: String| ActivityError::InvalidApiBase {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}
