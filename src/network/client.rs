//! HTTP client wrapper - typed calls against the robot API

use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::models::{ControlCommand, RobotState};

/// Thin client over the robot's three endpoints.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Clone)]
pub struct RobotClient {
    http: reqwest::Client,
    base_url: String,
}

impl RobotClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(8))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let base_url = base_url.into();
        RobotClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `/state` and decode the snapshot
    pub async fn fetch_state(&self) -> Result<RobotState> {
        let response = self
            .http
            .get(self.url("/state"))
            .send()
            .await
            .context("GET /state failed")?;
        if !response.status().is_success() {
            return Err(anyhow!("/state returned {}", response.status()));
        }
        response.json::<RobotState>().await.context("decoding /state body")
    }

    /// GET `/logs` as a plain newline-delimited text blob
    pub async fn fetch_logs(&self) -> Result<String> {
        let response = self
            .http
            .get(self.url("/logs"))
            .send()
            .await
            .context("GET /logs failed")?;
        if !response.status().is_success() {
            return Err(anyhow!("/logs returned {}", response.status()));
        }
        response.text().await.context("reading /logs body")
    }

    /// POST a control command to `/control`. The response body is not consumed;
    /// any 2xx counts as acceptance.
    pub async fn send_control(&self, command: &ControlCommand) -> Result<()> {
        let response = self
            .http
            .post(self.url("/control"))
            .json(&command.to_request())
            .send()
            .await
            .context("POST /control failed")?;
        if !response.status().is_success() {
            return Err(anyhow!("/control returned {}", response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = RobotClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.url("/state"), "http://127.0.0.1:8000/state");
        assert_eq!(client.url("logs"), "http://127.0.0.1:8000/logs");
    }
}
