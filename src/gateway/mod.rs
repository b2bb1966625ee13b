use crate::error::AppError;
use crate::settings::ds::DashboardSettings;
use async_trait::async_trait;
use tracing::debug;

/// Delivers an aggregated settings snapshot to the management backend.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, settings: DashboardSettings) -> Result<(), AppError>;
}

pub const SETTINGS_PATH: &str = "/api/settings";

/// POSTs the snapshot as JSON to `<endpoint>/api/settings`. One request per
/// call, no retries; any 2xx counts as success and the response body is
/// ignored.
pub struct HttpGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpGateway {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", endpoint.trim_end_matches('/'), SETTINGS_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, settings: DashboardSettings) -> Result<(), AppError> {
        let response = self.client.post(&self.url).json(&settings).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%status, "backend accepted settings");
            Ok(())
        } else {
            Err(AppError::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_url_normalizes_trailing_slash() {
        assert_eq!(HttpGateway::new("http://backend:9000").url(), "http://backend:9000/api/settings");
        assert_eq!(HttpGateway::new("http://backend:9000/").url(), "http://backend:9000/api/settings");
    }
}
