//! Delivery of interest events to the remote collector.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{domain::ActionKind, protocol::EventPayload};
use tracing::debug;
use url::Url;

use crate::error::{ConfigError, TransportError};

/// Sends one payload and reports the HTTP status the collector answered with.
/// Every response, successful or not, is `Ok`; `Err` means no response.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn submit(
        &self,
        kind: ActionKind,
        payload: &EventPayload,
    ) -> Result<StatusCode, TransportError>;
}

pub struct HttpTransport {
    http: Client,
    collector_url: String,
}

impl HttpTransport {
    /// `request_timeout` of `None` keeps reqwest's default behavior.
    pub fn new(
        collector_url: &str,
        request_timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let parsed =
            Url::parse(collector_url).map_err(|source| ConfigError::InvalidCollectorUrl {
                url: collector_url.to_string(),
                source,
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(collector_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            collector_url: collector_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, kind: ActionKind) -> String {
        format!("{}{}", self.collector_url, kind.endpoint_path())
    }
}

#[async_trait]
impl EventTransport for HttpTransport {
    async fn submit(
        &self,
        kind: ActionKind,
        payload: &EventPayload,
    ) -> Result<StatusCode, TransportError> {
        let url = self.endpoint_url(kind);
        debug!(%url, course_id = %payload.course_id(), "posting event");
        match self.http.post(&url).json(payload).send().await {
            Ok(response) => Ok(response.status()),
            Err(err) if err.is_timeout() => Err(TransportError::Timeout { url }),
            Err(source) => Err(TransportError::Request { url, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_follow_action_kind() {
        let transport = HttpTransport::new("http://localhost:8081/", None).expect("transport");
        assert_eq!(
            transport.endpoint_url(ActionKind::Purchase),
            "http://localhost:8081/api/events/buy"
        );
        assert_eq!(
            transport.endpoint_url(ActionKind::AuditEnrollment),
            "http://localhost:8081/api/events/enroll"
        );
    }

    #[test]
    fn rejects_unusable_collector_urls() {
        assert!(matches!(
            HttpTransport::new("not a url", None),
            Err(ConfigError::InvalidCollectorUrl { .. })
        ));
        assert!(matches!(
            HttpTransport::new("ftp://collector.local", None),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
