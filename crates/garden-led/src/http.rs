//! HTTP notifier for the ESP LED controller.
//!
//! Requires the `http` feature. The controller accepts
//! `POST <endpoint>` with `{"start", "end", "color": {"r", "g", "b"}}` and
//! `POST <clear_endpoint>` with an empty body.

use crate::notifier::{LedConfig, LedError, LedNotifier, LedResult, SegmentCommand};
use crate::segment::LedSegment;
use async_trait::async_trait;
use garden_core::types::Rgb;
use std::time::Duration;

/// Notifier that talks to the controller over plain HTTP.
///
/// # Example
///
/// ```rust,ignore
/// use garden_led::{HttpLedNotifier, LedConfig, LedNotifier};
///
/// let notifier = HttpLedNotifier::new(LedConfig::default().enabled(true))?;
/// notifier.clear_all().await?;
/// ```
pub struct HttpLedNotifier {
    config: LedConfig,
    client: reqwest::Client,
}

impl HttpLedNotifier {
    pub fn new(config: LedConfig) -> LedResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedError::InvalidConfig(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn map_error(&self, e: reqwest::Error) -> LedError {
        if e.is_connect() {
            LedError::ConnectionFailed(format!(
                "Cannot reach LED controller at {}",
                self.config.base_url()
            ))
        } else if e.is_timeout() {
            LedError::Timeout(self.config.timeout_secs)
        } else {
            LedError::Request(e.to_string())
        }
    }

    async fn check(response: reqwest::Response) -> LedResult<()> {
        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(LedError::Device { status, body })
    }
}

#[async_trait]
impl LedNotifier for HttpLedNotifier {
    fn name(&self) -> &str {
        "http"
    }

    fn config(&self) -> &LedConfig {
        &self.config
    }

    async fn set_segment(&self, segment: LedSegment, color: Rgb) -> LedResult<()> {
        let command = SegmentCommand::new(segment, color);
        let response = self
            .client
            .post(self.config.segment_url())
            .json(&command)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        Self::check(response).await
    }

    async fn clear_all(&self) -> LedResult<()> {
        let response = self
            .client
            .post(self.config.clear_url())
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SegmentMap;
    use garden_core::evaluation::Status;
    use garden_core::types::Position;

    #[tokio::test]
    async fn test_unreachable_controller_reports_error() {
        // Port 9 on localhost is the discard port; nothing listens there.
        let config = LedConfig::default()
            .enabled(true)
            .with_host("127.0.0.1", 9);
        let notifier = HttpLedNotifier::new(config).unwrap();

        let map = SegmentMap::new(6, 6, 2);
        let result = notifier
            .notify(&map, Position::new(0, 0), Status::Happy)
            .await;
        assert!(result.is_err());
    }
}
