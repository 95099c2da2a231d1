//! Core LED notifier trait.

use crate::segment::{status_color, LedSegment, SegmentMap};
use async_trait::async_trait;
use garden_core::evaluation::Status;
use garden_core::types::{Position, Rgb};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// LED-related errors.
#[derive(Debug, Error)]
pub enum LedError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Controller returned {status}: {body}")]
    Device { status: u16, body: String },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for LED operations.
pub type LedResult<T> = Result<T, LedError>;

/// Where and how to reach the LED controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    /// Mirroring is off unless explicitly enabled.
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    /// Path that accepts `{start, end, color}`.
    pub endpoint: String,
    /// Path that turns every LED off.
    pub clear_endpoint: String,
    pub timeout_secs: u64,
    pub leds_per_cell: usize,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "192.168.4.1".to_string(),
            port: 80,
            endpoint: "/api/led".to_string(),
            clear_endpoint: "/api/clear".to_string(),
            timeout_secs: 2,
            leds_per_cell: 2,
        }
    }
}

impl LedConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn segment_url(&self) -> String {
        format!("{}{}", self.base_url(), self.endpoint)
    }

    pub fn clear_url(&self) -> String {
        format!("{}{}", self.base_url(), self.clear_endpoint)
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }
}

/// Body posted to the controller for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCommand {
    pub start: usize,
    pub end: usize,
    pub color: Rgb,
}

impl SegmentCommand {
    pub fn new(segment: LedSegment, color: Rgb) -> Self {
        Self {
            start: segment.start,
            end: segment.end,
            color,
        }
    }
}

/// Something that can light up strip segments.
///
/// Notification is best-effort: callers log failures and carry on.
#[async_trait]
pub trait LedNotifier: Send + Sync {
    /// Get the notifier name.
    fn name(&self) -> &str;

    /// Get the current configuration.
    fn config(&self) -> &LedConfig;

    /// Set every LED in `segment` to `color`.
    async fn set_segment(&self, segment: LedSegment, color: Rgb) -> LedResult<()>;

    /// Turn every LED off.
    async fn clear_all(&self) -> LedResult<()>;

    /// Show `status` on the cell at `position`.
    async fn notify(&self, map: &SegmentMap, position: Position, status: Status) -> LedResult<()> {
        self.set_segment(map.segment(position), status_color(status))
            .await
    }
}

/// Outcome of one mirror pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    pub sent: usize,
    pub failed: usize,
}

/// Push a status frame to the strip: clear, then light every placed cell.
///
/// Never fails. Errors are logged and counted, and a disabled notifier does
/// nothing.
pub async fn mirror(
    notifier: &dyn LedNotifier,
    map: &SegmentMap,
    frame: &[(Position, Status)],
) -> MirrorReport {
    let mut report = MirrorReport::default();
    if !notifier.config().enabled {
        return report;
    }

    if let Err(e) = notifier.clear_all().await {
        warn!("LED clear via {} failed: {}", notifier.name(), e);
        report.failed += 1;
    }
    for (position, status) in frame {
        match notifier.notify(map, *position, *status).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                warn!(
                    "LED update for {} via {} failed: {}",
                    position,
                    notifier.name(),
                    e
                );
                report.failed += 1;
            }
        }
    }
    debug!(
        "Mirrored {} cells ({} failures) via {}",
        report.sent,
        report.failed,
        notifier.name()
    );
    report
}

/// Call recorded by [`MockNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    Segment(SegmentCommand),
    Clear,
}

/// A mock notifier for testing. Records every call.
pub struct MockNotifier {
    config: LedConfig,
    fail: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockNotifier {
    /// An enabled mock.
    pub fn new() -> Self {
        Self {
            config: LedConfig::default().enabled(true),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_config(mut self, config: LedConfig) -> Self {
        self.config = config;
        self
    }

    /// Make every call fail with a connection error (still recorded).
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: MockCall) -> LedResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.fail {
            return Err(LedError::ConnectionFailed(format!(
                "mock controller at {} is unreachable",
                self.config.base_url()
            )));
        }
        Ok(())
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedNotifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn config(&self) -> &LedConfig {
        &self.config
    }

    async fn set_segment(&self, segment: LedSegment, color: Rgb) -> LedResult<()> {
        self.record(MockCall::Segment(SegmentCommand::new(segment, color)))
    }

    async fn clear_all(&self) -> LedResult<()> {
        self.record(MockCall::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> SegmentMap {
        SegmentMap::new(6, 6, 2)
    }

    #[tokio::test]
    async fn test_notify_maps_status_to_color() {
        let notifier = MockNotifier::new();
        notifier
            .notify(&map(), Position::new(0, 1), Status::Unhappy)
            .await
            .unwrap();

        assert_eq!(
            notifier.calls(),
            vec![MockCall::Segment(SegmentCommand {
                start: 2,
                end: 3,
                color: Rgb::RED
            })]
        );
    }

    #[tokio::test]
    async fn test_mirror_clears_then_lights_cells() {
        let notifier = MockNotifier::new();
        let frame = [
            (Position::new(0, 0), Status::Happy),
            (Position::new(2, 3), Status::Neutral),
        ];
        let report = mirror(&notifier, &map(), &frame).await;

        assert_eq!(report, MirrorReport { sent: 2, failed: 0 });
        let calls = notifier.calls();
        assert_eq!(calls[0], MockCall::Clear);
        assert_eq!(
            calls[2],
            MockCall::Segment(SegmentCommand {
                start: 30,
                end: 31,
                color: Rgb::WHITE
            })
        );
    }

    #[tokio::test]
    async fn test_mirror_swallows_failures() {
        let notifier = MockNotifier::new().failing();
        let frame = [(Position::new(0, 0), Status::Happy)];
        let report = mirror(&notifier, &map(), &frame).await;

        assert_eq!(report, MirrorReport { sent: 0, failed: 2 });
        assert_eq!(notifier.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_disabled_notifier_is_skipped() {
        let notifier = MockNotifier::new().with_config(LedConfig::default());
        let frame = [(Position::new(0, 0), Status::Happy)];
        let report = mirror(&notifier, &map(), &frame).await;

        assert_eq!(report, MirrorReport::default());
        assert!(notifier.calls().is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = LedConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.segment_url(), "http://192.168.4.1:80/api/led");
        assert_eq!(config.clear_url(), "http://192.168.4.1:80/api/clear");
        assert_eq!(config.leds_per_cell, 2);
    }

    #[test]
    fn test_command_payload_shape() {
        let command = SegmentCommand::new(LedSegment { start: 4, end: 5 }, Rgb::GREEN);
        let json = serde_json::to_value(command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": 4, "end": 5, "color": {"r": 0, "g": 255, "b": 0}})
        );
    }
}
