//! # Garden LED
//!
//! Mirrors plant statuses onto a physical LED strip.
//!
//! Each board cell owns a fixed run of LEDs. After an evaluation pass the
//! host hands the `(position, status)` frame to [`mirror`], which clears the
//! strip and lights every placed cell green, red or white. Mirroring is
//! best-effort: failures are logged and never reach the evaluation caller.
//!
//! ## Features
//!
//! - `http`: [`HttpLedNotifier`] for the ESP controller
//!
//! ## Usage
//!
//! ```rust,ignore
//! use garden_led::{mirror, HttpLedNotifier, LedConfig, SegmentMap};
//!
//! let notifier = HttpLedNotifier::new(LedConfig::default().enabled(true))?;
//! let map = SegmentMap::new(6, 6, 2);
//! mirror(&notifier, &map, &session.status_frame()).await;
//! ```

mod notifier;
mod segment;

pub use notifier::{
    mirror, LedConfig, LedError, LedNotifier, LedResult, MirrorReport, MockCall, MockNotifier,
    SegmentCommand,
};
pub use segment::{status_color, LedSegment, SegmentMap};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpLedNotifier;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{mirror, LedConfig, LedError, LedNotifier, LedResult, MockNotifier};
    pub use crate::{status_color, LedSegment, SegmentMap};

    #[cfg(feature = "http")]
    pub use crate::HttpLedNotifier;
}
