//! # Garden Web
//!
//! JSON API and live event stream over a single in-memory garden session.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -p garden-web -- --port 3000
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/board` | Full board snapshot |
//! | GET | `/api/plants` | Catalog plants |
//! | GET | `/api/cells/:row/:col` | One cell |
//! | POST | `/api/place` | Place a plant by key |
//! | POST | `/api/remove` | Take a plant off the board |
//! | GET | `/api/evaluate/:plant` | Evaluate one plant |
//! | GET | `/api/evaluations` | Evaluate every placed plant |
//! | GET | `/api/mode` | Current mode |
//! | POST | `/api/mode/cycle` | Advance the mode |
//! | POST | `/api/layout` | Replace cell environments |
//! | POST | `/api/tags/place` | Place the plant behind a tag |
//! | WS | `/ws/events` | Live session events |

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::WebConfig;
pub use error::ApiError;
pub use state::AppState;
