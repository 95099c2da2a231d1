//! # Garden Runtime
//!
//! Session management for the interactive garden.
//!
//! A [`GardenSession`](session::GardenSession) owns one catalog, one grid,
//! the mode controller and the tag registry. Front-ends drive it by plant
//! key and drain [`SessionEvent`](session::SessionEvent)s to broadcast what
//! changed. Sessions are built explicitly; there is no global board.

pub mod builder;
pub mod config;
pub mod prelude;
pub mod session;
