//! CLI command implementations.

pub mod catalog;
pub mod check;
pub mod evaluate;
pub mod init;
pub mod layout;

use colored::{ColoredString, Colorize};
use garden::prelude::Status;

/// Status word colored the way the LED strip shows it.
pub(crate) fn paint(status: Status) -> ColoredString {
    match status {
        Status::Happy => "happy".green().bold(),
        Status::Unhappy => "unhappy".red().bold(),
        Status::Neutral => "neutral".white(),
        Status::Error => "error".dimmed(),
    }
}
