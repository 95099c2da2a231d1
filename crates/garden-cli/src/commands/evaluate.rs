//! Place plants and evaluate them.

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use garden::prelude::*;
use std::str::FromStr;
use tracing::{info, warn};

use super::paint;
use crate::config::Config;

/// `key@row,col`, e.g. `tomato@0,3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub key: String,
    pub row: usize,
    pub col: usize,
}

/// `UID@row,col`, e.g. `04:53:45:3B@0,3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPlacement {
    pub uid: TagUid,
    pub row: usize,
    pub col: usize,
}

fn split_target(s: &str) -> Result<(&str, usize, usize)> {
    let (what, cell) = s
        .split_once('@')
        .ok_or_else(|| anyhow!("expected <what>@<row>,<col>, got '{}'", s))?;
    let (row, col) = cell
        .split_once(',')
        .ok_or_else(|| anyhow!("expected <row>,<col> after '@', got '{}'", cell))?;
    let row = row.trim().parse().with_context(|| format!("bad row in '{}'", s))?;
    let col = col.trim().parse().with_context(|| format!("bad column in '{}'", s))?;
    Ok((what.trim(), row, col))
}

impl FromStr for Placement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, row, col) = split_target(s)?;
        if key.is_empty() {
            bail!("missing plant key in '{}'", s);
        }
        Ok(Self {
            key: key.to_string(),
            row,
            col,
        })
    }
}

impl FromStr for TagPlacement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (uid, row, col) = split_target(s)?;
        Ok(Self {
            uid: uid.parse()?,
            row,
            col,
        })
    }
}

pub fn run(
    places: &[Placement],
    tags: &[TagPlacement],
    mode: Option<&str>,
    json: bool,
    mirror_leds: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut session = config.open_session()?;

    if let Some(mode) = mode {
        let target: GameMode = mode.parse().map_err(|e: String| anyhow!(e))?;
        switch_mode(&mut session, target);
    }
    apply(&mut session, places, tags)?;

    if json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", snapshot);
    } else {
        print_reports(&session);
    }

    if mirror_leds {
        mirror_to_strip(&config.led, &session)?;
    }
    Ok(())
}

/// Cycle until `target` is current; modes only change by cycling.
pub fn switch_mode(session: &mut GardenSession, target: GameMode) {
    while session.mode() != target {
        session.cycle_mode();
    }
}

/// Apply tag placements after key placements, each in order.
pub fn apply(
    session: &mut GardenSession,
    places: &[Placement],
    tags: &[TagPlacement],
) -> Result<()> {
    for p in places {
        session
            .place_plant(&p.key, p.row, p.col)
            .with_context(|| format!("Cannot place {} at ({}, {})", p.key, p.row, p.col))?;
    }
    for t in tags {
        session
            .place_tag(t.uid, t.row, t.col)
            .with_context(|| format!("Cannot place tag {} at ({}, {})", t.uid, t.row, t.col))?;
    }
    for event in session.drain_events() {
        if let SessionEvent::Evicted { plant, position, by } = event {
            warn!("{} at {} was evicted by {}", plant, position, by);
        }
    }
    Ok(())
}

fn print_reports(session: &GardenSession) {
    println!("{} Mode: {}", "→".blue(), session.mode_label().cyan());
    println!();

    let reports = session.evaluate_all();
    if reports.is_empty() {
        println!(
            "  {} Nothing planted. Try {}",
            "•".yellow(),
            "--place tomato@0,3".cyan()
        );
        return;
    }

    for report in reports {
        let position = report
            .evaluation
            .position
            .map(|p| p.to_string())
            .unwrap_or_default();
        println!(
            "  {:<10} {:<8} {:<8} {}",
            report.name.white().bold(),
            position.dimmed(),
            paint(report.evaluation.status),
            report.evaluation.reason
        );
        for detail in [
            &report.evaluation.environment.reason,
            &report.evaluation.neighbors.reason,
        ] {
            if !detail.is_empty() && *detail != report.evaluation.reason {
                println!("  {:<28} {}", "", detail.dimmed());
            }
        }
    }
}

fn mirror_to_strip(led: &LedConfig, session: &GardenSession) -> Result<()> {
    if !led.enabled {
        println!(
            "{} LED mirroring is disabled; set {} in garden.toml",
            "•".yellow(),
            "[led] enabled = true".cyan()
        );
        return Ok(());
    }

    let notifier = HttpLedNotifier::new(led.clone())?;
    let map = SegmentMap::new(session.grid().rows(), session.grid().cols(), led.leds_per_cell);
    let frame = session.status_frame();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let report = runtime.block_on(mirror(&notifier, &map, &frame));
    info!("LED mirror: {} sent, {} failed", report.sent, report.failed);

    if report.failed > 0 {
        println!(
            "{} {} LED updates failed (controller at {})",
            "•".yellow(),
            report.failed,
            led.base_url()
        );
    } else {
        println!("{} Mirrored {} cells to the strip", "✓".green(), report.sent);
    }
    Ok(())
}
