//! Print the board's cell environments.

use anyhow::Result;
use colored::Colorize;
use garden::prelude::*;

use crate::config::Config;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let session = config.open_session()?;
    let grid = session.grid();

    println!(
        "{} {}x{} board",
        "→".blue(),
        grid.rows().to_string().cyan(),
        grid.cols().to_string().cyan()
    );
    println!();
    for row in 0..grid.rows() {
        let line: Vec<String> = (0..grid.cols())
            .map(|col| {
                grid.cell(row, col)
                    .map(|cell| format!("{:<6}", short_label(cell.environment)))
                    .unwrap_or_default()
            })
            .collect();
        println!("  {}", line.join(" "));
    }
    println!();
    println!(
        "  {}",
        "S/P/H = sunny/partial shade/shade, d/m/w = dry/moist/wet, -- = unknown".dimmed()
    );
    Ok(())
}

/// Two-character code: light then moisture.
fn short_label(mask: EnvironmentMask) -> String {
    let light = match mask.light() {
        Some(Light::Sunny) => 'S',
        Some(Light::PartialShade) => 'P',
        Some(Light::Shade) => 'H',
        None => '-',
    };
    let moisture = match mask.moisture() {
        Some(Moisture::Dry) => 'd',
        Some(Moisture::Moist) => 'm',
        Some(Moisture::Wet) => 'w',
        None => '-',
    };
    format!("{}{}", light, moisture)
}
