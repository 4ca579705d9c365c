//! Rot3D - 3D rotation explorer
//!
//! Prints quaternion, axis-angle, direction-to-direction, and SLERP results
//! for the configured inputs.

use std::io::Write;

use rot3d::config::AppConfig;
use rot3d::scenario;

fn main() {
    let config = AppConfig::load();

    // RUST_LOG wins over the configured level
    let level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::info!("Starting Rot3D");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let report = scenario::build_report(&config);
    log::info!("Built {} report sections", report.len());

    if let Err(e) = print_report(&report) {
        log::warn!("Failed to write report: {}", e);
    }
}

fn print_report(report: &[scenario::Section]) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for section in report {
        writeln!(out, "== {}", section.title)?;
        for line in &section.lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
