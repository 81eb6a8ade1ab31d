// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smoothgroups CLI - compute smoothing groups for a mesh stored as JSON.
//!
//! Usage:
//!   smoothgroups [INPUT] [--output FILE] [--format auto|polygon|flat]
//!                [--angle DEG] [--report] [--pretty] [--log-json]
//!
//! Reads standard input when INPUT is omitted or `-`. Writes the per-face
//! group array (or the full report with `--report`) as JSON to standard
//! output, or to `--output`. Logs go to standard error.
//!
//! # Environment
//!
//! - `SMOOTHGROUPS_ANGLE_DEG` - default angular tolerance in degrees
//! - `SMOOTHGROUPS_LOG_JSON` - emit JSON log lines
//! - `RUST_LOG` - tracing filter

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use smoothgroups_core::{SmoothingConfig, SmoothingGroups};
use tracing_subscriber::EnvFilter;

mod config;
mod input;

use config::Config;
use input::{InputFormat, MeshInput};

#[derive(Parser, Debug)]
#[command(name = "smoothgroups")]
#[command(author, version, about = "Compute mesh smoothing groups from per-corner normals", long_about = None)]
struct Cli {
    /// Input mesh JSON file (`-` or omitted for stdin)
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input layout
    #[arg(short, long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Angular tolerance in degrees between matching normals
    #[arg(short, long)]
    angle: Option<f32>,

    /// Write the full report (groups, components, counters)
    #[arg(long)]
    report: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&PathBuf>, json: &str) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", p.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write standard output")
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let smoothing = match cli.angle.or(config.angle_deg) {
        Some(deg) => SmoothingConfig::from_angle_degrees(deg),
        None => SmoothingConfig::default(),
    };
    let processor = SmoothingGroups::with_config(smoothing);

    let text = read_input(cli.input.as_ref())?;
    let mesh = MeshInput::parse(&text, cli.format)?;
    tracing::info!(
        form = mesh.form(),
        faces = mesh.face_count(),
        angle_deg = smoothing.angle_degrees(),
        "Loaded mesh"
    );

    let start = Instant::now();
    let report = mesh.compute(&processor)?;
    tracing::info!(
        faces = report.stats.faces,
        smoothing_groups = report.stats.smoothing_groups,
        components = report.stats.components,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Computed smoothing groups"
    );
    if report.stats.aliased {
        tracing::warn!("Mesh has more than 32 smoothing groups; some groups share a bit");
    }

    let json = match (cli.report, cli.pretty) {
        (true, true) => serde_json::to_string_pretty(&report)?,
        (true, false) => serde_json::to_string(&report)?,
        (false, true) => serde_json::to_string_pretty(&report.groups)?,
        (false, false) => serde_json::to_string(&report.groups)?,
    };
    write_output(cli.output.as_ref(), &json)
}

fn main() {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    config.log_json |= cli.log_json;
    init_logging(&config);

    if let Err(e) = run(cli, config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
