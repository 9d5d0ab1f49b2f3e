// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Render delivery options as an SVG timeline
//!

use chrono::{DateTime, Utc};
use clap::Parser;
use delivery_timeline_core::DeliveryOptions;
use delivery_timeline_renderer::{Engine, default_reference_time, render_svg};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// SVG renderer CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Render delivery options as an SVG timeline",
    after_help = "Without an options file the sample options are rendered"
)]
struct Cli {
    /// JSON file of delivery options
    options: Option<PathBuf>,

    /// Where the "now" line is drawn (RFC 3339, e.g. 2024-09-27T07:40:00Z)
    #[arg(long, value_parser = parse_reference_time)]
    reference_time: Option<DateTime<Utc>>,

    /// Where to write the SVG (stdout if not given)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log more
    #[arg(long)]
    verbose: bool,
}

fn parse_reference_time(timestamp: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|error| error.to_string())
}

fn main() {
    let args = Cli::parse();

    // Setup logging (stderr, so as not to mix with the SVG)
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("delivery_timeline")
        .build();
    if let Err(error) =
        TermLogger::init(level, config_log, TerminalMode::Stderr, ColorChoice::Auto)
    {
        eprintln!("Unable to initialise logging: {error}");
    }

    let options = match &args.options {
        Some(path) => match DeliveryOptions::from_json_file(path) {
            Ok(options) => options,
            Err(error) => {
                eprintln!("Error reading {}: {error}", path.display());
                std::process::exit(1);
            }
        },
        None => DeliveryOptions::sample(),
    };

    let reference_time = args.reference_time.unwrap_or_else(default_reference_time);
    let engine = Engine::with_reference_time(options, reference_time);
    let svg = render_svg(&engine);

    match &args.output {
        Some(path) => {
            if let Err(error) = fs::write(path, svg) {
                eprintln!("Error writing {}: {error}", path.display());
                std::process::exit(1);
            }
            info!("Written to {}", path.display());
        }
        None => {
            if let Err(error) = write_svg(io::stdout().lock(), &svg) {
                eprintln!("Error writing to stdout: {error}");
                std::process::exit(1);
            }
        }
    }
}

/// Write the SVG and a trailing newline.  The reader going away early (e.g.
/// piping into `head`) isn't an error
fn write_svg<W: Write>(mut out: W, svg: &str) -> io::Result<()> {
    let written = out
        .write_all(svg.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .and_then(|()| out.flush());
    match written {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed before the SVG was written");
            Ok(())
        }
        written => written,
    }
}
