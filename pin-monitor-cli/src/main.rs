//! Pin Monitor CLI Application
//!
//! Command-line front end for the serial pin probe. It uses the
//! pin-monitor-decoder library and adds:
//! - Argument parsing and TOML configuration
//! - The monitor loop that owns stdout (header line, then one data line
//!   per sample byte)
//! - Optional hex column and sample cap
//! - Rate statistics (samples/s and changes/s, logged to stderr)
//!
//! Stdout carries nothing but the header and data lines, so the output can
//! be piped straight into other tools; all diagnostics go through the
//! logger on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use pin_monitor_decoder::SampleStream;
use std::io::Write;
use std::path::PathBuf;

mod config;
mod stats;

use config::MonitorSettings;

/// Pin Monitor - stream digital input states from a serial probe
#[derive(Parser, Debug)]
#[command(name = "pin-monitor-cli")]
#[command(about = "Print probe samples as comma-separated bit lines", long_about = None)]
#[command(version)]
struct Args {
    /// Serial device path (default: /dev/ttyACM1)
    #[arg(short, long, value_name = "DEVICE")]
    port: Option<String>,

    /// Baud rate (default: 115200)
    #[arg(short, long, value_name = "RATE")]
    baud: Option<u32>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many samples (default: run forever)
    #[arg(long, value_name = "COUNT")]
    max_samples: Option<u64>,

    /// Append the raw sample byte as a hex column
    #[arg(long)]
    hex: bool,

    /// Log samples/s and changes/s once per second
    #[arg(long)]
    stats: bool,

    /// List available serial ports and exit
    #[arg(long)]
    list_ports: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Pin Monitor CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", pin_monitor_decoder::VERSION);

    if args.list_ports {
        return list_ports();
    }

    let settings = resolve_settings(&args)?;
    log::debug!("Resolved settings: {:?}", settings);

    run_monitor(&settings)
}

/// Merge CLI flags, optional config file, and built-in defaults
///
/// Precedence: explicit flag, then config file value, then default.
fn resolve_settings(args: &Args) -> Result<MonitorSettings> {
    let file = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::AppConfig::default(),
    };

    Ok(MonitorSettings {
        port: args
            .port
            .clone()
            .or(file.port.path)
            .unwrap_or_else(|| config::DEFAULT_PORT.to_string()),
        baud: args.baud.or(file.port.baud).unwrap_or(config::DEFAULT_BAUD),
        channels: file.channels.labels.unwrap_or_default(),
        hex: args.hex || file.output.hex,
        stats: args.stats || file.output.stats,
        max_samples: args.max_samples.or(file.output.max_samples),
    })
}

/// The monitor loop: open port, print header once, then one line per byte
///
/// Both fatal conditions of the tool live here: if the port cannot be
/// opened, the error propagates before anything is printed; if a read
/// fails, the stream yields the error and the process exits non-zero.
fn run_monitor(settings: &MonitorSettings) -> Result<()> {
    let port = pin_monitor_decoder::port::open(&settings.port, settings.baud)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Header first, exactly once, only after the port is open
    if settings.hex {
        writeln!(out, "{},HEX", settings.channels.header())?;
    } else {
        writeln!(out, "{}", settings.channels.header())?;
    }
    out.flush()?;

    let mut rates = settings.stats.then(stats::RateStats::new);
    let mut printed: u64 = 0;

    for sample in SampleStream::new(port) {
        let sample = sample.context("Reading from serial port failed")?;

        if settings.hex {
            writeln!(out, "{}", sample.bit_line_with_hex())?;
        } else {
            writeln!(out, "{}", sample.bit_line())?;
        }
        out.flush()?;

        if let Some(rates) = rates.as_mut() {
            rates.record(sample.0);
            rates.tick();
        }

        printed += 1;
        if let Some(max) = settings.max_samples {
            if printed >= max {
                log::info!("Sample cap reached ({}), stopping", max);
                break;
            }
        }
    }

    Ok(())
}

/// Print the serial devices visible on this host
fn list_ports() -> Result<()> {
    let ports = pin_monitor_decoder::port::available_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
    } else {
        for port in ports {
            println!("{}", port);
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
