//! Timegate - blocks until the current time is inside an allow-window.
//!
//! Exits 0 once the window is open, 1 when the flags fail validation and 2
//! on usage errors reported by clap.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use timegate::{Args, ConfigError, Gate, SystemClock};
use timegate_core::WindowGenerator;

/// Exit status for flags that fail validation.
const EXIT_INVALID_CONFIG: u8 = 1;

/// Exit status for any other failure.
const EXIT_FAILURE: u8 = 1;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize console logging on stderr, leaving stdout for `--print-window`.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "timegate={},timegate_core={},warn",
            log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = args.into_settings()?;
    tracing::debug!(
        days = %settings.config.days,
        start = %settings.config.start,
        stop = %settings.config.stop,
        timezone = %settings.config.timezone,
        "Gate configured"
    );

    let gate = Gate::new(
        WindowGenerator::new(settings.config),
        SystemClock,
        settings.poll_interval,
    );

    if settings.print_window {
        let status = gate.status();
        let json = serde_json::to_string_pretty(&status).context("Failed to encode window")?;
        println!("{json}");
        return Ok(());
    }

    gate.wait_until_open();
    Ok(())
}

/// Logs a failed run and picks its exit status.
fn failure_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => {
            tracing::error!("{}", config_err);
            EXIT_INVALID_CONFIG
        }
        None => {
            tracing::error!("{:#}", err);
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit with code 2 from here.
    let args = Args::parse();
    init_logging(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(failure_code(&err)),
    }
}
