//! Entry point of the `brailpull` binary.
//!
//! Parses the command line, routes log records around the animated line and
//! runs one simulated pull on stdout.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use brailpull::{LineTarget, LogWrapper, Pull, PullStyle};
use clap::Parser;
use log::{info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;

mod cli;

/// Configure logger to write to stderr, stepping around the pull line on `target`.
fn setup_logger(target: Arc<LineTarget>, level: LevelFilter) -> Result<()> {
    let pattern = "[{d(%Y-%m-%d %H:%M:%S)}] {h({l})}: {m}{n}";

    let stderr = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .target(Target::Stderr)
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .context("Failed to configure logger.")?;

    LogWrapper::new(target, log4rs::Logger::new(config))
        .try_init()
        .context("Failed to initialize logger.")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let target = Arc::new(LineTarget::stdout());
    setup_logger(target.clone(), args.log_level())?;
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut style = PullStyle::new().cells(args.cells);
    if args.no_color || !console::colors_enabled() {
        style = style.plain();
    }

    let rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let summary = Pull::new(args.name, args.size_mb)?
        .with_rng(rng)
        .with_style(style)
        .with_delay(Duration::from_millis(args.delay_ms))
        .run(&target)?;

    info!(
        "Done in {} steps ({:.2}s).",
        summary.steps,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
