//! Command-line interface of the `brailpull` binary.

use clap::{ArgAction, Parser};

const DEFAULT_NAME: &str = "elasticsearch";
const DEFAULT_SIZE_MB: f64 = 723.4;
const DEFAULT_CELLS: usize = 10;
const DEFAULT_DELAY_MS: u64 = 80;

/// Simulate pulling an image and show a Braille progress line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Name shown next to the bar
    #[arg(default_value = DEFAULT_NAME)]
    pub name: String,

    /// Total size of the fake image, in MB
    #[arg(default_value_t = DEFAULT_SIZE_MB, value_parser = validate_size)]
    pub size_mb: f64,

    /// Number of Braille glyphs in the bar
    #[arg(short, long, default_value_t = DEFAULT_CELLS, value_parser = validate_cells)]
    pub cells: usize,

    /// Pause between frames, in milliseconds
    #[arg(short, long = "delay-ms", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Seed for the chunk sizes, for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn validate_size(size: &str) -> Result<f64, String> {
    let size: f64 = size
        .parse()
        .map_err(|_| format!("`{size}` isn't a valid size"))?;

    if !(size > 0.0) || !size.is_finite() {
        return Err("size must be a positive number of MB".to_string());
    }

    Ok(size)
}

fn validate_cells(cells: &str) -> Result<usize, String> {
    let cells: usize = cells
        .parse()
        .map_err(|_| format!("`{cells}` isn't a valid cell count"))?;

    if !(1..=256).contains(&cells) {
        return Err("cell count must be in the range [1, 256]".to_string());
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn defaults_match_demo() {
        let cli = Cli::try_parse_from(["brailpull"]).unwrap();
        assert_eq!(cli.name, "elasticsearch");
        assert_eq!(cli.size_mb, 723.4);
        assert_eq!(cli.cells, 10);
        assert_eq!(cli.delay_ms, 80);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(Cli::try_parse_from(["brailpull", "redis", "0"]).is_err());
        assert!(Cli::try_parse_from(["brailpull", "redis", "--", "-3"]).is_err());
        assert!(Cli::try_parse_from(["brailpull", "redis", "inf"]).is_err());
        assert!(Cli::try_parse_from(["brailpull", "redis", "lots"]).is_err());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "brailpull", "redis", "42.5", "--cells", "20", "-s", "9", "-vv", "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.size_mb, 42.5);
        assert_eq!(cli.cells, 20);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.no_color);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        assert!(Cli::try_parse_from(["brailpull", "--cells", "0"]).is_err());
    }
}
