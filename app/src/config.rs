use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

// Fixed for the whole session: no runtime resizing.
#[derive(Parser, Debug, Clone)]
#[command(name = "pathviz", author, version, about, long_about = None)]
pub struct Config {
    /// Cells per side of the square grid.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(2..))]
    pub grid_size: u16,

    /// Terminal columns drawn per grid cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,

    /// Pause after every search frame, in milliseconds.
    #[arg(long, default_value_t = 5)]
    pub step_delay_ms: u64,

    /// Fraction of open cells turned into barriers by scatter (`g`).
    #[arg(long, default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for barrier scattering; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn grid_size(&self) -> usize {
        usize::from(self.grid_size)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 50,
            cell_width: 2,
            step_delay_ms: 5,
            density: 0.3,
            seed: None,
            log_file: None,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("density must be within 0.0..=1.0, got {p}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let cli = Config::try_parse_from(["pathviz"]).unwrap();
        let def = Config::default();
        assert_eq!(cli.grid_size, def.grid_size);
        assert_eq!(cli.cell_width, def.cell_width);
        assert_eq!(cli.step_delay_ms, def.step_delay_ms);
        assert_eq!(cli.density, def.density);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.step_delay(), Duration::from_millis(5));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "pathviz",
            "--grid-size",
            "12",
            "--density",
            "0.5",
            "--seed",
            "9",
            "--log-file",
            "/tmp/pathviz.log",
        ])
        .unwrap();
        assert_eq!(cfg.grid_size(), 12);
        assert_eq!(cfg.density, 0.5);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/pathviz.log")));
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(Config::try_parse_from(["pathviz", "--grid-size", "1"]).is_err());
        assert!(Config::try_parse_from(["pathviz", "--cell-width", "0"]).is_err());
        assert!(Config::try_parse_from(["pathviz", "--density", "1.5"]).is_err());
        assert!(Config::try_parse_from(["pathviz", "--density", "lots"]).is_err());
    }
}
