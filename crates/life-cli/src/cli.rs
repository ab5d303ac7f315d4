//! Command line arguments.

use anyhow::{Context, Result};
use clap::Parser;
use life_core::RunConfig;
use std::path::PathBuf;

/// Conway's Game of Life on a wraparound field
#[derive(Debug, Parser)]
#[command(name = "life", author, version)]
pub struct CliArgs {
    /// JSON file with run settings; flags given here override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Width of the simulation field [default: 30]
    #[arg(short = 'x', long, value_name = "COLUMNS", value_parser = clap::value_parser!(i32).range(1..))]
    pub width: Option<i32>,

    /// Height of the simulation field [default: 30]
    #[arg(short = 'y', long, value_name = "ROWS", value_parser = clap::value_parser!(i32).range(1..))]
    pub height: Option<i32>,

    /// Display up to N generations [default: 20]
    #[arg(short = 'n', long, value_name = "N")]
    pub generations: Option<u64>,

    /// Display N generations per second [default: 5]
    #[arg(short = 'r', long = "rate", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub steps_per_second: Option<u32>,

    /// Start displaying from generation N
    #[arg(short = 's', long = "start", value_name = "N")]
    pub start_generation: Option<u64>,

    /// Read the initial population from a seed file; if valid, --seed is ignored
    #[arg(short = 'f', long = "file", value_name = "FILENAME")]
    pub seed_file: Option<PathBuf>,

    /// Seed for a random initial population (default: from the clock)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Name of the icon used for live cells [default: blue-circle]
    #[arg(long, value_name = "NAME")]
    pub icon: Option<String>,

    /// Print the available icons and exit
    #[arg(long)]
    pub list_icons: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Merge the flags over the config file (or the defaults) and validate.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("Could not load config [{}]", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(rate) = self.steps_per_second {
            config.steps_per_second = rate;
        }
        if let Some(start) = self.start_generation {
            config.start_generation = start;
        }
        if self.seed_file.is_some() {
            config.seed_file = self.seed_file.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(icon) = &self.icon {
            config.icon = icon.clone();
        }

        config.validate().context("Invalid run configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["life"]).unwrap();
        assert_eq!(args.resolve().unwrap(), RunConfig::default());
    }

    #[test]
    fn test_short_flags() {
        let args = CliArgs::try_parse_from([
            "life", "-x", "40", "-y", "12", "-n", "7", "-r", "10", "-s", "3", "-f", "glider.txt",
            "--icon", "snowman",
        ])
        .unwrap();
        let config = args.resolve().unwrap();

        assert_eq!(config.width, 40);
        assert_eq!(config.height, 12);
        assert_eq!(config.generations, 7);
        assert_eq!(config.steps_per_second, 10);
        assert_eq!(config.start_generation, 3);
        assert_eq!(config.seed_file, Some(PathBuf::from("glider.txt")));
        assert_eq!(config.icon, "snowman");
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(CliArgs::try_parse_from(["life", "-x", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["life", "-r", "0"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("life-cli-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"width": 50, "height": 20, "seed": 9}"#).unwrap();

        let args = CliArgs::try_parse_from([
            "life",
            "--config",
            path.to_str().unwrap(),
            "-y",
            "25",
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.width, 50);
        assert_eq!(config.height, 25);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("life-cli-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"width": -3}"#).unwrap();

        let args = CliArgs::try_parse_from(["life", "--config", path.to_str().unwrap()]).unwrap();
        let result = args.resolve();
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
