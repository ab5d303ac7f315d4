//! Choosing the initial population and playing generations to the terminal.

use anyhow::Result;
use life_core::RunConfig;
use life_world::{Field, FileSource, Glyphs, PopulationSource, RandomSource, Simulation};
use std::fmt;
use std::future::Future;
use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

const BIN_NAME: &str = "life";

/// The population source for a run and the field size it needs
pub struct Seeding {
    pub source: Box<dyn PopulationSource>,
    pub width: i32,
    pub height: i32,
    /// Flag that recreates this population on a later run
    pub resume_flag: String,
}

/// Prefer the seed file; fall back to a random population if there is none,
/// it cannot be loaded, or it needs a field larger than `MAX_FIELD_CELLS`.
pub fn choose_seeding(config: &RunConfig) -> Seeding {
    if let Some(path) = &config.seed_file {
        match FileSource::new(path) {
            Ok(source) => {
                let (min_width, min_height) = source.minimum_bounds();
                let width = config.width.max(min_width);
                let height = config.height.max(min_height);
                if !Field::fits(width, height) {
                    warn!(
                        width,
                        height,
                        "{} needs too large a field; using a random population instead",
                        source
                    );
                    return random_seeding(config);
                }
                if (width, height) != (config.width, config.height) {
                    info!(width, height, "Field enlarged to fit {}", source);
                }

                return Seeding {
                    source: Box::new(source),
                    width,
                    height,
                    resume_flag: format!("-f {}", path.display()),
                };
            }
            Err(e) => warn!("{}; using a random population instead", e),
        }
    }

    random_seeding(config)
}

fn random_seeding(config: &RunConfig) -> Seeding {
    let seed = config.seed.unwrap_or_else(clock_seed);
    Seeding {
        source: Box::new(RandomSource::new(config.width, config.height, seed)),
        width: config.width,
        height: config.height,
        resume_flag: format!("--seed {}", seed),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Steps a simulation, writing each displayed generation
pub struct Player {
    simulation: Simulation,
    glyphs: Glyphs,
    generations: u64,
    silent: u64,
    delay: Duration,
}

impl Player {
    pub fn new(simulation: Simulation, glyphs: Glyphs, config: &RunConfig) -> Self {
        // Displaying from generation N means computing N - 1 generations first
        let silent = config.start_generation.saturating_sub(1);
        let delay = Duration::from_secs(1) / config.steps_per_second.max(1);

        Self {
            simulation,
            glyphs,
            generations: config.generations,
            silent,
            delay,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Display up to the configured number of generations, one per tick.
    /// Stops early once `shutdown` completes. Returns how many were displayed.
    pub async fn play<W, F>(&mut self, out: &mut W, shutdown: F) -> Result<u64>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        writeln!(out, "\nConway's Game of Life")?;
        if self.silent > 0 {
            write!(out, "\nStarting from generation {}...", self.silent + 1)?;
            self.simulation.run(self.silent);
        }

        let mut ticker = interval(self.delay);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut displayed = 0;
        while displayed < self.generations {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(displayed, "Interrupted");
                    break;
                }
                _ = ticker.tick() => {}
            }

            displayed += 1;
            write!(
                out,
                "\n\nGeneration {} ({} of {}):\n{}",
                self.simulation.generation_count() + 1,
                displayed,
                self.generations,
                self.simulation.render(&self.glyphs)
            )?;
            out.flush()?;
            self.simulation.step();
        }

        Ok(displayed)
    }
}

/// Closing report of a run, with the flags needed to pick it up again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations_calculated: u64,
    pub width: i32,
    pub height: i32,
    pub resume_flag: String,
    pub icon: String,
    pub generations: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} generations calculated.\n", self.generations_calculated)?;
        write!(
            f,
            "To continue: {} -y {} -x {} {} --icon {} -s {} -n {}",
            BIN_NAME,
            self.height,
            self.width,
            self.resume_flag,
            self.icon,
            self.generations_calculated,
            self.generations
        )
    }
}
