//! Sources of the initial population.

use crate::seed_file;
use life_core::{Coordinate, Error, Result};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EXHAUSTED: &str = "illegal state: no more coordinates available";

/// Supplies the live cells of the first generation.
///
/// `next` may only be called while `has_next` is true; calling it on an
/// exhausted source is a caller bug and panics. Implementors provide
/// `take_next`, which is only reached once `has_next` has been checked.
pub trait PopulationSource {
    fn has_next(&self) -> bool;

    /// Produce the next coordinate. Only called while `has_next` is true.
    fn take_next(&mut self) -> Coordinate;

    fn next(&mut self) -> Coordinate {
        assert!(self.has_next(), "{}", EXHAUSTED);
        self.take_next()
    }

    /// Smallest `(width, height)` of a field that can hold every coordinate
    /// this source will emit.
    fn minimum_bounds(&self) -> (i32, i32);
}

impl<P: PopulationSource + ?Sized> PopulationSource for Box<P> {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn take_next(&mut self) -> Coordinate {
        (**self).take_next()
    }

    fn minimum_bounds(&self) -> (i32, i32) {
        (**self).minimum_bounds()
    }
}

/// Uniformly random coordinates covering roughly a quarter of the field.
///
/// Coordinates may repeat.
#[derive(Debug, Clone)]
pub struct RandomSource {
    width: i32,
    height: i32,
    emitted: usize,
    limit: usize,
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let limit = if width > 0 && height > 0 {
            width as usize * height as usize / 4
        } else {
            0
        };
        debug!(width, height, seed, limit, "Random population source created");

        Self {
            width,
            height,
            emitted: 0,
            limit,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PopulationSource for RandomSource {
    fn has_next(&self) -> bool {
        self.emitted < self.limit
    }

    fn take_next(&mut self) -> Coordinate {
        self.emitted += 1;
        Coordinate::new(
            self.rng.gen_range(0..self.width),
            self.rng.gen_range(0..self.height),
        )
    }

    fn minimum_bounds(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Coordinates read from a seed file, in file order
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    coordinates: Vec<Coordinate>,
    position: usize,
    min_width: i32,
    min_height: i32,
}

impl FileSource {
    /// Read and parse the whole seed file
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| Error::SeedFileUnreadable {
            path: path.clone(),
            source,
        })?;

        if text.lines().next().is_none() {
            return Err(Error::EmptySeedFile(path));
        }

        let parsed = seed_file::parse(&text);
        info!(
            path = %path.display(),
            cells = parsed.coordinates.len(),
            min_width = parsed.min_width,
            min_height = parsed.min_height,
            "Loaded seed file"
        );

        Ok(Self {
            path,
            coordinates: parsed.coordinates,
            position: 0,
            min_width: parsed.min_width,
            min_height: parsed.min_height,
        })
    }

    /// Total number of coordinates parsed from the file
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl PopulationSource for FileSource {
    fn has_next(&self) -> bool {
        self.position < self.coordinates.len()
    }

    fn take_next(&mut self) -> Coordinate {
        let coord = self.coordinates[self.position];
        self.position += 1;
        coord
    }

    fn minimum_bounds(&self) -> (i32, i32) {
        (self.min_width, self.min_height)
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileSource: file: {} minX: {}, minY: {}",
            self.path.display(),
            self.min_width,
            self.min_height
        )
    }
}
