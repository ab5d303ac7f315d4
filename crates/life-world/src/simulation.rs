//! Simulation engine advancing a field generation by generation.

use crate::field::Field;
use crate::source::PopulationSource;
use life_core::{Coordinate, Result};
use std::fmt;
use tracing::{debug, info, instrument, trace};

/// Glyphs used when rendering a generation as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub live: String,
    pub dead: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: "#".to_string(),
            dead: " ".to_string(),
        }
    }
}

/// Double-buffered Game of Life on a toroidal field
pub struct Simulation {
    buffers: [Field; 2],
    current: usize,
    generation: u64,
}

impl Simulation {
    /// Build the first generation from every coordinate `source` emits.
    pub fn new<S: PopulationSource>(width: i32, height: i32, mut source: S) -> Result<Self> {
        let mut first = Field::new(width, height)?;
        let next = Field::new(width, height)?;

        let mut seeded = 0usize;
        while source.has_next() {
            if first.set(source.next(), true) {
                seeded += 1;
            }
        }

        info!(
            width,
            height,
            seeded,
            population = first.population(),
            "Simulation created"
        );

        Ok(Self {
            buffers: [first, next],
            current: 0,
            generation: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.current_field().width()
    }

    pub fn height(&self) -> i32 {
        self.current_field().height()
    }

    /// Number of steps taken so far
    pub fn generation_count(&self) -> u64 {
        self.generation
    }

    /// The field holding the current generation
    pub fn current_field(&self) -> &Field {
        &self.buffers[self.current]
    }

    pub fn population(&self) -> usize {
        self.current_field().population()
    }

    /// Advance one generation.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn step(&mut self) {
        let (current, next) = self.split_buffers();
        for y in 0..current.height() {
            for x in 0..current.width() {
                next.set(Coordinate::new(x, y), current.next_state(x, y));
            }
        }

        self.current = 1 - self.current;
        self.generation += 1;
        trace!(population = self.population(), "Generation complete");
    }

    /// Advance `generations` steps
    pub fn run(&mut self, generations: u64) {
        debug!(generations, "Running silently");
        for _ in 0..generations {
            self.step();
        }
    }

    /// Render the current generation, one line per row
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let field = self.current_field();
        let row_len = field.width() as usize * glyphs.live.len().max(glyphs.dead.len()) + 1;
        let mut out = String::with_capacity(row_len * field.height() as usize);

        for y in 0..field.height() {
            for x in 0..field.width() {
                out.push_str(if field.is_alive(x, y) {
                    &glyphs.live
                } else {
                    &glyphs.dead
                });
            }
            out.push('\n');
        }
        out
    }

    fn split_buffers(&mut self) -> (&Field, &mut Field) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}
