//! World simulation engine.
//!
//! This crate implements the toroidal field Conway's Game of Life runs on,
//! the sources that populate its first generation, and the double-buffered
//! engine that steps it forward.

pub mod field;
pub mod seed_file;
pub mod simulation;
pub mod source;

pub use field::{Field, MAX_FIELD_CELLS};
pub use seed_file::{ParsedSeed, ParserState, SeedRecord};
pub use simulation::{Glyphs, Simulation};
pub use source::{FileSource, PopulationSource, RandomSource};
