//! Appends lines of uniformly distributed random integers to a text file.

pub mod error;
pub mod generator;

pub use error::GenerateError;
pub use generator::{generate_with, values_generator, GenerationReport, GeneratorConfig};
