use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::GenerateError;

pub const DEFAULT_OUTPUT: &str = "1000000.csv";
pub const DEFAULT_SET_QUANTITY: u64 = 1;
pub const DEFAULT_MIN_VALUE: i64 = 0;
pub const DEFAULT_MAX_VALUE: i64 = 100_000_000;
pub const DEFAULT_ELEMENTS: usize = 1_000_000;

/// Parameters for one generator run.
///
/// `max_elements` is optional: when unset every set holds exactly
/// `min_elements` values, otherwise each set's length is drawn from
/// `[min_elements, max_elements]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub set_quantity: u64,
    pub min_value: i64,
    pub max_value: i64,
    pub min_elements: usize,
    pub max_elements: Option<usize>,
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            set_quantity: DEFAULT_SET_QUANTITY,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            min_elements: DEFAULT_ELEMENTS,
            max_elements: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_value > self.max_value {
            return Err(GenerateError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if let Some(max) = self.max_elements {
            if self.min_elements > max {
                return Err(GenerateError::InvalidElementRange {
                    min: self.min_elements,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Whether every value in `[min_value, max_value]` fits a 32-bit C `int`.
    pub fn fits_c_int(&self) -> bool {
        i32::try_from(self.min_value).is_ok() && i32::try_from(self.max_value).is_ok()
    }

    fn elements_in_set<R: Rng>(&self, rng: &mut R) -> usize {
        match self.max_elements {
            Some(max) if max > self.min_elements => rng.gen_range(self.min_elements..=max),
            _ => self.min_elements,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub sets: u64,
    pub values: u64,
}

/// Runs the generator with the thread-local RNG.
pub fn values_generator(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    generate_with(config, &mut rand::thread_rng())
}

/// Runs the generator drawing from `rng`.
///
/// The output file is opened in append mode once per set, then flushed and
/// closed before the next set is drawn.
pub fn generate_with<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationReport, GenerateError> {
    config.validate()?;
    if !config.fits_c_int() {
        tracing::warn!(
            min = config.min_value,
            max = config.max_value,
            "value range exceeds 32-bit int; consumers parsing with stoi will reject it"
        );
    }
    let values = Uniform::new_inclusive(config.min_value, config.max_value);

    let mut report = GenerationReport::default();
    for set in 0..config.set_quantity {
        let len = config.elements_in_set(rng);
        append_set(&config.output, rng, &values, len).map_err(|source| GenerateError::Io {
            path: config.output.clone(),
            source,
        })?;
        report.sets += 1;
        report.values += len as u64;
        tracing::debug!(set, len, "appended set");
    }

    tracing::info!(
        sets = report.sets,
        values = report.values,
        output = %config.output.display(),
        "generation finished"
    );
    Ok(report)
}

fn append_set<R: Rng>(
    path: &Path,
    rng: &mut R,
    values: &Uniform<i64>,
    len: usize,
) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_set(&mut writer, rng, values, len)?;
    // BufWriter swallows errors on drop
    writer.flush()
}

/// Writes one set: every value followed by a space, then a newline.
pub fn write_set<W: Write, R: Rng>(
    writer: &mut W,
    rng: &mut R,
    values: &Uniform<i64>,
    len: usize,
) -> io::Result<()> {
    for _ in 0..len {
        write!(writer, "{} ", values.sample(rng))?;
    }
    writer.write_all(b"\n")
}
