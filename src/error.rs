use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The closed value interval is empty.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidValueRange { min: i64, max: i64 },

    /// The per-set element count bounds are inverted.
    #[error("invalid element range: min {min} is greater than max {max}")]
    InvalidElementRange { min: usize, max: usize },

    /// Opening, writing, or flushing the output file failed.
    #[error("failed to append to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
