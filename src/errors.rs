use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LeakError {
    #[error("Marker must not be empty")]
    EmptyMarker,

    #[error("Marker not found in leak")]
    MarkerNotFound,

    #[error("Marker found more than once (at {first} and {second})")]
    DuplicateMarker { first: usize, second: usize },

    #[error("Leak truncated: 8 bytes needed at offset {offset}, only {available} available")]
    Truncated { offset: usize, available: usize },

    #[error("Leaked value mismatch: expected {expected:016x}, got {actual:016x}")]
    ValueMismatch { expected: u64, actual: u64 },

    #[error("Marker recurs at offset {0} of the marker and value bytes")]
    MarkerRecurs(usize),

    #[error("Noise region too long: {0} bytes only up to 512 bytes are allowed.")]
    NoiseTooLong(usize),

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LeakError {
    /// Create an IoError with the given path and source error.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LeakError::IoError {
            path: path.into(),
            source,
        }
    }
}
