use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{what} dump is {actual} bytes, expected {expected}")]
    DumpSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
