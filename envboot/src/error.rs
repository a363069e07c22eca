use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Could not read template '{}': {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },
    #[error("Could not write '{}': {source}", path.display())]
    WriteDestination { path: PathBuf, source: io::Error },
    #[error("Pattern: {0}")]
    Pattern(#[from] regex::Error),
}
