/// Copying the env template into place with a fresh secret.
pub mod bootstrap;

/// Line level `KEY=VALUE` editing.
pub mod envfile;

pub mod error;

/// A logger writing to stderr.
pub mod logger;

/// Secret generation.
pub mod secret;

pub use bootstrap::{bootstrap, Bootstrap, Report};
pub use error::BootstrapError;
