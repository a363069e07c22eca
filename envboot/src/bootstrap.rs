use crate::envfile::{self, Outcome};
use crate::error::BootstrapError;
use crate::secret::{self, DEFAULT_SECRET_LENGTH};
use log::{debug, info, warn};
use std::{
    fmt::Display,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

pub const TEMPLATE_FILE: &str = ".env.example";
pub const DESTINATION_FILE: &str = ".env";
pub const SECRET_KEY: &str = "ADMIN_JWT_SECRET";

/// Copies an env template to its destination, making sure the destination
/// holds exactly one line with a freshly generated secret for `key`.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    /// Starting content, a missing file counts as empty
    pub template: PathBuf,
    /// Overwritten on every run
    pub destination: PathBuf,
    pub key: String,
    /// Secret length in bytes
    pub length: usize,
}

impl Bootstrap {
    pub fn new(template: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            destination: destination.into(),
            key: SECRET_KEY.to_string(),
            length: DEFAULT_SECRET_LENGTH,
        }
    }

    /// Uses `.env.example` and `.env` in the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(TEMPLATE_FILE), dir.join(DESTINATION_FILE))
    }

    pub fn run(&self) -> Result<Report, BootstrapError> {
        info!(
            "Bootstrapping '{}' from '{}'",
            self.destination.display(),
            self.template.display()
        );

        let template = self.read_template()?;
        let secret = secret::generate(self.length);
        let (env_file, outcome) = envfile::upsert(&template, &self.key, &secret)?;

        match outcome {
            Outcome::Inserted => debug!("No '{}' line in template, appending", self.key),
            Outcome::Replaced => debug!("Replacing '{}' line from template", self.key),
        }

        fs::write(&self.destination, env_file).map_err(|source| {
            BootstrapError::WriteDestination {
                path: self.destination.clone(),
                source,
            }
        })?;

        info!("Wrote '{}'", self.destination.display());

        Ok(Report {
            destination: self.destination.clone(),
            key: self.key.clone(),
            outcome,
        })
    }

    fn read_template(&self) -> Result<String, BootstrapError> {
        match fs::read_to_string(&self.template) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "No template found at '{}', starting from an empty file",
                    self.template.display()
                );
                Ok(String::new())
            }
            Err(source) => Err(BootstrapError::ReadTemplate {
                path: self.template.clone(),
                source,
            }),
        }
    }
}

/// Bootstraps `destination` from `template` with the default key and secret length.
pub fn bootstrap(
    template: impl Into<PathBuf>,
    destination: impl Into<PathBuf>,
) -> Result<Report, BootstrapError> {
    Bootstrap::new(template, destination).run()
}

/// The result of a successful [Bootstrap::run]. Does not carry the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub destination: PathBuf,
    pub key: String,
    pub outcome: Outcome,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = self
            .destination
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.destination.to_string_lossy());
        write!(f, "{file} file created/updated with {}.", self.key)
    }
}
