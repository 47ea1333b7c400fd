//! Path resolution for readmequick.
//!
//! Every command works relative to a working directory: the config file and
//! the session directory are resolved against it unless given as absolute
//! paths.

use crate::config::Config;
use crate::error::{ReadmeError, Result};
use crate::session::SESSION_FILE;
use std::env;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "readmequick.yaml";

/// Default session directory name, relative to the working directory.
pub const DEFAULT_SESSION_DIR: &str = ".readmequick";

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ReadmeContext {
    pub cwd: PathBuf,
    pub config_path: PathBuf,
    /// Whether `config_path` was given explicitly rather than defaulted.
    pub config_explicit: bool,
    pub session_dir: PathBuf,
}

impl ReadmeContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(config: Option<&Path>, session_dir: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ReadmeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd, config, session_dir))
    }

    /// Resolve the context against a known directory.
    pub fn resolve_from<P: AsRef<Path>>(
        cwd: P,
        config: Option<&Path>,
        session_dir: Option<&Path>,
    ) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        let config_explicit = config.is_some();
        let config_path = cwd.join(config.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)));
        let session_dir = cwd.join(session_dir.unwrap_or(Path::new(DEFAULT_SESSION_DIR)));

        Self {
            cwd,
            config_path,
            config_explicit,
            session_dir,
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.session_dir.join(SESSION_FILE)
    }

    pub fn session_exists(&self) -> bool {
        self.session_path().exists()
    }

    /// Load the config.
    ///
    /// A missing default `readmequick.yaml` yields the defaults; a missing
    /// file named with `--config` is a `ConfigError`.
    pub fn load_config(&self) -> Result<Config> {
        if self.config_explicit {
            Config::load(&self.config_path)
        } else {
            Config::load_or_default(&self.config_path)
        }
    }

    /// Resolve an output path against the working directory.
    pub fn output_path(&self, output: &str) -> PathBuf {
        self.cwd.join(output)
    }
}
