//!
//! The detection config.
//!

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

///
/// The detection config.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// The install folders probed for toolchains, relative to the application directory.
    #[serde(default = "default_install_folders")]
    pub install_folders: Vec<String>,
    /// The compiler invocation timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            install_folders: default_install_folders(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    ///
    /// Reads the config from a JSON file.
    ///
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Config {path:?} opening error: {error}"))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Config {path:?} parsing error: {error}"))?;
        if config.timeout == 0 {
            anyhow::bail!("Config {path:?} timeout must be positive");
        }
        Ok(config)
    }

    ///
    /// The compiler invocation timeout.
    ///
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

///
/// The 32-bit and 64-bit install folders.
///
fn default_install_folders() -> Vec<String> {
    vec!["MinGW32".to_owned(), "MinGW64".to_owned()]
}

///
/// The default timeout in seconds.
///
fn default_timeout() -> u64 {
    crate::runner::process::ProcessRunner::DEFAULT_TIMEOUT.as_secs()
}
