use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SvgChartError};

use super::Config;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".svgchart.toml";

/// File name looked up in the platform config directory.
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`.
    Explicit(PathBuf),
    /// `.svgchart.toml` in the working directory.
    Local(PathBuf),
    /// `config.toml` in the user config directory.
    User(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::User(path) => Some(path.as_path()),
            Self::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::Local(path) => write!(f, "{} (working directory)", path.display()),
            Self::User(path) => write!(f, "{} (user config)", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    pub source: ConfigSource,
}

pub trait ConfigLoader {
    /// Load the first configuration found in the search locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Filesystem access used while searching for configuration.
pub trait FileSystem {
    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform config directory for svgchart (XDG on Linux, `%APPDATA%` on
    /// Windows, `Application Support` on macOS).
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "svgchart")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Searches the working directory, then the user config directory, and
/// falls back to [`Config::default`].
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Candidate locations in search order.
    #[must_use]
    pub fn candidates(&self) -> Vec<ConfigSource> {
        let local = self
            .fs
            .current_dir()
            .ok()
            .map(|dir| ConfigSource::Local(dir.join(LOCAL_CONFIG_NAME)));
        let user = self
            .fs
            .config_dir()
            .map(|dir| ConfigSource::User(dir.join(USER_CONFIG_NAME)));
        local.into_iter().chain(user).collect()
    }

    /// Read `path`, treating a missing file as absent.
    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        match self.fs.read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SvgChartError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn finish(content: &str, source: ConfigSource) -> Result<LoadResult> {
        let config: Config = toml::from_str(content)?;
        debug!(%source, "parsed configuration");
        Ok(LoadResult { config, source })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for candidate in self.candidates() {
            let Some(path) = candidate.path() else {
                continue;
            };
            if let Some(content) = self.read_optional(path)? {
                return Self::finish(&content, candidate);
            }
            debug!(%candidate, "no configuration here");
        }

        Ok(LoadResult {
            config: Config::default(),
            source: ConfigSource::Defaults,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SvgChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::finish(&content, ConfigSource::Explicit(path.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
