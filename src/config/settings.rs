//! Layered settings: config file, then environment, then command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ResolverOptions;
use crate::cli::InputArgs;
use crate::error::ConfigError;

/// Name of the settings file looked up in the working and home directories.
pub const CONFIG_FILE_NAME: &str = ".taskmd.yaml";

/// Prefix of the environment variables that override the settings file.
pub const ENV_PREFIX: &str = "TASKMD";

/// Settings shared by every command of the tool.
///
/// Unknown keys are ignored so the same file can carry settings for other
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Read input from stdin instead of a file
    pub stdin: bool,
    /// Verbose logging
    pub verbose: bool,
}

/// Where [`Settings::load_or_default`] took its values from.
#[derive(Debug)]
pub enum SettingsOrigin {
    /// No settings file was found
    Defaults,
    File(PathBuf),
    /// The file was unreadable or malformed and its values were dropped
    Ignored(ConfigError),
}

impl Settings {
    /// Parse settings from YAML text. Blank text yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load an explicitly named settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Locate `.taskmd.yaml`, preferring the working directory over the home
    /// directory.
    pub fn find_config_file(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
        std::iter::once(cwd)
            .chain(home)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the first settings file found by [`Settings::find_config_file`],
    /// together with its path. No file means default settings.
    pub fn discover(cwd: &Path, home: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match Self::find_config_file(cwd, home) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Settings for one command invocation.
    ///
    /// Uses `config` when given, otherwise the discovered `.taskmd.yaml`. A
    /// file that cannot be read or parsed leaves the defaults in place; the
    /// returned origin says what happened.
    pub fn load_or_default(
        config: Option<&Path>,
        cwd: &Path,
        home: Option<&Path>,
    ) -> (Self, SettingsOrigin) {
        let path = match config {
            Some(path) => path.to_path_buf(),
            None => match Self::find_config_file(cwd, home) {
                Some(path) => path,
                None => return (Self::default(), SettingsOrigin::Defaults),
            },
        };

        match Self::load(&path) {
            Ok(settings) => (settings, SettingsOrigin::File(path)),
            Err(e) => (Self::default(), SettingsOrigin::Ignored(e)),
        }
    }

    /// Overlay `TASKMD_STDIN` and `TASKMD_VERBOSE` from `vars`.
    ///
    /// Values are read like Go's `strconv.ParseBool`; anything else counts
    /// as false.
    pub fn apply_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let stdin_key = format!("{ENV_PREFIX}_STDIN");
        let verbose_key = format!("{ENV_PREFIX}_VERBOSE");

        for (key, value) in vars {
            let flag = parse_bool(value.as_ref());
            if key.as_ref() == stdin_key {
                self.stdin = flag;
            } else if key.as_ref() == verbose_key {
                self.verbose = flag;
            }
        }
        self
    }

    /// Overlay the process environment.
    pub fn with_process_env(self) -> Self {
        self.apply_env(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Command-line flags can only switch settings on.
    pub fn merge_flags(mut self, args: &InputArgs) -> Self {
        self.stdin |= args.stdin;
        self.verbose |= args.verbose;
        self
    }

    pub fn options(&self) -> ResolverOptions {
        ResolverOptions::new(self.stdin, self.verbose)
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "t" | "T" | "true" | "TRUE" | "True")
}

/// Home directory of the current user.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
