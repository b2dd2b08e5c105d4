//! Configuration types for the resolver.
//!
//! This module provides:
//! - `ResolverOptions`: The two flags a resolver is built from
//! - `Settings`: Layered settings from `.taskmd.yaml`, the environment and
//!   command-line flags

mod options;
mod settings;

pub use options::ResolverOptions;
pub use settings::{CONFIG_FILE_NAME, ENV_PREFIX, Settings, SettingsOrigin, home_dir};
