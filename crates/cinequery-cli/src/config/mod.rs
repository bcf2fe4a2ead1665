//! Application configuration module.
//!
//! Manages the TOML config file holding the TMDB API key and base URL.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{API_KEY_ENV, AppConfig};
pub use paths::resolve_config_path;
