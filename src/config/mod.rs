//! Configuration: TOML file, environment and CLI overrides.

mod loader;
mod types;

pub use loader::{ConfigError, API_BASE_ENV};
pub use types::{ApiConfig, Config, QuizConfig, UiConfig, UploadConfig};
