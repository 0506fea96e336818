use crate::error::ConfigError;
use crate::settings::Config;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DisplaySettings, LogLevel, LoggingSettings, StoreSettings};

/// Prefix for environment overrides, e.g. `STOREPULSE_DISPLAY__PAGE_SIZE=25`.
pub const ENV_PREFIX: &str = "STOREPULSE";

/// Loads the application configuration.
///
/// Reads `path` when given (it must exist), otherwise an optional `config.toml` in the working
/// directory, then layers `STOREPULSE_*` environment variables on top and validates the result.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    tracing::debug!(?config, "Configuration loaded.");

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "display.page_size must be at least 1".to_string(),
        ));
    }
    Ok(())
}
