// Configuration loading

pub mod settings;

pub use settings::{ConfigError, ConfigSource, DashboardConfig, DisplaySettings, InputSettings, LOCAL_CONFIG_FILE};
