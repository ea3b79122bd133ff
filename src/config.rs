//! Runtime settings and logger set-up.
//!
//! Settings come from the environment (optionally a `.env` file loaded by the
//! binary) and can be overridden by command line flags.

use crate::output::OutputFormat;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const ENV_LOG_CONFIG: &str = "IPCALC_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "IPCALC_LOG_LEVEL";
pub const ENV_OUTPUT: &str = "IPCALC_OUTPUT";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// log4rs YAML file, used when it exists.
    pub log_config: String,
    /// Root level for the built-in stderr logger.
    pub log_level: LevelFilter,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: LevelFilter::Warn,
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            settings.log_config = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            settings.log_level = level
                .trim()
                .parse()
                .map_err(|_| format!("Invalid {ENV_LOG_LEVEL} {level:?}"))?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            settings.output = output
                .parse()
                .map_err(|e| format!("Invalid {ENV_OUTPUT}: {e}"))?;
        }
        Ok(settings)
    }
}

/// Initialise log4rs from the configured YAML file, falling back to a stderr
/// logger at `settings.log_level` when the file is missing.
pub fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if Path::new(&settings.log_config).exists() {
        log4rs::init_file(&settings.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", settings.log_config))?;
        log::debug!("Logging configured from {}", settings.log_config);
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(settings.log_level))?;
    log4rs::init_config(config)?;
    log::debug!(
        "{} not found, logging to stderr at {}",
        settings.log_config,
        settings.log_level
    );
    Ok(())
}
