use config::{Config, Environment, File};
pub use config::ConfigError;
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
pub mod models;
pub use models::*;


/// Loads the configuration from the default config directory.
///
/// The directory is `CONFIG_DIR` if set, otherwise `./config`. Sources are
/// layered as `default`, then `RUN_ENV` (defaults to `debug`), then
/// environment variables prefixed with `PREFIX` (defaults to `PLUVIEW`) and
/// split on `__`, e.g. `PLUVIEW__SCHEDULING__LEAD_TIME_MINUTES=45`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Loads the configuration from an explicit directory. Missing files are not an error:
/// every field has a default, so an empty directory yields the built-in values.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "PLUVIEW".to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!(
        "Loading config from {} (RUN_ENV={}, PREFIX={})",
        config_dir.display(),
        run_env,
        prefix
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("scheduling.interests")
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Longest lead time accepted by [`validate`], in minutes.
pub const MAX_LEAD_TIME_MINUTES: u32 = 24 * 60;

/// Rejects values the scheduling engine cannot work with.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let scheduling = &config.scheduling;
    if scheduling.meeting_duration_minutes == 0 {
        return Err(ConfigError::Message(
            "scheduling.meeting_duration_minutes must be positive".to_string(),
        ));
    }
    if scheduling.lead_time_minutes > MAX_LEAD_TIME_MINUTES {
        return Err(ConfigError::Message(format!(
            "scheduling.lead_time_minutes must not exceed {} (one day)",
            MAX_LEAD_TIME_MINUTES
        )));
    }
    if scheduling.max_field_length == 0 || scheduling.max_email_length == 0 {
        return Err(ConfigError::Message(
            "scheduling field length limits must be positive".to_string(),
        ));
    }
    if scheduling.tick_interval_seconds == 0 {
        return Err(ConfigError::Message(
            "scheduling.tick_interval_seconds must be positive".to_string(),
        ));
    }
    if !scheduling.organizer_email.contains('@') {
        return Err(ConfigError::Message(format!(
            "scheduling.organizer_email is not an address: {}",
            scheduling.organizer_email
        )));
    }

    let theme = &config.theme;
    if theme.light_start_hour > 23 || theme.dark_start_hour > 23 {
        return Err(ConfigError::Message(
            "theme hours must be within 0..=23".to_string(),
        ));
    }
    if theme.light_start_hour >= theme.dark_start_hour {
        return Err(ConfigError::Message(format!(
            "theme.light_start_hour ({}) must precede theme.dark_start_hour ({})",
            theme.light_start_hour, theme.dark_start_hour
        )));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// The path is taken from `DOTENV_OVERRIDE`, falling back to `.env`.
/// Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
    dotenv_path
}
