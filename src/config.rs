//! Runtime settings
//!
//! Read from environment variables, with defaults for everything.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::random::RandomSource;

pub const WORKERS_VAR: &str = "PWD_FORGE_WORKERS";
pub const RNG_VAR: &str = "PWD_FORGE_RNG";
pub const SEED_VAR: &str = "PWD_FORGE_SEED";
pub const BATCH_PATH_VAR: &str = "PWD_FORGE_BATCH_PATH";
pub const LENGTH_VAR: &str = "PWD_FORGE_LENGTH";

const DEFAULT_BATCH_PATH: &str = "./passwords.txt";
const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub workers: usize,
    pub random_source: RandomSource,
    pub batch_path: PathBuf,
    pub default_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            random_source: RandomSource::default(),
            batch_path: PathBuf::from(DEFAULT_BATCH_PATH),
            default_length: DEFAULT_LENGTH,
        }
    }
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_FORGE_WORKERS`: worker count (default: available parallelism)
    /// - `PWD_FORGE_RNG`: `standard` or `secure` (default: `standard`)
    /// - `PWD_FORGE_SEED`: u64 seed; selects a deterministic source and
    ///   takes precedence over `PWD_FORGE_RNG`
    /// - `PWD_FORGE_BATCH_PATH`: batch input file (default: `./passwords.txt`)
    /// - `PWD_FORGE_LENGTH`: default generated length (default: 12)
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` if a variable is set but unparsable,
    /// or if a count is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(workers) = parse_var::<usize>(WORKERS_VAR)? {
            settings.workers = positive(WORKERS_VAR, workers)?;
        }
        if let Some(length) = parse_var::<usize>(LENGTH_VAR)? {
            settings.default_length = positive(LENGTH_VAR, length)?;
        }
        if let Some(source) = parse_var::<RandomSource>(RNG_VAR)? {
            settings.random_source = source;
        }
        if let Some(seed) = parse_var::<u64>(SEED_VAR)? {
            settings.random_source = RandomSource::Seeded(seed);
        }
        if let Ok(path) = std::env::var(BATCH_PATH_VAR) {
            settings.batch_path = PathBuf::from(path);
        }

        Ok(settings)
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

fn positive(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn clear_all() {
        for key in [WORKERS_VAR, RNG_VAR, SEED_VAR, BATCH_PATH_VAR, LENGTH_VAR] {
            remove_env(key);
        }
    }

    #[test]
    #[serial]
    fn test_settings_defaults() {
        clear_all();

        let settings = Settings::from_env().unwrap();
        assert!(settings.workers >= 1);
        assert_eq!(settings.random_source, RandomSource::Standard);
        assert_eq!(settings.batch_path, PathBuf::from("./passwords.txt"));
        assert_eq!(settings.default_length, 12);
    }

    #[test]
    #[serial]
    fn test_settings_from_env() {
        clear_all();
        set_env(WORKERS_VAR, "3");
        set_env(RNG_VAR, "secure");
        set_env(BATCH_PATH_VAR, "/tmp/batch.txt");
        set_env(LENGTH_VAR, " 20 ");

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.workers, 3);
        assert_eq!(settings.random_source, RandomSource::Secure);
        assert_eq!(settings.batch_path, PathBuf::from("/tmp/batch.txt"));
        assert_eq!(settings.default_length, 20);

        clear_all();
    }

    #[test]
    #[serial]
    fn test_seed_overrides_rng_choice() {
        clear_all();
        set_env(RNG_VAR, "secure");
        set_env(SEED_VAR, "1234");

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.random_source, RandomSource::Seeded(1234));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_all();

        set_env(WORKERS_VAR, "many");
        assert_eq!(
            Settings::from_env(),
            Err(ConfigError::InvalidValue {
                key: WORKERS_VAR,
                value: "many".to_string()
            })
        );

        set_env(WORKERS_VAR, "0");
        assert!(Settings::from_env().is_err());
        remove_env(WORKERS_VAR);

        set_env(SEED_VAR, "-1");
        assert!(Settings::from_env().is_err());

        clear_all();
    }
}
