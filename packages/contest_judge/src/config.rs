use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::ConfigError;

trait EnvVarFromStr: Sized {
    fn from_env_var_str(name: &str, v: &str) -> Result<Self, ConfigError>;
}

macro_rules! from_str_env_var_types {
  ($type: ty) => {
    impl EnvVarFromStr for $type {
      fn from_env_var_str(name: &str, v: &str) -> Result<Self, ConfigError> {
        Self::from_str(v.trim()).map_err(|e| ConfigError {
          name: name.to_owned(),
          reason: format!("failed to parse with error {}", e),
        })
      }
    }
  };

  ($($type: ty),+) => {
    $( from_str_env_var_types!( $type ); )+
  };
}

from_str_env_var_types!(String, u64, PathBuf);

fn var<T: EnvVarFromStr>(name: &str) -> Result<T, ConfigError> {
    let v = env::var(name).map_err(|_| ConfigError {
        name: name.to_owned(),
        reason: "environment variable is not defined".to_owned(),
    })?;
    T::from_env_var_str(name, &v)
}

fn var_with_default<T: EnvVarFromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => T::from_env_var_str(name, &v),
        _ => Ok(default),
    }
}

pub const DEFAULT_LOG_PROGRESS_EVERY: u64 = 10_000;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// JSON array of prizes.
    pub prizes_path: PathBuf,
    /// JSON lines, one participation per line.
    pub contestants_path: PathBuf,
    pub winners_path: PathBuf,
    /// Log progress after this many participations. 0 disables progress logs.
    pub log_progress_every: u64,
}

impl JudgeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        debug!("Loading config from environment variables");

        let config = Self {
            prizes_path: var("CONTEST_PRIZES_PATH")?,
            contestants_path: var("CONTEST_CONTESTANTS_PATH")?,
            winners_path: var("CONTEST_WINNERS_PATH")?,
            log_progress_every: var_with_default("CONTEST_LOG_PROGRESS_EVERY", DEFAULT_LOG_PROGRESS_EVERY)?,
        };

        debug!("Config loaded from environment variables: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn set_required_vars() {
        env::set_var("CONTEST_PRIZES_PATH", "/data/prizes.json");
        env::set_var("CONTEST_CONTESTANTS_PATH", "/data/contestants.jsonl");
        env::set_var("CONTEST_WINNERS_PATH", "/data/winners.json");
    }

    fn unset_all_vars() {
        for name in [
            "CONTEST_PRIZES_PATH",
            "CONTEST_CONTESTANTS_PATH",
            "CONTEST_WINNERS_PATH",
            "CONTEST_LOG_PROGRESS_EVERY",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn read_env_to_config() {
        unset_all_vars();
        set_required_vars();
        env::set_var("CONTEST_LOG_PROGRESS_EVERY", "250");

        let config = JudgeConfig::from_env().unwrap();
        assert_eq!(
            config,
            JudgeConfig {
                prizes_path: PathBuf::from("/data/prizes.json"),
                contestants_path: PathBuf::from("/data/contestants.jsonl"),
                winners_path: PathBuf::from("/data/winners.json"),
                log_progress_every: 250,
            }
        );
        unset_all_vars();
    }

    #[test]
    #[serial]
    fn progress_interval_falls_back_to_default() {
        unset_all_vars();
        set_required_vars();

        let config = JudgeConfig::from_env().unwrap();
        assert_eq!(config.log_progress_every, DEFAULT_LOG_PROGRESS_EVERY);
        unset_all_vars();
    }

    #[test]
    #[serial]
    fn missing_variable_is_reported_by_name() {
        unset_all_vars();
        set_required_vars();
        env::remove_var("CONTEST_WINNERS_PATH");

        let error = JudgeConfig::from_env().unwrap_err();
        assert_eq!(error.name, "CONTEST_WINNERS_PATH");
        unset_all_vars();
    }

    #[test]
    #[serial]
    fn unparsable_number_is_an_error() {
        unset_all_vars();
        set_required_vars();
        env::set_var("CONTEST_LOG_PROGRESS_EVERY", "often");

        let error = JudgeConfig::from_env().unwrap_err();
        assert_eq!(error.name, "CONTEST_LOG_PROGRESS_EVERY");
        assert!(error.reason.starts_with("failed to parse"));
        unset_all_vars();
    }
}
