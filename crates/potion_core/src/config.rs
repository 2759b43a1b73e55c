//! Runtime configuration resolved from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `MOOD_ALCHEMY_DB_PATH` | `<temp dir>/mood_alchemy.sqlite3` |
//! | `MOOD_ALCHEMY_LOG_DIR` | unset: file logging disabled |
//! | `MOOD_ALCHEMY_LOG_LEVEL` | [`default_log_level`] |

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "MOOD_ALCHEMY_DB_PATH";
pub const LOG_DIR_ENV: &str = "MOOD_ALCHEMY_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "MOOD_ALCHEMY_LOG_LEVEL";
const DEFAULT_DB_FILE_NAME: &str = "mood_alchemy.sqlite3";

/// Storage and logging settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_dir: None,
            log_level: default_log_level().to_string(),
        }
    }
}

impl CoreConfig {
    /// Reads the process environment; blank variables count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup` instead of the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            db_path: read(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
        }
    }
}
