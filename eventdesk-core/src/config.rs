//! eventdesk configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Error, EventDeskResult};

/// Hosted collection used when no api_url is configured.
pub static DEFAULT_API_URL: &str = "https://rf-json-server.herokuapp.com/events-5/";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Global configuration at ~/.config/eventdesk/config.toml
///
/// Every key can be overridden from the environment with an `EVENTDESK_`
/// prefix, e.g. `EVENTDESK_API_URL`. List keys take comma-separated values,
/// e.g. `EVENTDESK_SORT=company:asc,name:desc`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventDeskConfig {
    /// REST collection holding the events.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout. Unset means the transport decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Grid column order, e.g. `["name", "company", "description"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,

    /// Grid sort, e.g. `["company:asc", "name:desc"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
}

impl Default for EventDeskConfig {
    fn default() -> Self {
        EventDeskConfig {
            api_url: default_api_url(),
            timeout_secs: None,
            columns: None,
            sort: None,
        }
    }
}

impl EventDeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, writing a commented template first if the
    /// file does not exist yet.
    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) plus `EVENTDESK_*` overrides.
    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("EVENTDESK")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("sort")
            .with_list_parse_key("columns")
    }

    fn load_with_env(path: &Path, env: Environment) -> EventDeskResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Effective settings rendered as TOML.
    pub fn to_toml(&self) -> EventDeskResult<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# REST collection holding your events:
# api_url = \"{}\"

# Give up on a request after this many seconds:
# timeout_secs = 30

# Grid columns, in display order:
# columns = [\"name\", \"company\", \"description\"]

# Grid sort, first key wins:
# sort = [\"company:asc\"]
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
