/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use technotes_views::{NoteViewParams, UserViewParams};

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "technotes.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub notes: NotesSettings,

    #[serde(default)]
    pub users: UsersSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotesSettings {
    /// Toolbar state used when a flag is not given
    #[serde(default)]
    pub view: NoteViewParams,

    /// Reference refresh interval of the notes cache
    #[serde(default = "default_notes_poll_secs")]
    pub poll_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsersSettings {
    #[serde(default)]
    pub view: UserViewParams,

    /// Reference refresh interval of the users cache
    #[serde(default = "default_users_poll_secs")]
    pub poll_interval_secs: u64,
}

impl NotesSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl UsersSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `technotes.toml` lookup; an explicit path
    /// must exist. Environment variables prefixed `TECHNOTES__` override both,
    /// e.g. `TECHNOTES__NOTES__POLL_INTERVAL_SECS=30`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Double underscore keeps field names like `poll_interval_secs` intact
        settings = settings.add_source(
            config::Environment::with_prefix("TECHNOTES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.notes.poll_interval_secs == 0 {
            return Err(CliError::Config(
                "notes.poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.users.poll_interval_secs == 0 {
            return Err(CliError::Config(
                "users.poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// Default values
fn default_notes_poll_secs() -> u64 {
    15
}

fn default_users_poll_secs() -> u64 {
    60
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            view: NoteViewParams::default(),
            poll_interval_secs: default_notes_poll_secs(),
        }
    }
}

impl Default for UsersSettings {
    fn default() -> Self {
        Self {
            view: UserViewParams::default(),
            poll_interval_secs: default_users_poll_secs(),
        }
    }
}
