//! Configuration management for the streaks application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! resolved by [`DataStorage`]. Every section is optional; a missing file
//! yields [`Config::default`], which is enough to run the local commands.
//!
//! ## Sections
//!
//! - **server**: bind address and port for `streaks serve`
//! - **auth**: bearer tokens accepted by the server and the owner each maps to
//! - **owner**: owner id used by the local `task`, `history` and `stats` commands
//! - **clock**: optional fixed UTC offset deciding where a day starts
//! - **remote**: server URL and credentials for the `remote` commands
//!
//! ```rust,no_run
//! use streaks::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("local owner: {}", config.local_owner());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Owner id used by local commands when none is configured.
pub const DEFAULT_OWNER: &str = "local";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Token table consulted by the server's auth layer.
///
/// Keys are bearer tokens, values the owner id a token authenticates as.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuthConfig {
    pub tokens: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClockConfig {
    /// Fixed offset from UTC in minutes; `None` follows the host's local time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    pub api_url: String,
    pub token: String,
    pub owner: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn local_owner(&self) -> &str {
        self.owner.as_deref().filter(|owner| !owner.trim().is_empty()).unwrap_or(DEFAULT_OWNER)
    }

    pub fn server_config(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn tokens(&self) -> BTreeMap<String, String> {
        self.auth.as_ref().map(|auth| auth.tokens.clone()).unwrap_or_default()
    }

    /// Interactive setup wizard; starts from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "auth".to_string(),
                name: Message::ConfigModuleAuth.to_string(),
            },
            ConfigModule {
                key: "owner".to_string(),
                name: Message::ConfigModuleOwner.to_string(),
            },
            ConfigModule {
                key: "clock".to_string(),
                name: Message::ConfigModuleClock.to_string(),
            },
            ConfigModule {
                key: "remote".to_string(),
                name: Message::ConfigModuleRemote.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server_config();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        host: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerHost.to_string())
                            .default(default.host)
                            .interact_text()?,
                        port: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerPort.to_string())
                            .default(default.port)
                            .interact_text()?,
                    });
                }
                "auth" => {
                    msg_print!(Message::ConfigModuleAuth);
                    let token: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAuthToken.to_string())
                        .interact_text()?;
                    let owner: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAuthOwner.to_string())
                        .interact_text()?;
                    config.auth.get_or_insert_with(AuthConfig::default).tokens.insert(token, owner);
                }
                "owner" => {
                    msg_print!(Message::ConfigModuleOwner);
                    config.owner = Some(
                        Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLocalOwner.to_string())
                            .default(config.local_owner().to_string())
                            .interact_text()?,
                    );
                }
                "clock" => {
                    msg_print!(Message::ConfigModuleClock);
                    let offset: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUtcOffset.to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    config.clock = Some(ClockConfig {
                        utc_offset_minutes: offset.trim().parse().ok(),
                    });
                }
                "remote" => {
                    let default = config.remote.clone().unwrap_or(RemoteConfig {
                        api_url: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
                        token: "".to_string(),
                        owner: config.local_owner().to_string(),
                    });
                    msg_print!(Message::ConfigModuleRemote);
                    config.remote = Some(RemoteConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemoteApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        token: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemoteToken.to_string())
                            .default(default.token)
                            .interact_text()?,
                        owner: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemoteOwner.to_string())
                            .default(default.owner)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
