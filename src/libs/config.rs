//! Configuration management.
//!
//! Settings live in a JSON file in the platform application data
//! directory. Every module is optional: an absent section means the
//! built-in default, and unconfigured sections are omitted from the file.
//!
//! Two modules exist:
//! - **Storage**: overrides the directory holding the task data file.
//! - **View**: controls whether the default listing includes completed
//!   tasks.
//!
//! `Config::init` runs an interactive wizard over these modules, seeded
//! with the current values.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module shown in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Storage backend settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Directory holding the task data file. Platform default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Task listing preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Include completed tasks in the default listing.
    pub show_done: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig { show_done: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the default configuration
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard and returns the updated
    /// configuration for saving. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: "Storage".to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: "View".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage.clone().unwrap_or(StorageConfig { dir: None });
                    msg_print!(Message::ConfigModuleStorage);
                    let dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStorageDir.to_string())
                        .default(default.dir.map(|dir| dir.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    config.storage = Some(StorageConfig {
                        dir: if dir.is_empty() { None } else { Some(PathBuf::from(dir)) },
                    });
                }
                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);
                    let show_done = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptShowDone.to_string())
                        .default(default.show_done)
                        .interact()?;
                    config.view = Some(ViewConfig { show_done });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
