//! Configuration management for fleet-manager
//!
//! Config stored at: ~/.config/fleet-manager/config.json

use std::path::{Path, PathBuf};

use fleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "fleet-manager";
const DEFAULT_DATA_FILE: &str = "automobili.csv";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rental company name shown as the title
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Current fleet manager
    #[serde(default = "default_manager")]
    pub manager: String,

    /// Fleet CSV file override
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Start the GUI with the dark theme
    #[serde(default = "default_true")]
    pub dark_theme: bool,
}

fn default_company_name() -> String {
    "Polito Rent".to_string()
}

fn default_manager() -> String {
    "Alessandro Visconti".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            manager: default_manager(),
            data_file: None,
            output_format: OutputFormat::default(),
            dark_theme: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the fleet CSV path
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.data_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir.join(DEFAULT_DATA_FILE))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or fall back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Manager Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Company:        {}", self.company_name)?;
        writeln!(f, "Manager:        {}", self.manager)?;
        writeln!(
            f,
            "Data file:      {}",
            self.data_file()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Dark theme:     {}", self.dark_theme)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
