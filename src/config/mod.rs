use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,
}

fn default_company_name() -> String {
    "Lasa Technology".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_generation_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            company_name: default_company_name(),
            gemini_model: default_gemini_model(),
            generation_timeout_secs: default_generation_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("svcatalog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".svcatalog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("svcatalog.conf")
    }

    /// Return the default catalog data directory
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or unparseable file falls back to defaults with a
    /// warning instead of aborting.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Configuration file {:?} is not valid, using defaults ({})",
                        path, e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Could not read configuration file {:?}, using defaults ({})",
                    path, e
                ));
                Self::default()
            }
        }
    }

    /// Initialize the configuration file and the data directory.
    /// In test mode the config file is not written, only the data dir is
    /// prepared.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = if let Some(d) = custom_dir {
            let p = std::path::Path::new(&d);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_default()
        };

        fs::create_dir_all(&data_dir)?;

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
