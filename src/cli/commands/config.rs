use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{FileBackend, KeyValue, keys};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        set_theme,
        set_language,
    } = cmd
    {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if let Some(theme) = set_theme {
            if theme != "light" && theme != "dark" {
                return Err(AppError::InvalidArgument(format!(
                    "unknown theme '{}', expected 'light' or 'dark'",
                    theme
                )));
            }
            let backend = FileBackend::new(&cfg.data_dir)?;
            backend.set(keys::THEME, theme)?;
            success(format!("Theme preference set to '{}'", theme));
        }

        if let Some(lang) = set_language {
            if lang != "en" && lang != "ar" {
                return Err(AppError::InvalidArgument(format!(
                    "unknown language '{}', expected 'en' or 'ar'",
                    lang
                )));
            }
            let backend = FileBackend::new(&cfg.data_dir)?;
            backend.set(keys::LANGUAGE, lang)?;
            success(format!("Display language set to '{}'", lang));
        }

        if *print_config {
            let backend = FileBackend::new(&cfg.data_dir)?;
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            print!("{}", yaml);
            println!(
                "theme: {}",
                backend.get(keys::THEME).unwrap_or_else(|| "light".into())
            );
            println!(
                "language: {}",
                backend.get(keys::LANGUAGE).unwrap_or_else(|| "en".into())
            );
        }
    }
    Ok(())
}
