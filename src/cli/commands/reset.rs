use crate::cli::commands::{ask_confirmation, require_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::{info, success};

/// Replace the whole catalog with the default set. Administrator only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);
        require_admin(&gate)?;

        let prompt = "Restore the default catalog? All changes will be lost.";
        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = ServiceStore::new(&backend);
        let services = store.reset()?;
        success(format!(
            "Catalog restored to the {} default services",
            services.len()
        ));
    }
    Ok(())
}
