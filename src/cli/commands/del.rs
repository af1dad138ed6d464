use crate::cli::commands::{ask_confirmation, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::{info, success};

/// Delete one or more services by identifier. Unknown identifiers are a
/// no-op, not an error.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, yes } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);
        require_session(&gate)?;

        let prompt = if ids.len() == 1 {
            format!("Delete service '{}'? This action is irreversible.", ids[0])
        } else {
            format!(
                "Delete {} services? This action is irreversible.",
                ids.len()
            )
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = ServiceStore::new(&backend);
        let before = store.list()?.len();

        let remaining = if ids.len() == 1 {
            store.delete_one(&ids[0])?
        } else {
            store.delete_many(ids)?
        };

        success(format!(
            "{} service(s) deleted, {} remaining",
            before - remaining.len(),
            remaining.len()
        ));
    }
    Ok(())
}
