use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::success;

/// Create the configuration and data directory, seed the default catalog
/// and the default role credentials.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    let backend = FileBackend::new(&cfg.data_dir)?;

    let store = ServiceStore::new(&backend);
    let services = store.list()?;

    let gate = AccessGate::new(&backend);
    gate.ensure_seeded()?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Catalog:     {:?}", backend.dir()));
    success(format!("Services:    {}", services.len()));

    Ok(())
}
