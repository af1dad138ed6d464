use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::store::FileBackend;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let backend = FileBackend::new(&cfg.data_dir)?;
    let gate = AccessGate::new(&backend);
    gate.logout()?;
    success("Logged out");
    Ok(())
}
