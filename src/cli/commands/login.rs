use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::{AppError, AppResult};
use crate::store::FileBackend;
use crate::ui::messages::success;

/// Open a session. The same generic failure covers every non-matching
/// password; there are no usernames to distinguish.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { password } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);

        if !gate.login(password)? {
            return Err(AppError::InvalidCredentials);
        }

        let session = gate.session();
        let role = session
            .role
            .map(|r| r.describe())
            .unwrap_or("editor");
        success(format!("Logged in as {}", role));
    }
    Ok(())
}
