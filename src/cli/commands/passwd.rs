use crate::cli::commands::require_admin;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::{AppError, AppResult};
use crate::store::FileBackend;
use crate::ui::messages::success;

const MIN_PASSWORD_LEN: usize = 6;

/// Rotate the administrator credential. The editor credential cannot be
/// changed through this interface.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Passwd { new_password } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);
        require_admin(&gate)?;

        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if !gate.change_password(new_password)? {
            return Err(AppError::PermissionDenied(
                "this action requires the administrator role".to_string(),
            ));
        }

        success("Administrator password updated");
    }
    Ok(())
}
