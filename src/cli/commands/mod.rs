pub mod add;
pub mod browse;
pub mod config;
pub mod del;
pub mod edit;
pub mod generate;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod passwd;
pub mod reset;
pub mod show;
pub mod watch;
pub mod whoami;

use crate::core::auth::AccessGate;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::KeyValue;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Mutating catalog commands require an open session.
pub(crate) fn require_session<B: KeyValue>(gate: &AccessGate<B>) -> AppResult<Session> {
    let session = gate.session();
    if !session.authenticated {
        return Err(AppError::PermissionDenied(
            "please log in first (svcatalog login <password>)".to_string(),
        ));
    }
    Ok(session)
}

/// Privileged commands additionally require the administrator role.
pub(crate) fn require_admin<B: KeyValue>(gate: &AccessGate<B>) -> AppResult<Session> {
    let session = require_session(gate)?;
    if !session.is_admin() {
        return Err(AppError::PermissionDenied(
            "this action requires the administrator role".to_string(),
        ));
    }
    Ok(session)
}
