use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::AppResult;
use crate::store::FileBackend;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let backend = FileBackend::new(&cfg.data_dir)?;
    let gate = AccessGate::new(&backend);
    let session = gate.session();

    if session.authenticated {
        let role = session
            .role
            .map(|r| r.describe())
            .unwrap_or("editor");
        println!("authenticated ({})", role);
    } else {
        println!("not authenticated");
    }
    Ok(())
}
