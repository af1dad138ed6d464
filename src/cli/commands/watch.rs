use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{FileBackend, ServiceStore, StoreWatcher};
use crate::ui::messages::info;
use std::sync::mpsc;
use std::time::Duration;

/// Report catalog writes from other processes until interrupted. Each
/// detected write triggers a fresh read of the collection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let store = ServiceStore::new(&backend);
        info(format!(
            "Watching {:?} every {}s, Ctrl+C to stop ({} services)",
            backend.dir(),
            interval,
            store.list()?.len()
        ));

        let (tx, rx) = mpsc::channel::<()>();
        let mut watcher = StoreWatcher::new(&backend, Duration::from_secs(*interval));
        watcher.on_change(move || {
            let _ = tx.send(());
        });
        watcher.start();

        // The watcher thread owns the sender; each tick with a detected
        // write lands here and we re-read the snapshot.
        while rx.recv().is_ok() {
            let count = store.list()?.len();
            info(format!("Catalog changed, now {} service(s)", count));
        }
    }
    Ok(())
}
