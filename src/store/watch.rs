//! Change notification for the persisted catalog.
//!
//! The admin surface of another process may rewrite the collection at any
//! time; a polling watcher over the services file stands in for a storage
//! change event. Observers registered with [`StoreWatcher::on_change`] are
//! invoked after a committed write is detected. Best-effort and eventual: a
//! write is only seen once the next poll tick observes a different file
//! state.

use crate::store::FileBackend;
use crate::store::keys;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

type ChangeCallback = Box<dyn Fn() + Send + 'static>;

pub struct StoreWatcher {
    callbacks: Arc<Mutex<Vec<ChangeCallback>>>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    path: PathBuf,
    interval: Duration,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct FileState {
    modified: Option<SystemTime>,
    len: u64,
}

fn probe(path: &PathBuf) -> Option<FileState> {
    let meta = fs::metadata(path).ok()?;
    Some(FileState {
        modified: meta.modified().ok(),
        len: meta.len(),
    })
}

impl StoreWatcher {
    pub fn new(backend: &FileBackend, interval: Duration) -> Self {
        Self {
            callbacks: Arc::new(Mutex::new(Vec::new())),
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
            path: backend.path_of(keys::SERVICES),
            interval,
        }
    }

    /// Register an observer invoked after each detected committed write.
    pub fn on_change<F: Fn() + Send + 'static>(&self, callback: F) {
        if let Ok(mut cbs) = self.callbacks.lock() {
            cbs.push(Box::new(callback));
        }
    }

    /// Start the polling thread. Idempotent: a second call is a no-op.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        let callbacks = Arc::clone(&self.callbacks);
        let stop = Arc::clone(&self.stop);
        let path = self.path.clone();
        let interval = self.interval;

        self.handle = Some(thread::spawn(move || {
            let mut last = probe(&path);
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(interval);
                let current = probe(&path);
                if current != last {
                    last = current;
                    if let Ok(cbs) = callbacks.lock() {
                        for cb in cbs.iter() {
                            cb();
                        }
                    }
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for StoreWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
