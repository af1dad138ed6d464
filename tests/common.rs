#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn svc() -> Command {
    cargo_bin_cmd!("svcatalog")
}

/// Create a unique catalog data directory inside the system temp dir and
/// remove any leftovers from a previous run
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_svcatalog_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Initialize the catalog (seeds the default services and credentials)
pub fn init_catalog(data_dir: &str) {
    svc()
        .args(["--data-dir", data_dir, "--test", "init"])
        .assert()
        .success();
}

/// Open an administrator session in the given data directory
pub fn login_admin(data_dir: &str) {
    svc()
        .args(["--data-dir", data_dir, "login", "admin123"])
        .assert()
        .success();
}

/// Open an editor session in the given data directory
pub fn login_editor(data_dir: &str) {
    svc()
        .args(["--data-dir", data_dir, "login", "editor123"])
        .assert()
        .success();
}

/// Add a small service useful for many tests
pub fn add_sample_service(data_dir: &str, title: &str, category: &str) {
    svc()
        .args([
            "--data-dir",
            data_dir,
            "add",
            "--title",
            title,
            "--description",
            "A sample service used by the test suite.",
            "--category",
            category,
        ])
        .assert()
        .success();
}
