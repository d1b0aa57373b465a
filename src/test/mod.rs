use std::fs::remove_dir_all;
use std::path::PathBuf;

use crate::config::PhotoDropConfig;

mod upload_handler_tests;

/// every test works in its own directory, named after the test's thread, so they can run in parallel
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread
        .name()
        .unwrap_or("main")
        .replace("::", "_")
}

pub fn pictures_dir() -> PathBuf {
    PathBuf::from(format!("./{}_pictures", current_thread_name()))
}

/// default config pointed at this test's pictures directory
pub fn test_config() -> PhotoDropConfig {
    let mut config = PhotoDropConfig::default();
    config.pictures.directory = pictures_dir().to_string_lossy().to_string();
    config
}

pub fn cleanup() {
    remove_dir_all(pictures_dir()).unwrap_or(());
}
