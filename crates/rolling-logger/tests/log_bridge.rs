//! Global logger setup. Lives in its own test binary because
//! `init_logger` installs a process-wide subscriber.

use std::fs;

#[test]
fn test_init_logger_bridges_log_records() {
    let dir = tempfile::tempdir().unwrap();
    rolling_logger::init_logger(dir.path().to_path_buf(), "bridge").unwrap();

    log::info!("from log facade");
    rolling_logger::info("from helper").unwrap();
    rolling_logger::error("helper failure").unwrap();

    let content = fs::read_to_string(dir.path().join("bridge.log")).unwrap();
    assert!(content.starts_with("=== bridge started "));
    assert!(content.contains("from log facade"));
    assert!(content.contains("from helper"));
    assert!(content.contains("helper failure"));

    let recent = rolling_logger::recent_lines();
    assert!(recent.iter().any(|line| line.contains("from log facade")));
    assert!(recent.iter().any(|line| line.contains("from helper")));

    assert!(matches!(
        rolling_logger::init_logger(dir.path().to_path_buf(), "bridge"),
        Err(rolling_logger::LoggerError::AlreadyInitialized)
    ));
}
