use krishi_infrastructure::logging;
use tempfile::TempDir;

#[test]
fn test_init_writes_rolling_log_file() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("logs");

    let guard = logging::init(&log_dir).unwrap();
    tracing::info!("logging test entry");
    drop(guard);

    let entries: Vec<String> = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.iter().any(|name| name.starts_with("krishi.log")));

    // the global subscriber is already installed
    assert!(logging::init(&log_dir).is_err());
}
