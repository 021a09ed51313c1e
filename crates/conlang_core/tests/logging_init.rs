use conlang_core::{init_logging, logging_status, LoggingConfig};

#[test]
fn init_is_idempotent_and_rejects_conflicts() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let first_path = first.path().to_str().unwrap().to_string();
    let second_path = second.path().to_str().unwrap().to_string();

    LoggingConfig::new("info", first.path())
        .init()
        .expect("first init should succeed");
    init_logging("INFO", &first_path).expect("same config should be idempotent");

    let level_error = init_logging("debug", &first_path).expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &second_path).expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, first.path());
}

#[test]
fn init_rejects_bad_arguments() {
    assert!(init_logging("verbose", "/tmp").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
}
