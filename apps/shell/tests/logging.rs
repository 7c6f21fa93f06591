use paw::domain::config::LogConfig;
use paw_shell::{Shell, init_logging};
use std::fs;

#[test]
fn unknown_level_is_rejected_before_install() {
    let config = LogConfig { level: "loud".to_owned(), ..LogConfig::default() };
    let err = init_logging("pawcalc", &config).unwrap_err();
    assert!(err.to_string().contains("unknown log level 'loud'"), "got: {err}");
}

#[test]
fn file_logging_records_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogConfig {
        level: "info".to_owned(),
        filter: None,
        directory: Some(dir.path().to_path_buf()),
        json: true,
    };

    let logger = init_logging("pawcalc-test", &config).unwrap();
    let shell = Shell::builder().build().unwrap();
    assert!(shell.navigate("/").is_some());
    drop(logger);

    let contents: String = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect();
    assert!(contents.contains("CalculatorView"), "log was: {contents}");
}
