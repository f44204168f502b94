#![cfg(feature = "config_file")]
mod test_utils;

use fanout_logger::{FormatOptions, Logger, LoggerConfig, LoggerError, PrefixMode};
use temp_dir::TempDir;

#[test]
fn test_logger_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("logging.toml");
    std::fs::write(
        &config_path,
        r#"
directory = "var/log"
filename = "service.log"
stdout = false
include = "level"
"#,
    )
    .unwrap();

    let config = LoggerConfig::from_file(&config_path).unwrap();
    assert_eq!(
        config,
        LoggerConfig::new("service.log")
            .directory("var/log")
            .include(FormatOptions::LEVEL)
            .prefix_mode(PrefixMode::PerLine)
    );

    let logger = Logger::try_new_in(Some(config), dir.path()).unwrap();
    logger.info().println("configured from file");
    assert_eq!(
        test_utils::read(&dir.path().join("var/log/service.log")),
        "INFO configured from file\n"
    );
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        LoggerConfig::from_file(dir.path().join("missing.toml")),
        Err(LoggerError::Filesystem { .. })
    ));
}

#[test]
fn test_config_file_without_filename() {
    let dir = TempDir::new().unwrap();
    let config = LoggerConfig::from_toml_str(r#"include = "datetime""#).unwrap();
    assert!(matches!(
        Logger::try_new_in(Some(config), dir.path()),
        Err(LoggerError::Config(_))
    ));
}

#[test]
fn test_unknown_key() {
    assert!(matches!(
        LoggerConfig::from_toml_str(r#"rotate = true"#),
        Err(LoggerError::Toml(_))
    ));
}
