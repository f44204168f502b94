mod test_utils;

use fanout_logger::{FormatOptions, Logger, LoggerConfig};
use temp_dir::TempDir;

#[test]
fn test_creates_directories() {
    let (logger, _console, dir) = test_utils::logger_in_temp_dir(
        LoggerConfig::new("deep.log")
            .directory("a/b/c")
            .include(FormatOptions::LEVEL),
    );
    let path = test_utils::file_path(dir.path(), "a/b/c/deep.log");
    assert!(path.is_file());

    logger.info().println("created");
    assert_eq!(test_utils::read(&path), "INFO created\n");
}

#[test]
fn test_appends_to_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("app.log");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "line from an earlier run\n").unwrap();

    for run in 1..=2 {
        let logger = Logger::try_new_in(
            Some(
                LoggerConfig::new("app.log")
                    .directory("logs")
                    .include(FormatOptions::LEVEL),
            ),
            dir.path(),
        )
        .unwrap();
        fanout_logger::logf!(logger.info(), "run {run}");
    }

    assert_eq!(
        test_utils::read(&path),
        "line from an earlier run\nINFO run 1\nINFO run 2\n"
    );
}

#[test]
fn test_absolute_directory_with_process_working_dir() {
    // an absolute directory replaces the working directory in the path
    let dir = TempDir::new().unwrap();
    let logger = fanout_logger::new_logger(Some(
        LoggerConfig::new("abs.log")
            .directory(dir.path())
            .include(FormatOptions::LEVEL),
    ))
    .unwrap();
    logger.error().println("absolute");

    let path = dir.path().join("abs.log");
    assert_eq!(logger.log_file_path(), Some(path.as_path()));
    assert_eq!(test_utils::read(&path), "ERROR absolute\n");
}
