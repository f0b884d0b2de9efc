#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use antilog::{Config, Dispatcher, LogLevel, LoggingConfig};

#[test]
fn plants_file_antilog_from_config_and_writes_filtered_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = format!(
        "[Logging]\n\
         console = false\n\
         file = true\n\
         file_dir = \"{}\"\n\
         file_name = cfgtest\n\
         file_min_level = warning\n",
        dir.path().display()
    );
    let logging = LoggingConfig::from_config(&Config::parse(&text)).unwrap();

    let d = Dispatcher::new();
    let planted = d.plant_from_config(&logging);
    assert_eq!(planted.len(), 1);
    assert_eq!(d.registry().len(), 1);
    assert!(!d.is_enabled(LogLevel::Info, None));

    d.info(Some("cfg"), || "filtered out");
    d.warning(Some("cfg"), || "kept");
    d.log(
        LogLevel::Error,
        Some("cfg"),
        || "also kept",
        Some(antilog::throwable("root cause")),
    );

    // Dropping every handle joins the writer thread after it flushes.
    d.uproot_all();
    drop(planted);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().unwrap().path();
    let name = path.file_name().unwrap().to_str().unwrap().to_owned();
    assert!(name.starts_with("cfgtest-"), "got: {name}");

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("filtered out"));
    assert!(text.contains("WARNING/cfg: kept"));
    assert!(text.contains("ERROR/cfg: also kept"));
    assert!(text.contains("    caused by: root cause"));
}

#[test]
fn invalid_config_is_rejected_before_planting() {
    let cfg = Config::parse("[Logging]\nconsole = sometimes\n");
    let err = LoggingConfig::from_config(&cfg).expect_err("should fail");
    assert_eq!(
        err.to_string(),
        "[Logging] console: expected a boolean, got `sometimes`"
    );
}
