//! Loads a config file, plants the antilogs it enables in the global
//! dispatcher and emits one event per level.
//!
//! ```text
//! cargo run --bin antilog_demo                  # console only
//! cargo run --bin antilog_demo -- antilog.conf  # [Logging] section of the file
//! RUST_LOG=trace cargo run --bin antilog_demo   # facade output + failure reports
//! ```

use std::{env, io, process};

use antilog::{
    Config, LoggingConfig, antilog_assert, antilog_debug, antilog_error, antilog_info,
    antilog_verbose, antilog_warning,
};

fn main() {
    // Failure reports and the facade antilog go through `log`.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1) {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {e}. Using empty config.");
            Config::empty()
        }),
        None => Config::empty(),
    };

    let logging = match LoggingConfig::from_config(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Invalid [Logging] section: {e}");
            process::exit(1);
        }
    };

    let planted = antilog::global().plant_from_config(&logging);
    eprintln!("[antilog_demo] planted: {:?}", antilog::global().registry());

    antilog_verbose!("verbose detail {}", 1);
    antilog_debug!(tag: "demo", "debug detail {:?}", (2, 3));
    antilog_info!(tag: "demo", "started with {} antilog(s)", planted.len());
    antilog_warning!("disk usage at {}%", 91);
    antilog_error!(
        tag: "demo",
        err: io::Error::new(io::ErrorKind::NotFound, "settings.toml"),
        "could not load user settings"
    );
    antilog_assert!(tag: "demo", "unreachable state reached");

    // Dropping the last handles joins any file writer after it flushes.
    antilog::uproot_all();
    drop(planted);
}
