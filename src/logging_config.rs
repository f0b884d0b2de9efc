use std::{path::PathBuf, sync::Arc};

use crate::{
    antilog::{
        Antilog, ConsoleAntilog, DebugAntilog, FacadeAntilog, FileAntilog,
        file_antilog::DEFAULT_QUEUE_CAPACITY,
    },
    config::{Config, ConfigError},
    log::LogLevel,
};

/// Config section read by [`LoggingConfig::from_config`].
pub const SECTION: &str = "Logging";

/// Which built-in antilogs to plant, and how.
///
/// Read from the `[Logging]` section of a [`Config`]:
///
/// ```text
/// [Logging]
/// console = true
/// console_min_level = info
/// debug = false
/// debug_tag = app
/// facade = false
/// file = true
/// file_dir = ~/logs
/// file_name = myapp
/// file_min_level = debug
/// file_queue_capacity = 1024
/// ```
///
/// Missing keys keep their [`Default`] value: console only, every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub console: bool,
    pub console_min_level: LogLevel,
    pub debug: bool,
    pub debug_tag: String,
    pub debug_min_level: LogLevel,
    pub facade: bool,
    pub facade_min_level: LogLevel,
    pub file: bool,
    /// `None` writes to `logs/` next to the executable.
    pub file_dir: Option<PathBuf>,
    pub file_name: Option<String>,
    pub file_min_level: LogLevel,
    pub file_queue_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console: true,
            console_min_level: LogLevel::Verbose,
            debug: false,
            debug_tag: "app".to_owned(),
            debug_min_level: LogLevel::Verbose,
            facade: false,
            facade_min_level: LogLevel::Verbose,
            file: false,
            file_dir: None,
            file_name: None,
            file_min_level: LogLevel::Verbose,
            file_queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl LoggingConfig {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let d = Self::default();
        let level = |key: &str, default: LogLevel| -> Result<LogLevel, ConfigError> {
            Ok(config.get_level(SECTION, key)?.unwrap_or(default))
        };

        Ok(Self {
            console: config.get_bool(SECTION, "console", d.console)?,
            console_min_level: level("console_min_level", d.console_min_level)?,
            debug: config.get_bool(SECTION, "debug", d.debug)?,
            debug_tag: config
                .get_non_empty(SECTION, "debug_tag")
                .map_or(d.debug_tag, str::to_owned),
            debug_min_level: level("debug_min_level", d.debug_min_level)?,
            facade: config.get_bool(SECTION, "facade", d.facade)?,
            facade_min_level: level("facade_min_level", d.facade_min_level)?,
            file: config.get_bool(SECTION, "file", d.file)?,
            file_dir: config.get_non_empty(SECTION, "file_dir").map(PathBuf::from),
            file_name: config.get_non_empty(SECTION, "file_name").map(str::to_owned),
            file_min_level: level("file_min_level", d.file_min_level)?,
            file_queue_capacity: config.get_usize(
                SECTION,
                "file_queue_capacity",
                d.file_queue_capacity,
            )?,
        })
    }

    /// Builds the enabled antilogs in a fixed order: console, debug, facade, file.
    /// Starting a file antilog spawns its writer thread.
    #[must_use]
    pub fn build_antilogs(&self) -> Vec<Arc<dyn Antilog>> {
        let mut out: Vec<Arc<dyn Antilog>> = Vec::new();

        if self.console {
            out.push(Arc::new(
                ConsoleAntilog::new().with_min_level(self.console_min_level),
            ));
        }
        if self.debug {
            out.push(Arc::new(
                DebugAntilog::new(self.debug_tag.clone()).with_min_level(self.debug_min_level),
            ));
        }
        if self.facade {
            out.push(Arc::new(
                FacadeAntilog::new().with_min_level(self.facade_min_level),
            ));
        }
        if self.file {
            let name = self.file_name.as_deref();
            let file = match &self.file_dir {
                Some(dir) => FileAntilog::start_in_dir(dir, name, self.file_queue_capacity),
                None => FileAntilog::start_default(name, self.file_queue_capacity),
            };
            out.push(Arc::new(file.with_min_level(self.file_min_level)));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let cfg = LoggingConfig::from_config(&Config::empty()).unwrap();
        assert_eq!(cfg, LoggingConfig::default());
        let names: Vec<_> = cfg.build_antilogs().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["console"]);
    }

    #[test]
    fn reads_every_key() {
        let text = "[Logging]\n\
                    console = off\n\
                    debug = on\n\
                    debug_tag = svc\n\
                    debug_min_level = info\n\
                    facade = 1\n\
                    facade_min_level = error\n\
                    file = yes\n\
                    file_dir = /tmp/antilog-test\n\
                    file_name = svc\n\
                    file_min_level = warning\n\
                    file_queue_capacity = 8\n";
        let cfg = LoggingConfig::from_config(&Config::parse(text)).unwrap();

        assert!(!cfg.console);
        assert!(cfg.debug);
        assert_eq!(cfg.debug_tag, "svc");
        assert_eq!(cfg.debug_min_level, LogLevel::Info);
        assert!(cfg.facade);
        assert_eq!(cfg.facade_min_level, LogLevel::Error);
        assert!(cfg.file);
        assert_eq!(cfg.file_dir, Some(PathBuf::from("/tmp/antilog-test")));
        assert_eq!(cfg.file_name.as_deref(), Some("svc"));
        assert_eq!(cfg.file_min_level, LogLevel::Warning);
        assert_eq!(cfg.file_queue_capacity, 8);
    }

    #[test]
    fn builds_in_fixed_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = LoggingConfig {
            debug: true,
            facade: true,
            file: true,
            file_dir: Some(dir.path().to_path_buf()),
            ..LoggingConfig::default()
        };
        let names: Vec<_> = cfg.build_antilogs().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["console", "debug", "facade", "file"]);
    }

    #[test]
    fn bad_level_is_reported() {
        let cfg = Config::parse("[Logging]\nfile_min_level = chatty\n");
        let err = LoggingConfig::from_config(&cfg).expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidLevel { ref key, .. } if key == "file_min_level"));
    }
}
