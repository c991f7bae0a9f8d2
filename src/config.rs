use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Interpreter settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    pub color: bool,
    /// Print each line of a loaded script after the prompt, as if typed.
    pub echo_script: bool,
    pub log_level: String,
    pub max_load_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "triage> ".to_string(),
            color: true,
            echo_script: true,
            log_level: "warn".to_string(),
            max_load_depth: 8,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        Self::from_toml(&content)
    }

    /// Applies command-line settings on top of the file and returns the
    /// resulting log level.
    pub fn apply_overrides(
        &mut self,
        no_color: bool,
        log_level: Option<String>,
    ) -> Result<LevelFilter, ConfigError> {
        if no_color {
            self.color = false;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.level_filter()
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt, "triage> ");
        assert!(config.color);
        assert!(config.echo_script);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
        assert_eq!(config.max_load_depth, 8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = Config::from_toml("color = false\nlog_level = \"debug\"\n").unwrap();
        assert!(!config.color);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.prompt, "triage> ");
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = Config::from_toml("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::from_toml("log_level = \"info\"").unwrap();
        let level = config.apply_overrides(true, Some("trace".into())).unwrap();
        assert_eq!(level, LevelFilter::Trace);
        assert!(!config.color);
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_no_overrides_keep_file_settings() {
        let mut config = Config::from_toml("color = true\nlog_level = \"error\"").unwrap();
        assert_eq!(config.apply_overrides(false, None).unwrap(), LevelFilter::Error);
        assert!(config.color);
    }

    #[test]
    fn test_bad_override_level_rejected() {
        let err = Config::default()
            .apply_overrides(false, Some("chatty".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "chatty"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"prompt = \"> \"\necho_script = false\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.prompt, "> ");
        assert!(!config.echo_script);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/triage.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
