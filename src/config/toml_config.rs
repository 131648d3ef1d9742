use crate::config::{LogFormat, Section, Validate};
use crate::domain::event::MIN_EVENT_MINUTES;
use crate::utils::error::{AppError, Result};
use chrono::Duration;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_EVENT_DAYS_AHEAD: i64 = 30;
const DEFAULT_EVENT_DURATION_MINUTES: i64 = 8 * 60;
const MAX_EVENT_DAYS_AHEAD: i64 = 36_500;
const MAX_EVENT_DURATION_MINUTES: i64 = MAX_EVENT_DAYS_AHEAD * 24 * 60;
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ENV_VAR_REGEX: OnceLock<Regex> = OnceLock::new();

fn env_var_regex() -> &'static Regex {
    ENV_VAR_REGEX.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("Invalid env var pattern"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub showcase: ShowcaseSettings,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default)]
    pub sections: Vec<String>,
    pub event_days_ahead: Option<i64>,
    pub event_duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl ShowcaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Regions to run, in showcase order. An empty list means all of them.
    pub fn sections(&self) -> Vec<Section> {
        let selected: Vec<Section> = self
            .showcase
            .sections
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        if selected.is_empty() {
            return Section::ALL.to_vec();
        }
        Section::ALL
            .into_iter()
            .filter(|s| selected.contains(s))
            .collect()
    }

    /// Clamped to the validated range, so date arithmetic cannot overflow.
    pub fn event_days_ahead(&self) -> i64 {
        self.showcase
            .event_days_ahead
            .unwrap_or(DEFAULT_EVENT_DAYS_AHEAD)
            .clamp(1, MAX_EVENT_DAYS_AHEAD)
    }

    pub fn event_duration(&self) -> Duration {
        Duration::minutes(
            self.showcase
                .event_duration_minutes
                .unwrap_or(DEFAULT_EVENT_DURATION_MINUTES)
                .clamp(MIN_EVENT_MINUTES, MAX_EVENT_DURATION_MINUTES),
        )
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

fn validate_range(field_name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        for section in &self.showcase.sections {
            section.parse::<Section>()?;
        }

        if let Some(days) = self.showcase.event_days_ahead {
            validate_range("showcase.event_days_ahead", days, 1, MAX_EVENT_DAYS_AHEAD)?;
        }

        if let Some(minutes) = self.showcase.event_duration_minutes {
            validate_range(
                "showcase.event_duration_minutes",
                minutes,
                MIN_EVENT_MINUTES,
                MAX_EVENT_DURATION_MINUTES,
            )?;
        }

        if let Some(level) = self.log_level() {
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(AppError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[showcase]
sections = ["events", "speakers"]
event_days_ahead = 10
event_duration_minutes = 90

[logging]
level = "debug"
format = "json"
"#;

        let config = ShowcaseConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.sections(), vec![Section::Speakers, Section::Events]);
        assert_eq!(config.event_days_ahead(), 10);
        assert_eq!(config.event_duration(), Duration::minutes(90));
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShowcaseConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.sections(), Section::ALL.to_vec());
        assert_eq!(config.event_days_ahead(), 30);
        assert_eq!(config.event_duration(), Duration::hours(8));
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EVENT_MGMT_TEST_LOG_LEVEL", "warn");

        let toml_content = r#"
[logging]
level = "${EVENT_MGMT_TEST_LOG_LEVEL}"
"#;

        let config = ShowcaseConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("warn"));

        std::env::remove_var("EVENT_MGMT_TEST_LOG_LEVEL");
    }

    #[test]
    fn test_config_validation() {
        let unknown_section = ShowcaseConfig::from_toml_str(
            r#"
[showcase]
sections = ["workshops"]
"#,
        )
        .unwrap();
        assert!(unknown_section.validate().is_err());

        let short_duration = ShowcaseConfig::from_toml_str(
            r#"
[showcase]
event_duration_minutes = 29
"#,
        )
        .unwrap();
        assert!(short_duration.validate().is_err());

        let past_offset = ShowcaseConfig::from_toml_str(
            r#"
[showcase]
event_days_ahead = 0
"#,
        )
        .unwrap();
        assert!(past_offset.validate().is_err());

        let bad_level = ShowcaseConfig::from_toml_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_oversized_schedule_is_rejected() {
        let far_future = ShowcaseConfig::from_toml_str(
            r#"
[showcase]
sections = ["events"]
event_days_ahead = 100000000
"#,
        )
        .unwrap();
        let err = far_future.validate().unwrap_err();
        assert!(err.to_string().contains("showcase.event_days_ahead"));
        assert_eq!(far_future.event_days_ahead(), MAX_EVENT_DAYS_AHEAD);

        let endless = ShowcaseConfig::from_toml_str(
            r#"
[showcase]
event_duration_minutes = 9223372036854775807
"#,
        )
        .unwrap();
        let err = endless.validate().unwrap_err();
        assert!(err.to_string().contains("showcase.event_duration_minutes"));
        assert_eq!(
            endless.event_duration(),
            Duration::minutes(MAX_EVENT_DURATION_MINUTES)
        );

        let upper_bound = ShowcaseConfig::from_toml_str(&format!(
            "[showcase]\nevent_days_ahead = {}\nevent_duration_minutes = {}\n",
            MAX_EVENT_DAYS_AHEAD, MAX_EVENT_DURATION_MINUTES
        ))
        .unwrap();
        assert!(upper_bound.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ShowcaseConfig::from_toml_str("[showcase\nsections = 1").unwrap_err();
        assert!(matches!(err, AppError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[showcase]
sections = ["venues"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ShowcaseConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.sections(), vec![Section::Venues]);
    }

    #[test]
    fn test_missing_file() {
        let err = ShowcaseConfig::from_file("/nonexistent/showcase.toml").unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
