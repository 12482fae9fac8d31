//! Start-up configuration.
//!
//! # Responsibility
//! - Load the optional JSON configuration file.
//! - Supply defaults for every missing section or key.
//!
//! # Invariants
//! - A validated config has a non-empty acting user, a known log level, a
//!   positive review window and, when set, an absolute log directory.

use crate::logging::{default_log_level, normalize_level};
use crate::workflow::TransitionPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Acting user recorded by status actions when none is configured.
pub const DEFAULT_ACTING_USER: &str = "Current User";
/// Default "due soon" window in days.
pub const DEFAULT_REVIEW_WINDOW_DAYS: u32 = 30;

/// Configuration load or validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// A key holds a value outside its allowed range.
    Invalid {
        key: &'static str,
        message: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid { key, message } => write!(f, "invalid config `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// `logging` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Absolute directory for rolling log files; `None` disables file logs.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

/// `workflow` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Name written into approved-by / reviewed-by style fields.
    pub acting_user: String,
    /// Enforce per-status successor tables on edit submits.
    pub strict_transitions: bool,
    pub review_window_days: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            acting_user: DEFAULT_ACTING_USER.to_string(),
            strict_transitions: false,
            review_window_days: DEFAULT_REVIEW_WINDOW_DAYS,
        }
    }
}

impl WorkflowConfig {
    pub fn policy(&self) -> TransitionPolicy {
        if self.strict_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QmsConfig {
    pub logging: LoggingConfig,
    pub workflow: WorkflowConfig,
}

impl QmsConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the file at `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workflow.acting_user.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "workflow.acting_user",
                message: "cannot be empty".to_string(),
            });
        }
        if self.workflow.review_window_days == 0 {
            return Err(ConfigError::Invalid {
                key: "workflow.review_window_days",
                message: "must be at least 1".to_string(),
            });
        }
        normalize_level(&self.logging.level).map_err(|err| ConfigError::Invalid {
            key: "logging.level",
            message: err.to_string(),
        })?;
        if let Some(dir) = &self.logging.dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid {
                    key: "logging.dir",
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, QmsConfig, DEFAULT_ACTING_USER};
    use crate::workflow::TransitionPolicy;

    #[test]
    fn empty_document_yields_defaults() {
        let config = QmsConfig::from_json_str("{}").expect("defaults are valid");
        assert_eq!(config, QmsConfig::default());
        assert_eq!(config.workflow.acting_user, DEFAULT_ACTING_USER);
        assert_eq!(config.workflow.policy(), TransitionPolicy::Permissive);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            QmsConfig::from_json_str(r#"{"workflow":{"strict_transitions":true}}"#).unwrap();
        assert_eq!(config.workflow.policy(), TransitionPolicy::Strict);
        assert_eq!(config.workflow.review_window_days, 30);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = QmsConfig::from_json_str(r#"{"workflow":{"acting_user":"  "}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "workflow.acting_user",
                ..
            }
        ));

        let err = QmsConfig::from_json_str(r#"{"logging":{"level":"loud"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "logging.level", .. }));

        let err = QmsConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
