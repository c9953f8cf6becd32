//! Startup configuration.
//!
//! The participant list and theme come from the command line; they are
//! inputs to the presentation layer and to the ledger's construction, not
//! part of the core behavior. Validation collects every problem at once.

pub mod error;

pub use error::ConfigError;

use crate::ledger::SplitLedger;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing_subscriber::EnvFilter;

/// Default log filter when neither `RUST_LOG` nor a flag is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Terminal color palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme selected by the `--light-theme` flag.
    pub fn from_light_flag(light: bool) -> Self {
        if light {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Everything the binary needs to start a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    pub participants: Vec<String>,
    pub theme: Theme,
    pub log_filter: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            theme: Theme::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SplitterConfig {
    /// Configuration with the default log filter.
    pub fn new(participants: Vec<String>, theme: Theme) -> Self {
        Self {
            participants,
            theme,
            ..Self::default()
        }
    }

    /// Replace the log filter directives.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Check the configuration, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.participants.is_empty() {
            Validation::fail(ConfigError::NoParticipants)
        } else {
            Validation::success(())
        });

        checks.push(match EnvFilter::try_new(&self.log_filter) {
            Ok(_) => Validation::success(()),
            Err(err) => Validation::fail(ConfigError::InvalidLogFilter {
                filter: self.log_filter.clone(),
                reason: err.to_string(),
            }),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand back the configuration, or every problem found.
    pub fn checked(self) -> Result<Self, Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    /// Build the ledger for the configured participants.
    pub fn ledger(&self) -> SplitLedger {
        SplitLedger::new(self.participants.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_config_passes() {
        let config = SplitterConfig::new(names(&["A", "B"]), Theme::Light);
        assert!(config.validate().is_success());
        assert_eq!(config.clone().checked(), Ok(config));
    }

    #[test]
    fn empty_participant_list_fails() {
        let config = SplitterConfig::new(Vec::new(), Theme::Dark);
        assert_eq!(config.checked(), Err(vec![ConfigError::NoParticipants]));
    }

    #[test]
    fn accumulates_all_problems() {
        let config =
            SplitterConfig::new(Vec::new(), Theme::Dark).with_log_filter("splitter=notalevel");

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::NoParticipants)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::InvalidLogFilter { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn theme_from_flag() {
        assert_eq!(Theme::from_light_flag(true), Theme::Light);
        assert_eq!(Theme::from_light_flag(false), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn ledger_uses_configured_names() {
        let config = SplitterConfig::new(names(&["A", "B", "A"]), Theme::Dark);
        let ledger = config.ledger();
        assert_eq!(ledger.participants().len(), 2);
    }
}
