/*!
 * Runtime Configuration
 * Environment-driven settings for the command-line simulator
 */

use crate::core::errors::SimError;
use crate::scheduler::{Policy, SimParams};
use miette::Diagnostic;
use std::str::FromStr;
use thiserror::Error;

pub const POLICY_ENV: &str = "SCHED_POLICY";
pub const QUANTUM_ENV: &str = "SCHED_QUANTUM";
pub const OUTPUT_ENV: &str = "SCHED_OUTPUT";
pub const COMPARE_ENV: &str = "SCHED_COMPARE";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the environment variable or command-line argument.")
    )]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Sim(#[from] SimError),
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: OUTPUT_ENV,
                value: s.to_string(),
            }),
        }
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: Policy,
    pub params: SimParams,
    pub output: OutputFormat,
    /// Run every policy instead of just `policy`
    pub compare: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Fcfs,
            params: SimParams::default(),
            output: OutputFormat::Text,
            compare: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from process environment variables
    ///
    /// Environment variables:
    /// - SCHED_POLICY: policy name (default: fcfs)
    /// - SCHED_QUANTUM: round-robin quantum in ticks (default: 2)
    /// - SCHED_OUTPUT: text | json (default: text)
    /// - SCHED_COMPARE: 1 | true to run every policy
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Malformed values are rejected, never replaced with defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(policy) = lookup(POLICY_ENV) {
            config.policy = policy.parse()?;
        }

        if let Some(quantum) = lookup(QUANTUM_ENV) {
            let ticks = quantum
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: QUANTUM_ENV,
                    value: quantum.clone(),
                })?;
            config.params = SimParams::with_quantum(ticks);
        }

        if let Some(output) = lookup(OUTPUT_ENV) {
            config.output = output.parse()?;
        }

        if let Some(compare) = lookup(COMPARE_ENV) {
            config.compare = match compare.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: COMPARE_ENV,
                        value: compare,
                    })
                }
            };
        }

        Ok(config)
    }
}
