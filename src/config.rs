//! Planner configuration.
//!
//! spec.md §9 flags `maintain_transpose` as a config value read from inside
//! the scoring function and recommends passing it to `order_expressions`
//! explicitly instead, so the planner stays a pure function of its
//! arguments. This module still models it as a loaded config value — the
//! engine reads it once at startup, the same as `ServerConfig` elsewhere in
//! this codebase — the planner itself just takes it as a parameter rather
//! than reaching for a global.

use std::env;

use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Configuration for the traversal-order planner.
#[derive(Clone, Debug, Validate)]
pub struct PlannerConfig {
    /// When the graph engine maintains transpose matrices for every
    /// expression, transposing is free and the scoring penalty collapses
    /// to zero (spec.md §4.3).
    pub maintain_transpose: bool,

    /// Guard rail on the permutation generator (spec.md §9: "implementers
    /// may add an n-threshold above which a greedy heuristic is used").
    /// Exceeding this returns `PlannerError::TooManyExpressions` rather than
    /// allocating `n!` orderings.
    #[validate(range(min = 1, max = 20, message = "max_permutation_len must be between 1 and 20"))]
    pub max_permutation_len: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            maintain_transpose: false,
            max_permutation_len: 10,
        }
    }
}

impl PlannerConfig {
    /// Build configuration from environment variables with validation,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            maintain_transpose: parse_env_var("CLICKGRAPH_MAINTAIN_TRANSPOSE", "false")?,
            max_permutation_len: parse_env_var("CLICKGRAPH_MAX_PERMUTATION_LEN", "10")?,
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
