use serde::Deserialize;

use crate::error::ResolveError;
use crate::model::MatchQuery;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Caller-supplied tuning for query bounds and the link audit. The scoring
/// weights themselves are fixed constants (see `score`), not configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub query: QueryDefaults,
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query: QueryDefaults::default(),
            audit: AuditConfig::default(),
        }
    }
}

/// Default bounds applied to queries built through `match_query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDefaults {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
    /// Declared as signed so a negative value in a config file is caught by
    /// validation instead of wrapping.
    #[serde(default = "default_max_results")]
    pub max_results: i64,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Confidence at or above which a resolved link counts as matched.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

fn default_min_confidence() -> f64 {
    0.0
}

fn default_max_results() -> i64 {
    10
}

fn default_confidence_threshold() -> f64 {
    0.5
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl ResolverConfig {
    pub fn from_toml(input: &str) -> Result<Self, ResolveError> {
        let config: ResolverConfig =
            toml::from_str(input).map_err(|e| ResolveError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ResolveError> {
        if !(0.0..=1.0).contains(&self.query.min_confidence) {
            return Err(ResolveError::ConfigValidation(format!(
                "query.min_confidence must be in [0, 1], got {}",
                self.query.min_confidence
            )));
        }
        if self.query.max_results <= 0 {
            return Err(ResolveError::ConfigValidation(format!(
                "query.max_results must be positive, got {}",
                self.query.max_results
            )));
        }
        if !(0.0..=1.0).contains(&self.audit.confidence_threshold) {
            return Err(ResolveError::ConfigValidation(format!(
                "audit.confidence_threshold must be in [0, 1], got {}",
                self.audit.confidence_threshold
            )));
        }
        Ok(())
    }

    /// Build a query for `name` with this config's default bounds.
    pub fn match_query(&self, name: impl Into<String>) -> MatchQuery {
        MatchQuery {
            name: name.into(),
            date: None,
            nationality: None,
            min_confidence: self.query.min_confidence,
            max_results: self.query.max_results as usize,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
