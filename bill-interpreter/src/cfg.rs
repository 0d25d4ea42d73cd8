//! Runtime configuration for the interpretation pipeline.

/// Knobs for one pipeline instance. All fields have defaults via
/// [`InterpreterConfig::from_env`].
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Maximum characters of one fragment sent to the scoring service.
    pub max_fragment_len: usize,
    /// Scoring model identifier, recorded in interpretation metadata.
    pub model: String,
}

impl InterpreterConfig {
    /// Build from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            max_fragment_len: parse("MAX_FRAGMENT_LEN", 80_000usize),
            model: env("SCORING_MODEL", "gpt-4o"),
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_fragment_len: 80_000,
            model: "gpt-4o".to_string(),
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
