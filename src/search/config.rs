//! Search run configuration.

use crate::state::HeuristicMode;

/// Configuration for a search run.
///
/// The defaults run every strategy to frontier exhaustion, which is what
/// guarantees an optimal bottleneck. The budget and time limit are external
/// cutoffs: when one fires, the best tour found so far is returned.
///
/// # Examples
///
/// ```
/// use u_minimax::search::{HeuristicMode, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_heuristic(HeuristicMode::Bottleneck)
///     .with_max_expansions(10_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.max_expansions, 10_000);
/// assert_eq!(config.time_limit_ms, Some(500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Frontier key used by the informed strategy. Ignored by the others.
    pub heuristic: HeuristicMode,

    /// Maximum number of states to expand. 0 = no limit.
    ///
    /// Once spent, complete tours still on the frontier are recorded but no
    /// further partial path is expanded.
    pub max_expansions: usize,

    /// Wall-clock limit in milliseconds (None = no limit).
    pub time_limit_ms: Option<u64>,
}

impl SearchConfig {
    /// Sets the informed strategy's frontier key.
    pub fn with_heuristic(mut self, heuristic: HeuristicMode) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the expansion budget (0 = unlimited).
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = n;
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Returns `true` if no cutoff is configured.
    pub fn is_exhaustive(&self) -> bool {
        self.max_expansions == 0 && self.time_limit_ms.is_none()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive when set".into());
        }
        Ok(())
    }
}
