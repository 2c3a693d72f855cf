use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The four ranking strategies.
///
/// A strategy only affects presentation order of an already-scored batch,
/// never the scores themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    FastestWins,
    HighImpact,
    DeadlineDriven,
    #[default]
    SmartBalance,
}

/// Error returned by the strict [`FromStr`] parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}', expected one of: fastest_wins, high_impact, deadline_driven, smart_balance")]
pub struct UnknownStrategy(pub String);

impl Strategy {
    /// All strategies, in wire-name order.
    pub const ALL: [Self; 4] = [
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
        Self::SmartBalance,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
            Self::SmartBalance => "smart_balance",
        }
    }

    /// Parse a strategy name, silently falling back to the default.
    ///
    /// The engine degrades rather than fails on unknown names; callers that
    /// want a hard rejection use the strict [`FromStr`] impl instead.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(strategy = name, "unknown strategy, using smart_balance");
            Self::SmartBalance
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fastest_wins" => Ok(Self::FastestWins),
            "high_impact" => Ok(Self::HighImpact),
            "deadline_driven" => Ok(Self::DeadlineDriven),
            "smart_balance" => Ok(Self::SmartBalance),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
