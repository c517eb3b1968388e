// fcra-core/src/domain/record/taxonomy.rs

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemediationStatus {
    Nonexceptions,
    Incomplete,
    Resolved,
    Unsolved,
}

impl RemediationStatus {
    pub const ALL: [RemediationStatus; 4] = [
        RemediationStatus::Nonexceptions,
        RemediationStatus::Incomplete,
        RemediationStatus::Resolved,
        RemediationStatus::Unsolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nonexceptions => "Nonexceptions",
            Self::Incomplete => "Incomplete",
            Self::Resolved => "Resolved",
            Self::Unsolved => "Unsolved",
        }
    }

    /// Resolved still counts: it was an exception that got fixed.
    pub fn is_exception(&self) -> bool {
        !matches!(self, Self::Nonexceptions)
    }

    /// Open workload: still waiting on an assignee.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Incomplete | Self::Unsolved)
    }
}

impl fmt::Display for RemediationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RemediationStatus {
    type Err = String;

    // Exact match: stored values are compared verbatim everywhere else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown remediation status: {}", s))
    }
}

/// Blocking cause of an `Incomplete` record. An empty stored category has no
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemediationCategory {
    Internal,
    LobEngagement,
    Technology,
}

impl RemediationCategory {
    pub const ALL: [RemediationCategory; 3] = [
        RemediationCategory::Internal,
        RemediationCategory::LobEngagement,
        RemediationCategory::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::LobEngagement => "LOB engagement",
            Self::Technology => "Technology",
        }
    }
}

impl fmt::Display for RemediationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RemediationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown remediation category: {}", s))
    }
}
