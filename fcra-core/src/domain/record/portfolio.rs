// fcra-core/src/domain/record/portfolio.rs

use std::fmt;

// Storage keeps the source file's "Consumers"; every presentation surface
// (JSON keys, summary rows, CLI) shows "Consumer".

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Portfolio {
    CreditCards,
    Tdaf,
    Consumers,
}

impl Portfolio {
    /// Canonical order used by every per-portfolio breakdown.
    pub const ALL: [Portfolio; 3] = [Portfolio::CreditCards, Portfolio::Tdaf, Portfolio::Consumers];

    /// Value written in the `portfolio` column.
    pub fn storage_name(&self) -> &'static str {
        match self {
            Self::CreditCards => "Credit Cards",
            Self::Tdaf => "TDAF",
            Self::Consumers => "Consumers",
        }
    }

    /// Label shown to users and used as JSON key.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CreditCards => "Credit Cards",
            Self::Tdaf => "TDAF",
            Self::Consumers => "Consumer",
        }
    }

    /// Accepts either the stored or the displayed name, exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Credit Cards" => Some(Self::CreditCards),
            "TDAF" => Some(Self::Tdaf),
            "Consumers" | "Consumer" => Some(Self::Consumers),
            _ => None,
        }
    }

    /// Maps a stored `portfolio` value to its portfolio, if it is one of the three.
    pub fn from_storage(stored: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.storage_name() == stored)
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translates a label received from a caller into the stored value.
///
/// Only `Consumer` is rewritten; anything else is passed through verbatim so
/// that unknown portfolios simply match nothing.
pub fn storage_label(label: &str) -> &str {
    if label == "Consumer" { "Consumers" } else { label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_label_rewrites_consumer_only() {
        assert_eq!(storage_label("Consumer"), "Consumers");
        assert_eq!(storage_label("TDAF"), "TDAF");
        assert_eq!(storage_label("Mortgages"), "Mortgages");
    }

    #[test]
    fn test_from_label_accepts_both_names() {
        assert_eq!(Portfolio::from_label("Consumer"), Some(Portfolio::Consumers));
        assert_eq!(Portfolio::from_label("Consumers"), Some(Portfolio::Consumers));
        assert_eq!(Portfolio::from_label("credit cards"), None);
        assert_eq!(Portfolio::from_storage("Consumer"), None);
        assert_eq!(Portfolio::from_storage("Consumers"), Some(Portfolio::Consumers));
    }

    #[test]
    fn test_display_uses_presentation_name() {
        assert_eq!(Portfolio::Consumers.to_string(), "Consumer");
        assert_eq!(Portfolio::Tdaf.storage_name(), "TDAF");
    }
}
