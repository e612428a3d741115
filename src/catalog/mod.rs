//! Reference data — government services, journey rules, incentive programs.
//!
//! All display text is resolved against a [`Locale`] when a table is built;
//! the resulting structures are immutable and carry no language machinery.

pub mod data;
pub mod programs;
pub mod rules;
pub mod service;

pub use programs::Program;
pub use rules::{JourneyRule, JourneyRules, RuleSet};
pub use service::{Service, ServiceCatalog};

use serde::{Deserialize, Serialize};

/// Presentation language for catalog text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(format!("Unknown locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn locale_display_matches_serde() {
        for locale in [Locale::En, Locale::Ar] {
            let display = format!("{locale}");
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
