use core::str::FromStr;

use serde::{Deserialize, Serialize};

use limelight_core::{DomainError, ValueObject};

/// Fixed gender option set offered when editing a record.
///
/// Ingested records may carry any gender string (the normalizer only fixes
/// capitalization); this enum is the closed set an edit may stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Transgender,
    #[serde(rename = "Rather not say")]
    RatherNotSay,
    Other,
}

impl Gender {
    pub const OPTIONS: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Transgender,
        Gender::RatherNotSay,
        Gender::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Transgender => "Transgender",
            Gender::RatherNotSay => "Rather not say",
            Gender::Other => "Other",
        }
    }
}

impl ValueObject for Gender {}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    /// Exact-label match only; anything else is outside the option set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::OPTIONS
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown gender option: {s}")))
    }
}
