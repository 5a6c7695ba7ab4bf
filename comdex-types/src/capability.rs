use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for errors and telemetry.
///
/// These map one-to-one with the vendor collaborator surfaces and allow
/// consistent Display formatting in `Unsupported` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Contract instrument enumeration for a category.
    Instruments,
    /// Historical close/open-interest bars for a contract.
    BarHistory,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instruments => "instruments",
            Self::BarHistory => "bar-history",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
