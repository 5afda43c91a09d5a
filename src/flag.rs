//! Flag Names
//!
//! The closed set of feature-flag names and their string forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlagError;

/// A feature-flag name.
///
/// The set of flags is fixed at build time; adding one means adding a
/// variant here and to [`Flag::ALL`]. Each variant identifies one
/// independently-stateful switch in a [`FeatureFlags`] registry.
///
/// [`FeatureFlags`]: crate::FeatureFlags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flag {
    ExampleFeature,
    MergeSingletonClasses,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 2] = [Flag::ExampleFeature, Flag::MergeSingletonClasses];

    /// The kebab-case name used in configuration and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::ExampleFeature => "example-feature",
            Flag::MergeSingletonClasses => "merge-singleton-classes",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = FlagError;

    /// Parse a kebab-case flag name, e.g. `"example-feature"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| FlagError::UnknownFlag(s.to_string()))
    }
}
