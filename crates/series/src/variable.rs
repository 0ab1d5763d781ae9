//! Observed variables.

use serde::{Deserialize, Serialize};

/// A daily observed variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    /// Daily maximum temperature (°C).
    TempMax,
    /// Daily minimum temperature (°C).
    TempMin,
    /// Daily mean temperature (°C).
    TempMean,
    /// Daily precipitation total (mm).
    Precipitation,
}

impl Variable {
    /// All variables, in column order.
    pub const ALL: [Variable; 4] = [
        Variable::TempMax,
        Variable::TempMin,
        Variable::TempMean,
        Variable::Precipitation,
    ];

    /// Column name used in input and output tables.
    pub fn name(self) -> &'static str {
        match self {
            Variable::TempMax => "temp_max",
            Variable::TempMin => "temp_min",
            Variable::TempMean => "temp_mean",
            Variable::Precipitation => "precipitation",
        }
    }

    /// Looks a variable up by its column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
