use std::{collections::HashMap, fmt::Display};

use crate::{itinerary::StopId, shared::time::Duration};

/// Warnings keyed by the later stop of each offending pair.
pub type WarningMap = HashMap<StopId, ValidationWarning>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The previous stop is still going on when this one starts.
    Overlap { overlap: Duration },
    /// The gap after the previous stop is shorter than the drive.
    Infeasible {
        required: Duration,
        available: Duration,
    },
    /// The drive could not be looked up.
    Unknown { available: Duration },
}

impl ValidationWarning {
    pub fn kind(&self) -> WarningKind {
        match self {
            ValidationWarning::Overlap { .. } => WarningKind::Overlap,
            ValidationWarning::Infeasible { .. } => WarningKind::Infeasible,
            ValidationWarning::Unknown { .. } => WarningKind::Unknown,
        }
    }
}

impl Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::Overlap { .. } => {
                f.write_str("Overlap! Previous activity finishes after this starts.")
            }
            ValidationWarning::Infeasible {
                required,
                available,
            } => write!(
                f,
                "Impossible! Drive is {}m, you have {}m.",
                required.as_minutes(),
                available.as_minutes()
            ),
            ValidationWarning::Unknown { available } => write!(
                f,
                "Could not check the drive, you have {}m.",
                available.as_minutes()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    Overlap,
    Infeasible,
    Unknown,
}

impl WarningKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WarningKind::Overlap => "overlap",
            WarningKind::Infeasible => "infeasible",
            WarningKind::Unknown => "unknown",
        }
    }
}
