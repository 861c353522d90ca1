//! The fixed winter category enumeration.

use std::fmt;

/// Final winter hydrometeor category.
///
/// Codes are stable: they are what [`classify_winter`](crate::classify_winter)
/// writes into its output array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinterCategory {
    /// No data, or the melting layer could not classify the bin.
    Unclassified,
    /// Ice crystals (cold regime).
    IceCrystals,
    /// Plates (cold regime).
    Plates,
    /// Dendrites (cold regime).
    Dendrites,
    /// Aggregates (cold regime).
    Aggregates,
    /// Wet snow, taken from the melting-layer detector.
    WetSnow,
    /// Frozen precipitation (warm regime).
    FrozenPrecip,
    /// Rain (warm regime).
    Rain,
}

impl WinterCategory {
    /// All categories in code order.
    pub const ALL: [WinterCategory; 8] = [
        WinterCategory::Unclassified,
        WinterCategory::IceCrystals,
        WinterCategory::Plates,
        WinterCategory::Dendrites,
        WinterCategory::Aggregates,
        WinterCategory::WetSnow,
        WinterCategory::FrozenPrecip,
        WinterCategory::Rain,
    ];

    /// Cold-regime categories, indexed by cold species.
    pub const COLD: [WinterCategory; 4] = [
        WinterCategory::IceCrystals,
        WinterCategory::Plates,
        WinterCategory::Dendrites,
        WinterCategory::Aggregates,
    ];

    /// Warm-regime categories, indexed by warm species.
    pub const WARM: [WinterCategory; 2] = [WinterCategory::FrozenPrecip, WinterCategory::Rain];

    /// Integer code written to output arrays.
    pub fn code(self) -> i32 {
        match self {
            WinterCategory::Unclassified => -1,
            WinterCategory::IceCrystals => 1,
            WinterCategory::Plates => 2,
            WinterCategory::Dendrites => 3,
            WinterCategory::Aggregates => 4,
            WinterCategory::WetSnow => 5,
            WinterCategory::FrozenPrecip => 6,
            WinterCategory::Rain => 7,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WinterCategory::Unclassified => "Unclassified",
            WinterCategory::IceCrystals => "Ice Crystals",
            WinterCategory::Plates => "Plates",
            WinterCategory::Dendrites => "Dendrites",
            WinterCategory::Aggregates => "Aggregates",
            WinterCategory::WetSnow => "Wet Snow",
            WinterCategory::FrozenPrecip => "Frozen Precip",
            WinterCategory::Rain => "Rain",
        }
    }

    /// Looks a category up by code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for WinterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
