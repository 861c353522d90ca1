//! Regime-keyed blend of the warm, cold and melting-layer categorizations.

use tracing::warn;

use crate::category::WinterCategory;
use crate::error::WinterError;
use crate::melting::{MeltClass, Regime, ScanType};

/// Final code contributed by the melting layer: wet snow becomes
/// [`WinterCategory::WetSnow`], other classes keep their detector code.
pub fn adjusted_melt_code(class: MeltClass) -> i32 {
    match class {
        MeltClass::WetSnow => WinterCategory::WetSnow.code(),
        other => other.code(),
    }
}

/// Combines per-bin categorizations into final winter codes.
///
/// Precedence, lowest first:
///
/// ```text
/// -1                          everywhere
/// warm[i]                     regime Warm
/// cold[i]                     regime Cold, or Transition in a Grid scan
/// 5 (wet snow)                melt WetSnow
/// -1                          melt NoData or Unclassified
/// ```
///
/// Transition bins outside grid scans stay -1 unless the melt class
/// overrides them. A single warning is emitted when grid transition bins are
/// substituted.
///
/// # Errors
///
/// [`WinterError::ShapeMismatch`] if the slices differ in length.
pub fn blend(
    regime: &[Regime],
    melt: &[MeltClass],
    warm: &[i32],
    cold: &[i32],
    scan_type: ScanType,
) -> Result<Vec<i32>, WinterError> {
    let n = regime.len();
    for (field, len) in [("melt_category", melt.len()), ("warm", warm.len()), ("cold", cold.len())] {
        if len != n {
            return Err(WinterError::ShapeMismatch {
                field,
                expected: vec![n],
                got: vec![len],
            });
        }
    }

    let grid = scan_type == ScanType::Grid;
    let mut substituted = 0usize;
    let out = (0..n)
        .map(|i| {
            let by_regime = match regime[i] {
                Regime::Warm => warm[i],
                Regime::Cold => cold[i],
                Regime::Transition if grid => {
                    substituted += 1;
                    cold[i]
                }
                Regime::Transition => WinterCategory::Unclassified.code(),
            };
            match melt[i] {
                MeltClass::WetSnow => WinterCategory::WetSnow.code(),
                MeltClass::NoData | MeltClass::Unclassified => WinterCategory::Unclassified.code(),
                MeltClass::IceType => by_regime,
            }
        })
        .collect();

    if substituted > 0 {
        warn!(
            bins = substituted,
            "gridded scan: transition bins take the cold-regime result"
        );
    }
    Ok(out)
}
