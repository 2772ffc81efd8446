use crate::types::eligibility_bundle::EligibilityError;

/// Tolerance multiplier for female candidates; the band is doubled.
pub const FEMALE_TOLERANCE_MULTIPLIER: i128 = 2;

/// Tolerances are evaluated in millionths of a percent.
const TOLERANCE_SCALE: i128 = 1_000_000;

/// Loosen a raw rank by a tolerance percentage.
///
/// `floor(raw * (100 - multiplier * tolerance_pct) / 100)` where the
/// multiplier is 2 for female candidates and 1 otherwise. The result may be
/// zero or negative when the tolerance reaches 100% or more.
///
/// The tolerance is snapped to six decimal places and the rest is integer
/// arithmetic, so decimal inputs like `2.4` floor exactly.
pub fn adjust(raw_rank: u32, tolerance_pct: f64, is_female: bool) -> Result<i64, EligibilityError> {
    validate_tolerance(tolerance_pct)?;

    let multiplier = if is_female { FEMALE_TOLERANCE_MULTIPLIER } else { 1 };
    // `as` saturates for huge tolerances; the saturating ops keep it there.
    let tolerance = (tolerance_pct * TOLERANCE_SCALE as f64).round() as i128;
    let factor = (100 * TOLERANCE_SCALE).saturating_sub(tolerance.saturating_mul(multiplier));
    let numerator = i128::from(raw_rank).saturating_mul(factor);

    let threshold = numerator.div_euclid(100 * TOLERANCE_SCALE);
    Ok(threshold.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// Tolerance must be finite and non-negative.
pub fn validate_tolerance(tolerance_pct: f64) -> Result<(), EligibilityError> {
    if tolerance_pct.is_finite() && tolerance_pct >= 0.0 {
        Ok(())
    } else {
        Err(EligibilityError::InvalidTolerance(tolerance_pct))
    }
}
