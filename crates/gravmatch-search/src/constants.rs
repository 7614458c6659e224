//! Search-related constants
//!
//! Note: operator symbols and their defaults are defined in domain/operator.rs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Physical constants
// =============================================================================

/// Standard Earth surface gravity in m/s², the g-unit conversion factor
pub const STANDARD_GRAVITY: Decimal = dec!(9.81);

// =============================================================================
// Search parameters
// =============================================================================

/// Default decimal places of near-integer accuracy
pub const DEFAULT_ACCURACY: u32 = 1;

/// Lower bound of the generation-time pruning range
pub const SWEEP_MIN: Decimal = dec!(0);

/// Upper bound of the generation-time pruning range
///
/// Values outside [SWEEP_MIN, SWEEP_MAX] are uninteresting regardless of
/// integer-closeness; this mostly rejects divide-by-near-zero blowups and
/// huge powers.
pub const SWEEP_MAX: Decimal = dec!(15);

/// Lower bound of the post-sweep report range
pub const REPORT_MIN: Decimal = dec!(1);

/// Upper bound of the post-sweep report range
///
/// Applied after the full sweep; together with the pruning range the
/// effective retained interval is [1, 10].
pub const REPORT_MAX: Decimal = dec!(10);

// =============================================================================
// Embedded input table
// =============================================================================

/// Surface gravities of 23 solar-system bodies, in g-units.
///
/// Values from <https://en.wikipedia.org/wiki/Surface_gravity>.
pub const SOLAR_SYSTEM_TABLE: &str = "Sun28.02g
Mercury0.38g
Venus0.904g
Earth1.00g
Moon0.1654g
Mars0.376g
Phobos0.0005814g
Deimos0.000306g
Ceres0.0275g
Jupiter2.53g
Io0.183g
Europa0.134g
Ganymede0.15g
Callisto0.126g
Saturn1.07g
Titan0.14g
Enceladus0.0113g
Uranus0.89g
Neptune1.14g
Triton0.0797g
Pluto0.067g
Eris0.0677g
67P-CG0.000017g";
