//! Tax assessment logic: income normalization, taxable-income derivation,
//! the progressive band walk, and regime comparison.

pub mod assessment;
pub mod bands;
pub mod common;
pub mod comparison;
pub mod relief;

pub use assessment::compute_tax;
pub use bands::{BandAssessment, BandSchedule, BandScheduleError};
pub use comparison::{RegimeComparison, compare_regimes};
