pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{
    BandAssessment, BandSchedule, BandScheduleError, RegimeComparison, compare_regimes, compute_tax,
};
pub use models::*;
