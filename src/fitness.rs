//! Fitness classes and demerit scoring
//!
//! A line's adjustment ratio is discretized into one of four fitness
//! classes; consecutive lines whose classes differ by more than one step
//! look jarring (a very tight line above a very loose one) and are charged
//! extra demerits. The demerit formula itself follows Knuth and Plass:
//! badness grows with the cube of the ratio, and the penalty of the chosen
//! breakpoint folds into the score with a sign-dependent shape.

use crate::item::INF;

/// Discretized snugness of a line
///
/// The class is derived from the adjustment ratio alone. Numeric values
/// match the classic ordering so that class distance is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FitnessClass {
    /// Ratio below -0.5: glue squeezed past half its shrink
    Tight = 0,
    /// Ratio in [-0.5, 0.5]
    Normal = 1,
    /// Ratio in (0.5, 1.0]
    Loose = 2,
    /// Ratio above 1.0
    VeryLoose = 3,
}

impl FitnessClass {
    /// Classify an adjustment ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < -0.5 {
            FitnessClass::Tight
        } else if ratio <= 0.5 {
            FitnessClass::Normal
        } else if ratio <= 1.0 {
            FitnessClass::Loose
        } else {
            FitnessClass::VeryLoose
        }
    }

    /// Absolute distance between two classes
    pub fn distance(self, other: FitnessClass) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }
}

impl Default for FitnessClass {
    fn default() -> Self {
        FitnessClass::Normal
    }
}

/// Demerits charged for a single line
///
/// `ratio` is the line's adjustment ratio and `penalty` the value of the
/// penalty item chosen as the break (zero when breaking at glue). The
/// three branches are the canonical Knuth-Plass forms: non-negative
/// penalties join the badness inside the cube, finite negative penalties
/// subtract their square from the squared badness, and a forced break
/// contributes badness alone.
pub fn line_demerits(ratio: f64, penalty: f64) -> f64 {
    let badness = 1.0 + 100.0 * ratio.abs().powi(3);

    if penalty >= 0.0 {
        (badness + penalty).powi(3)
    } else if penalty > -INF {
        badness.powi(2) - penalty * penalty
    } else {
        badness.powi(2)
    }
}
