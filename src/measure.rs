//! Segment measurement via prefix sums
//!
//! The breakpoint searches repeatedly ask "how wide is the material between
//! break `a` and candidate `b`, and how much can it flex?". Precomputing
//! cumulative width, stretch, and shrink over the item sequence answers
//! each of those questions in O(1).
//!
//! The sums are rebuilt on every solve entry; a paragraph edited between
//! solves never observes stale measurements.

use crate::item::{Item, INF};

/// Cumulative width, stretch, and shrink over an item sequence
///
/// `width[i]` holds the total natural width of items `0..i`, so the natural
/// width of the half-open segment `[a, b)` is `width[b] - width[a]`. The
/// `stretch` and `shrink` tables work the same way; non-glue items
/// contribute zero to both. A penalty's width is deliberately excluded from
/// the cumulative table - it counts only when that penalty is the chosen
/// break, and the ratio calculator adds it back at that point.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    width: Vec<f64>,
    stretch: Vec<f64>,
    shrink: Vec<f64>,
}

impl PrefixSums {
    /// Build the three cumulative tables for `items`
    pub fn new(items: &[Item]) -> Self {
        let mut width = Vec::with_capacity(items.len());
        let mut stretch = Vec::with_capacity(items.len());
        let mut shrink = Vec::with_capacity(items.len());

        let mut width_sum = 0.0;
        let mut stretch_sum = 0.0;
        let mut shrink_sum = 0.0;

        for item in items {
            width.push(width_sum);
            stretch.push(stretch_sum);
            shrink.push(shrink_sum);

            // Penalty width is added ad hoc by the ratio calculator.
            if !item.is_penalty() {
                width_sum += item.width();
            }
            stretch_sum += item.stretch();
            shrink_sum += item.shrink();
        }

        Self {
            width,
            stretch,
            shrink,
        }
    }

    /// Number of entries (equals the measured item count)
    #[inline]
    pub fn len(&self) -> usize {
        self.width.len()
    }

    /// True when built over an empty item sequence
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.is_empty()
    }

    /// Natural width of the segment `[a, b)`
    #[inline]
    pub fn width_between(&self, a: usize, b: usize) -> f64 {
        debug_assert!(a <= b && b < self.width.len());
        self.width[b] - self.width[a]
    }

    /// Total stretchability of the segment `[a, b)`
    #[inline]
    pub fn stretch_between(&self, a: usize, b: usize) -> f64 {
        debug_assert!(a <= b && b < self.stretch.len());
        self.stretch[b] - self.stretch[a]
    }

    /// Total shrinkability of the segment `[a, b)`
    #[inline]
    pub fn shrink_between(&self, a: usize, b: usize) -> f64 {
        debug_assert!(a <= b && b < self.shrink.len());
        self.shrink[b] - self.shrink[a]
    }
}

/// Target width for a given zero-based line number
///
/// The schedule's last entry repeats for every line past its end, so a
/// single-entry schedule sets a uniform paragraph width.
#[inline]
pub fn line_length(line_lengths: &[f64], line: usize) -> f64 {
    if line < line_lengths.len() {
        line_lengths[line]
    } else {
        *line_lengths.last().expect("line length schedule is empty")
    }
}

/// Adjustment ratio for the line `[a, b)` set to the width of `line`
///
/// The ratio expresses how far the line's glue must flex to hit the target
/// width: positive values consume stretch, negative values consume shrink,
/// and `|r| = 1` exhausts the available flexibility. A segment that cannot
/// flex in the required direction yields the `INF` sentinel. When `b` is a
/// penalty, its width joins the natural width, since taking the break
/// typesets the penalty's material (the hyphen) at the end of the line.
pub fn adjustment_ratio(
    sums: &PrefixSums,
    items: &[Item],
    a: usize,
    b: usize,
    line: usize,
    line_lengths: &[f64],
) -> f64 {
    let mut natural = sums.width_between(a, b);
    if let Item::Penalty { width, .. } = items[b] {
        natural += width;
    }

    let available = line_length(line_lengths, line);

    if natural < available {
        let stretch = sums.stretch_between(a, b);
        if stretch > 0.0 {
            (available - natural) / stretch
        } else {
            INF
        }
    } else if natural > available {
        let shrink = sums.shrink_between(a, b);
        if shrink > 0.0 {
            (available - natural) / shrink
        } else {
            INF
        }
    } else {
        0.0
    }
}
