//! Total-fit breakpoint search
//!
//! This module implements the Knuth-Plass optimal line breaking algorithm.
//! A single forward pass over the paragraph maintains a frontier of active
//! candidate breaks; at every feasible breakpoint each active node is
//! extended with the line it would form, scored by adjustment ratio and
//! demerits, and the best-scoring candidate per `(line, fitness)` slot
//! survives. The chosen terminal's backward chain is the paragraph's break
//! sequence.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the paragraph origin (line 0, zero demerits).
//! 2. For every feasible breakpoint `b`, measure the line `[a.position, b)`
//!    for each active node `a`:
//!    - a line that cannot shrink enough (`r < -1`) retires `a`;
//!    - a line within tolerance becomes a new candidate node for line
//!      `a.line + 1`.
//!    A forced break retires every active node once its candidates are
//!    queued, since no path may continue past it.
//! 3. At the end, pick the surviving terminal with the fewest demerits
//!    (optionally biased by `looseness`) and walk its chain backward.
//!
//! The search is deterministic: identical items, lengths, and options
//! always produce the identical break list.
//!
//! # Example
//!
//! ```rust,ignore
//! use parabreak::{solve, BreakerOptions, Paragraph};
//!
//! let mut par = Paragraph::new();
//! par.append_box(3.0, 'w');
//! par.append_standard_end(' ');
//!
//! let breaks = solve(&par, &[10.0], &BreakerOptions::default())?;
//! assert_eq!(breaks.len(), 1);
//! ```

use std::rc::Rc;

use crate::active::{ActiveSet, BreakNode};
use crate::error::{BreakError, Result};
use crate::fitness::{line_demerits, FitnessClass};
use crate::item::Paragraph;
use crate::measure::{adjustment_ratio, PrefixSums};

/// Tuning knobs for the total-fit search
///
/// # Example
///
/// ```rust,ignore
/// use parabreak::BreakerOptions;
///
/// let options = BreakerOptions::default()
///     .with_tolerance(2.0)
///     .with_looseness(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakerOptions {
    /// Bias the final selection toward a paragraph this many lines longer
    /// (positive) or shorter (negative) than the demerit-optimal one
    pub looseness: i32,

    /// Maximum adjustment ratio a feasible line may need
    ///
    /// Lines requiring more stretch than `tolerance` allows are rejected;
    /// raising it admits looser paragraphs when material is scarce.
    pub tolerance: f64,

    /// Extra demerits when adjacent lines differ by more than one
    /// fitness class
    pub fitness_demerit: f64,

    /// Extra demerits when two consecutive flagged breaks are chosen
    pub flagged_demerit: f64,
}

impl Default for BreakerOptions {
    fn default() -> Self {
        Self {
            looseness: 0,
            tolerance: 1.0,
            fitness_demerit: 100.0,
            flagged_demerit: 100.0,
        }
    }
}

impl BreakerOptions {
    /// Create options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the looseness bias
    #[must_use]
    pub fn with_looseness(mut self, looseness: i32) -> Self {
        self.looseness = looseness;
        self
    }

    /// Set the maximum allowed adjustment ratio
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the fitness-transition demerit
    #[must_use]
    pub fn with_fitness_demerit(mut self, demerit: f64) -> Self {
        self.fitness_demerit = demerit;
        self
    }

    /// Set the double-flagged-break demerit
    #[must_use]
    pub fn with_flagged_demerit(mut self, demerit: f64) -> Self {
        self.flagged_demerit = demerit;
        self
    }
}

/// One chosen break in the solved paragraph
///
/// Break descriptors come back in reading order: the first entry terminates
/// line 1. `demerits` is cumulative along the chosen chain, so the last
/// entry carries the paragraph's total score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Break {
    /// Item index where the line ends
    pub position: usize,
    /// One-based line number this break terminates
    pub line: usize,
    /// Fitness class of the finished line
    pub fitness: FitnessClass,
    /// Adjustment ratio of the finished line
    pub ratio: f64,
    /// Demerits accumulated from the paragraph start through this line
    pub demerits: f64,
}

pub(crate) fn validate_line_lengths(line_lengths: &[f64]) -> std::result::Result<(), BreakError> {
    if line_lengths.is_empty() {
        return Err(BreakError::EmptyLineLengths);
    }
    for (index, &value) in line_lengths.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(BreakError::InvalidLineLength { index, value });
        }
    }
    Ok(())
}

/// Find the optimal break sequence for a paragraph
///
/// Runs the total-fit search over `paragraph` against the line-length
/// schedule (the last entry repeats for lines past its end) and returns
/// the chosen breaks in reading order.
///
/// Paragraphs are expected to end with the standard terminator (see
/// [`Paragraph::append_standard_end`]); its forced final break guarantees
/// a terminal candidate whenever the material fits the tolerance at all.
///
/// # Errors
///
/// - [`BreakError::EmptyLineLengths`] / [`BreakError::InvalidLineLength`]
///   for a bad schedule
/// - [`BreakError::NoFeasibleBreak`] when no break chain reaches the end
///   of the paragraph (missing terminator, or tolerance too low)
pub fn solve<T>(
    paragraph: &Paragraph<T>,
    line_lengths: &[f64],
    options: &BreakerOptions,
) -> Result<Vec<Break>> {
    validate_line_lengths(line_lengths)?;

    let items = paragraph.items();
    let m = items.len();
    if m == 0 {
        return Ok(Vec::new());
    }

    let sums = PrefixSums::new(items);

    let mut active = ActiveSet::with_origin(Rc::new(BreakNode::origin()));
    let mut to_activate: Vec<Rc<BreakNode>> = Vec::new();
    let mut to_deactivate: Vec<Rc<BreakNode>> = Vec::new();

    for b in 0..m {
        if !paragraph.is_feasible_breakpoint(b) {
            continue;
        }

        let penalty = items[b].penalty();
        let forced = items[b].is_forced_break();

        for a in active.iter() {
            let ratio = adjustment_ratio(&sums, items, a.position, b, a.line, line_lengths);

            // A line that cannot shrink enough ends this node's usefulness;
            // a forced break ends every node's, since no path may skip it.
            if ratio < -1.0 || forced {
                to_deactivate.push(Rc::clone(a));
            }

            if (-1.0..=options.tolerance).contains(&ratio) {
                let mut demerits = line_demerits(ratio, penalty);

                if items[a.position].is_flagged() && items[b].is_flagged() {
                    demerits += options.flagged_demerit;
                }

                let fitness = FitnessClass::from_ratio(ratio);
                if fitness.distance(a.fitness) > 1 {
                    demerits += options.fitness_demerit;
                }

                to_activate.push(Rc::new(BreakNode {
                    position: b,
                    line: a.line + 1,
                    fitness,
                    ratio,
                    demerits: a.demerits + demerits,
                    previous: Some(Rc::clone(a)),
                }));
            }
        }

        if to_activate.is_empty() {
            // Nothing will replace the removed nodes, so keep at least one
            // alive; an empty frontier could never produce a terminal.
            for node in to_deactivate.drain(..) {
                if active.len() == 1 {
                    break;
                }
                active.remove(&node);
            }
        } else {
            for node in to_deactivate.drain(..) {
                active.remove(&node);
            }
        }
        for node in to_activate.drain(..) {
            active.insert(node);
        }
    }

    // Only nodes that break at the final item terminate the paragraph;
    // anything else is a leftover from the survival guard above.
    let terminals: Vec<&Rc<BreakNode>> = active.iter().filter(|n| n.position + 1 == m).collect();
    let Some(&first) = terminals.first() else {
        return Err(BreakError::NoFeasibleBreak.into());
    };

    let mut best = first;
    for node in terminals.iter().copied().skip(1) {
        if node.demerits < best.demerits {
            best = node;
        }
    }

    if options.looseness != 0 {
        let target = i64::from(options.looseness);
        let optimal_line = best.line as i64;

        let mut chosen = best;
        let mut chosen_diff = target.abs();
        for node in terminals.iter().copied() {
            let delta = node.line as i64 - optimal_line;
            let diff = (delta - target).abs();
            if diff < chosen_diff || (diff == chosen_diff && node.demerits < chosen.demerits) {
                chosen = node;
                chosen_diff = diff;
            }
        }
        best = chosen;
    }

    reconstruct(best, m)
}

/// Walk the chain backward from `terminal` and emit breaks in reading order
fn reconstruct(terminal: &Rc<BreakNode>, item_count: usize) -> Result<Vec<Break>> {
    let mut breaks = Vec::with_capacity(terminal.line);

    let mut node = Rc::clone(terminal);
    while let Some(previous) = node.previous.clone() {
        breaks.push(Break {
            position: node.position,
            line: node.line,
            fitness: node.fitness,
            ratio: node.ratio,
            demerits: node.demerits,
        });
        node = previous;
    }
    breaks.reverse();

    // Defensive: a corrupted chain would surface here, not in the caller.
    let mut previous_position = 0;
    for (index, brk) in breaks.iter().enumerate() {
        let ordered = brk.position < item_count
            && brk.line == index + 1
            && (index == 0 || brk.position > previous_position);
        if !ordered {
            return Err(BreakError::IndexOutOfRange {
                index: brk.position,
                len: item_count,
            }
            .into());
        }
        previous_position = brk.position;
    }

    Ok(breaks)
}
