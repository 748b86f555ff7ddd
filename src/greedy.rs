//! First-fit breakpoint search
//!
//! A cheaper alternative to the total-fit solver: scan the paragraph once,
//! remember the latest feasible breakpoint that still fits the current
//! line, and break there the moment the material overflows. The result is
//! the classic greedy wrap - never globally balanced, but linear-time with
//! no frontier bookkeeping, and good enough for ragged-right settings.
//!
//! Lines are measured and scored with the same arithmetic as the total-fit
//! search, so the returned descriptors are interchangeable: same segment
//! convention, same fitness classes, same demerit formula accumulated
//! along the single greedy path.

use crate::breaker::{validate_line_lengths, Break};
use crate::error::{BreakError, Result};
use crate::fitness::{line_demerits, FitnessClass};
use crate::item::{Item, Paragraph};
use crate::measure::{adjustment_ratio, line_length, PrefixSums};

/// Break a paragraph with the greedy first-fit strategy
///
/// Walks the items in order, keeping the latest feasible breakpoint whose
/// line would still fit its target width naturally. When a feasible
/// breakpoint no longer fits, the line is committed at the remembered
/// candidate (or at the current breakpoint when none fits at all, yielding
/// an overfull line saturated at ratio -1). Forced penalties always
/// commit immediately.
///
/// The paragraph must end with the standard terminator; its forced final
/// break closes the last line.
///
/// # Errors
///
/// - [`BreakError::EmptyLineLengths`] / [`BreakError::InvalidLineLength`]
///   for a bad schedule
/// - [`BreakError::NoFeasibleBreak`] when the scan ends without a break on
///   the final item (missing terminator)
pub fn greedy_breaks<T>(paragraph: &Paragraph<T>, line_lengths: &[f64]) -> Result<Vec<Break>> {
    validate_line_lengths(line_lengths)?;

    let items = paragraph.items();
    let m = items.len();
    if m == 0 {
        return Ok(Vec::new());
    }

    let sums = PrefixSums::new(items);

    let mut breaks: Vec<Break> = Vec::new();
    let mut start = 0usize;
    let mut line = 0usize;
    let mut total_demerits = 0.0;
    let mut previous_fitness = FitnessClass::Normal;
    let mut previous_flagged = false;
    let mut last_fit: Option<usize> = None;

    let mut b = 0usize;
    while b < m {
        let mut commit_at: Option<usize> = None;

        if paragraph.is_feasible_breakpoint(b) {
            let available = line_length(line_lengths, line);
            let mut natural = sums.width_between(start, b);
            if let Item::Penalty { width, .. } = items[b] {
                natural += width;
            }

            if items[b].is_forced_break() {
                commit_at = Some(b);
            } else if natural <= available {
                last_fit = Some(b);
            } else {
                commit_at = Some(last_fit.take().unwrap_or(b));
            }
        }

        if let Some(position) = commit_at {
            let raw = adjustment_ratio(&sums, items, start, position, line, line_lengths);
            let mut natural = sums.width_between(start, position);
            if let Item::Penalty { width, .. } = items[position] {
                natural += width;
            }
            // Overfull lines saturate at -1; a rigid overfull segment comes
            // back as the positive sentinel and saturates the same way.
            let ratio = if natural > line_length(line_lengths, line) && raw > 0.0 {
                -1.0
            } else {
                raw.max(-1.0)
            };
            let fitness = FitnessClass::from_ratio(ratio);

            let mut demerits = line_demerits(ratio, items[position].penalty());
            if previous_flagged && items[position].is_flagged() {
                demerits += 100.0;
            }
            if fitness.distance(previous_fitness) > 1 {
                demerits += 100.0;
            }
            total_demerits += demerits;

            line += 1;
            breaks.push(Break {
                position,
                line,
                fitness,
                ratio,
                demerits: total_demerits,
            });

            previous_fitness = fitness;
            previous_flagged = items[position].is_flagged();
            start = position;
            last_fit = None;
            b = position + 1;
            continue;
        }

        b += 1;
    }

    match breaks.last() {
        Some(last) if last.position + 1 == m => Ok(breaks),
        _ => Err(BreakError::NoFeasibleBreak.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::item::INF;

    fn paragraph_from(text: &str) -> Paragraph<char> {
        let mut par = Paragraph::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                par.append_glue(1.0, 1.0, 1.0, ' ');
            } else {
                par.append_box(1.0, ch);
            }
        }
        par.append_standard_end(' ');
        par
    }

    #[test]
    fn test_empty_line_lengths_rejected() {
        let par = paragraph_from("hi");
        let err = greedy_breaks(&par, &[]).unwrap_err();
        assert!(matches!(err, Error::Break(BreakError::EmptyLineLengths)));
    }

    #[test]
    fn test_empty_paragraph() {
        let par: Paragraph<char> = Paragraph::new();
        assert!(greedy_breaks(&par, &[10.0]).unwrap().is_empty());
    }

    #[test]
    fn test_single_line_fit() {
        let par = paragraph_from("ab cd");
        let breaks = greedy_breaks(&par, &[100.0]).unwrap();
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].position, par.len() - 1);
        assert_eq!(breaks[0].line, 1);
    }

    #[test]
    fn test_wraps_at_last_fitting_break() {
        // "ab cd ef gh" at 5 units: "ab cd" fits naturally, "ab cd ef"
        // does not, so the first line commits at the glue after "cd".
        let par = paragraph_from("ab cd ef gh");
        let breaks = greedy_breaks(&par, &[5.0]).unwrap();

        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[0].position, 5);
        assert!(par.items()[5].is_glue());
        assert_eq!(breaks[1].position, par.len() - 1);
    }

    #[test]
    fn test_breaks_increasing_and_feasible() {
        let par = paragraph_from("one two three four five six seven eight");
        let breaks = greedy_breaks(&par, &[12.0]).unwrap();

        assert!(breaks.len() > 1);
        for pair in breaks.windows(2) {
            assert!(pair[1].position > pair[0].position);
            assert_eq!(pair[1].line, pair[0].line + 1);
        }
        for brk in &breaks {
            assert!(par.is_feasible_breakpoint(brk.position));
        }
    }

    #[test]
    fn test_forced_break_commits_short_line() {
        let mut par = Paragraph::new();
        par.append_box(1.0, 'a');
        par.append_box(1.0, 'a');
        par.append_penalty(0.0, -INF, false, '\n');
        par.append_box(1.0, 'b');
        par.append_box(1.0, 'b');
        par.append_standard_end(' ');

        let breaks = greedy_breaks(&par, &[50.0]).unwrap();
        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[0].position, 2);
    }

    #[test]
    fn test_overfull_line_saturates_ratio() {
        // A single 20-wide word in a 5-unit measure cannot break anywhere
        // except the terminator; the lone line reports ratio -1.
        let mut par = Paragraph::new();
        par.append_box(20.0, 'w');
        par.append_glue(1.0, 1.0, 1.0, ' ');
        par.append_box(20.0, 'x');
        par.append_standard_end(' ');

        let breaks = greedy_breaks(&par, &[5.0]).unwrap();
        assert!(!breaks.is_empty());
        assert_eq!(breaks[0].ratio, -1.0);
        assert_eq!(breaks[0].fitness, FitnessClass::Tight);
    }

    #[test]
    fn test_missing_terminator_fails() {
        let mut par = Paragraph::new();
        par.append_box(4.0, 'a');
        par.append_glue(1.0, 1.0, 1.0, ' ');
        par.append_box(4.0, 'b');
        let err = greedy_breaks(&par, &[20.0]).unwrap_err();
        assert!(matches!(err, Error::Break(BreakError::NoFeasibleBreak)));
    }

    #[test]
    fn test_demerits_accumulate() {
        let par = paragraph_from("one two three four five six seven eight");
        let breaks = greedy_breaks(&par, &[12.0]).unwrap();
        for pair in breaks.windows(2) {
            assert!(pair[1].demerits >= pair[0].demerits);
        }
    }
}
