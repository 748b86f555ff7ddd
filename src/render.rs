//! Rendering chosen breaks into line strings
//!
//! The breaker decides *where* lines end; this module turns those
//! decisions into text. It walks the items of each line, emitting box
//! payloads, spaces for glue, and a hyphen when the line ends at a flagged
//! penalty, then aligns the result according to the justification mode.
//!
//! Rendering assumes a character-grid model: box payloads are single
//! characters and widths are whole columns. Full justification sets each
//! glue to its ratio-adjusted width and makes up rounding shortfall by
//! widening interior spaces left to right.
//!
//! # Example
//!
//! ```rust,ignore
//! use parabreak::{render_lines, solve, BreakerOptions, RenderOptions, Tokenizer};
//!
//! let par = Tokenizer::new().tokenize("some text to wrap", |_| 1.0)?;
//! let breaks = solve(&par, &[12.0], &BreakerOptions::default())?;
//! let lines = render_lines(&par, &breaks, &[12.0], &RenderOptions::default())?;
//! ```

use crate::breaker::Break;
use crate::error::{RenderError, Result};
use crate::item::{Item, Paragraph};
use crate::measure::line_length;

/// Horizontal alignment of rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Flush left, ragged right
    #[default]
    Left,
    /// Ragged left, flush right
    Right,
    /// Centered, left-biased when the padding is odd
    Center,
    /// Flush on both margins; glue widths follow the adjustment ratio
    Full,
}

/// Options controlling line assembly
///
/// # Example
///
/// ```rust,ignore
/// use parabreak::{Justification, RenderOptions};
///
/// let options = RenderOptions::default()
///     .with_justification(Justification::Full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Alignment mode
    pub justification: Justification,
    /// Character emitted at taken hyphen breaks
    pub hyphen_char: char,
    /// Character emitted for glue and padding
    pub space_char: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            justification: Justification::Left,
            hyphen_char: '-',
            space_char: ' ',
        }
    }
}

impl RenderOptions {
    /// Create options with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment mode
    #[must_use]
    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    /// Set the hyphen character
    #[must_use]
    pub fn with_hyphen_char(mut self, hyphen: char) -> Self {
        self.hyphen_char = hyphen;
        self
    }

    /// Set the space character
    #[must_use]
    pub fn with_space_char(mut self, space: char) -> Self {
        self.space_char = space;
        self
    }
}

/// Assemble the text of each line chosen by a breakpoint search
///
/// `breaks` must come from a solve over the same `paragraph`, and
/// `line_lengths` should be the schedule the solve used (alignment targets
/// come from it, with the last entry repeating). The paragraph's payloads
/// must be characters, which makes this renderer a character-grid one; a
/// caller with richer material renders from the break list itself.
///
/// The final line is never full-justified; its trailing filler glue
/// already absorbs the slack.
///
/// # Errors
///
/// - [`RenderError::EmptyLineLengths`] for an empty schedule
/// - [`RenderError::BreakOutOfRange`] when a break does not belong to
///   this paragraph
pub fn render_lines(
    paragraph: &Paragraph<char>,
    breaks: &[Break],
    line_lengths: &[f64],
    options: &RenderOptions,
) -> Result<Vec<String>> {
    if line_lengths.is_empty() {
        return Err(RenderError::EmptyLineLengths.into());
    }

    let items = paragraph.items();
    let payloads = paragraph.payloads();
    let mut lines = Vec::with_capacity(breaks.len());

    for (index, brk) in breaks.iter().enumerate() {
        if brk.position >= items.len() {
            return Err(RenderError::BreakOutOfRange {
                position: brk.position,
                len: items.len(),
            }
            .into());
        }

        let start = if index == 0 { 0 } else { breaks[index - 1].position };
        let is_last = index == breaks.len() - 1;
        let full = options.justification == Justification::Full && !is_last;

        let mut line = String::new();
        for j in start..brk.position {
            match items[j] {
                Item::Box { .. } => line.push(payloads[j]),
                Item::Glue { .. } => {
                    let count = if full {
                        items[j].adjusted_width(brk.ratio).floor().max(0.0) as usize
                    } else {
                        1
                    };
                    for _ in 0..count {
                        line.push(options.space_char);
                    }
                }
                // An untaken penalty typesets nothing.
                Item::Penalty { .. } => {}
            }
        }

        // A taken flagged penalty typesets its hyphen; the forced terminator
        // is flagged too but ends the paragraph, not a word.
        if items[brk.position].is_flagged() && !items[brk.position].is_forced_break() {
            line.push(options.hyphen_char);
        }

        let trimmed: String = line
            .trim_matches(options.space_char)
            .to_string();
        let target = line_length(line_lengths, index).round().max(0.0) as usize;

        lines.push(align(trimmed, target, options, is_last));
    }

    Ok(lines)
}

/// Apply the justification mode to an assembled line
fn align(line: String, target: usize, options: &RenderOptions, is_last: bool) -> String {
    let width = line.chars().count();

    match options.justification {
        Justification::Left => line,
        Justification::Right => {
            if width >= target {
                line
            } else {
                let mut out = String::with_capacity(target);
                for _ in 0..target - width {
                    out.push(options.space_char);
                }
                out.push_str(&line);
                out
            }
        }
        Justification::Center => {
            if width >= target {
                line
            } else {
                let padding = target - width;
                let right = padding / 2;
                let left = padding - right;
                let mut out = String::with_capacity(target);
                for _ in 0..left {
                    out.push(options.space_char);
                }
                out.push_str(&line);
                for _ in 0..right {
                    out.push(options.space_char);
                }
                out
            }
        }
        Justification::Full => {
            if is_last || width >= target {
                line
            } else {
                widen_spaces(line, target, options.space_char)
            }
        }
    }
}

/// Add `target - width` extra spaces into existing space runs, left first
///
/// Rounding glue widths down leaves a small shortfall; spreading single
/// columns across the line keeps the error invisible. A line with no
/// interior spaces is returned unchanged.
fn widen_spaces(line: String, target: usize, space_char: char) -> String {
    let mut missing = target.saturating_sub(line.chars().count());
    let mut current: Vec<char> = line.chars().collect();

    while missing > 0 {
        let mut out: Vec<char> = Vec::with_capacity(current.len() + missing);
        let mut inserted = false;
        let mut previous_was_space = false;

        for &ch in &current {
            if missing > 0 && ch == space_char && !previous_was_space {
                out.push(space_char);
                missing -= 1;
                inserted = true;
            }
            previous_was_space = ch == space_char;
            out.push(ch);
        }

        if !inserted {
            break;
        }
        current = out;
    }

    current.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaker::{solve, BreakerOptions};
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

    fn render(par: &Paragraph<char>, lengths: &[f64], justification: Justification) -> Vec<String> {
        let breaks = solve(par, lengths, &BreakerOptions::default()).unwrap();
        render_lines(
            par,
            &breaks,
            lengths,
            &RenderOptions::default().with_justification(justification),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_line_lengths_rejected() {
        let par = paragraph_from("ab");
        let err = render_lines(&par, &[], &[], &RenderOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Render(RenderError::EmptyLineLengths)
        ));
    }

    #[test]
    fn test_break_out_of_range_rejected() {
        let par = paragraph_from("ab");
        let bogus = Break {
            position: 99,
            line: 1,
            fitness: crate::fitness::FitnessClass::Normal,
            ratio: 0.0,
            demerits: 0.0,
        };
        let err = render_lines(&par, &[bogus], &[10.0], &RenderOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Render(RenderError::BreakOutOfRange { position: 99, .. })
        ));
    }

    #[test]
    fn test_left_single_line() {
        let par = paragraph_from("ab cd");
        let lines = render(&par, &[100.0], Justification::Left);
        assert_eq!(lines, vec!["ab cd"]);
    }

    #[test]
    fn test_left_two_lines() {
        let par = paragraph_from("ab cd ef gh");
        let lines = render(&par, &[5.0], Justification::Left);
        assert_eq!(lines, vec!["ab cd", "ef gh"]);
    }

    #[test]
    fn test_right_pads_to_measure() {
        let par = paragraph_from("ab cd");
        let lines = render(&par, &[8.0], Justification::Right);
        assert_eq!(lines, vec!["   ab cd"]);
    }

    #[test]
    fn test_center_splits_padding() {
        let par = paragraph_from("ab cd");
        let lines = render(&par, &[9.0], Justification::Center);
        assert_eq!(lines, vec!["  ab cd  "]);

        // Odd padding biases left.
        let lines = render(&par, &[8.0], Justification::Center);
        assert_eq!(lines, vec!["  ab cd "]);
    }

    #[test]
    fn test_full_justifies_interior_lines() {
        let par = paragraph_from("ab cd ef gh");
        let lines = render(&par, &[5.0], Justification::Full);

        assert_eq!(lines.len(), 2);
        // Interior line is flush on both margins.
        assert_eq!(lines[0].chars().count(), 5);
        assert!(lines[0].starts_with("ab"));
        assert!(lines[0].ends_with("cd"));
        // The last line stays left-aligned.
        assert_eq!(lines[1], "ef gh");
    }

    #[test]
    fn test_full_widens_spaces_on_shortfall() {
        // "ab cd ef" at ratio 0.5 sets each space to 1.5 columns; the
        // floor leaves one column to make up by widening a space run.
        let par = paragraph_from("ab cd ef gh");
        let breaks = solve(
            &par,
            &[9.0, 100.0],
            &BreakerOptions::default().with_looseness(1),
        )
        .unwrap();

        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[0].position, 8);
        assert!((breaks[0].ratio - 0.5).abs() < 1e-9);

        let lines = render_lines(
            &par,
            &breaks,
            &[9.0, 100.0],
            &RenderOptions::default().with_justification(Justification::Full),
        )
        .unwrap();
        assert_eq!(lines[0].chars().count(), 9);
        assert_eq!(lines[0], "ab  cd ef");
        assert_eq!(lines[1], "gh");
    }

    #[test]
    fn test_hyphen_emitted_at_flagged_break() {
        // A word divided at a flagged penalty renders with a hyphen.
        let mut par = Paragraph::new();
        for ch in ['h', 'y'] {
            par.append_box(1.0, ch);
        }
        par.append_penalty(1.0, 50.0, true, '-');
        for ch in ['p', 'h', 'e', 'n'] {
            par.append_box(1.0, ch);
        }
        par.append_standard_end(' ');

        let breaks = solve(
            &par,
            &[3.0, 100.0],
            &BreakerOptions::default().with_tolerance(30.0),
        )
        .unwrap();
        let lines = render_lines(
            &par,
            &breaks,
            &[3.0, 100.0],
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "hy-");
        assert_eq!(lines[1], "phen");
    }

    #[test]
    fn test_no_hyphen_for_forced_terminator() {
        let par = paragraph_from("ab");
        let lines = render(&par, &[10.0], Justification::Left);
        assert_eq!(lines, vec!["ab"]);
    }

    #[test]
    fn test_forced_break_marker_renders_two_lines() {
        let mut par = Paragraph::new();
        par.append_box(1.0, 'a');
        par.append_box(1.0, 'a');
        par.append_glue(1.0, 1.0, 1.0, ' ');
        par.append_box(1.0, 'b');
        par.append_box(1.0, 'b');
        par.append_penalty(0.0, -INF, false, '\n');
        par.append_box(1.0, 'c');
        par.append_box(1.0, 'c');
        par.append_standard_end(' ');

        let breaks = solve(&par, &[6.0], &BreakerOptions::default()).unwrap();
        let lines = render_lines(&par, &breaks, &[6.0], &RenderOptions::default()).unwrap();
        assert_eq!(lines, vec!["aa bb", "cc"]);
    }

    #[test]
    fn test_custom_characters() {
        let par = paragraph_from("ab cd");
        let breaks = solve(&par, &[8.0], &BreakerOptions::default()).unwrap();
        let lines = render_lines(
            &par,
            &breaks,
            &[8.0],
            &RenderOptions::new()
                .with_justification(Justification::Right)
                .with_space_char('.'),
        )
        .unwrap();
        assert_eq!(lines, vec!["...ab.cd"]);
    }

    #[test]
    fn test_widen_spaces_left_first() {
        let widened = widen_spaces("a b c".to_string(), 7, ' ');
        assert_eq!(widened, "a  b  c");

        let uneven = widen_spaces("a b c".to_string(), 6, ' ');
        assert_eq!(uneven, "a  b c");
    }

    #[test]
    fn test_widen_spaces_no_interior_spaces() {
        let unchanged = widen_spaces("abc".to_string(), 10, ' ');
        assert_eq!(unchanged, "abc");
    }
}
