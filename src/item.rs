//! Typesetting items and the paragraph container
//!
//! A paragraph is a flat sequence of three kinds of items, following the
//! box/glue/penalty model of Knuth and Plass:
//!
//! 1. **Box** - unbreakable material of fixed width (a character, a word
//!    fragment, an inline image)
//! 2. **Glue** - flexible space with a natural width, a stretch allowance,
//!    and a shrink allowance
//! 3. **Penalty** - an optional breakpoint with an aesthetic cost; the
//!    penalty's width is typeset only when the break is taken there (the
//!    classic example being a discretionary hyphen)
//!
//! Every item carries an opaque client payload that the breaking algorithms
//! never inspect; a renderer can use it to recover the original characters.
//!
//! # Example
//!
//! ```rust,ignore
//! use parabreak::{Paragraph, INF};
//!
//! let mut par = Paragraph::new();
//! par.append_box(1.0, 'a');
//! par.append_glue(2.0, 1.0, 1.0, ' ');
//! par.append_box(1.0, 'b');
//! par.append_standard_end(' ');
//! ```

/// Sentinel magnitude treated as infinity by the penalty arithmetic
///
/// A penalty of `INF` forbids a break; a penalty of `-INF` forces one. The
/// adjustment-ratio calculator returns the same sentinel for a segment that
/// has no flexibility in the required direction. Any value compared against
/// `penalty +/- INF` must use this constant.
pub const INF: f64 = 10_000.0;

/// A single typesetting item
///
/// The three variants mirror the specification triple from the Knuth-Plass
/// paper: `width` is `w`, `stretch` is `y`, `shrink` is `z`, `penalty` is
/// `p`, and `flagged` is `f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item {
    /// Unbreakable material of fixed width
    Box {
        /// Width of the typeset material
        width: f64,
    },

    /// Flexible spacing between boxes
    Glue {
        /// Natural width
        width: f64,
        /// Maximum amount the glue may grow beyond its natural width
        stretch: f64,
        /// Maximum amount the glue may contract below its natural width
        shrink: f64,
    },

    /// An optional breakpoint with an associated cost
    Penalty {
        /// Width of extra typeset material if the break is taken here
        /// (the width of a hyphen, usually)
        width: f64,
        /// Signed cost of breaking here; `-INF` forces, `INF` forbids
        penalty: f64,
        /// True for hyphen-like breaks; two flagged breaks in a row incur
        /// extra demerits
        flagged: bool,
    },
}

impl Item {
    /// Natural width of the item
    ///
    /// For glue this is the width before any stretching or shrinking; for
    /// a penalty it is the width of the material typeset only when the
    /// break is taken.
    #[inline]
    pub fn width(&self) -> f64 {
        match *self {
            Item::Box { width } => width,
            Item::Glue { width, .. } => width,
            Item::Penalty { width, .. } => width,
        }
    }

    /// Stretch allowance; zero for anything but glue
    #[inline]
    pub fn stretch(&self) -> f64 {
        match *self {
            Item::Glue { stretch, .. } => stretch,
            _ => 0.0,
        }
    }

    /// Shrink allowance; zero for anything but glue
    #[inline]
    pub fn shrink(&self) -> f64 {
        match *self {
            Item::Glue { shrink, .. } => shrink,
            _ => 0.0,
        }
    }

    /// Penalty value; zero for anything but a penalty item
    #[inline]
    pub fn penalty(&self) -> f64 {
        match *self {
            Item::Penalty { penalty, .. } => penalty,
            _ => 0.0,
        }
    }

    /// True for a flagged penalty
    #[inline]
    pub fn is_flagged(&self) -> bool {
        matches!(*self, Item::Penalty { flagged: true, .. })
    }

    /// True for the `Box` variant
    #[inline]
    pub fn is_box(&self) -> bool {
        matches!(*self, Item::Box { .. })
    }

    /// True for the `Glue` variant
    #[inline]
    pub fn is_glue(&self) -> bool {
        matches!(*self, Item::Glue { .. })
    }

    /// True for the `Penalty` variant
    #[inline]
    pub fn is_penalty(&self) -> bool {
        matches!(*self, Item::Penalty { .. })
    }

    /// True for a penalty that forces a break (`penalty <= -INF`)
    #[inline]
    pub fn is_forced_break(&self) -> bool {
        matches!(*self, Item::Penalty { penalty, .. } if penalty <= -INF)
    }

    /// Width of the item once a line's adjustment ratio is applied
    ///
    /// Glue grows by `ratio * stretch` when the ratio is positive and
    /// contracts by `|ratio| * shrink` when it is negative. Boxes and
    /// penalties are rigid.
    pub fn adjusted_width(&self, ratio: f64) -> f64 {
        match *self {
            Item::Glue {
                width,
                stretch,
                shrink,
            } => {
                if ratio < 0.0 {
                    width + ratio * shrink
                } else {
                    width + ratio * stretch
                }
            }
            _ => self.width(),
        }
    }
}

/// An ordered sequence of items with parallel client payloads
///
/// The container is append-only; the breaking algorithms treat it as
/// immutable for the duration of a solve. Items and payloads are stored in
/// parallel vectors so that the hot search loops touch only the compact
/// item records.
///
/// # Example
///
/// ```rust,ignore
/// use parabreak::Paragraph;
///
/// let mut par: Paragraph<char> = Paragraph::new();
/// par.append_box(1.0, 'h');
/// par.append_box(1.0, 'i');
/// assert_eq!(par.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Paragraph<T> {
    items: Vec<Item>,
    payloads: Vec<T>,
}

impl<T> Paragraph<T> {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            payloads: Vec::new(),
        }
    }

    /// Number of items in the paragraph
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the paragraph holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in order
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All payloads in item order
    #[inline]
    pub fn payloads(&self) -> &[T] {
        &self.payloads
    }

    /// Item at `index`, if in range
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Payload at `index`, if in range
    pub fn payload(&self, index: usize) -> Option<&T> {
        self.payloads.get(index)
    }

    /// Append a box of the given width
    pub fn append_box(&mut self, width: f64, payload: T) {
        self.items.push(Item::Box { width });
        self.payloads.push(payload);
    }

    /// Append glue with the given natural width and flexibility
    pub fn append_glue(&mut self, width: f64, stretch: f64, shrink: f64, payload: T) {
        self.items.push(Item::Glue {
            width,
            stretch,
            shrink,
        });
        self.payloads.push(payload);
    }

    /// Append a penalty breakpoint
    ///
    /// `penalty = INF` forbids a break here; `penalty = -INF` forces one.
    pub fn append_penalty(&mut self, width: f64, penalty: f64, flagged: bool, payload: T) {
        self.items.push(Item::Penalty {
            width,
            penalty,
            flagged,
        });
        self.payloads.push(payload);
    }

    /// Append the standard paragraph terminator
    ///
    /// The terminator is the triple that ends every well-formed paragraph:
    /// a forbidden break, then glue with unbounded stretch that fills the
    /// rest of the last line, then a forced break. The leading forbidden
    /// penalty keeps the filler glue itself from becoming a breakpoint
    /// after a box.
    pub fn append_standard_end(&mut self, payload: T)
    where
        T: Clone,
    {
        self.append_penalty(0.0, INF, false, payload.clone());
        self.append_glue(0.0, INF, 0.0, payload.clone());
        self.append_penalty(0.0, -INF, true, payload);
    }

    /// True when item `index` may legally end a line
    ///
    /// There are exactly two kinds of legal breakpoints:
    /// 1. a penalty whose value is below `INF` (not a forbidden break), and
    /// 2. glue immediately preceded by a box.
    pub fn is_feasible_breakpoint(&self, index: usize) -> bool {
        match self.items.get(index) {
            Some(Item::Penalty { penalty, .. }) => *penalty < INF,
            Some(Item::Glue { .. }) => index > 0 && self.items[index - 1].is_box(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let b = Item::Box { width: 3.0 };
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.stretch(), 0.0);
        assert_eq!(b.shrink(), 0.0);
        assert_eq!(b.penalty(), 0.0);
        assert!(b.is_box());
        assert!(!b.is_glue());
        assert!(!b.is_flagged());

        let g = Item::Glue {
            width: 2.0,
            stretch: 1.0,
            shrink: 0.5,
        };
        assert_eq!(g.width(), 2.0);
        assert_eq!(g.stretch(), 1.0);
        assert_eq!(g.shrink(), 0.5);
        assert!(g.is_glue());

        let p = Item::Penalty {
            width: 1.0,
            penalty: 50.0,
            flagged: true,
        };
        assert_eq!(p.width(), 1.0);
        assert_eq!(p.penalty(), 50.0);
        assert!(p.is_penalty());
        assert!(p.is_flagged());
    }

    #[test]
    fn test_forced_break_classification() {
        let forced = Item::Penalty {
            width: 0.0,
            penalty: -INF,
            flagged: false,
        };
        assert!(forced.is_forced_break());

        let optional = Item::Penalty {
            width: 0.0,
            penalty: 50.0,
            flagged: false,
        };
        assert!(!optional.is_forced_break());

        let forbidden = Item::Penalty {
            width: 0.0,
            penalty: INF,
            flagged: false,
        };
        assert!(!forbidden.is_forced_break());

        assert!(!Item::Box { width: 1.0 }.is_forced_break());
    }

    #[test]
    fn test_adjusted_width_stretches_and_shrinks() {
        let g = Item::Glue {
            width: 2.0,
            stretch: 1.0,
            shrink: 0.5,
        };
        assert_eq!(g.adjusted_width(0.0), 2.0);
        assert_eq!(g.adjusted_width(1.0), 3.0);
        assert_eq!(g.adjusted_width(0.5), 2.5);
        // Negative ratios contract the glue toward width - shrink.
        assert_eq!(g.adjusted_width(-1.0), 1.5);
        assert_eq!(g.adjusted_width(-0.5), 1.75);
    }

    #[test]
    fn test_adjusted_width_rigid_items() {
        let b = Item::Box { width: 4.0 };
        assert_eq!(b.adjusted_width(2.0), 4.0);
        assert_eq!(b.adjusted_width(-1.0), 4.0);

        let p = Item::Penalty {
            width: 1.0,
            penalty: 0.0,
            flagged: false,
        };
        assert_eq!(p.adjusted_width(1.0), 1.0);
    }

    #[test]
    fn test_paragraph_appends_in_order() {
        let mut par = Paragraph::new();
        par.append_box(1.0, 'a');
        par.append_glue(2.0, 1.0, 1.0, ' ');
        par.append_penalty(0.0, 50.0, true, '-');

        assert_eq!(par.len(), 3);
        assert!(par.items()[0].is_box());
        assert!(par.items()[1].is_glue());
        assert!(par.items()[2].is_penalty());
        assert_eq!(par.payloads(), &['a', ' ', '-']);
        assert_eq!(par.payload(1), Some(&' '));
        assert_eq!(par.payload(9), None);
    }

    #[test]
    fn test_standard_end_shape() {
        let mut par = Paragraph::new();
        par.append_box(1.0, 'a');
        par.append_standard_end(' ');

        assert_eq!(par.len(), 4);
        let items = par.items();
        assert_eq!(
            items[1],
            Item::Penalty {
                width: 0.0,
                penalty: INF,
                flagged: false
            }
        );
        assert_eq!(
            items[2],
            Item::Glue {
                width: 0.0,
                stretch: INF,
                shrink: 0.0
            }
        );
        assert!(items[3].is_forced_break());
    }

    #[test]
    fn test_feasibility_penalty() {
        let mut par = Paragraph::new();
        par.append_box(1.0, 'a');
        par.append_penalty(0.0, 50.0, false, ' ');
        par.append_penalty(0.0, INF, false, ' ');
        par.append_penalty(0.0, -INF, false, ' ');

        assert!(!par.is_feasible_breakpoint(0));
        assert!(par.is_feasible_breakpoint(1));
        // A forbidden break is never feasible.
        assert!(!par.is_feasible_breakpoint(2));
        assert!(par.is_feasible_breakpoint(3));
    }

    #[test]
    fn test_feasibility_glue_after_box() {
        let mut par = Paragraph::new();
        par.append_glue(1.0, 1.0, 1.0, ' ');
        par.append_box(1.0, 'a');
        par.append_glue(1.0, 1.0, 1.0, ' ');
        par.append_glue(1.0, 1.0, 1.0, ' ');

        // Glue at index 0 has no preceding box.
        assert!(!par.is_feasible_breakpoint(0));
        assert!(!par.is_feasible_breakpoint(1));
        assert!(par.is_feasible_breakpoint(2));
        // Glue after glue is not a breakpoint.
        assert!(!par.is_feasible_breakpoint(3));
    }

    #[test]
    fn test_feasibility_out_of_range() {
        let par: Paragraph<char> = Paragraph::new();
        assert!(!par.is_feasible_breakpoint(0));
        assert!(!par.is_feasible_breakpoint(100));
    }
}
