//! Paragraph line breaking with the Knuth-Plass total-fit algorithm
//!
//! parabreak chooses where a paragraph's lines end. Text is modeled as a
//! sequence of boxes (rigid material), glue (flexible space), and
//! penalties (potential breakpoints with a cost); the solver searches all
//! feasible break sequences at once and returns the one with the fewest
//! demerits - the globally balanced paragraph rather than the line-by-line
//! greedy one.
//!
//! # Pipeline
//!
//! 1. **Tokenize**: [`Tokenizer`] converts text into a [`Paragraph`] of
//!    items, optionally planting hyphenation points from a
//!    [`Hyphenator`] dictionary.
//! 2. **Solve**: [`solve`] runs the total-fit search ([`greedy_breaks`]
//!    is the fast first-fit alternative), returning one [`Break`] per
//!    line with its adjustment ratio and fitness class.
//! 3. **Render**: [`render_lines`] assembles the final strings with
//!    left/right/center/full [`Justification`].
//!
//! Callers with their own layout pipeline can skip steps 1 and 3 and feed
//! items directly: the solver never looks at payloads, only widths.
//!
//! # Example
//!
//! ```
//! use parabreak::{solve, BreakerOptions, Tokenizer};
//!
//! # fn main() -> parabreak::Result<()> {
//! let paragraph = Tokenizer::new()
//!     .with_space(1.0, 1.0, 1.0)
//!     .tokenize("the quick brown fox jumps over the lazy dog", |_| 1.0)?;
//!
//! let breaks = solve(&paragraph, &[16.0], &BreakerOptions::default())?;
//! assert!(!breaks.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `item` - the box/glue/penalty model and the paragraph container
//! - `measure` - prefix-sum segment measurement and adjustment ratios
//! - `fitness` - fitness classes and the demerit formula
//! - `active` - the frontier of live break candidates
//! - `breaker` - the total-fit search driver and its options
//! - `greedy` - the first-fit alternative
//! - `tokenize` - text-to-item conversion
//! - `hyphenate` - dictionary hyphenation
//! - `render` - line string assembly and justification

pub mod active;
pub mod breaker;
pub mod error;
pub mod fitness;
pub mod greedy;
pub mod hyphenate;
pub mod item;
pub mod measure;
pub mod render;
pub mod tokenize;

pub use breaker::{solve, Break, BreakerOptions};
pub use error::{BreakError, Error, RenderError, Result, TokenizeError};
pub use fitness::FitnessClass;
pub use greedy::greedy_breaks;
pub use hyphenate::{HyphenLanguage, Hyphenator};
pub use item::{Item, Paragraph, INF};
pub use render::{render_lines, Justification, RenderOptions};
pub use tokenize::{SpaceGlue, Tokenizer};
