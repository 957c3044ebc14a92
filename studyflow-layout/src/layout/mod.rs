//! Flow layout engine.
//!
//! A pass is a pure function of the items, the proposal and the spacing:
//!
//! ```text
//! measure items -> pack rows -> place rows -> aggregate size
//! ```
//!
//! Nothing is retained between passes.

pub mod aggregate;
pub mod elements;
pub mod flow;
pub mod length;
pub mod measure;
pub mod placement;
pub mod proposal;
pub mod rows;

pub use aggregate::total_size;
pub use elements::Chip;
pub use flow::{DEFAULT_SPACING, FlowLayout, FlowLayoutResult};
pub use length::{BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT, Padding};
pub use measure::{Measure, MeasureFn, resolve_sizes};
pub use placement::place_rows;
pub use proposal::ProposedSize;
pub use rows::{Row, pack_rows};
