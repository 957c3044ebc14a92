//! Studyflow Layout: flow layout for the study planner's chip surfaces.
//!
//! Subject tags, friend lists and group members are shown as wrapping rows
//! of chips. This crate packs an ordered list of measurable items into
//! left-to-right, top-to-bottom rows for a bounded container width and
//! returns a placement rectangle per item plus the overall size.
//!
//! # Usage
//!
//! ```
//! use studyflow_layout::{Chip, FlowLayout, Point, ProposedSize};
//!
//! let chips = [Chip::new("Calculus"), Chip::new("Organic Chemistry"), Chip::new("History")];
//! let result = FlowLayout::new(8.0).layout(&chips, ProposedSize::width(240.0), Point::ORIGIN);
//!
//! assert_eq!(result.placements.len(), 3);
//! assert_eq!(result.total_size.width, 240.0);
//! ```

// Core primitives
pub mod primitives;

// Layout engine
pub mod layout;

// Host adapters
pub mod config;
pub mod error;
pub mod request;

// Re-export core types
pub use config::FlowConfig;
pub use error::LayoutError;
pub use layout::{
    Chip, DEFAULT_SPACING, FlowLayout, FlowLayoutResult, Measure, MeasureFn, Padding, ProposedSize,
    Row,
};
pub use primitives::{Point, Rect, Size};
pub use request::{ItemKind, ItemSpec, LayoutRequest, LayoutResponse, Placement};
