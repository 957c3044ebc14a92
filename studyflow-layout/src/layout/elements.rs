//! Leaf elements that feed the flow layout.
//!
//! Subject tags, friend names and group labels are all rendered as chips:
//! a single line of text inside a padded capsule.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::length::{BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT, Padding};
use super::measure::Measure;
use super::proposal::ProposedSize;

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

// =========================================================================
// Chip
// =========================================================================

/// A text chip descriptor.
///
/// The chip's size is intrinsic: it never shrinks to the proposed width, so
/// a label longer than the container ends up alone on its row.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub label: String,
    pub font_size: f32,
    pub padding: Padding,
    /// Lower bound on the chip width (short labels still get a tappable target).
    pub min_width: f32,
}

impl Chip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            font_size: BASE_FONT_SIZE,
            padding: Padding::symmetric(12.0, 6.0),
            min_width: 0.0,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }

    fn scale(&self) -> f32 {
        self.font_size / BASE_FONT_SIZE
    }

    /// Intrinsic size of the chip.
    pub fn size(&self) -> Size {
        let scale = self.scale();
        let text_width = unicode_display_width(&self.label) * CHAR_WIDTH * scale;
        Size::new(
            (text_width + self.padding.horizontal()).max(self.min_width),
            LINE_HEIGHT * scale + self.padding.vertical(),
        )
    }
}

impl Measure for Chip {
    fn measure(&self, _proposal: ProposedSize) -> Size {
        self.size()
    }
}
