//! Size proposals passed from the host into a layout pass.
//!
//! The host proposes a container size; only the width takes part in flow
//! layout. Height is carried so hosts can forward what they have, but the
//! engine never constrains it.

use serde::{Deserialize, Serialize};

use crate::primitives::non_negative;

/// The container size proposed by the host for one pass.
///
/// `None` on an axis means the host left that axis unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposedSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposedSize {
    /// No constraint on either axis.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    #[inline]
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    /// Constrained width, unconstrained height.
    #[inline]
    pub fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// The width budget for row packing.
    ///
    /// Absent, NaN and infinite widths all describe an unbounded host and
    /// resolve to `None`. A negative width clamps to zero.
    #[inline]
    pub fn budget(&self) -> Option<f32> {
        match self.width {
            Some(w) if w.is_finite() => Some(non_negative(w)),
            _ => None,
        }
    }

    /// Check if the width resolves to a usable budget.
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.budget().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_has_no_budget() {
        assert_eq!(ProposedSize::UNSPECIFIED.budget(), None);
        assert!(!ProposedSize::default().has_bounded_width());
    }

    #[test]
    fn test_width_budget() {
        let p = ProposedSize::width(320.0);
        assert_eq!(p.budget(), Some(320.0));
        assert!(p.has_bounded_width());
    }

    #[test]
    fn test_unbounded_widths() {
        assert_eq!(ProposedSize::width(f32::INFINITY).budget(), None);
        assert_eq!(ProposedSize::width(f32::NAN).budget(), None);
    }

    #[test]
    fn test_negative_width_clamps_to_zero() {
        assert_eq!(ProposedSize::width(-12.0).budget(), Some(0.0));
    }

    #[test]
    fn test_height_is_ignored_by_budget() {
        let p = ProposedSize::new(Some(100.0), Some(5.0));
        assert_eq!(p.budget(), Some(100.0));
        let p = ProposedSize::new(None, Some(5.0));
        assert_eq!(p.budget(), None);
    }
}
