//! The measurement capability items expose to the engine.
//!
//! The engine doesn't know what an item is (a chip, an avatar, a rendered
//! view); the host supplies anything that can report its size for a
//! proposal.

use crate::primitives::Size;

use super::proposal::ProposedSize;

/// Something that can report its intrinsic size for a proposed container size.
pub trait Measure {
    fn measure(&self, proposal: ProposedSize) -> Size;
}

/// A fixed intrinsic size, independent of the proposal.
impl Measure for Size {
    #[inline]
    fn measure(&self, _proposal: ProposedSize) -> Size {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    #[inline]
    fn measure(&self, proposal: ProposedSize) -> Size {
        (**self).measure(proposal)
    }
}

impl<T: Measure + ?Sized> Measure for Box<T> {
    #[inline]
    fn measure(&self, proposal: ProposedSize) -> Size {
        (**self).measure(proposal)
    }
}

/// Adapts a closure into a [`Measure`] implementation.
pub struct MeasureFn<F>(pub F);

impl<F> Measure for MeasureFn<F>
where
    F: Fn(ProposedSize) -> Size,
{
    #[inline]
    fn measure(&self, proposal: ProposedSize) -> Size {
        (self.0)(proposal)
    }
}

/// Resolve every item's size for one pass.
///
/// Each item is measured exactly once, in input order. Negative or NaN
/// components are clamped to zero.
pub fn resolve_sizes<M: Measure>(items: &[M], proposal: ProposedSize) -> Vec<Size> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let size = item.measure(proposal);
            if !size.is_non_negative() {
                tracing::debug!(index, ?size, "clamping negative item size");
            }
            size.non_negative()
        })
        .collect()
}
