use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{
    analysis::{
        bbox::CanonicalBox,
        normalize::{RawBox, normalize},
    },
    error::Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// `top` to `bottom`.
    Vertical,
    /// `left` to `right`.
    Horizontal,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    /// The `(start, end)` edges of `bbox` along this axis.
    pub fn span(self, bbox: &CanonicalBox) -> (f64, f64) {
        match self {
            Axis::Vertical => (bbox.top(), bbox.bottom()),
            Axis::Horizontal => (bbox.left(), bbox.right()),
        }
    }

    /// Whether `a` and `b` overlap when projected on this axis.
    ///
    /// The box that starts first must reach strictly past the other's start.
    /// When both start at the same coordinate, both need positive thickness,
    /// so shared edges and zero-thickness spans never count.
    pub fn overlaps(self, a: &CanonicalBox, b: &CanonicalBox) -> bool {
        let (a_start, a_end) = self.span(a);
        let (b_start, b_end) = self.span(b);

        (a_start < b_start && a_end > b_start)
            || (a_start > b_start && b_end > a_start)
            || (a_start == b_start && a_start < a_end && b_start < b_end)
    }
}

/// Checks whether two loosely specified boxes overlap.
///
/// Both boxes are normalized first, `a` before `b`; the first normalization
/// failure is returned as is. Touching edges are not an overlap.
///
/// # Example
/// ```
/// use overlap_core::{RawBox, overlaps};
/// let a = RawBox::from_xywh(0.0, 1.0, 2.0, 3.0);
/// assert!(overlaps(&a, &RawBox::from_xywh(0.0, 3.0, 1.0, 1.0)).unwrap());
/// assert!(!overlaps(&a, &RawBox::from_xywh(0.0, 4.0, 1.0, 1.0)).unwrap());
/// ```
pub fn overlaps(a: &RawBox, b: &RawBox) -> Result<bool> {
    let a = normalize(a)?;
    let b = normalize(b)?;

    let overlapping = a.overlaps(&b);
    trace!(?a, ?b, overlapping, "overlap evaluated");

    Ok(overlapping)
}
