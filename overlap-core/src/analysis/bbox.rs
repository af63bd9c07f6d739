use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    analysis::{
        normalize::{RawBox, normalize},
        overlap::Axis,
    },
    error::{BoxError, InvertedHorizontalExtentSnafu, InvertedVerticalExtentSnafu, Result},
};

/// An axis-aligned box in screen coordinates, stored by its four edges.
///
/// `top` grows downwards, so a valid box always has `top <= bottom` and
/// `left <= right`. Values of this type only exist once those orderings hold;
/// build one with [`CanonicalBox::try_new`] or by normalizing a [`RawBox`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBox")]
pub struct CanonicalBox {
    top: f64,
    left: f64,
    bottom: f64,
    right: f64,
}

impl CanonicalBox {
    /// Creates a box from its four edges, rejecting inverted extents.
    ///
    /// The vertical ordering is checked before the horizontal one, so a box
    /// inverted on both axes reports `bottom` first.
    ///
    /// # Example
    /// ```
    /// use overlap_core::analysis::bbox::CanonicalBox;
    /// let bbox = CanonicalBox::try_new(1.0, 0.0, 4.0, 2.0).unwrap();
    /// assert_eq!(bbox.height(), 3.0);
    /// assert!(CanonicalBox::try_new(3.1, 2.0, 3.0, 4.0).is_err());
    /// ```
    pub fn try_new(top: f64, left: f64, bottom: f64, right: f64) -> Result<Self> {
        // Written as `<` rather than `>=` so NaN edges pass through unchanged.
        if bottom < top {
            return InvertedVerticalExtentSnafu { top, bottom }.fail();
        }
        if right < left {
            return InvertedHorizontalExtentSnafu { left, right }.fail();
        }

        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Extent of the box along `axis`.
    pub fn thickness(&self, axis: Axis) -> f64 {
        let (start, end) = axis.span(self);
        end - start
    }

    /// A box with zero thickness on either axis is a line or a point.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// The top-left corner as `(left, top)`.
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// The bottom-right corner as `(right, bottom)`.
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.right, self.bottom)
    }

    pub fn size(&self) -> DVec2 {
        self.max() - self.min()
    }

    /// Whether the two boxes share a region of nonzero area.
    ///
    /// Boxes that only touch along an edge do not overlap, and a box that is
    /// degenerate on an axis only overlaps when the other box strictly
    /// straddles its start on that axis.
    pub fn overlaps(&self, other: &Self) -> bool {
        Axis::ALL.iter().all(|axis| axis.overlaps(self, other))
    }
}

impl TryFrom<&RawBox> for CanonicalBox {
    type Error = BoxError;

    fn try_from(raw: &RawBox) -> Result<Self> {
        normalize(raw)
    }
}

impl TryFrom<RawBox> for CanonicalBox {
    type Error = BoxError;

    fn try_from(raw: RawBox) -> Result<Self> {
        normalize(&raw)
    }
}
