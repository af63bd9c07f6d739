use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::*;

use crate::{
    analysis::bbox::CanonicalBox,
    error::{ExtentUncomputableSnafu, JsonSnafu, PositionUncomputableSnafu, Result, missing_fields},
};

/// A loosely specified box, in the spirit of a DOMRect.
///
/// Any subset of the edge convention (`top`, `left`, `bottom`, `right`) and the
/// origin-size convention (`x`, `y`, `width`, `height`) may be supplied. A
/// field counts as given when it is `Some`, whatever its value, so a box at
/// coordinate `0` is distinct from one with the coordinate left out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl RawBox {
    /// Creates a raw box from its four edges.
    ///
    /// # Example
    /// ```
    /// use overlap_core::analysis::normalize::RawBox;
    /// let raw = RawBox::from_edges(1.0, 11.0, 2.0, 12.0);
    /// assert_eq!(raw.top, Some(1.0));
    /// ```
    pub fn from_edges(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            bottom: Some(bottom),
            right: Some(right),
            ..Self::default()
        }
    }

    /// Creates a raw box from an origin and a size.
    ///
    /// # Example
    /// ```
    /// use overlap_core::analysis::normalize::{RawBox, normalize};
    /// let bbox = normalize(&RawBox::from_xywh(1.0, 2.0, 10.0, 20.0)).unwrap();
    /// assert_eq!((bbox.right(), bbox.bottom()), (11.0, 22.0));
    /// ```
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Parses a JSON object such as `{"x": 0, "y": 1, "width": 2, "height": 3}`.
    ///
    /// Unknown keys are ignored and `null` is treated as an absent key.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context(JsonSnafu)
    }

    pub fn with_top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

impl From<CanonicalBox> for RawBox {
    fn from(bbox: CanonicalBox) -> Self {
        Self::from_edges(bbox.top(), bbox.left(), bbox.bottom(), bbox.right())
    }
}

/// Falls back to a value derived from the alternate convention when the
/// direct edge is absent.
fn resolve(field: &str, direct: Option<f64>, via: &str, alternate: Option<f64>) -> Option<f64> {
    direct.or_else(|| {
        let value = alternate?;
        trace!(field, via, value, "edge resolved from alternate key");
        Some(value)
    })
}

/// Resolves a [`RawBox`] into its canonical edges.
///
/// Direct edges always take precedence over `x`/`y`/`width`/`height`. The
/// position (`top`, `left`) is settled first because `width` and `height` are
/// measured from it; `bottom` and `right` follow, then the orderings are
/// validated.
///
/// # Example
/// ```
/// use overlap_core::analysis::normalize::{RawBox, normalize};
/// // `x`/`y` give the origin, an explicit `right` overrides `width`.
/// let raw = RawBox::from_xywh(0.0, 1.0, 2.0, 3.0).with_right(5.0);
/// let bbox = normalize(&raw).unwrap();
/// assert_eq!((bbox.top(), bbox.left(), bbox.bottom(), bbox.right()), (1.0, 0.0, 4.0, 5.0));
/// ```
pub fn normalize(raw: &RawBox) -> Result<CanonicalBox> {
    let top = resolve("top", raw.top, "y", raw.y);
    let left = resolve("left", raw.left, "x", raw.x);

    let (Some(top), Some(left)) = (top, left) else {
        return PositionUncomputableSnafu {
            missing: missing_fields(&[("top", top), ("left", left)]),
        }
        .fail();
    };

    let bottom = resolve("bottom", raw.bottom, "height", raw.height.map(|h| top + h));
    let right = resolve("right", raw.right, "width", raw.width.map(|w| left + w));

    let (Some(bottom), Some(right)) = (bottom, right) else {
        return ExtentUncomputableSnafu {
            missing: missing_fields(&[("bottom", bottom), ("right", right)]),
        }
        .fail();
    };

    CanonicalBox::try_new(top, left, bottom, right)
}
