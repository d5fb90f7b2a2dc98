#![forbid(unsafe_code)]

//! Geometric primitives in layout units (floating point, origin at top-left).

/// Tolerance used for containment and overlap checks.
///
/// Packers accumulate `padding + n * (size + gap)` sums, so edges that should
/// coincide may differ by a few ULPs.
pub const LAYOUT_EPSILON: f64 = 1e-6;

/// The rendering area available to the card container.
///
/// Both dimensions are non-negative and finite; [`ViewportSize::new`]
/// sanitizes anything else to zero so a transient bogus measurement
/// degrades to an empty layout instead of poisoning the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl ViewportSize {
    /// Zero-sized viewport.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a viewport, clamping negative or non-finite values to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    /// Re-apply the non-negative/finite rule to a value built with struct syntax.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Check if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Width divided by height, or `None` for a zero-height viewport.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height > 0.0).then(|| self.width / self.height)
    }

    /// Whether the viewport is strictly wider than it is tall.
    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// An axis-aligned rectangle occupied by a card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardRect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CardRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether the interiors of two rectangles intersect.
    ///
    /// Rectangles that merely share an edge (within [`LAYOUT_EPSILON`]) do
    /// not intersect. Empty rectangles never intersect anything.
    pub fn intersects(&self, other: &CardRect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        overlap_x > LAYOUT_EPSILON && overlap_y > LAYOUT_EPSILON
    }

    /// Check whether `other` lies fully inside this rectangle (with tolerance).
    pub fn contains_rect(&self, other: &CardRect) -> bool {
        other.x >= self.x - LAYOUT_EPSILON
            && other.y >= self.y - LAYOUT_EPSILON
            && other.right() <= self.right() + LAYOUT_EPSILON
            && other.bottom() <= self.bottom() + LAYOUT_EPSILON
    }

    /// Smallest rectangle containing both inputs.
    pub fn union(&self, other: &CardRect) -> CardRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        CardRect::new(x, y, right - x, bottom - y)
    }
}

/// Total scrollable extent of a computed layout.
///
/// The extent along the scroll axis may exceed the viewport; along the
/// cross axis it never does.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentExtent {
    pub width: f64,
    pub height: f64,
}
