//! Column/row counts and card dimensions.
//!
//! # Axes
//!
//! The scroll direction decides which axis is bounded by the viewport:
//!
//! | Direction    | Bounded (cross) axis | Growing (scroll) axis |
//! |--------------|----------------------|-----------------------|
//! | `Vertical`   | width: `columns`     | rows                  |
//! | `Horizontal` | height: `rows`       | columns               |
//!
//! Counts are derived from the card thresholds:
//! `count = floor((available + gap) / (threshold + gap))`. A count of zero
//! means not even one threshold-sized card fits, which makes the pass
//! degenerate. Card extents on a bounded axis fill it exactly:
//! `(available - gap * (count - 1)) / count`, which is never smaller than
//! the threshold.

use crate::config::{Direction, LayoutConfig, Strategy};
use crate::geometry::{LAYOUT_EPSILON, ViewportSize};

/// Derived layout parameters for one pass.
///
/// For masonry the card extent along the scroll axis varies per card; the
/// corresponding field (`card_height` in vertical direction, `card_width`
/// in horizontal direction) is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedLayout {
    pub strategy: Strategy,
    pub direction: Direction,
    /// Columns that fit the available width.
    ///
    /// This is a viewport-fitted count, not the number of columns in use:
    /// a horizontal grid keeps adding columns past it along the scroll axis.
    pub columns: usize,
    /// Rows that fit the available height. Zero for vertical masonry.
    ///
    /// Like `columns`, this counts rows that fit, not rows in use. A
    /// fixed-height vertical grid in a short viewport reports `0` here while
    /// its cards still occupy rows `0..` on the scroll axis.
    pub rows: usize,
    pub card_width: f64,
    pub card_height: f64,
}

impl ResolvedLayout {
    /// Whether the viewport is too small to position any card.
    ///
    /// This is a normal state (mount/unmount, collapsed panes), not an error.
    pub fn is_degenerate(&self) -> bool {
        if self.columns == 0 || self.lanes() == 0 {
            return true;
        }
        match (self.strategy, self.direction) {
            (Strategy::Grid, _) => self.card_width <= 0.0 || self.card_height <= 0.0,
            (Strategy::Masonry, Direction::Vertical) => self.card_width <= 0.0,
            (Strategy::Masonry, Direction::Horizontal) => self.card_height <= 0.0,
        }
    }

    /// Number of lanes along the cross axis.
    pub fn lanes(&self) -> usize {
        match self.direction {
            Direction::Vertical => self.columns,
            Direction::Horizontal => self.rows,
        }
    }
}

/// Pure sizing functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackingCalculator;

impl PackingCalculator {
    /// Space left for cards after padding on both sides, never negative.
    pub fn available(viewport: ViewportSize, config: &LayoutConfig) -> (f64, f64) {
        let inset = 2.0 * config.padding;
        (
            (viewport.width - inset).max(0.0),
            (viewport.height - inset).max(0.0),
        )
    }

    /// How many tracks of `threshold` separated by `gap` fit in `available`.
    pub fn track_count(available: f64, threshold: f64, gap: f64) -> usize {
        if !(available > 0.0) {
            return 0;
        }
        let fit = (available + gap) / (threshold + gap);
        // Exact fits should not lose a track to rounding.
        let count = (fit + LAYOUT_EPSILON).floor();
        if count.is_finite() && count >= 1.0 {
            count as usize
        } else {
            0
        }
    }

    /// Extent of each of `count` tracks sharing `available` with `gap` between them.
    pub fn track_extent(available: f64, count: usize, gap: f64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let count_f = count as f64;
        ((available - gap * (count_f - 1.0)) / count_f).max(0.0)
    }

    /// Resolve counts and card dimensions for a strategy/direction pair.
    pub fn compute(
        viewport: ViewportSize,
        config: &LayoutConfig,
        strategy: Strategy,
        direction: Direction,
    ) -> ResolvedLayout {
        let (available_width, available_height) = Self::available(viewport, config);
        let gap = config.gap;

        let columns = Self::track_count(available_width, config.card_threshold_width, gap);
        let rows = match (strategy, direction) {
            (Strategy::Masonry, Direction::Vertical) => 0,
            _ => Self::track_count(available_height, config.card_threshold_height, gap),
        };

        let filled_width = Self::track_extent(available_width, columns, gap);
        let filled_height = Self::track_extent(available_height, rows, gap);

        let (card_width, card_height) = match (strategy, direction) {
            (Strategy::Grid, Direction::Vertical) => {
                let height = if config.fixed_card_height {
                    config.card_threshold_height
                } else {
                    filled_height
                };
                (filled_width, height)
            }
            (Strategy::Grid, Direction::Horizontal) => {
                // Height is the bounded axis; never exceed the filled track.
                let height = if config.fixed_card_height {
                    config.card_threshold_height.min(filled_height)
                } else {
                    filled_height
                };
                (filled_width, height)
            }
            (Strategy::Masonry, Direction::Vertical) => (filled_width, 0.0),
            (Strategy::Masonry, Direction::Horizontal) => (0.0, filled_height),
        };

        ResolvedLayout {
            strategy,
            direction,
            columns,
            rows,
            card_width,
            card_height,
        }
    }
}
