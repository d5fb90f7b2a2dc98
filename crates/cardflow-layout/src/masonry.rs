//! Variable-length masonry packing.
//!
//! Cards keep their own length along the scroll axis and are dropped, in
//! caller order, into whichever lane is currently shortest (ties go to the
//! lowest lane index). This is a greedy online heuristic: one streaming
//! pass, no look-ahead, not globally optimal.
//!
//! The shortest lane is found with a linear scan, so a pass costs
//! O(n * lanes). Lane counts are bounded by the viewport width divided by
//! the card threshold, which keeps the scan cheaper than maintaining a heap
//! and makes the tie-break rule exact.

use crate::calculator::ResolvedLayout;
use crate::card::{CardDescriptor, CardPosition};
use crate::config::{Direction, LayoutConfig};

/// Shortest-lane packer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MasonryPacker;

/// Result of a masonry pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasonryPlacement {
    pub positions: Vec<CardPosition>,
    /// Running end offset of each occupied lane, including the trailing gap.
    /// Every lane starts at `padding`. Lanes past the card count are never
    /// reached and are left out, so this holds at most `cards.len()` entries.
    pub lane_extents: Vec<f64>,
}

impl MasonryPacker {
    /// Position every card, or none when the layout is degenerate.
    pub fn pack(
        cards: &[CardDescriptor],
        layout: &ResolvedLayout,
        config: &LayoutConfig,
    ) -> Vec<CardPosition> {
        Self::pack_with_extents(cards, layout, config).positions
    }

    /// Like [`MasonryPacker::pack`], also returning the final lane extents.
    pub fn pack_with_extents(
        cards: &[CardDescriptor],
        layout: &ResolvedLayout,
        config: &LayoutConfig,
    ) -> MasonryPlacement {
        if layout.is_degenerate() {
            return MasonryPlacement::default();
        }
        // Shortest-lane placement fills lanes 0..n before reusing any, so
        // only the first `n` lanes can ever be occupied.
        let lanes = layout.lanes().min(cards.len());
        let mut lane_extents = vec![config.padding; lanes];
        let mut positions = Vec::with_capacity(cards.len());

        for card in cards {
            let lane = shortest_lane(&lane_extents);
            let offset = lane_extents[lane];
            let position = match layout.direction {
                Direction::Vertical => {
                    let height = card_length(card.min_height, config.card_threshold_height);
                    lane_extents[lane] = offset + height + config.gap;
                    CardPosition {
                        card_id: card.id.clone(),
                        x: config.padding + lane as f64 * (layout.card_width + config.gap),
                        y: offset,
                        width: layout.card_width,
                        height,
                        column: Some(lane),
                        row: None,
                    }
                }
                Direction::Horizontal => {
                    let width = card_length(card.min_width, config.card_threshold_width);
                    lane_extents[lane] = offset + width + config.gap;
                    CardPosition {
                        card_id: card.id.clone(),
                        x: offset,
                        y: config.padding + lane as f64 * (layout.card_height + config.gap),
                        width,
                        height: layout.card_height,
                        column: None,
                        row: Some(lane),
                    }
                }
            };
            positions.push(position);
        }

        MasonryPlacement {
            positions,
            lane_extents,
        }
    }
}

/// Index of the minimum extent; the lowest index wins ties.
fn shortest_lane(extents: &[f64]) -> usize {
    let mut best = 0;
    for (i, extent) in extents.iter().enumerate().skip(1) {
        if *extent < extents[best] {
            best = i;
        }
    }
    best
}

/// A card's own length, or the configured default when it has none.
fn card_length(nominal: f64, fallback: f64) -> f64 {
    if nominal.is_finite() && nominal > 0.0 {
        nominal
    } else {
        fallback
    }
}
