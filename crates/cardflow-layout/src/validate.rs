//! Post-pack sanity checks.
//!
//! Containment is enforced on the cross axis only: width for vertical
//! layouts, height for horizontal ones. The scroll axis is unbounded above
//! and only requires a non-negative origin.

use crate::card::CardPosition;
use crate::config::Direction;
use crate::error::InvariantViolation;
use crate::geometry::{LAYOUT_EPSILON, ViewportSize};

/// Clamp positions into the viewport's cross axis.
///
/// Excursions up to [`LAYOUT_EPSILON`] are rounding noise and are clamped
/// silently. Anything larger is clamped as well but reported.
pub(crate) fn clamp_containment(
    positions: &mut [CardPosition],
    viewport: ViewportSize,
    direction: Direction,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    for pos in positions.iter_mut() {
        let mut excess: f64 = 0.0;

        if pos.x < 0.0 {
            excess = excess.max(-pos.x);
            pos.x = 0.0;
        }
        if pos.y < 0.0 {
            excess = excess.max(-pos.y);
            pos.y = 0.0;
        }

        match direction {
            Direction::Vertical => {
                let over = pos.x + pos.width - viewport.width;
                if over > 0.0 {
                    excess = excess.max(over);
                    pos.width = (viewport.width - pos.x).max(0.0);
                }
            }
            Direction::Horizontal => {
                let over = pos.y + pos.height - viewport.height;
                if over > 0.0 {
                    excess = excess.max(over);
                    pos.height = (viewport.height - pos.y).max(0.0);
                }
            }
        }

        if excess > LAYOUT_EPSILON {
            violations.push(InvariantViolation::Containment {
                card_id: pos.card_id.clone(),
                excess,
            });
        }
    }
    violations
}

/// Report every pair of overlapping cards.
///
/// Sweeps along the scroll axis so each card is only compared with cards
/// that start before it ends, which for packed layouts is about one card
/// per lane.
pub(crate) fn find_overlaps(
    positions: &[CardPosition],
    direction: Direction,
) -> Vec<InvariantViolation> {
    let span = |pos: &CardPosition| match direction {
        Direction::Vertical => (pos.y, pos.y + pos.height),
        Direction::Horizontal => (pos.x, pos.x + pos.width),
    };

    let mut order: Vec<usize> = (0..positions.len()).collect();
    order.sort_by(|&a, &b| span(&positions[a]).0.total_cmp(&span(&positions[b]).0));

    let mut violations = Vec::new();
    for (i, &a) in order.iter().enumerate() {
        let (_, end) = span(&positions[a]);
        let rect_a = positions[a].rect();
        for &b in &order[i + 1..] {
            if span(&positions[b]).0 >= end - LAYOUT_EPSILON {
                break;
            }
            if rect_a.intersects(&positions[b].rect()) {
                violations.push(InvariantViolation::Overlap {
                    first: positions[a].card_id.clone(),
                    second: positions[b].card_id.clone(),
                });
            }
        }
    }
    violations
}
