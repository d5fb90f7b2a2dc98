//! Uniform-size grid packing.

use crate::calculator::ResolvedLayout;
use crate::card::{CardDescriptor, CardPosition};
use crate::config::{Direction, LayoutConfig};

/// Places cards into fixed-size cells in caller order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPacker;

impl GridPacker {
    /// Grid cell `(column, row)` of the card at `index`.
    ///
    /// Vertical layouts fill a row left to right and wrap downwards.
    /// Horizontal layouts fill a column top to bottom and wrap rightwards,
    /// so columns become the growth axis. Returns `None` when the bounded
    /// axis has no tracks.
    #[inline]
    pub fn cell(
        index: usize,
        columns: usize,
        rows: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        match direction {
            Direction::Vertical if columns > 0 => Some((index % columns, index / columns)),
            Direction::Horizontal if rows > 0 => Some((index / rows, index % rows)),
            _ => None,
        }
    }

    /// Position every card, or none when the layout is degenerate.
    pub fn pack(
        cards: &[CardDescriptor],
        layout: &ResolvedLayout,
        config: &LayoutConfig,
    ) -> Vec<CardPosition> {
        if layout.is_degenerate() {
            return Vec::new();
        }
        let step_x = layout.card_width + config.gap;
        let step_y = layout.card_height + config.gap;

        cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let (column, row) =
                    Self::cell(index, layout.columns, layout.rows, layout.direction)?;
                Some(CardPosition {
                    card_id: card.id.clone(),
                    x: config.padding + column as f64 * step_x,
                    y: config.padding + row as f64 * step_y,
                    width: layout.card_width,
                    height: layout.card_height,
                    column: Some(column),
                    row: Some(row),
                })
            })
            .collect()
    }
}
