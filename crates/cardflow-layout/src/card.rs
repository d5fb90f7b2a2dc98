//! Card descriptors in, card positions out.

use std::collections::HashMap;

use crate::geometry::CardRect;

/// A card to be laid out, as supplied by the card-set owner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDescriptor {
    /// Stable card identity.
    pub id: String,
    /// Nominal width. Masonry uses it as the card length in horizontal direction.
    pub min_width: f64,
    /// Nominal height. Masonry uses it as the card length in vertical direction.
    pub min_height: f64,
}

impl CardDescriptor {
    /// Create a descriptor.
    pub fn new(id: impl Into<String>, min_width: f64, min_height: f64) -> Self {
        Self {
            id: id.into(),
            min_width,
            min_height,
        }
    }
}

/// Where a single card lands.
///
/// `column` and `row` describe grid cells. Masonry fills only the lane
/// index along its cross axis: `column` in vertical direction, `row` in
/// horizontal direction. The other field stays `None` because masonry
/// lanes have no cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPosition {
    pub card_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub column: Option<usize>,
    pub row: Option<usize>,
}

impl CardPosition {
    /// The occupied rectangle.
    #[inline]
    pub fn rect(&self) -> CardRect {
        CardRect::new(self.x, self.y, self.width, self.height)
    }
}

/// Authoritative card positions of one layout pass.
///
/// Iteration follows the input order of the pass. Lookups by id are O(1).
/// When the input repeats an id, every occurrence keeps its slot in the
/// iteration order and [`PositionMap::get`] resolves to the last one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionMap {
    positions: Vec<CardPosition>,
    index: HashMap<String, usize>,
}

impl PositionMap {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from positions in input order.
    pub fn from_positions(positions: Vec<CardPosition>) -> Self {
        let index = positions
            .iter()
            .enumerate()
            .map(|(i, pos)| (pos.card_id.clone(), i))
            .collect();
        Self { positions, index }
    }

    /// Position of `card_id`, if it was laid out.
    pub fn get(&self, card_id: &str) -> Option<&CardPosition> {
        self.index.get(card_id).map(|&i| &self.positions[i])
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.index.contains_key(card_id)
    }

    /// Number of distinct card ids, i.e. the number of ids [`get`](Self::get)
    /// resolves. Repeated ids count once; [`as_slice`](Self::as_slice) keeps
    /// every occurrence.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no card id resolves; agrees with `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Positions in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardPosition> {
        self.positions.iter()
    }

    /// Positions in input order, as a slice.
    pub fn as_slice(&self) -> &[CardPosition] {
        &self.positions
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [CardPosition] {
        &mut self.positions
    }
}

impl<'a> IntoIterator for &'a PositionMap {
    type Item = &'a CardPosition;
    type IntoIter = std::slice::Iter<'a, CardPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
