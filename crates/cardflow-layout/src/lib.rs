#![forbid(unsafe_code)]

//! Card layout engine.
//!
//! Positions an ordered list of rectangular cards inside a resizable
//! viewport:
//!
//! - [`LayoutSelector`] - picks grid or masonry packing and a vertical or
//!   horizontal scroll direction
//! - [`PackingCalculator`] - derives column/row counts and card sizes
//! - [`GridPacker`] - uniform cells, row-major or column-major by direction
//! - [`MasonryPacker`] - variable-length cards dropped into the shortest lane
//! - [`LayoutEngine`] - owns configuration and the current [`PositionMap`],
//!   re-running layout on resize, config change, or a new card list
//!
//! The engine is synchronous and deterministic: identical cards, viewport,
//! and configuration always produce identical positions. It never reorders,
//! filters, or deduplicates cards; the caller owns the card set.
//!
//! # Degenerate viewports
//!
//! A viewport that cannot fit a single threshold-sized card (including a
//! zero-sized one during mount) yields an empty [`PositionMap`], not an
//! error.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration, positions, and
//!   [`LayoutSnapshot`].

pub mod calculator;
pub mod card;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod masonry;
pub mod selector;
mod validate;

pub use calculator::{PackingCalculator, ResolvedLayout};
pub use card::{CardDescriptor, CardPosition, PositionMap};
pub use config::{
    Direction, DirectionPreference, LayoutConfig, LayoutConfigPatch, Strategy, StrategyPreference,
};
pub use engine::{LayoutEngine, LayoutSnapshot};
pub use error::{ConfigurationError, InvariantViolation};
pub use geometry::{CardRect, ContentExtent, LAYOUT_EPSILON, ViewportSize};
pub use grid::GridPacker;
pub use masonry::{MasonryPacker, MasonryPlacement};
pub use selector::LayoutSelector;
