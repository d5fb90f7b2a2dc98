//! The layout orchestrator.
//!
//! [`LayoutEngine`] owns the configuration, the last viewport, the last card
//! list, and the authoritative [`PositionMap`]. Each pass selects a
//! strategy and direction, derives track counts, packs, validates, and then
//! swaps the new map in whole. Callers only ever observe complete maps.

use tracing::{debug, debug_span, error, warn};

use crate::calculator::{PackingCalculator, ResolvedLayout};
use crate::card::{CardDescriptor, CardPosition, PositionMap};
use crate::config::{LayoutConfig, LayoutConfigPatch, Strategy};
use crate::error::{ConfigurationError, InvariantViolation};
use crate::geometry::{ContentExtent, ViewportSize};
use crate::grid::GridPacker;
use crate::masonry::MasonryPacker;
use crate::selector::LayoutSelector;
use crate::validate;

/// Stateful card layout engine, one per card surface.
///
/// All operations are synchronous and take `&mut self` to mutate, so
/// concurrent callers must serialize access themselves (for example by
/// owning the engine on the UI thread or wrapping it in a mutex).
///
/// # Example
///
/// ```
/// use cardflow_layout::{CardDescriptor, LayoutConfig, LayoutEngine, Strategy, ViewportSize};
///
/// let config = LayoutConfig::default()
///     .strategy(Strategy::Grid)
///     .card_threshold(200.0, 150.0)
///     .fixed_height(150.0);
/// let mut engine = LayoutEngine::new(config).unwrap();
///
/// let cards: Vec<_> = (0..4)
///     .map(|i| CardDescriptor::new(format!("note-{i}"), 200.0, 150.0))
///     .collect();
/// engine.compute_layout(&cards, ViewportSize::new(640.0, 960.0));
///
/// let first = engine.get_position("note-0").unwrap();
/// assert_eq!((first.x, first.y), (10.0, 10.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    viewport: ViewportSize,
    cards: Vec<CardDescriptor>,
    positions: PositionMap,
    resolved: Option<ResolvedLayout>,
    invariant_violations: u64,
}

impl LayoutEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Lay out `cards` in caller order inside `viewport`.
    ///
    /// Replaces the stored map and remembers both inputs for later
    /// [`resize`](Self::resize) and [`update_config`](Self::update_config)
    /// passes. A viewport too small for a single card yields an empty map.
    pub fn compute_layout(
        &mut self,
        cards: &[CardDescriptor],
        viewport: ViewportSize,
    ) -> &PositionMap {
        self.cards.clear();
        self.cards.extend_from_slice(cards);
        self.viewport = viewport.sanitized();
        self.relayout();
        &self.positions
    }

    /// Store a new viewport and re-run layout with the last card list.
    pub fn resize(&mut self, viewport: ViewportSize) -> &PositionMap {
        self.viewport = viewport.sanitized();
        self.relayout();
        &self.positions
    }

    /// Merge `patch` into the configuration and re-run layout.
    ///
    /// On error the previous configuration and positions stay in effect.
    pub fn update_config(
        &mut self,
        patch: LayoutConfigPatch,
    ) -> Result<&PositionMap, ConfigurationError> {
        let merged = patch.apply_to(&self.config).inspect_err(|err| {
            warn!(error = %err, "rejected layout config update");
        })?;
        debug!(?patch, "layout config updated");
        self.config = merged;
        self.relayout();
        Ok(&self.positions)
    }

    /// Replace the whole configuration and re-run layout.
    pub fn set_config(
        &mut self,
        config: LayoutConfig,
    ) -> Result<&PositionMap, ConfigurationError> {
        config.validate().inspect_err(|err| {
            warn!(error = %err, "rejected layout config");
        })?;
        self.config = config;
        self.relayout();
        Ok(&self.positions)
    }

    /// Drop the stored positions without recomputing.
    pub fn reset_positions(&mut self) {
        self.positions = PositionMap::new();
        self.resolved = None;
    }

    /// Position of a single card from the last pass.
    pub fn get_position(&self, card_id: &str) -> Option<&CardPosition> {
        self.positions.get(card_id)
    }

    /// Current positions.
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Cards of the last [`compute_layout`](Self::compute_layout) call.
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    /// Strategy, direction, and track sizes of the last pass.
    ///
    /// `None` before the first pass and after [`reset_positions`](Self::reset_positions).
    pub fn resolved(&self) -> Option<&ResolvedLayout> {
        self.resolved.as_ref()
    }

    /// Number of invariant violations observed over the engine's lifetime.
    pub fn invariant_violations(&self) -> u64 {
        self.invariant_violations
    }

    /// Scrollable extent of the current positions, including trailing padding.
    pub fn content_extent(&self) -> ContentExtent {
        let Some(bounds) = self
            .positions
            .iter()
            .map(CardPosition::rect)
            .reduce(|acc, rect| acc.union(&rect))
        else {
            return ContentExtent::default();
        };
        ContentExtent {
            width: bounds.right() + self.config.padding,
            height: bounds.bottom() + self.config.padding,
        }
    }

    /// Owned copy of the current layout state.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            viewport: self.viewport,
            resolved: self.resolved,
            content_extent: self.content_extent(),
            positions: self.positions.as_slice().to_vec(),
        }
    }

    fn relayout(&mut self) {
        let (strategy, direction) = LayoutSelector::select(self.viewport, &self.config);
        let span = debug_span!(
            "cardflow.compute_layout",
            cards = self.cards.len(),
            width = self.viewport.width,
            height = self.viewport.height,
            strategy = strategy.as_str(),
            direction = direction.as_str(),
        );
        let _guard = span.enter();

        let resolved = PackingCalculator::compute(self.viewport, &self.config, strategy, direction);
        if resolved.is_degenerate() {
            debug!(
                columns = resolved.columns,
                rows = resolved.rows,
                "viewport too small for any card"
            );
        }

        let positions = match strategy {
            Strategy::Grid => GridPacker::pack(&self.cards, &resolved, &self.config),
            Strategy::Masonry => MasonryPacker::pack(&self.cards, &resolved, &self.config),
        };
        let mut map = PositionMap::from_positions(positions);

        let mut violations =
            validate::clamp_containment(map.as_mut_slice(), self.viewport, direction);
        violations.extend(validate::find_overlaps(map.as_slice(), direction));
        self.record_violations(&violations);

        debug!(
            placed = map.len(),
            columns = resolved.columns,
            rows = resolved.rows,
            "layout pass complete"
        );
        self.positions = map;
        self.resolved = Some(resolved);
    }

    /// Release builds keep the clamped layout; debug builds stop here.
    fn record_violations(&mut self, violations: &[InvariantViolation]) {
        for violation in violations {
            error!(%violation, "layout invariant violated");
        }
        self.invariant_violations += violations.len() as u64;
        debug_assert!(
            violations.is_empty(),
            "layout invariant violated: {violations:?}"
        );
    }
}

/// Owned view of an engine's layout state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSnapshot {
    pub viewport: ViewportSize,
    pub resolved: Option<ResolvedLayout>,
    pub content_extent: ContentExtent,
    /// Positions in input order.
    pub positions: Vec<CardPosition>,
}
