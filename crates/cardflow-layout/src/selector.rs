//! Strategy and direction selection.

use crate::config::{Direction, DirectionPreference, LayoutConfig, Strategy, StrategyPreference};
use crate::geometry::ViewportSize;

/// Resolves `Auto` preferences against the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutSelector;

impl LayoutSelector {
    /// Pick the packing strategy and scroll direction for a pass.
    ///
    /// Explicit preferences win. `Auto` strategy means grid for fixed-height
    /// cards and masonry otherwise; `Auto` direction scrolls sideways in
    /// landscape viewports and down otherwise (a square viewport is vertical).
    pub fn select(viewport: ViewportSize, config: &LayoutConfig) -> (Strategy, Direction) {
        let strategy = match config.strategy {
            StrategyPreference::Grid => Strategy::Grid,
            StrategyPreference::Masonry => Strategy::Masonry,
            StrategyPreference::Auto if config.fixed_card_height => Strategy::Grid,
            StrategyPreference::Auto => Strategy::Masonry,
        };
        let direction = match config.direction {
            DirectionPreference::Vertical => Direction::Vertical,
            DirectionPreference::Horizontal => Direction::Horizontal,
            DirectionPreference::Auto if viewport.is_landscape() => Direction::Horizontal,
            DirectionPreference::Auto => Direction::Vertical,
        };
        (strategy, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preferences_are_used_verbatim() {
        let config = LayoutConfig::default()
            .strategy(Strategy::Masonry)
            .direction(Direction::Vertical)
            .fixed_height(100.0);
        let viewport = ViewportSize::new(1000.0, 100.0);
        assert_eq!(
            LayoutSelector::select(viewport, &config),
            (Strategy::Masonry, Direction::Vertical)
        );
    }

    #[test]
    fn auto_strategy_follows_fixed_height() {
        let viewport = ViewportSize::new(400.0, 800.0);
        let fixed = LayoutConfig::default().fixed_height(120.0);
        let variable = LayoutConfig::default().variable_height();
        assert_eq!(LayoutSelector::select(viewport, &fixed).0, Strategy::Grid);
        assert_eq!(LayoutSelector::select(viewport, &variable).0, Strategy::Masonry);
    }

    #[test]
    fn auto_direction_follows_aspect_ratio() {
        let config = LayoutConfig::default();
        let wide = ViewportSize::new(800.0, 600.0);
        let tall = ViewportSize::new(600.0, 800.0);
        let square = ViewportSize::new(600.0, 600.0);
        assert_eq!(LayoutSelector::select(wide, &config).1, Direction::Horizontal);
        assert_eq!(LayoutSelector::select(tall, &config).1, Direction::Vertical);
        assert_eq!(LayoutSelector::select(square, &config).1, Direction::Vertical);
    }

    #[test]
    fn selection_is_deterministic() {
        let config = LayoutConfig::default();
        let viewport = ViewportSize::new(1024.0, 768.0);
        assert_eq!(
            LayoutSelector::select(viewport, &config),
            LayoutSelector::select(viewport, &config)
        );
    }
}
