//! Layout configuration and the strategy/direction vocabulary.
//!
//! [`LayoutConfig`] is a value object: the engine validates it as a whole
//! and replaces it wholesale. Partial updates go through
//! [`LayoutConfigPatch`], which merges onto a copy before validation so a
//! rejected patch never leaves a half-applied configuration behind.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Environment variable prefix read by [`LayoutConfig::with_env_overrides`].
pub const ENV_PREFIX: &str = "CARDFLOW_";

/// Packing strategy actually used for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Uniform card size, fixed rows and columns.
    Grid,
    /// Content-driven card length, shortest-lane placement.
    Masonry,
}

impl Strategy {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Grid => "grid",
            Strategy::Masonry => "masonry",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured strategy preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyPreference {
    /// Grid when card height is fixed, masonry otherwise.
    #[default]
    Auto,
    Grid,
    Masonry,
}

impl FromStr for StrategyPreference {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "grid" => Ok(Self::Grid),
            "masonry" => Ok(Self::Masonry),
            _ => Err(ConfigurationError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl From<Strategy> for StrategyPreference {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Grid => Self::Grid,
            Strategy::Masonry => Self::Masonry,
        }
    }
}

/// The axis along which the layout grows and scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Top to bottom. Columns are fixed; rows grow.
    Vertical,
    /// Left to right. Rows are fixed; columns grow.
    Horizontal,
}

impl Direction {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured direction preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DirectionPreference {
    /// Horizontal for landscape viewports, vertical otherwise.
    #[default]
    Auto,
    Vertical,
    Horizontal,
}

impl FromStr for DirectionPreference {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(ConfigurationError::UnknownDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl From<Direction> for DirectionPreference {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Vertical => Self::Vertical,
            Direction::Horizontal => Self::Horizontal,
        }
    }
}

/// Card sizing, spacing, and strategy preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub strategy: StrategyPreference,
    pub direction: DirectionPreference,
    /// Minimum card width used to derive the column count.
    pub card_threshold_width: f64,
    /// Minimum card height used to derive the row count. Doubles as the
    /// fixed card height when `fixed_card_height` is set.
    pub card_threshold_height: f64,
    /// All cards share `card_threshold_height`.
    pub fixed_card_height: bool,
    /// Space between adjacent cards.
    pub gap: f64,
    /// Space between the viewport edge and the outermost cards.
    pub padding: f64,
}

impl LayoutConfig {
    pub const DEFAULT_CARD_WIDTH: f64 = 250.0;
    pub const DEFAULT_CARD_HEIGHT: f64 = 250.0;
    pub const DEFAULT_GAP: f64 = 10.0;
    pub const DEFAULT_PADDING: f64 = 10.0;

    /// Set the strategy preference.
    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<StrategyPreference>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Set the direction preference.
    #[must_use]
    pub fn direction(mut self, direction: impl Into<DirectionPreference>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Set both card thresholds.
    #[must_use]
    pub fn card_threshold(mut self, width: f64, height: f64) -> Self {
        self.card_threshold_width = width;
        self.card_threshold_height = height;
        self
    }

    /// Use `height` as a fixed card height.
    #[must_use]
    pub fn fixed_height(mut self, height: f64) -> Self {
        self.card_threshold_height = height;
        self.fixed_card_height = true;
        self
    }

    /// Let card heights follow content.
    #[must_use]
    pub fn variable_height(mut self) -> Self {
        self.fixed_card_height = false;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Check numeric ranges.
    ///
    /// Thresholds are divisors and must be strictly positive; gap and
    /// padding must be non-negative. Every field must be finite.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("card_threshold_width", self.card_threshold_width)?;
        positive("card_threshold_height", self.card_threshold_height)?;
        non_negative("gap", self.gap)?;
        non_negative("padding", self.padding)?;
        Ok(())
    }

    /// Apply `CARDFLOW_*` environment overrides and validate the result.
    pub fn with_env_overrides(self) -> Result<Self, ConfigurationError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup (keys include [`ENV_PREFIX`]).
    ///
    /// Blank values are ignored.
    pub fn with_overrides_from<F>(self, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(&format!("{ENV_PREFIX}{key}")).and_then(|value| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
        };

        let mut patch = LayoutConfigPatch::default();
        if let Some(value) = read("STRATEGY") {
            patch.strategy = Some(value.parse()?);
        }
        if let Some(value) = read("DIRECTION") {
            patch.direction = Some(value.parse()?);
        }
        if let Some(value) = read("CARD_WIDTH") {
            patch.card_threshold_width = Some(parse_number("card_threshold_width", &value)?);
        }
        if let Some(value) = read("CARD_HEIGHT") {
            patch.card_threshold_height = Some(parse_number("card_threshold_height", &value)?);
        }
        if let Some(value) = read("FIXED_HEIGHT") {
            patch.fixed_card_height = Some(parse_flag("fixed_card_height", &value)?);
        }
        if let Some(value) = read("GAP") {
            patch.gap = Some(parse_number("gap", &value)?);
        }
        if let Some(value) = read("PADDING") {
            patch.padding = Some(parse_number("padding", &value)?);
        }
        patch.apply_to(&self)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyPreference::Auto,
            direction: DirectionPreference::Auto,
            card_threshold_width: Self::DEFAULT_CARD_WIDTH,
            card_threshold_height: Self::DEFAULT_CARD_HEIGHT,
            fixed_card_height: false,
            gap: Self::DEFAULT_GAP,
            padding: Self::DEFAULT_PADDING,
        }
    }
}

/// A partial [`LayoutConfig`] update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfigPatch {
    pub strategy: Option<StrategyPreference>,
    pub direction: Option<DirectionPreference>,
    pub card_threshold_width: Option<f64>,
    pub card_threshold_height: Option<f64>,
    pub fixed_card_height: Option<bool>,
    pub gap: Option<f64>,
    pub padding: Option<f64>,
}

impl LayoutConfigPatch {
    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<StrategyPreference>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: impl Into<DirectionPreference>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    #[must_use]
    pub fn card_threshold_width(mut self, width: f64) -> Self {
        self.card_threshold_width = Some(width);
        self
    }

    #[must_use]
    pub fn card_threshold_height(mut self, height: f64) -> Self {
        self.card_threshold_height = Some(height);
        self
    }

    #[must_use]
    pub fn fixed_card_height(mut self, fixed: bool) -> Self {
        self.fixed_card_height = Some(fixed);
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge onto `base` and validate. `base` is never modified.
    pub fn apply_to(&self, base: &LayoutConfig) -> Result<LayoutConfig, ConfigurationError> {
        let merged = LayoutConfig {
            strategy: self.strategy.unwrap_or(base.strategy),
            direction: self.direction.unwrap_or(base.direction),
            card_threshold_width: self
                .card_threshold_width
                .unwrap_or(base.card_threshold_width),
            card_threshold_height: self
                .card_threshold_height
                .unwrap_or(base.card_threshold_height),
            fixed_card_height: self.fixed_card_height.unwrap_or(base.fixed_card_height),
            gap: self.gap.unwrap_or(base.gap),
            padding: self.padding.unwrap_or(base.padding),
        };
        merged.validate()?;
        Ok(merged)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::Negative { field, value })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ConfigurationError> {
    value
        .parse::<f64>()
        .map_err(|_| ConfigurationError::InvalidValue {
            field,
            value: value.to_string(),
        })
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ConfigurationError> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(ConfigurationError::InvalidValue {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_gap() {
        let err = LayoutConfig::default().gap(-5.0).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::Negative {
                field: "gap",
                value: -5.0
            }
        );
    }

    #[test]
    fn rejects_zero_threshold_and_nan_padding() {
        assert!(matches!(
            LayoutConfig::default().card_threshold(0.0, 10.0).validate(),
            Err(ConfigurationError::NonPositive {
                field: "card_threshold_width",
                ..
            })
        ));
        assert!(matches!(
            LayoutConfig::default().padding(f64::NAN).validate(),
            Err(ConfigurationError::Negative {
                field: "padding",
                ..
            })
        ));
    }

    #[test]
    fn zero_gap_and_padding_are_allowed() {
        assert!(LayoutConfig::default().gap(0.0).padding(0.0).validate().is_ok());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let base = LayoutConfig::default().gap(4.0);
        let merged = LayoutConfigPatch::default()
            .padding(20.0)
            .strategy(Strategy::Grid)
            .apply_to(&base)
            .expect("valid patch");
        assert_eq!(merged.gap, 4.0);
        assert_eq!(merged.padding, 20.0);
        assert_eq!(merged.strategy, StrategyPreference::Grid);
        assert_eq!(merged.direction, base.direction);
    }

    #[test]
    fn invalid_patch_leaves_base_untouched() {
        let base = LayoutConfig::default();
        let result = LayoutConfigPatch::default().gap(-1.0).apply_to(&base);
        assert!(result.is_err());
        assert_eq!(base, LayoutConfig::default());
    }

    #[test]
    fn empty_patch() {
        assert!(LayoutConfigPatch::default().is_empty());
        assert!(!LayoutConfigPatch::default().gap(1.0).is_empty());
    }

    #[test]
    fn parses_preferences_case_insensitively() {
        assert_eq!("Grid".parse::<StrategyPreference>(), Ok(StrategyPreference::Grid));
        assert_eq!(
            " horizontal ".parse::<DirectionPreference>(),
            Ok(DirectionPreference::Horizontal)
        );
        assert!(matches!(
            "spiral".parse::<StrategyPreference>(),
            Err(ConfigurationError::UnknownStrategy { .. })
        ));
    }

    #[test]
    fn display_names_parse_back() {
        for direction in [Direction::Vertical, Direction::Horizontal] {
            assert_eq!(
                direction.to_string().parse::<DirectionPreference>(),
                Ok(direction.into())
            );
        }
        assert_eq!(
            Strategy::Masonry.to_string().parse::<StrategyPreference>(),
            Ok(StrategyPreference::Masonry)
        );
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_apply() {
        let config = LayoutConfig::default()
            .with_overrides_from(lookup(&[
                ("CARDFLOW_STRATEGY", "grid"),
                ("CARDFLOW_DIRECTION", "vertical"),
                ("CARDFLOW_CARD_WIDTH", "200"),
                ("CARDFLOW_FIXED_HEIGHT", "yes"),
                ("CARDFLOW_GAP", " 0 "),
                ("CARDFLOW_PADDING", ""),
            ]))
            .expect("valid overrides");
        assert_eq!(config.strategy, StrategyPreference::Grid);
        assert_eq!(config.direction, DirectionPreference::Vertical);
        assert_eq!(config.card_threshold_width, 200.0);
        assert!(config.fixed_card_height);
        assert_eq!(config.gap, 0.0);
        assert_eq!(config.padding, LayoutConfig::DEFAULT_PADDING);
    }

    #[test]
    fn env_overrides_reject_garbage() {
        let err = LayoutConfig::default()
            .with_overrides_from(lookup(&[("CARDFLOW_GAP", "wide")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { field: "gap", .. }));

        let err = LayoutConfig::default()
            .with_overrides_from(lookup(&[("CARDFLOW_PADDING", "-3")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::Negative { field: "padding", .. }));
    }
}
