#![forbid(unsafe_code)]

//! Scenario replay for the card layout engine.
//!
//! A scenario is a JSON document describing one card surface and the
//! viewport sizes it goes through:
//!
//! ```json
//! {
//!   "viewport": {"width": 800, "height": 600},
//!   "config": {"strategy": "grid", "fixed_card_height": true},
//!   "cards": [{"id": "a", "min_width": 200, "min_height": 150}],
//!   "resizes": [{"width": 600, "height": 800}]
//! }
//! ```
//!
//! Replaying it yields one [`LayoutSnapshot`] for the initial pass and one
//! per resize, written out as JSONL.

use std::fmt;
use std::io::{self, Read, Write};

use cardflow_layout::{
    CardDescriptor, ConfigurationError, LayoutConfig, LayoutEngine, LayoutSnapshot, ViewportSize,
};
use serde::Deserialize;
use tracing::{debug, info_span};

// ============================================================================
// Errors
// ============================================================================

/// Failure while loading or replaying a scenario.
#[derive(Debug)]
pub enum HarnessError {
    Io(io::Error),
    Parse(serde_json::Error),
    Config(ConfigurationError),
}

impl HarnessError {
    /// Process exit code: 2 for configuration errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) | Self::Parse(_) => 1,
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Parse(err) => write!(f, "invalid scenario: {err}"),
            Self::Config(err) => write!(f, "invalid layout config: {err}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigurationError> for HarnessError {
    fn from(err: ConfigurationError) -> Self {
        Self::Config(err)
    }
}

// ============================================================================
// Scenario
// ============================================================================

/// One card surface and its viewport history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub viewport: ViewportSize,
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub cards: Vec<CardDescriptor>,
    #[serde(default)]
    pub resizes: Vec<ViewportSize>,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a scenario from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, HarnessError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json(&text)
    }

    /// Apply `CARDFLOW_*` environment overrides on top of the scenario config.
    pub fn with_env_overrides(mut self) -> Result<Self, HarnessError> {
        self.config = self.config.with_env_overrides()?;
        Ok(self)
    }

    /// Like [`with_env_overrides`](Self::with_env_overrides) with an explicit lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.config = self.config.with_overrides_from(lookup)?;
        Ok(self)
    }

    /// Run the initial pass and every resize, collecting snapshots in order.
    pub fn replay(&self) -> Result<Vec<LayoutSnapshot>, HarnessError> {
        let span = info_span!(
            "cardflow.replay",
            cards = self.cards.len(),
            resizes = self.resizes.len()
        );
        let _guard = span.enter();

        let mut engine = LayoutEngine::new(self.config)?;
        let mut snapshots = Vec::with_capacity(self.resizes.len() + 1);

        engine.compute_layout(&self.cards, self.viewport);
        snapshots.push(engine.snapshot());

        for (idx, &viewport) in self.resizes.iter().enumerate() {
            engine.resize(viewport);
            debug!(
                idx,
                width = viewport.width,
                height = viewport.height,
                placed = engine.positions().len(),
                "replayed resize"
            );
            snapshots.push(engine.snapshot());
        }

        if engine.invariant_violations() > 0 {
            tracing::warn!(
                violations = engine.invariant_violations(),
                "replay observed layout invariant violations"
            );
        }
        Ok(snapshots)
    }
}

/// Write one JSON line per snapshot.
pub fn write_jsonl<W: Write>(
    out: &mut W,
    snapshots: &[LayoutSnapshot],
) -> Result<(), HarnessError> {
    for snapshot in snapshots {
        serde_json::to_writer(&mut *out, snapshot)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
