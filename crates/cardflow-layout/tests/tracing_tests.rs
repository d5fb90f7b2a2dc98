#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Verifies that layout passes open a `cardflow.compute_layout` span carrying
//! the selected strategy and direction, and that rejected configuration
//! updates are reported as warnings.
//!
//!   cargo test -p cardflow-layout --test tracing_tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cardflow_layout::{
    CardDescriptor, LayoutConfig, LayoutConfigPatch, LayoutEngine, Strategy, ViewportSize,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
}

#[derive(Default)]
struct Captured {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

struct Capture {
    inner: Arc<Mutex<Captured>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.inner.lock().unwrap().spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.inner.lock().unwrap().events.push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_capture<F: FnOnce()>(f: F) -> Captured {
    let inner = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(Capture {
        inner: inner.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let mut guard = inner.lock().unwrap();
    std::mem::take(&mut *guard)
}

fn cards(n: usize) -> Vec<CardDescriptor> {
    (0..n)
        .map(|i| CardDescriptor::new(format!("c{i}"), 100.0, 80.0))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn compute_layout_opens_span_with_selection() {
    let captured = with_capture(|| {
        let mut engine = LayoutEngine::new(
            LayoutConfig::default()
                .strategy(Strategy::Grid)
                .fixed_height(80.0),
        )
        .unwrap();
        engine.compute_layout(&cards(5), ViewportSize::new(600.0, 900.0));
    });

    let span = captured
        .spans
        .iter()
        .find(|s| s.name == "cardflow.compute_layout")
        .expect("layout span recorded");
    assert_eq!(span.fields.get("strategy").map(String::as_str), Some("grid"));
    assert_eq!(span.fields.get("direction").map(String::as_str), Some("vertical"));
    assert_eq!(span.fields.get("cards").map(String::as_str), Some("5"));
}

#[test]
fn every_pass_gets_its_own_span() {
    let captured = with_capture(|| {
        let mut engine = LayoutEngine::default();
        engine.compute_layout(&cards(3), ViewportSize::new(800.0, 600.0));
        engine.resize(ViewportSize::new(600.0, 800.0));
        engine
            .update_config(LayoutConfigPatch::default().gap(4.0))
            .unwrap();
    });

    let passes: Vec<&CapturedSpan> = captured
        .spans
        .iter()
        .filter(|s| s.name == "cardflow.compute_layout")
        .collect();
    assert_eq!(passes.len(), 3);
    let direction = |span: &CapturedSpan| span.fields.get("direction").cloned();
    assert_eq!(direction(passes[0]).as_deref(), Some("horizontal"));
    assert_eq!(direction(passes[1]).as_deref(), Some("vertical"));
}

#[test]
fn rejected_update_logs_warning() {
    let captured = with_capture(|| {
        let mut engine = LayoutEngine::default();
        engine.compute_layout(&cards(2), ViewportSize::new(600.0, 800.0));
        let _ = engine.update_config(LayoutConfigPatch::default().padding(-1.0));
    });

    let warning = captured
        .events
        .iter()
        .find(|e| e.level == tracing::Level::WARN)
        .expect("warning emitted");
    assert!(
        warning
            .fields
            .get("error")
            .is_some_and(|msg| msg.contains("padding")),
        "unexpected fields: {:?}",
        warning.fields
    );
    assert!(captured.events.iter().all(|e| e.level != tracing::Level::ERROR));
}

#[test]
fn degenerate_viewport_is_debug_only() {
    let captured = with_capture(|| {
        let mut engine = LayoutEngine::default();
        engine.compute_layout(&cards(2), ViewportSize::ZERO);
    });

    assert!(
        captured
            .events
            .iter()
            .all(|e| e.level >= tracing::Level::DEBUG),
        "degenerate viewport should not warn: {:?}",
        captured.events
    );
}
