//! Console output for heuristic events.
//!
//! Provides a `tracing` layer that turns the heuristic's structured events
//! into one-line summaries on stderr.

use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::OnceLock;

use pdbcover_heuristic::Heuristic;
use tracing::field::{Field, Visit};
use tracing::{info, Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pdbcover=info,pdbcover_heuristic=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

/// Emits an end-of-search summary of a heuristic's statistics.
pub fn log_statistics<S: ?Sized>(heuristic: &dyn Heuristic<S>) {
    let stats = heuristic.statistics();
    info!(
        event = "statistics",
        strategy = heuristic.name(),
        evaluations = stats.evaluations,
        dead_ends = stats.dead_ends,
        trials = stats.trials,
        mean_estimate = stats.mean_estimate(),
    );
}

/// A tracing layer that formats heuristic events.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("pdbcover") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    decrement: Option<String>,
    operator_count: Option<u64>,
    restriction_count: Option<u64>,
    mean_mentions: Option<u64>,
    mean_operators: Option<u64>,
    databases: Option<u64>,
    trials: Option<u64>,
    seed: Option<u64>,
    evaluations: Option<u64>,
    dead_ends: Option<u64>,
    mean_estimate: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "strategy" => self.strategy = Some(s.trim_matches('"').to_string()),
            "decrement" => self.decrement = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "operator_count" => self.operator_count = Some(value),
            "restriction_count" => self.restriction_count = Some(value),
            "mean_mentions" => self.mean_mentions = Some(value),
            "mean_operators" => self.mean_operators = Some(value),
            "databases" => self.databases = Some(value),
            "trials" => self.trials = Some(value),
            "seed" => self.seed = Some(value),
            "evaluations" => self.evaluations = Some(value),
            "dead_ends" => self.dead_ends = Some(value),
            _ => {}
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "mean_estimate" {
            self.mean_estimate = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("restrictions_built") => format_restrictions(v),
        Some("heuristic_ready") => format_ready(v),
        Some("statistics") => format_statistics(v),
        _ => String::new(),
    }
}

fn format_restrictions(v: &EventVisitor) -> String {
    format!(
        "[pdbcover] {} restrictions over {} operators, mean mentions per operator ({}), mean operators per restriction ({})",
        v.restriction_count.unwrap_or(0),
        v.operator_count.unwrap_or(0),
        v.mean_mentions.unwrap_or(0),
        v.mean_operators.unwrap_or(0),
    )
}

fn format_ready(v: &EventVisitor) -> String {
    let strategy = v.strategy.as_deref().unwrap_or("unknown");
    match strategy {
        "max_abstraction" => format!(
            "[pdbcover] max_abstraction ready: databases ({})",
            v.databases.unwrap_or(0)
        ),
        _ => format!(
            "[pdbcover] {} ready: trials ({}), decrement ({}), seed ({})",
            strategy,
            v.trials.unwrap_or(0),
            v.decrement.as_deref().unwrap_or("N/A"),
            v.seed.unwrap_or(0),
        ),
    }
}

fn format_statistics(v: &EventVisitor) -> String {
    format!(
        "[pdbcover] {} evaluations ({}), dead ends ({}), trials ({}), mean estimate ({:.2})",
        v.strategy.as_deref().unwrap_or("unknown"),
        v.evaluations.unwrap_or(0),
        v.dead_ends.unwrap_or(0),
        v.trials.unwrap_or(0),
        v.mean_estimate.unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_restrictions() {
        let v = EventVisitor {
            event: Some("restrictions_built".into()),
            operator_count: Some(12),
            restriction_count: Some(3),
            mean_mentions: Some(1),
            mean_operators: Some(4),
            ..Default::default()
        };
        assert_eq!(
            format_event(&v),
            "[pdbcover] 3 restrictions over 12 operators, mean mentions per operator (1), mean operators per restriction (4)"
        );
    }

    #[test]
    fn test_format_ready() {
        let cover = EventVisitor {
            event: Some("heuristic_ready".into()),
            strategy: Some("cover_search".into()),
            decrement: Some("Iterative".into()),
            trials: Some(10),
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(
            format_event(&cover),
            "[pdbcover] cover_search ready: trials (10), decrement (Iterative), seed (7)"
        );

        let max = EventVisitor {
            event: Some("heuristic_ready".into()),
            strategy: Some("max_abstraction".into()),
            databases: Some(2),
            ..Default::default()
        };
        assert_eq!(format_event(&max), "[pdbcover] max_abstraction ready: databases (2)");
    }

    #[test]
    fn test_unknown_events_are_skipped() {
        let v = EventVisitor {
            event: Some("trial".into()),
            trials: Some(1),
            ..Default::default()
        };
        assert!(format_event(&v).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
