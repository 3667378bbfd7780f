//! Colorful console output for engine events.
//!
//! Provides a custom `tracing` layer that formats catalog and evaluation
//! events with colors. Enabled with the `console` feature.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "statecraft_scoring=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::from_default_env();
        let filter = match DEFAULT_DIRECTIVE.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(StatecraftConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ___ _        _                 __ _
 / __| |_ __ _| |_ ___ __ _ _ _ / _| |_
 \__ \  _/ _` |  _/ -_) _| '_/ _` |  _|
 |___/\__\__,_|\__\___\__|_| \__,_|_|
"#;

    let version_line = format!(
        "          v{} - Component Synergy Engine\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats engine events with colors.
pub struct StatecraftConsoleLayer;

impl<S: Subscriber> Layer<S> for StatecraftConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("statecraft") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    version: Option<String>,
    component_count: Option<u64>,
    single_slot_categories: Option<u64>,
    preset_count: Option<u64>,
    entry_count: Option<u64>,
    synergy_count: Option<u64>,
    conflict_count: Option<u64>,
    pairs_considered: Option<u64>,
    contribution_count: Option<u64>,
    warning_count: Option<u64>,
    used: Option<u64>,
    budget: Option<u64>,
    score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "version" => self.version = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "version" => self.version = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "component_count" => self.component_count = Some(value),
            "single_slot_categories" => self.single_slot_categories = Some(value),
            "preset_count" => self.preset_count = Some(value),
            "entry_count" => self.entry_count = Some(value),
            "synergy_count" => self.synergy_count = Some(value),
            "conflict_count" => self.conflict_count = Some(value),
            "pairs_considered" => self.pairs_considered = Some(value),
            "contribution_count" => self.contribution_count = Some(value),
            "warning_count" => self.warning_count = Some(value),
            "used" => self.used = Some(value),
            "budget" => self.budget = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "score" {
            self.score = Some(value);
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "catalog_loaded" => format_catalog_loaded(level, v),
        "index_built" => format_index_built(level, v),
        "evaluation" => format_evaluation(level, v),
        "capacity_exceeded" => format_capacity_exceeded(level, v),
        _ => String::new(),
    }
}

fn format_catalog_loaded(level: Level, v: &EventVisitor) -> String {
    format!(
        "{} {} {} version ({}), components ({}), single-slot categories ({}), presets ({})",
        timestamp().bright_black(),
        level_label(level),
        "[Catalog]".bright_cyan(),
        v.version.as_deref().unwrap_or("N/A").white().bold(),
        v.component_count.unwrap_or(0).bright_yellow(),
        v.single_slot_categories.unwrap_or(0).bright_yellow(),
        v.preset_count.unwrap_or(0).bright_yellow()
    )
}

fn format_index_built(level: Level, v: &EventVisitor) -> String {
    format!(
        "{} {} {} relationships ({}): synergies ({}), conflicts ({})",
        timestamp().bright_black(),
        level_label(level),
        "[Index]".bright_cyan(),
        v.entry_count.unwrap_or(0).bright_yellow(),
        v.synergy_count.unwrap_or(0).bright_green(),
        v.conflict_count.unwrap_or(0).bright_red()
    )
}

fn format_evaluation(level: Level, v: &EventVisitor) -> String {
    format!(
        "{} {} {} components ({}), pairs ({}), contributions ({}), warnings ({}), score ({})",
        timestamp().bright_black(),
        level_label(level),
        "[Evaluate]".bright_cyan(),
        v.component_count.unwrap_or(0).bright_yellow(),
        v.pairs_considered.unwrap_or(0).white(),
        v.contribution_count.unwrap_or(0).white(),
        v.warning_count.unwrap_or(0).white(),
        format_score(v.score.unwrap_or(0.0))
    )
}

fn format_capacity_exceeded(level: Level, v: &EventVisitor) -> String {
    let used = v.used.unwrap_or(0);
    let budget = v.budget.unwrap_or(0);
    format!(
        "{} {} {} capacity ({}) exceeds budget ({}) by {}",
        timestamp().bright_black(),
        level_label(level),
        "[Validate]".bright_cyan(),
        used.bright_red(),
        budget.white(),
        used.saturating_sub(budget).bright_red().bold()
    )
}

fn level_label(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

/// Colors a score by band: green at 80 and above, red below 50.
fn format_score(score: f64) -> String {
    let text = format!("{:.1}", score);
    if score >= 80.0 {
        text.bright_green().bold().to_string()
    } else if score < 50.0 {
        text.bright_red().to_string()
    } else {
        text.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn test_capacity_event_format() {
        let visitor = EventVisitor {
            event: Some("capacity_exceeded".to_string()),
            used: Some(15),
            budget: Some(10),
            ..EventVisitor::default()
        };
        let line = strip(&format_event(Level::WARN, &visitor));
        assert!(line.contains("WARN"), "{line}");
        assert!(line.ends_with("capacity (15) exceeds budget (10) by 5"), "{line}");
    }

    #[test]
    fn test_catalog_event_format() {
        let visitor = EventVisitor {
            event: Some("catalog_loaded".to_string()),
            version: Some("government-2024.1".to_string()),
            component_count: Some(13),
            ..EventVisitor::default()
        };
        let line = strip(&format_event(Level::INFO, &visitor));
        assert!(line.contains("[Catalog] version (government-2024.1), components (13)"), "{line}");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("pair_resolved".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(Level::TRACE, &visitor).is_empty());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(strip(&format_score(100.0)), "100.0");
        assert_eq!(strip(&format_score(52.666)), "52.7");
    }
}
