//! Nation Builder Example
//!
//! Evaluates every preset in a catalog of government institutions and
//! economic policies, then shows what changes when one preset is swapped
//! for another.
//!
//! Run with the bundled catalog, or pass a path to your own TOML or YAML
//! file as the first argument.

use std::process::ExitCode;

use statecraft::prelude::*;
use statecraft::{console, ComponentAnalysis, RateKind, ResultDiff};

const BUNDLED_CATALOG: &str = include_str!("../catalog.toml");

fn main() -> ExitCode {
    console::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> statecraft::Result<()> {
    let engine = match std::env::args().nth(1) {
        Some(path) => statecraft::build_engine_from_file(path)?,
        None => statecraft::build_engine_from_toml_str(BUNDLED_CATALOG)?,
    };

    let names: Vec<String> = engine
        .catalog()
        .preset_names()
        .map(str::to_string)
        .collect();

    let mut results = Vec::with_capacity(names.len());
    for name in &names {
        let result = statecraft::evaluate_preset(&engine, name)?;
        print_result(name, &result);
        results.push(result);
    }

    if let [first, second, ..] = results.as_slice() {
        println!("\n{} -> {}", names[0], names[1]);
        print_diff(&first.compare(second));
    }

    Ok(())
}

fn print_result(name: &str, result: &EvaluationResult) {
    println!("\n== {name} ({}) ==", result.catalog_version);
    println!(
        "Effectiveness: {:.1} (mean baseline {:.1}, bonus {:+.1}, raw {:.1})",
        result.aggregate_effectiveness,
        result.mean_baseline,
        result.total_bonus(),
        result.raw_effectiveness
    );
    println!(
        "Cost: {:.0} up front, {:.0} per period; capacity {}{}",
        result.total_implementation_cost,
        result.total_maintenance_cost,
        result.total_capacity_used,
        result
            .capacity_budget
            .map(|b| format!(" of {b}"))
            .unwrap_or_default()
    );

    println!("Relationships ({} pairs checked):", result.pairs_considered);
    if result.contributions.is_empty() {
        println!("  none");
    }
    for contribution in &result.contributions {
        println!("  {contribution}");
    }

    if let Some(weakest) = result.component_analyses.first() {
        print_weakest(weakest);
    }

    let projection = &result.impact_projection;
    println!("Projected impact:");
    for kind in RateKind::ALL {
        if let Some(rate) = projection.optimal_rates.get(kind) {
            println!("  optimal {kind:?} rate: {rate:.1}%");
        }
    }
    for (sector, multiplier) in &projection.sector_multipliers {
        println!("  {sector}: x{multiplier:.3}");
    }
    let employment = &projection.employment;
    println!(
        "  unemployment {:+.1} pp, participation x{:.3}, wage growth x{:.3}",
        employment.unemployment_delta,
        employment.participation_multiplier,
        employment.wage_growth_multiplier
    );

    for warning in &result.validation_warnings {
        println!("Warning: {warning}");
    }
}

fn print_weakest(analysis: &ComponentAnalysis) {
    if analysis.net_bonus >= 0.0 {
        return;
    }
    println!(
        "Weakest link: {} ({:+.1} from {} conflict(s))",
        analysis.component_type,
        analysis.net_bonus,
        analysis.conflict_count()
    );
}

fn print_diff(diff: &ResultDiff) {
    println!("  effectiveness {:+.1}", diff.effectiveness_delta);
    println!(
        "  cost {:+.0} up front, {:+.0} per period; capacity {:+}",
        diff.implementation_cost_delta, diff.maintenance_cost_delta, diff.capacity_delta
    );
    for component in &diff.added_components {
        println!("  + {component}");
    }
    for component in &diff.removed_components {
        println!("  - {component}");
    }
    for contribution in &diff.gained {
        println!("  gained {contribution}");
    }
    for contribution in &diff.lost {
        println!("  lost {contribution}");
    }
}
