//! Tests for the evaluation pipeline and the shared engine.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statecraft_config::{ConfigError, ScoringConfig};
use statecraft_core::{ComponentType, ValidationError, ValidationWarning};
use statecraft_test::{economy, government, CatalogBuilder};

use super::{evaluate, Engine, EngineCell};
use crate::{Catalog, Configuration, RelationshipIndex};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn government_engine() -> Engine {
    Engine::new(Catalog::load(&government::source()).unwrap())
}

#[test]
fn test_two_component_strong_synergy() {
    let source = CatalogBuilder::new()
        .component("a", "x", 85.0)
        .component("b", "y", 90.0)
        .synergy("a", "b")
        .build_source();
    let engine = Engine::new(Catalog::load(&source).unwrap());

    let result = engine.evaluate(&Configuration::new(["a", "b"])).unwrap();
    assert_eq!(result.mean_baseline, 87.5);
    assert_eq!(result.raw_effectiveness, 102.5);
    assert_eq!(result.aggregate_effectiveness, 100.0);
    assert!(result.was_clamped());
    assert_eq!(result.pairs_considered, 1);
    assert_eq!(result.catalog_version, "test");
}

#[test]
fn test_empty_configuration() {
    let engine = government_engine();
    let result = engine.evaluate(&Configuration::empty()).unwrap();

    assert_eq!(result.aggregate_effectiveness, 0.0);
    assert_eq!(result.pairs_considered, 0);
    assert!(result.contributions.is_empty());
    assert!(result.component_analyses.is_empty());
    assert_eq!(result.total_implementation_cost, 0.0);
    assert_eq!(result.total_capacity_used, 0);
}

#[test]
fn test_liberal_republic_preset() {
    let engine = government_engine();
    let result = engine.evaluate_preset("liberal_republic").unwrap().unwrap();

    assert_eq!(result.catalog_version, government::VERSION);
    assert_eq!(result.active_components.len(), 5);
    assert!(close(result.mean_baseline, 79.6));
    assert!(close(result.raw_effectiveness, 129.6));
    assert_eq!(result.aggregate_effectiveness, 100.0);
    assert_eq!(result.total_bonus(), 50.0);
    assert_eq!(result.total_capacity_used, 12);
    assert_eq!(result.capacity_budget, Some(12));
    assert!(!result.has_warnings());
    assert_eq!(result.synergies().count(), 4);
    assert_eq!(result.conflicts().count(), 0);
    assert_eq!(result.total_implementation_cost, 760.0);
    assert_eq!(result.total_maintenance_cost, 135.0);
}

#[test]
fn test_westminster_preset_over_budget() {
    let engine = government_engine();
    let result = engine.evaluate_preset("westminster").unwrap().unwrap();

    assert!(result.is_over_budget());
    assert_eq!(
        result.validation_warnings,
        vec![ValidationWarning::CapacityExceeded {
            used: 15,
            budget: 10
        }]
    );
    // Still fully scored.
    assert_eq!(result.mean_baseline, 81.0);
    assert_eq!(result.total_bonus(), 40.0);
    assert_eq!(result.aggregate_effectiveness, 100.0);
    assert!(close(result.impact_projection.sector_multiplier("finance"), 1.1));
}

#[test]
fn test_autocracy_preset() {
    let engine = government_engine();
    let result = engine.evaluate_preset("autocracy").unwrap().unwrap();

    assert!(close(result.aggregate_effectiveness, 158.0 / 3.0));
    assert!(!result.was_clamped());
    assert_eq!(result.pairs_considered, 3);
    assert!(result.contributions.is_empty());
    assert_eq!(result.capacity_budget, None);
}

#[test]
fn test_unknown_preset() {
    assert!(government_engine().evaluate_preset("junta").is_none());
}

#[test]
fn test_validation_errors_produce_no_result() {
    let engine = government_engine();

    let err = engine
        .evaluate(&Configuration::new(["presidency", "ghost"]))
        .unwrap_err();
    assert_eq!(err, ValidationError::UnknownComponent("ghost".into()));

    let err = engine
        .evaluate(&Configuration::new(["parliament", "bicameral_legislature"]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::CategoryConflict { .. }));
}

#[test]
fn test_score_reconstructable_from_contributions() {
    let engine = government_engine();
    let result = engine
        .evaluate(&Configuration::new([
            "absolute_monarchy",
            "independent_judiciary",
            "free_press",
        ]))
        .unwrap();

    assert_eq!(result.mean_baseline, 73.0);
    assert_eq!(result.total_bonus(), -5.0);
    assert_eq!(
        result.aggregate_effectiveness,
        result.mean_baseline + result.total_bonus()
    );

    let worst = &result.component_analyses[0];
    assert_eq!(worst.component_type.as_str(), "absolute_monarchy");
    assert_eq!(worst.net_bonus, -20.0);
    assert_eq!(worst.conflict_count(), 2);
}

#[test]
fn test_free_function_matches_engine() {
    let catalog = Catalog::load(&government::source()).unwrap();
    let index = RelationshipIndex::build(&catalog);
    let config = Configuration::new(["parliament", "constitutional_monarchy"]);

    let direct = evaluate(&catalog, &index, &config).unwrap();
    let engine = Engine::new(catalog.clone());
    assert_eq!(engine.evaluate(&config).unwrap(), direct);
}

#[test]
fn test_deterministic() {
    let config = Configuration::new([
        "independent_judiciary",
        "anti_corruption_agency",
        "professional_civil_service",
        "central_bank",
        "free_press",
    ]);

    let first = government_engine().evaluate(&config).unwrap();
    let second = government_engine().evaluate(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_order() {
    let engine = government_engine();
    let configurations = vec![
        Configuration::new(["free_press"]),
        Configuration::new(["ghost"]),
        Configuration::new(["presidency", "absolute_monarchy"]),
        Configuration::empty(),
        Configuration::new(["central_bank", "professional_civil_service"]),
    ];

    let results = engine.evaluate_batch(&configurations);
    assert_eq!(results.len(), configurations.len());
    for (config, result) in configurations.iter().zip(&results) {
        assert_eq!(result, &engine.evaluate(config));
    }
    assert!(results[1].is_err());
    assert!(results[2].is_err());
    assert_eq!(results[0].as_ref().unwrap().aggregate_effectiveness, 86.0);
}

#[test]
fn test_shared_across_threads() {
    let engine = government_engine();
    let config = Configuration::new(["parliament", "independent_judiciary", "regional_councils"]);
    let expected = engine.evaluate(&config).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let engine = engine.clone();
            let config = &config;
            let expected = &expected;
            scope.spawn(move || {
                assert_eq!(&engine.evaluate(config).unwrap(), expected);
            });
        }
    });
}

#[test]
fn test_custom_scoring() {
    let catalog = Catalog::load(&government::source()).unwrap();
    let scoring = ScoringConfig::new().with_conflict_penalty(-40.0);
    let engine = Engine::with_scoring(catalog, &scoring).unwrap();

    let result = engine
        .evaluate(&Configuration::new(["absolute_monarchy", "free_press"]))
        .unwrap();
    assert_eq!(result.mean_baseline, 65.5);
    assert_eq!(result.aggregate_effectiveness, 25.5);
}

#[test]
fn test_invalid_scoring_rejected() {
    let catalog = Catalog::load(&government::source()).unwrap();
    let scoring = ScoringConfig::new().with_thresholds(60.0, 70.0);

    assert!(matches!(
        Engine::with_scoring(catalog, &scoring),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_engine_cell_builds_once() {
    let cell = EngineCell::new();
    assert!(cell.get().is_none());

    let failed: Result<&Engine, &str> = cell.get_or_try_init(|| Err("not yet"));
    assert_eq!(failed.unwrap_err(), "not yet");
    assert!(cell.get().is_none());

    let calls = Cell::new(0);
    let init = || {
        calls.set(calls.get() + 1);
        Catalog::load(&government::source()).map(Engine::new)
    };
    let first = cell.get_or_try_init(init).unwrap();
    let second = cell.get_or_try_init(init).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(calls.get(), 1);
    assert_eq!(first.catalog().version(), government::VERSION);
}

#[test]
fn test_engine_cell_builds_once_under_contention() {
    const THREADS: usize = 4;
    let cell = EngineCell::new();
    let calls = AtomicUsize::new(0);
    let start = Barrier::new(THREADS);

    let (cell, calls, start) = (&cell, &calls, &start);

    let engines: Vec<&Engine> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(move |_| {
                scope.spawn(move || {
                    start.wait();
                    cell.get_or_try_init(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        // Keep the first build running while the others arrive.
                        std::thread::sleep(Duration::from_millis(50));
                        Catalog::load(&government::source()).map(Engine::new)
                    })
                    .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(engines.iter().all(|e| std::ptr::eq(*e, engines[0])));
}

#[test]
fn test_engine_uses_embedded_scoring() {
    let source = CatalogBuilder::new()
        .component("a", "x", 85.0)
        .component("b", "y", 90.0)
        .synergy("a", "b")
        .build_source()
        .with_scoring(ScoringConfig::new().with_synergy_bonuses(5.0, 3.0, 1.0));
    let engine = Engine::new(Catalog::load(&source).unwrap());

    let result = engine.evaluate(&Configuration::new(["a", "b"])).unwrap();
    assert_eq!(result.total_bonus(), 5.0);
    assert_eq!(result.aggregate_effectiveness, 92.5);
    assert_eq!(engine.index().scoring(), engine.catalog().scoring());
}

#[test]
fn test_from_parts_shares_catalog() {
    let catalog = Arc::new(Catalog::load(&economy::source()).unwrap());
    let index = Arc::new(RelationshipIndex::build(&catalog));
    let engine = Engine::from_parts(Arc::clone(&catalog), Arc::clone(&index));

    assert_eq!(engine.catalog(), catalog.as_ref());
    assert_eq!(engine.index(), index.as_ref());
}

#[test]
fn test_random_configurations_hold_invariants() {
    let catalog = Catalog::load(&economy::source()).unwrap();
    let types: Vec<ComponentType> = catalog.all_types().cloned().collect();
    let engine = Engine::new(catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut evaluated = 0;
    for _ in 0..300 {
        let mut config = Configuration::empty();
        for component in &types {
            if rng.random_bool(0.4) {
                config = config.with_component(component.clone());
            }
        }

        let result = match engine.evaluate(&config) {
            Ok(result) => result,
            Err(ValidationError::CategoryConflict { .. }) => continue,
            Err(err) => panic!("unexpected error: {err}"),
        };
        evaluated += 1;

        let k = result.active_components.len();
        assert_eq!(result.pairs_considered, k * k.saturating_sub(1) / 2);
        assert!((0.0..=100.0).contains(&result.aggregate_effectiveness));
        assert_eq!(
            result.aggregate_effectiveness,
            (result.mean_baseline + result.total_bonus()).clamp(0.0, 100.0)
        );
        assert_eq!(result.component_analyses.len(), k);
        assert!(result
            .contributions
            .windows(2)
            .all(|w| w[0].bonus_percent.abs() >= w[1].bonus_percent.abs()));
        assert_eq!(engine.evaluate(&config).unwrap(), result);
    }

    assert!(evaluated > 0);
}

#[test]
fn test_removing_a_conflict_never_lowers_the_score() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..100 {
        let members = rng.random_range(1..5usize);
        let baselines: Vec<f64> = (0..=members).map(|_| rng.random_range(0.0..=100.0)).collect();
        let target = format!("s{}", rng.random_range(0..members));

        let catalog_for = |with_conflict: bool| {
            let mut builder = CatalogBuilder::new();
            for (i, baseline) in baselines[..members].iter().enumerate() {
                builder = builder.component(&format!("s{i}"), &format!("c{i}"), *baseline);
            }
            builder = builder.component("x", "cx", baselines[members]);
            if with_conflict {
                builder = builder.conflict("x", &target);
            }
            Catalog::load(&builder.build_source()).unwrap()
        };

        let mut config = Configuration::new(["x"]);
        for i in 0..members {
            config = config.with_component(format!("s{i}"));
        }

        let with = Engine::new(catalog_for(true)).evaluate(&config).unwrap();
        let without = Engine::new(catalog_for(false)).evaluate(&config).unwrap();
        assert!(
            with.aggregate_effectiveness <= without.aggregate_effectiveness,
            "{} > {}",
            with.aggregate_effectiveness,
            without.aggregate_effectiveness
        );
    }
}
