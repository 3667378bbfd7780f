//! Tests for the facade entry points.

use statecraft_test::{economy, government};

use super::*;

const CATALOG_TOML: &str = r#"
version = "facade-1"

[scoring]
strong_bonus = 20.0

[[categories]]
name = "monetary"
single_slot = true

[[components]]
type = "central_bank"
category = "monetary"
baseline_effectiveness = 85.0
implementation_cost = 400.0
synergy_types = ["treasury"]

[components.domain_impact.sector_multipliers]
finance = 1.1

[[components]]
type = "treasury"
category = "fiscal"
baseline_effectiveness = 80.0

[[components]]
type = "currency_board"
category = "monetary"
baseline_effectiveness = 60.0

[[presets]]
name = "orthodox"
components = ["central_bank", "treasury"]
"#;

#[test]
fn test_build_engine_from_toml() {
    let engine = build_engine_from_toml_str(CATALOG_TOML).unwrap();
    assert_eq!(engine.catalog().version(), "facade-1");

    // Embedded tiers replace the default strong bonus.
    let result = evaluate_preset(&engine, "orthodox").unwrap();
    assert_eq!(result.mean_baseline, 82.5);
    assert_eq!(result.total_bonus(), 20.0);
    assert_eq!(result.aggregate_effectiveness, 100.0);
    assert_eq!(result.impact_projection.sector_multiplier("finance"), 1.1);
}

#[test]
fn test_unknown_preset_is_an_error() {
    let engine = build_engine(&government::source()).unwrap();
    let err = evaluate_preset(&engine, "junta").unwrap_err();
    assert!(matches!(err, StatecraftError::UnknownPreset(ref name) if name == "junta"));
    assert_eq!(err.to_string(), "no preset named 'junta'");
}

#[test]
fn test_invalid_scoring_rejected_before_catalog() {
    let source = CatalogSource::new("empty")
        .with_scoring(ScoringConfig::new().with_thresholds(50.0, 60.0));

    // The catalog is empty too, but the tiers are checked first.
    assert!(matches!(
        build_catalog(&source),
        Err(StatecraftError::Config(ConfigError::Invalid(_)))
    ));
}

#[test]
fn test_catalog_error_converts() {
    let err = build_engine(&CatalogSource::new("empty")).unwrap_err();
    assert!(matches!(err, StatecraftError::Catalog(CatalogError::EmptyCatalog)));
}

#[test]
fn test_parse_error_converts() {
    let err = build_engine_from_toml_str("version = [").unwrap_err();
    assert!(matches!(err, StatecraftError::Config(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file() {
    let err = build_engine_from_file("/nonexistent/statecraft/catalog.toml").unwrap_err();
    assert!(matches!(err, StatecraftError::Config(ConfigError::Io(_))));
}

#[test]
fn test_one_shot_evaluate() {
    let config = Configuration::new(["central_bank", "currency_board"]);
    let source = CatalogSource::from_toml_str(CATALOG_TOML).unwrap();

    let err = evaluate(&source, &config).unwrap_err();
    assert!(matches!(
        err,
        StatecraftError::Validation(ValidationError::CategoryConflict { .. })
    ));

    let result = evaluate(&economy::source(), &Configuration::new(["free_market"])).unwrap();
    assert_eq!(result.aggregate_effectiveness, 76.0);
}

#[test]
fn test_build_catalog_matches_engine() {
    let (catalog, index) = build_catalog(&government::source()).unwrap();
    let engine = build_engine(&government::source()).unwrap();

    assert_eq!(engine.catalog(), &catalog);
    assert_eq!(engine.index(), &index);
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serializes_to_json() {
    let engine = build_engine(&government::source()).unwrap();
    let result = evaluate_preset(&engine, "westminster").unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["catalog_version"], "government-2024.1");
    assert_eq!(json["active_components"][0], "central_bank");
    assert_eq!(json["contributions"].as_array().unwrap().len(), 3);
    assert_eq!(json["validation_warnings"].as_array().unwrap().len(), 1);
    assert_eq!(json["aggregate_effectiveness"], result.aggregate_effectiveness);
}
