//! Tests for configuration validation.

use statecraft_core::{Category, ValidationError, ValidationWarning};
use statecraft_test::{economy, government};

use super::{validate, Configuration};
use crate::Catalog;

fn catalog() -> Catalog {
    Catalog::load(&government::source()).unwrap()
}

#[test]
fn test_valid_configuration() {
    let catalog = catalog();
    let config = Configuration::new(["free_press", "independent_judiciary", "presidency"]);

    let validated = validate(&config, &catalog).unwrap();
    assert_eq!(validated.len(), 3);
    assert!(validated.warnings().is_empty());
    assert_eq!(validated.total_capacity(), 6);
    assert_eq!(validated.total_implementation_cost(), 360.0);
    assert_eq!(validated.total_maintenance_cost(), 60.0);
}

#[test]
fn test_components_sorted_by_type() {
    let catalog = catalog();
    let config = Configuration::new(["presidency", "free_press", "central_bank"]);

    let validated = validate(&config, &catalog).unwrap();
    let types: Vec<_> = validated.component_types().map(|t| t.as_str()).collect();
    assert_eq!(types, vec!["central_bank", "free_press", "presidency"]);
}

#[test]
fn test_empty_configuration_is_valid() {
    let catalog = catalog();
    let validated = validate(&Configuration::empty().with_capacity_budget(0), &catalog).unwrap();

    assert!(validated.is_empty());
    assert_eq!(validated.total_capacity(), 0);
    assert!(validated.warnings().is_empty());
}

#[test]
fn test_unknown_component() {
    let catalog = catalog();
    let config = Configuration::new(["presidency", "ghost", "phantom"]);

    assert_eq!(
        validate(&config, &catalog).unwrap_err(),
        ValidationError::UnknownComponent("ghost".into())
    );
}

#[test]
fn test_unknown_checked_before_category() {
    let catalog = catalog();
    let config = Configuration::new(["presidency", "constitutional_monarchy", "ghost"]);

    assert!(matches!(
        validate(&config, &catalog),
        Err(ValidationError::UnknownComponent(_))
    ));
}

#[test]
fn test_single_slot_category_conflict() {
    let catalog = catalog();
    let config = Configuration::new(["presidency", "constitutional_monarchy"]);

    assert_eq!(
        validate(&config, &catalog).unwrap_err(),
        ValidationError::CategoryConflict {
            category: Category::new("head_of_state"),
            first: "constitutional_monarchy".into(),
            second: "presidency".into(),
        }
    );
}

#[test]
fn test_multi_slot_category_allows_sharing() {
    let catalog = catalog();
    let config = Configuration::new(["independent_judiciary", "constitutional_court"]);
    assert!(validate(&config, &catalog).is_ok());

    // Categories that are never declared behave as multi-slot.
    let config = Configuration::new(["anti_corruption_agency", "regional_councils"]);
    assert!(validate(&config, &catalog).is_ok());
}

#[test]
fn test_category_conflict_message() {
    let economy = Catalog::load(&economy::source()).unwrap();
    let config = Configuration::new(["flat_tax", "progressive_tax"]);

    let err = validate(&config, &economy).unwrap_err();
    assert!(err.to_string().contains("fiscal"), "{err}");
    assert!(err.to_string().contains("flat_tax"), "{err}");
}

#[test]
fn test_duplicates_collapse_with_warning() {
    let catalog = catalog();
    let config = Configuration::new(["free_press", "free_press", "central_bank", "free_press"]);

    let validated = validate(&config, &catalog).unwrap();
    assert_eq!(validated.len(), 2);
    assert_eq!(
        validated.warnings(),
        &[ValidationWarning::DuplicateComponent("free_press".into())]
    );
}

#[test]
fn test_duplicate_single_slot_is_not_a_conflict() {
    let catalog = catalog();
    let config = Configuration::new(["presidency", "presidency"]);

    let validated = validate(&config, &catalog).unwrap();
    assert_eq!(validated.len(), 1);
    assert_eq!(validated.warnings().len(), 1);
}

#[test]
fn test_capacity_exceeded_is_a_warning() {
    let catalog = catalog();
    let config = catalog.preset("westminster").unwrap();

    let validated = validate(config, &catalog).unwrap();
    assert_eq!(validated.total_capacity(), 15);
    assert_eq!(
        validated.warnings(),
        &[ValidationWarning::CapacityExceeded {
            used: 15,
            budget: 10
        }]
    );
}

#[test]
fn test_capacity_at_budget_is_fine() {
    let catalog = catalog();
    let config = catalog.preset("liberal_republic").unwrap();

    let validated = validate(config, &catalog).unwrap();
    assert_eq!(validated.total_capacity(), 12);
    assert_eq!(validated.capacity_budget(), Some(12));
    assert!(validated.warnings().is_empty());
}

#[test]
fn test_no_budget_means_no_capacity_check() {
    let catalog = catalog();
    let config = Configuration::new(["professional_civil_service", "central_bank"]);

    let validated = validate(&config, &catalog).unwrap();
    assert_eq!(validated.total_capacity(), 8);
    assert!(validated.warnings().is_empty());
}

#[test]
fn test_warnings_in_detection_order() {
    let catalog = catalog();
    let config = Configuration::new(["parliament", "parliament"]).with_capacity_budget(1);

    let validated = validate(&config, &catalog).unwrap();
    assert_eq!(
        validated.warnings(),
        &[
            ValidationWarning::DuplicateComponent("parliament".into()),
            ValidationWarning::CapacityExceeded { used: 3, budget: 1 },
        ]
    );
}
