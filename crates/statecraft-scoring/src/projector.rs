//! Configuration-level impact projection.
//!
//! Blends each active component's coefficients with one fixed rule per
//! coefficient kind:
//! - optimal rates: arithmetic mean over the components that declare one
//! - sector multipliers: product, absent sectors counting as 1.0
//! - unemployment deltas: sum
//! - participation and wage-growth multipliers: product
//!
//! No clamping happens here; downstream models interpret the values.

use std::collections::BTreeMap;

use statecraft_core::{ComponentDefinition, EmploymentModifiers, OptimalRates, RateKind};

/// Blended domain impact of a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactProjection {
    /// Mean optimal rates; `None` where no active component declares one.
    pub optimal_rates: OptimalRates,
    /// Composed multiplier per sector any active component mentions.
    pub sector_multipliers: BTreeMap<String, f64>,
    pub employment: EmploymentModifiers,
}

impl ImpactProjection {
    /// Composed multiplier for `sector`; 1.0 if no component affects it.
    pub fn sector_multiplier(&self, sector: &str) -> f64 {
        self.sector_multipliers.get(sector).copied().unwrap_or(1.0)
    }
}

/// Projects the combined impact of `components`.
///
/// # Example
///
/// ```
/// use statecraft_config::{CatalogSource, ComponentSpec};
/// use statecraft_scoring::{projector, Catalog};
///
/// let source = CatalogSource::new("v1")
///     .with_component(ComponentSpec::new("a", "x", 60.0).with_sector_multiplier("manufacturing", 1.2))
///     .with_component(ComponentSpec::new("b", "y", 60.0).with_sector_multiplier("manufacturing", 1.2));
/// let catalog = Catalog::load(&source).unwrap();
/// let active: Vec<_> = catalog.definitions().collect();
///
/// let projection = projector::project(&active);
/// assert!((projection.sector_multiplier("manufacturing") - 1.44).abs() < 1e-12);
/// ```
pub fn project(components: &[&ComponentDefinition]) -> ImpactProjection {
    let mut optimal_rates = OptimalRates::default();
    for kind in RateKind::ALL {
        optimal_rates.set(kind, mean_rate(components, kind));
    }

    let mut sector_multipliers: BTreeMap<String, f64> = BTreeMap::new();
    for definition in components {
        for (sector, multiplier) in &definition.domain_impact.sector_multipliers {
            *sector_multipliers.entry(sector.clone()).or_insert(1.0) *= multiplier;
        }
    }

    let employment = components
        .iter()
        .fold(EmploymentModifiers::NEUTRAL, |acc, d| {
            acc.compose(&d.domain_impact.employment)
        });

    ImpactProjection {
        optimal_rates,
        sector_multipliers,
        employment,
    }
}

fn mean_rate(components: &[&ComponentDefinition], kind: RateKind) -> Option<f64> {
    let (sum, count) = components
        .iter()
        .filter_map(|d| d.domain_impact.optimal_rates.get(kind))
        .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
