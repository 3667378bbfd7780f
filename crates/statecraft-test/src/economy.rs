//! Economic system and fiscal instrument fixtures.
//!
//! Every component carries domain coefficients so projections have
//! something to blend. Relationship classes under the default tiers:
//!
//! | pair | average | class |
//! |------|---------|-------|
//! | free_market / export_zones | 72 | moderate |
//! | mixed_economy / industrial_policy | 69 | weak |
//! | export_zones / industrial_policy | 67 | weak |
//! | minimum_wage / progressive_tax | 66 | weak |
//! | free_market / minimum_wage | - | conflict |
//! | planned_economy / export_zones | - | conflict |

use statecraft_config::{CatalogSource, ComponentSpec};

pub const VERSION: &str = "economy-2024.1";

/// The economy catalog source.
pub fn source() -> CatalogSource {
    CatalogSource::new(VERSION)
        .with_category("economic_system", true)
        .with_category("fiscal", true)
        .with_component(
            ComponentSpec::new("free_market", "economic_system", 76.0)
                .with_costs(100.0, 10.0)
                .with_capacity(1)
                .with_sector_multiplier("manufacturing", 1.2)
                .with_sector_multiplier("services", 1.15)
                .with_employment(-0.5, 1.02, 1.05)
                .with_synergies(["export_zones"])
                .with_conflicts(["minimum_wage"]),
        )
        .with_component(
            ComponentSpec::new("mixed_economy", "economic_system", 72.0)
                .with_costs(150.0, 20.0)
                .with_capacity(2)
                .with_sector_multiplier("manufacturing", 1.1)
                .with_sector_multiplier("agriculture", 1.05)
                .with_employment(-0.8, 1.01, 1.0)
                .with_synergies(["industrial_policy"]),
        )
        .with_component(
            ComponentSpec::new("planned_economy", "economic_system", 50.0)
                .with_costs(300.0, 80.0)
                .with_capacity(6)
                .with_sector_multiplier("manufacturing", 1.05)
                .with_employment(-2.0, 1.05, 0.9)
                .with_conflicts(["export_zones"]),
        )
        .with_component(
            ComponentSpec::new("export_zones", "trade", 68.0)
                .with_costs(220.0, 30.0)
                .with_capacity(2)
                .with_rates(Some(15.0), None)
                .with_sector_multiplier("manufacturing", 1.2)
                .with_synergies(["free_market", "industrial_policy"]),
        )
        .with_component(
            ComponentSpec::new("industrial_policy", "industry", 66.0)
                .with_costs(250.0, 45.0)
                .with_capacity(3)
                .with_sector_multiplier("manufacturing", 1.2)
                .with_sector_multiplier("services", 0.95),
        )
        .with_component(
            ComponentSpec::new("progressive_tax", "fiscal", 70.0)
                .with_costs(40.0, 15.0)
                .with_capacity(2)
                .with_rates(Some(25.0), Some(35.0))
                .with_employment(0.0, 0.98, 1.0),
        )
        .with_component(
            ComponentSpec::new("flat_tax", "fiscal", 64.0)
                .with_costs(30.0, 8.0)
                .with_capacity(1)
                .with_rates(Some(18.0), Some(18.0))
                .with_employment(-0.2, 1.01, 1.02),
        )
        .with_component(
            ComponentSpec::new("minimum_wage", "labor", 62.0)
                .with_costs(10.0, 5.0)
                .with_capacity(1)
                .with_employment(0.3, 1.0, 1.08)
                .with_synergies(["progressive_tax"]),
        )
        .with_component(
            ComponentSpec::new("sovereign_wealth_fund", "investment", 82.0)
                .with_costs(500.0, 25.0)
                .with_capacity(2)
                .with_rates(Some(20.0), None)
                .with_sector_multiplier("finance", 1.25),
        )
}
