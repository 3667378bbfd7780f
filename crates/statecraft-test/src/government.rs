//! Government institution fixtures.
//!
//! Relationship classes under the default tiers:
//!
//! | pair | average | class |
//! |------|---------|-------|
//! | presidency / bicameral_legislature | 71 | moderate |
//! | presidency / constitutional_court | 77 | moderate |
//! | constitutional_monarchy / parliament | 76 | moderate |
//! | parliament / independent_judiciary | 81 | strong |
//! | independent_judiciary / anti_corruption_agency | 86 | strong |
//! | independent_judiciary / free_press | 87 | strong |
//! | independent_judiciary / constitutional_court | 85 | strong |
//! | anti_corruption_agency / professional_civil_service | 82 | strong |
//! | central_bank / professional_civil_service | 82.5 | strong |
//! | parliament / regional_councils | 64.5 | weak |
//! | absolute_monarchy / independent_judiciary | - | conflict |
//! | absolute_monarchy / free_press | - | conflict |
//! | presidency / state_media | - | conflict (state_media declares synergy) |

use statecraft_config::{CatalogSource, ComponentSpec, PresetSpec};

pub const VERSION: &str = "government-2024.1";

/// Single-slot categories.
pub const SINGLE_SLOT: [&str; 3] = ["head_of_state", "legislature", "monetary"];

/// The government catalog source.
pub fn source() -> CatalogSource {
    let mut source = CatalogSource::new(VERSION);
    for category in SINGLE_SLOT {
        source = source.with_category(category, true);
    }
    source = source.with_category("judiciary", false);

    source
        .with_component(
            ComponentSpec::new("presidency", "head_of_state", 72.0)
                .with_name("Directly Elected Presidency")
                .with_costs(150.0, 20.0)
                .with_capacity(2)
                .with_synergies(["bicameral_legislature", "constitutional_court"])
                .with_conflicts(["state_media"]),
        )
        .with_component(
            ComponentSpec::new("constitutional_monarchy", "head_of_state", 78.0)
                .with_costs(120.0, 25.0)
                .with_capacity(1)
                .with_synergies(["parliament"]),
        )
        .with_component(
            ComponentSpec::new("absolute_monarchy", "head_of_state", 45.0)
                .with_costs(80.0, 30.0)
                .with_capacity(1)
                .with_conflicts(["independent_judiciary", "free_press"]),
        )
        .with_component(
            ComponentSpec::new("parliament", "legislature", 74.0)
                .with_costs(200.0, 40.0)
                .with_capacity(3)
                .with_synergies(["constitutional_monarchy", "independent_judiciary"]),
        )
        .with_component(
            ComponentSpec::new("bicameral_legislature", "legislature", 70.0)
                .with_costs(260.0, 50.0)
                .with_capacity(4)
                .with_synergies(["presidency"]),
        )
        .with_component(
            ComponentSpec::new("independent_judiciary", "judiciary", 88.0)
                .with_costs(180.0, 35.0)
                .with_capacity(3)
                .with_synergies(["parliament", "anti_corruption_agency", "free_press"]),
        )
        .with_component(
            ComponentSpec::new("constitutional_court", "judiciary", 82.0)
                .with_costs(140.0, 25.0)
                .with_capacity(2)
                .with_synergies(["presidency", "independent_judiciary"]),
        )
        .with_component(
            ComponentSpec::new("anti_corruption_agency", "administration", 84.0)
                .with_costs(90.0, 20.0)
                .with_capacity(2)
                .with_synergies(["independent_judiciary", "professional_civil_service"]),
        )
        .with_component(
            ComponentSpec::new("professional_civil_service", "administration", 80.0)
                .with_costs(300.0, 60.0)
                .with_capacity(5)
                .with_synergies(["anti_corruption_agency"]),
        )
        .with_component(
            ComponentSpec::new("regional_councils", "administration", 55.0)
                .with_costs(60.0, 15.0)
                .with_capacity(2)
                .with_synergies(["parliament"]),
        )
        .with_component(
            ComponentSpec::new("free_press", "civil_society", 86.0)
                .with_costs(30.0, 5.0)
                .with_capacity(1)
                .with_synergies(["independent_judiciary"])
                .with_conflicts(["absolute_monarchy"]),
        )
        .with_component(
            ComponentSpec::new("state_media", "civil_society", 58.0)
                .with_costs(50.0, 10.0)
                .with_capacity(1)
                .with_synergies(["presidency"]),
        )
        .with_component(
            ComponentSpec::new("central_bank", "monetary", 85.0)
                .with_costs(400.0, 40.0)
                .with_capacity(3)
                .with_synergies(["professional_civil_service"])
                .with_sector_multiplier("finance", 1.1),
        )
        .with_preset(
            PresetSpec::new(
                "liberal_republic",
                [
                    "presidency",
                    "bicameral_legislature",
                    "independent_judiciary",
                    "constitutional_court",
                    "free_press",
                ],
            )
            .with_capacity_budget(12),
        )
        .with_preset(
            PresetSpec::new(
                "westminster",
                [
                    "constitutional_monarchy",
                    "parliament",
                    "independent_judiciary",
                    "professional_civil_service",
                    "central_bank",
                ],
            )
            .with_capacity_budget(10),
        )
        .with_preset(PresetSpec::new(
            "autocracy",
            ["absolute_monarchy", "state_media", "regional_councils"],
        ))
}
