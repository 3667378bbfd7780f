//! Definition sources and scoring configuration for Statecraft.
//!
//! A catalog is described by a static document, usually TOML, listing the
//! categories, the components with their costs and coefficients, and any
//! template presets. The same document may carry a `[scoring]` table that
//! overrides the relationship tiers.
//!
//! # Examples
//!
//! Load a catalog source from a TOML string:
//!
//! ```
//! use statecraft_config::CatalogSource;
//!
//! let source = CatalogSource::from_toml_str(r#"
//!     version = "2024.1"
//!
//!     [[categories]]
//!     name = "head_of_state"
//!     single_slot = true
//!
//!     [[components]]
//!     type = "presidency"
//!     category = "head_of_state"
//!     baseline_effectiveness = 72.0
//!     implementation_cost = 150.0
//!     required_capacity = 2
//!     synergy_types = ["senate"]
//!
//!     [[components]]
//!     type = "senate"
//!     category = "legislative"
//!     baseline_effectiveness = 68.0
//!     synergy_types = ["presidency"]
//!
//!     [components.domain_impact.employment]
//!     unemployment_delta = -0.2
//! "#).unwrap();
//!
//! assert_eq!(source.version, "2024.1");
//! assert_eq!(source.components.len(), 2);
//! assert_eq!(source.scoring(), Default::default());
//! ```
//!
//! Fall back to the default tiers when no scoring file exists:
//!
//! ```
//! use statecraft_config::ScoringConfig;
//!
//! let config = ScoringConfig::load("scoring.toml").unwrap_or_default();
//! assert_eq!(config.strong_bonus, 15.0);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use statecraft_core::{DomainImpact, EmploymentModifiers, OptimalRates, RelationshipKind};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The static definition source a catalog is built from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogSource {
    /// Version label of the catalog data.
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional relationship tier overrides.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Category slot metadata. Undeclared categories are multi-slot.
    #[serde(default)]
    pub categories: Vec<CategorySpec>,

    /// Component definitions.
    #[serde(default)]
    pub components: Vec<ComponentSpec>,

    /// Named template configurations.
    #[serde(default)]
    pub presets: Vec<PresetSpec>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

impl CatalogSource {
    /// Creates an empty source with the given version label.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Loads a catalog source from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads a catalog source from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a catalog source from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a catalog source from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a catalog source from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Returns the effective scoring tiers: the embedded table or defaults.
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    /// Sets the scoring tiers.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = Some(scoring);
        self
    }

    /// Adds a category declaration.
    pub fn with_category(mut self, name: impl Into<String>, single_slot: bool) -> Self {
        self.categories.push(CategorySpec {
            name: name.into(),
            single_slot,
        });
        self
    }

    /// Adds a component definition.
    pub fn with_component(mut self, component: ComponentSpec) -> Self {
        self.components.push(component);
        self
    }

    /// Adds a preset.
    pub fn with_preset(mut self, preset: PresetSpec) -> Self {
        self.presets.push(preset);
        self
    }
}

/// Category slot metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CategorySpec {
    pub name: String,

    /// At most one active component may belong to a single-slot category.
    #[serde(default)]
    pub single_slot: bool,
}

/// Raw component definition as written in a source document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ComponentSpec {
    #[serde(rename = "type")]
    pub component_type: String,

    pub category: String,

    /// Display name; the type is used when omitted.
    #[serde(default)]
    pub name: Option<String>,

    pub baseline_effectiveness: f64,

    #[serde(default)]
    pub implementation_cost: f64,

    #[serde(default)]
    pub maintenance_cost: f64,

    #[serde(default)]
    pub required_capacity: u32,

    #[serde(default)]
    pub synergy_types: Vec<String>,

    #[serde(default)]
    pub conflict_types: Vec<String>,

    #[serde(default)]
    pub domain_impact: DomainImpactSpec,
}

impl ComponentSpec {
    /// Creates a component with zero costs and no relationships.
    pub fn new(
        component_type: impl Into<String>,
        category: impl Into<String>,
        baseline_effectiveness: f64,
    ) -> Self {
        Self {
            component_type: component_type.into(),
            category: category.into(),
            name: None,
            baseline_effectiveness,
            implementation_cost: 0.0,
            maintenance_cost: 0.0,
            required_capacity: 0,
            synergy_types: Vec::new(),
            conflict_types: Vec::new(),
            domain_impact: DomainImpactSpec::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_costs(mut self, implementation: f64, maintenance: f64) -> Self {
        self.implementation_cost = implementation;
        self.maintenance_cost = maintenance;
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.required_capacity = capacity;
        self
    }

    pub fn with_synergies<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synergy_types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_conflicts<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflict_types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_rates(mut self, corporate: Option<f64>, income: Option<f64>) -> Self {
        self.domain_impact.optimal_rates = OptimalRatesSpec { corporate, income };
        self
    }

    pub fn with_sector_multiplier(mut self, sector: impl Into<String>, multiplier: f64) -> Self {
        self.domain_impact
            .sector_multipliers
            .insert(sector.into(), multiplier);
        self
    }

    pub fn with_employment(
        mut self,
        unemployment_delta: f64,
        participation_multiplier: f64,
        wage_growth_multiplier: f64,
    ) -> Self {
        self.domain_impact.employment = EmploymentSpec {
            unemployment_delta,
            participation_multiplier,
            wage_growth_multiplier,
        };
        self
    }
}

/// Raw domain impact table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DomainImpactSpec {
    #[serde(default)]
    pub optimal_rates: OptimalRatesSpec,

    #[serde(default)]
    pub sector_multipliers: BTreeMap<String, f64>,

    #[serde(default)]
    pub employment: EmploymentSpec,
}

impl DomainImpactSpec {
    /// Converts the raw table into the core coefficient record.
    pub fn to_domain_impact(&self) -> DomainImpact {
        DomainImpact {
            optimal_rates: OptimalRates::new(self.optimal_rates.corporate, self.optimal_rates.income),
            sector_multipliers: self.sector_multipliers.clone(),
            employment: EmploymentModifiers::new(
                self.employment.unemployment_delta,
                self.employment.participation_multiplier,
                self.employment.wage_growth_multiplier,
            ),
        }
    }
}

/// Optimal corporate and income rates, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimalRatesSpec {
    #[serde(default)]
    pub corporate: Option<f64>,

    #[serde(default)]
    pub income: Option<f64>,
}

/// Employment modifier triple. Omitted fields have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EmploymentSpec {
    #[serde(default)]
    pub unemployment_delta: f64,

    #[serde(default = "one")]
    pub participation_multiplier: f64,

    #[serde(default = "one")]
    pub wage_growth_multiplier: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for EmploymentSpec {
    fn default() -> Self {
        Self {
            unemployment_delta: 0.0,
            participation_multiplier: 1.0,
            wage_growth_multiplier: 1.0,
        }
    }
}

/// A named template configuration shipped with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PresetSpec {
    pub name: String,

    #[serde(default)]
    pub components: Vec<String>,

    #[serde(default)]
    pub capacity_budget: Option<u64>,
}

impl PresetSpec {
    pub fn new<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            components: components.into_iter().map(Into::into).collect(),
            capacity_budget: None,
        }
    }

    pub fn with_capacity_budget(mut self, budget: u64) -> Self {
        self.capacity_budget = Some(budget);
        self
    }
}

/// Relationship tiers and score bounds.
///
/// Synergy pairs are classified by the average baseline effectiveness of
/// their two components: at or above `strong_threshold` is strong, at or
/// above `moderate_threshold` is moderate, anything lower is weak.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ScoringConfig {
    pub strong_threshold: f64,
    pub moderate_threshold: f64,
    pub strong_bonus: f64,
    pub moderate_bonus: f64,
    pub weak_bonus: f64,
    /// Signed adjustment for conflicts; must not be positive.
    pub conflict_penalty: f64,
    /// Score bounds; both must lie within [0, 100].
    pub score_floor: f64,
    pub score_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 80.0,
            moderate_threshold: 70.0,
            strong_bonus: 15.0,
            moderate_bonus: 10.0,
            weak_bonus: 5.0,
            conflict_penalty: -10.0,
            score_floor: 0.0,
            score_ceiling: 100.0,
        }
    }
}

impl ScoringConfig {
    /// Creates the default tiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads scoring tiers from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses scoring tiers from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses scoring tiers from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the three synergy bonuses.
    pub fn with_synergy_bonuses(mut self, strong: f64, moderate: f64, weak: f64) -> Self {
        self.strong_bonus = strong;
        self.moderate_bonus = moderate;
        self.weak_bonus = weak;
        self
    }

    /// Sets the conflict penalty.
    pub fn with_conflict_penalty(mut self, penalty: f64) -> Self {
        self.conflict_penalty = penalty;
        self
    }

    /// Sets the classification thresholds.
    pub fn with_thresholds(mut self, strong: f64, moderate: f64) -> Self {
        self.strong_threshold = strong;
        self.moderate_threshold = moderate;
        self
    }

    /// Returns the signed bonus attached to a classification.
    ///
    /// ```
    /// use statecraft_config::ScoringConfig;
    /// use statecraft_core::RelationshipKind;
    ///
    /// let config = ScoringConfig::default();
    /// assert_eq!(config.bonus_for(RelationshipKind::Strong), 15.0);
    /// assert_eq!(config.bonus_for(RelationshipKind::Conflict), -10.0);
    /// ```
    pub fn bonus_for(&self, kind: RelationshipKind) -> f64 {
        match kind {
            RelationshipKind::Strong => self.strong_bonus,
            RelationshipKind::Moderate => self.moderate_bonus,
            RelationshipKind::Weak => self.weak_bonus,
            RelationshipKind::Conflict => self.conflict_penalty,
        }
    }

    /// Checks the tiers for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for non-finite values, thresholds out
    /// of order, negative synergy bonuses, a positive conflict penalty,
    /// score bounds outside [0, 100], or inverted score bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("strong_threshold", self.strong_threshold),
            ("moderate_threshold", self.moderate_threshold),
            ("strong_bonus", self.strong_bonus),
            ("moderate_bonus", self.moderate_bonus),
            ("weak_bonus", self.weak_bonus),
            ("conflict_penalty", self.conflict_penalty),
            ("score_floor", self.score_floor),
            ("score_ceiling", self.score_ceiling),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.moderate_threshold > self.strong_threshold {
            return Err(ConfigError::Invalid(format!(
                "moderate_threshold {} is above strong_threshold {}",
                self.moderate_threshold, self.strong_threshold
            )));
        }
        if let Some((name, value)) = fields[2..5].iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be non-negative, got {value}"
            )));
        }
        if self.conflict_penalty > 0.0 {
            return Err(ConfigError::Invalid(format!(
                "conflict_penalty must not be positive, got {}",
                self.conflict_penalty
            )));
        }
        if let Some((name, value)) = fields[6..]
            .iter()
            .find(|(_, v)| !(0.0..=100.0).contains(v))
        {
            return Err(ConfigError::Invalid(format!(
                "{name} must be within [0, 100], got {value}"
            )));
        }
        if self.score_floor > self.score_ceiling {
            return Err(ConfigError::Invalid(format!(
                "score_floor {} is above score_ceiling {}",
                self.score_floor, self.score_ceiling
            )));
        }
        Ok(())
    }
}
