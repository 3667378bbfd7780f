//! Domain impact coefficients.
//!
//! Components carry coefficients, not behavior: every component is described
//! by the same record of optional rates, sector multipliers and employment
//! modifiers. The impact projector folds these records without branching on
//! the component kind.

use std::collections::BTreeMap;

/// The fiscal rates a component may declare an optimum for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RateKind {
    /// Corporate income tax rate.
    Corporate,
    /// Personal income tax rate.
    Income,
}

impl RateKind {
    /// All rate kinds, in declaration order.
    pub const ALL: [RateKind; 2] = [RateKind::Corporate, RateKind::Income];
}

/// Optimal-rate pair, in percent. `None` means the component is silent.
///
/// # Example
///
/// ```
/// use statecraft_core::{OptimalRates, RateKind};
///
/// let rates = OptimalRates::new(Some(21.0), None);
/// assert_eq!(rates.get(RateKind::Corporate), Some(21.0));
/// assert_eq!(rates.get(RateKind::Income), None);
/// assert!(!rates.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalRates {
    pub corporate: Option<f64>,
    pub income: Option<f64>,
}

impl OptimalRates {
    pub fn new(corporate: Option<f64>, income: Option<f64>) -> Self {
        Self { corporate, income }
    }

    /// Returns the declared rate of the given kind.
    pub fn get(&self, kind: RateKind) -> Option<f64> {
        match kind {
            RateKind::Corporate => self.corporate,
            RateKind::Income => self.income,
        }
    }

    /// Sets the rate of the given kind.
    pub fn set(&mut self, kind: RateKind, value: Option<f64>) {
        match kind {
            RateKind::Corporate => self.corporate = value,
            RateKind::Income => self.income = value,
        }
    }

    /// Returns true if no rate is declared.
    pub fn is_empty(&self) -> bool {
        self.corporate.is_none() && self.income.is_none()
    }
}

/// Employment effects of a component.
///
/// Unemployment deltas compose additively (percentage points); participation
/// and wage-growth multipliers compose multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmploymentModifiers {
    /// Change in unemployment rate, in percentage points.
    pub unemployment_delta: f64,
    /// Labor-force participation multiplier.
    pub participation_multiplier: f64,
    /// Wage-growth multiplier.
    pub wage_growth_multiplier: f64,
}

impl EmploymentModifiers {
    /// No effect on employment.
    pub const NEUTRAL: EmploymentModifiers = EmploymentModifiers {
        unemployment_delta: 0.0,
        participation_multiplier: 1.0,
        wage_growth_multiplier: 1.0,
    };

    pub fn new(
        unemployment_delta: f64,
        participation_multiplier: f64,
        wage_growth_multiplier: f64,
    ) -> Self {
        Self {
            unemployment_delta,
            participation_multiplier,
            wage_growth_multiplier,
        }
    }

    /// Composes two modifier triples.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_core::EmploymentModifiers;
    ///
    /// let a = EmploymentModifiers::new(-0.5, 1.1, 1.0);
    /// let b = EmploymentModifiers::new(-0.25, 1.1, 1.2);
    /// let c = a.compose(&b);
    /// assert_eq!(c.unemployment_delta, -0.75);
    /// assert!((c.participation_multiplier - 1.21).abs() < 1e-12);
    /// assert_eq!(c.wage_growth_multiplier, 1.2);
    /// ```
    pub fn compose(&self, other: &EmploymentModifiers) -> EmploymentModifiers {
        EmploymentModifiers {
            unemployment_delta: self.unemployment_delta + other.unemployment_delta,
            participation_multiplier: self.participation_multiplier
                * other.participation_multiplier,
            wage_growth_multiplier: self.wage_growth_multiplier * other.wage_growth_multiplier,
        }
    }
}

impl Default for EmploymentModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// The full coefficient record of one component.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainImpact {
    pub optimal_rates: OptimalRates,
    /// Output multiplier per sector name. Absent sectors are unaffected (1.0).
    pub sector_multipliers: BTreeMap<String, f64>,
    pub employment: EmploymentModifiers,
}

impl DomainImpact {
    /// Returns the multiplier for `sector`, defaulting to 1.0.
    pub fn sector_multiplier(&self, sector: &str) -> f64 {
        self.sector_multipliers.get(sector).copied().unwrap_or(1.0)
    }

    /// Iterates over every numeric coefficient with a field label.
    ///
    /// Used by catalog loading to reject NaN and infinite values.
    pub fn coefficients(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        let rates = RateKind::ALL.into_iter().filter_map(move |kind| {
            self.optimal_rates
                .get(kind)
                .map(|v| (format!("optimal_rates.{kind:?}").to_lowercase(), v))
        });
        let sectors = self
            .sector_multipliers
            .iter()
            .map(|(sector, v)| (format!("sector_multipliers.{sector}"), *v));
        let employment = [
            (
                "employment.unemployment_delta".to_string(),
                self.employment.unemployment_delta,
            ),
            (
                "employment.participation_multiplier".to_string(),
                self.employment.participation_multiplier,
            ),
            (
                "employment.wage_growth_multiplier".to_string(),
                self.employment.wage_growth_multiplier,
            ),
        ];
        rates.chain(sectors).chain(employment)
    }
}
