//! Per-component breakdown of an evaluation.
//!
//! Attributes every contribution to both components of its pair, so a
//! caller can see which choice drags a configuration down.

use std::collections::BTreeMap;

use statecraft_core::{ComponentDefinition, ComponentType, Contribution, RelationshipKind};

/// How one active component fares inside a configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentAnalysis {
    pub component_type: ComponentType,
    pub baseline_effectiveness: f64,
    /// Sum of bonuses of every contribution this component takes part in.
    pub net_bonus: f64,
    /// Partners and the relationship with each, sorted by partner type.
    pub partners: Vec<(ComponentType, RelationshipKind)>,
}

impl ComponentAnalysis {
    fn new(definition: &ComponentDefinition) -> Self {
        Self {
            component_type: definition.component_type.clone(),
            baseline_effectiveness: definition.baseline_effectiveness,
            net_bonus: 0.0,
            partners: Vec::new(),
        }
    }

    fn add(&mut self, partner: &ComponentType, contribution: &Contribution) {
        self.net_bonus += contribution.bonus_percent;
        self.partners.push((partner.clone(), contribution.kind));
    }

    /// Number of synergy partners.
    pub fn synergy_count(&self) -> usize {
        self.partners.iter().filter(|(_, k)| k.is_synergy()).count()
    }

    /// Number of conflict partners.
    pub fn conflict_count(&self) -> usize {
        self.partners.len() - self.synergy_count()
    }
}

/// Builds analyses for every active component, worst net bonus first.
///
/// Ties are broken by component type. Components with no relationships
/// are included with a net bonus of 0.
pub fn analyze(
    components: &[&ComponentDefinition],
    contributions: &[Contribution],
) -> Vec<ComponentAnalysis> {
    let mut analyses: BTreeMap<&ComponentType, ComponentAnalysis> = components
        .iter()
        .map(|d| (&d.component_type, ComponentAnalysis::new(d)))
        .collect();

    for contribution in contributions {
        let (first, second) = (contribution.pair.first(), contribution.pair.second());
        if let Some(analysis) = analyses.get_mut(first) {
            analysis.add(second, contribution);
        }
        if let Some(analysis) = analyses.get_mut(second) {
            analysis.add(first, contribution);
        }
    }

    let mut analyses: Vec<ComponentAnalysis> = analyses.into_values().collect();
    for analysis in &mut analyses {
        analysis.partners.sort_by(|a, b| a.0.cmp(&b.0));
    }
    analyses.sort_by(|a, b| {
        a.net_bonus
            .total_cmp(&b.net_bonus)
            .then_with(|| a.component_type.cmp(&b.component_type))
    });
    analyses
}

#[cfg(test)]
mod tests {
    use super::*;
    use statecraft_core::CanonicalPair;
    use statecraft_test::CatalogBuilder;

    fn contribution(a: &str, b: &str, kind: RelationshipKind, bonus: f64) -> Contribution {
        Contribution {
            pair: CanonicalPair::new(a.into(), b.into()),
            kind,
            bonus_percent: bonus,
        }
    }

    #[test]
    fn test_analysis_attributes_both_sides() {
        let source = CatalogBuilder::new()
            .component("a", "x", 70.0)
            .component("b", "y", 80.0)
            .component("c", "z", 60.0)
            .build_source();
        let catalog = crate::Catalog::load(&source).unwrap();
        let active: Vec<_> = catalog.definitions().collect();

        let contributions = vec![
            contribution("a", "b", RelationshipKind::Moderate, 10.0),
            contribution("a", "c", RelationshipKind::Conflict, -10.0),
        ];
        let analyses = analyze(&active, &contributions);

        let names: Vec<_> = analyses.iter().map(|a| a.component_type.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        let a = &analyses[1];
        assert_eq!(a.net_bonus, 0.0);
        assert_eq!(a.synergy_count(), 1);
        assert_eq!(a.conflict_count(), 1);
        assert_eq!(
            a.partners,
            vec![
                ("b".into(), RelationshipKind::Moderate),
                ("c".into(), RelationshipKind::Conflict)
            ]
        );

        assert_eq!(analyses[0].net_bonus, -10.0);
        assert_eq!(analyses[2].net_bonus, 10.0);
    }

    #[test]
    fn test_isolated_component_has_zero_bonus() {
        let source = CatalogBuilder::new().component("solo", "x", 50.0).build_source();
        let catalog = crate::Catalog::load(&source).unwrap();
        let active: Vec<_> = catalog.definitions().collect();

        let analyses = analyze(&active, &[]);
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].net_bonus, 0.0);
        assert!(analyses[0].partners.is_empty());
    }
}
