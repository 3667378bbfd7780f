//! Precomputed symmetric relationship table.
//!
//! The index walks every component's declared synergy and conflict lists
//! once at build time. Evaluation afterwards only performs O(1) lookups by
//! canonical pair and never revisits the per-component lists.

use std::collections::HashMap;

use statecraft_config::ScoringConfig;
use statecraft_core::{
    CanonicalPair, ComponentDefinition, ComponentType, RelationshipEntry, RelationshipKind,
};
use tracing::info;

use crate::catalog::Catalog;

/// Symmetric lookup from unordered component pairs to classified
/// relationships.
///
/// Rebuilding from the same catalog and tiers always yields an equal index.
///
/// # Example
///
/// ```
/// use statecraft_config::{CatalogSource, ComponentSpec};
/// use statecraft_core::RelationshipKind;
/// use statecraft_scoring::{Catalog, RelationshipIndex};
///
/// let source = CatalogSource::new("v1")
///     .with_component(ComponentSpec::new("a", "x", 85.0).with_synergies(["b"]))
///     .with_component(ComponentSpec::new("b", "y", 90.0));
/// let catalog = Catalog::load(&source).unwrap();
/// let index = RelationshipIndex::build(&catalog);
///
/// let entry = index.lookup(&"b".into(), &"a".into()).unwrap();
/// assert_eq!(entry.kind, RelationshipKind::Strong);
/// assert_eq!(entry.bonus_percent, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipIndex {
    entries: HashMap<CanonicalPair, RelationshipEntry>,
    scoring: ScoringConfig,
}

impl RelationshipIndex {
    /// Builds the index with the catalog's own tiers.
    pub fn build(catalog: &Catalog) -> Self {
        Self::build_with(catalog, catalog.scoring())
    }

    /// Builds the index with custom tiers.
    ///
    /// Synergy pairs are classified by the average baseline of the two
    /// components. Conflicts are always `Conflict`. When a pair is declared
    /// twice with different classifications the higher precedence wins, so
    /// a conflict declared by either side overrides a synergy declared by
    /// the other.
    pub fn build_with(catalog: &Catalog, scoring: &ScoringConfig) -> Self {
        let mut index = Self {
            entries: HashMap::new(),
            scoring: scoring.clone(),
        };

        for definition in catalog.definitions() {
            for target in &definition.synergy_types {
                let Some(partner) = catalog.get(target) else {
                    continue;
                };
                let kind = classify_synergy(definition, partner, scoring);
                index.insert(&definition.component_type, target, kind);
            }
            for target in &definition.conflict_types {
                index.insert(&definition.component_type, target, RelationshipKind::Conflict);
            }
        }

        info!(
            event = "index_built",
            entry_count = index.entries.len(),
            synergy_count = index.count(RelationshipKind::is_synergy),
            conflict_count = index.count(|k| k == RelationshipKind::Conflict),
        );

        index
    }

    fn insert(&mut self, a: &ComponentType, b: &ComponentType, kind: RelationshipKind) {
        let pair = CanonicalPair::new(a.clone(), b.clone());
        let bonus = self.scoring.bonus_for(kind);
        match self.entries.get(&pair) {
            Some(existing) if !kind.outranks(existing.kind) => {}
            _ => {
                self.entries
                    .insert(pair.clone(), RelationshipEntry::new(pair, kind, bonus));
            }
        }
    }

    fn count(&self, pred: impl Fn(RelationshipKind) -> bool) -> usize {
        self.entries.values().filter(|e| pred(e.kind)).count()
    }

    /// Looks up the relationship between two types, in either order.
    ///
    /// `None` means neutral: the pair has no effect.
    pub fn lookup(&self, a: &ComponentType, b: &ComponentType) -> Option<&RelationshipEntry> {
        if a == b {
            return None;
        }
        self.entries.get(&CanonicalPair::new(a.clone(), b.clone()))
    }

    /// Looks up a pair that is already canonical.
    pub fn get(&self, pair: &CanonicalPair) -> Option<&RelationshipEntry> {
        self.entries.get(pair)
    }

    /// All entries, sorted by canonical pair.
    pub fn entries(&self) -> Vec<&RelationshipEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.pair.cmp(&b.pair));
        entries
    }

    /// The tiers this index was built with.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn classify_synergy(
    a: &ComponentDefinition,
    b: &ComponentDefinition,
    scoring: &ScoringConfig,
) -> RelationshipKind {
    let average = (a.baseline_effectiveness + b.baseline_effectiveness) / 2.0;
    if average >= scoring.strong_threshold {
        RelationshipKind::Strong
    } else if average >= scoring.moderate_threshold {
        RelationshipKind::Moderate
    } else {
        RelationshipKind::Weak
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
