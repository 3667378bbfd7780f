//! Pairwise relationship types.
//!
//! Relationships are symmetric. Every pair is stored in canonical
//! (lexicographically sorted) order so `A↔B` and `B↔A` are the same key.

use std::cmp::Ordering;
use std::fmt;

use crate::component::ComponentType;

/// Classification of a pairwise relationship.
///
/// # Example
///
/// ```
/// use statecraft_core::RelationshipKind;
///
/// assert!(RelationshipKind::Conflict.outranks(RelationshipKind::Strong));
/// assert!(RelationshipKind::Strong.outranks(RelationshipKind::Weak));
/// assert!(RelationshipKind::Weak.is_synergy());
/// assert_eq!(RelationshipKind::Moderate.to_string(), "moderate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationshipKind {
    Strong,
    Moderate,
    Weak,
    Conflict,
}

impl RelationshipKind {
    /// Precedence used when two declarations classify the same pair
    /// differently. Conflict outranks every synergy class.
    pub const fn precedence(self) -> u8 {
        match self {
            RelationshipKind::Weak => 0,
            RelationshipKind::Moderate => 1,
            RelationshipKind::Strong => 2,
            RelationshipKind::Conflict => 3,
        }
    }

    /// Returns true if `self` wins over `other` in a contradiction.
    pub const fn outranks(self, other: RelationshipKind) -> bool {
        self.precedence() > other.precedence()
    }

    /// Returns true for the three synergy classes.
    pub const fn is_synergy(self) -> bool {
        !matches!(self, RelationshipKind::Conflict)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Strong => "strong",
            RelationshipKind::Moderate => "moderate",
            RelationshipKind::Weak => "weak",
            RelationshipKind::Conflict => "conflict",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unordered pair of component types in canonical order.
///
/// # Example
///
/// ```
/// use statecraft_core::{CanonicalPair, ComponentType};
///
/// let ab = CanonicalPair::new("senate".into(), "judiciary".into());
/// let ba = CanonicalPair::new("judiciary".into(), "senate".into());
/// assert_eq!(ab, ba);
/// assert_eq!(ab.first().as_str(), "judiciary");
/// assert_eq!(ab.to_string(), "judiciary <-> senate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalPair {
    first: ComponentType,
    second: ComponentType,
}

impl CanonicalPair {
    /// Creates a pair, sorting the two types.
    pub fn new(a: ComponentType, b: ComponentType) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// The lexicographically smaller type.
    pub fn first(&self) -> &ComponentType {
        &self.first
    }

    /// The lexicographically larger type.
    pub fn second(&self) -> &ComponentType {
        &self.second
    }

    /// Returns true if `component` is one side of this pair.
    pub fn contains(&self, component: &ComponentType) -> bool {
        &self.first == component || &self.second == component
    }

    /// Returns the partner of `component`, if it belongs to this pair.
    pub fn partner_of(&self, component: &ComponentType) -> Option<&ComponentType> {
        if &self.first == component {
            Some(&self.second)
        } else if &self.second == component {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for CanonicalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// A classified relationship, one per canonical pair in the index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipEntry {
    pub pair: CanonicalPair,
    pub kind: RelationshipKind,
    /// Signed percentage-point adjustment: positive for synergies,
    /// negative for conflicts.
    pub bonus_percent: f64,
}

impl RelationshipEntry {
    pub fn new(pair: CanonicalPair, kind: RelationshipKind, bonus_percent: f64) -> Self {
        Self {
            pair,
            kind,
            bonus_percent,
        }
    }
}

/// One line of an evaluation's explanation: a non-neutral pair that was
/// active in the configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution {
    pub pair: CanonicalPair,
    pub kind: RelationshipKind,
    pub bonus_percent: f64,
}

impl Contribution {
    /// Explanation order: larger absolute bonus first, then canonical pair.
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_core::{CanonicalPair, Contribution, RelationshipKind};
    ///
    /// let conflict = Contribution {
    ///     pair: CanonicalPair::new("a".into(), "b".into()),
    ///     kind: RelationshipKind::Conflict,
    ///     bonus_percent: -10.0,
    /// };
    /// let weak = Contribution {
    ///     pair: CanonicalPair::new("a".into(), "c".into()),
    ///     kind: RelationshipKind::Weak,
    ///     bonus_percent: 5.0,
    /// };
    /// let mut list = vec![weak.clone(), conflict.clone()];
    /// list.sort_by(Contribution::explanation_order);
    /// assert_eq!(list, vec![conflict, weak]);
    /// ```
    pub fn explanation_order(a: &Contribution, b: &Contribution) -> Ordering {
        b.bonus_percent
            .abs()
            .total_cmp(&a.bonus_percent.abs())
            .then_with(|| a.pair.cmp(&b.pair))
    }
}

impl From<&RelationshipEntry> for Contribution {
    fn from(entry: &RelationshipEntry) -> Self {
        Self {
            pair: entry.pair.clone(),
            kind: entry.kind,
            bonus_percent: entry.bonus_percent,
        }
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {:+.1}%",
            self.pair, self.kind, self.bonus_percent
        )
    }
}
