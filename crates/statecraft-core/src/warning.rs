//! Non-fatal validation findings.

use std::fmt;

use crate::component::ComponentType;

/// A structural issue that did not block evaluation.
///
/// Warnings travel inside a successful result; they are never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationWarning {
    /// The summed capacity requirement is above the caller's budget.
    CapacityExceeded { used: u64, budget: u64 },
    /// The same type was listed more than once and was collapsed.
    DuplicateComponent(ComponentType),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::CapacityExceeded { used, budget } => write!(
                f,
                "capacity {used} exceeds budget {budget} by {}",
                used.saturating_sub(*budget)
            ),
            ValidationWarning::DuplicateComponent(component) => {
                write!(f, "component '{component}' listed more than once")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let w = ValidationWarning::CapacityExceeded {
            used: 12,
            budget: 10,
        };
        assert_eq!(w.to_string(), "capacity 12 exceeds budget 10 by 2");

        let w = ValidationWarning::DuplicateComponent("senate".into());
        assert_eq!(w.to_string(), "component 'senate' listed more than once");
    }
}
