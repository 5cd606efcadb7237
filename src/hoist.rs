//! Greedy matching of support reactions to catalog hoists.

use serde::{Deserialize, Serialize};

/// A catalog hoist model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoistType {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Working load limit in kilograms.
    pub wll_kg: f64,
    /// Weight of the hoist body in kilograms, if known.
    pub self_weight_kg: Option<f64>,
}

impl HoistType {
    /// Create a catalog entry without a recorded self-weight.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, wll_kg: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wll_kg,
            self_weight_kg: None,
        }
    }

    /// Record the weight of the hoist body.
    #[must_use]
    pub fn with_self_weight(mut self, self_weight_kg: f64) -> Self {
        self.self_weight_kg = Some(self_weight_kg);
        self
    }
}

/// Capacity a labelled support needs from its hoist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoistRequirement {
    /// Support label.
    pub label: String,
    /// Required capacity in kilograms.
    pub required_kg: f64,
}

impl HoistRequirement {
    /// Create a requirement.
    #[must_use]
    pub fn new(label: impl Into<String>, required_kg: f64) -> Self {
        Self {
            label: label.into(),
            required_kg,
        }
    }
}

/// Hoist chosen for one support.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoistAssignment {
    /// Support label.
    pub label: String,
    /// Required capacity rounded up to a whole kilogram.
    pub required_kg: f64,
    /// Selected hoist; `None` only when the catalog is empty.
    pub hoist: Option<HoistType>,
}

impl HoistAssignment {
    /// Whether the selected hoist is rated below the requirement.
    ///
    /// An empty catalog counts as under capacity.
    #[must_use]
    pub fn is_under_capacity(&self) -> bool {
        self.hoist
            .as_ref()
            .map_or(true, |hoist| self.required_kg > hoist.wll_kg)
    }
}

/// Pick the lightest-rated hoist whose WLL covers `required_kg`.
///
/// The requirement is rounded up to a whole kilogram first. When nothing in
/// the catalog is large enough the highest-rated entry is returned; the caller
/// decides how to flag that.
///
/// # Examples
/// ```
/// use trussrig::{select_hoist, HoistType};
///
/// let catalog = vec![
///     HoistType::new("half", "Half tonne", 500.0),
///     HoistType::new("quarter", "Quarter tonne", 250.0),
/// ];
/// assert_eq!(select_hoist(249.2, &catalog).map(|h| h.wll_kg), Some(250.0));
/// assert_eq!(select_hoist(250.4, &catalog).map(|h| h.wll_kg), Some(500.0));
/// assert_eq!(select_hoist(900.0, &catalog).map(|h| h.wll_kg), Some(500.0));
/// ```
#[must_use]
pub fn select_hoist(required_kg: f64, catalog: &[HoistType]) -> Option<&HoistType> {
    let required = required_kg.ceil();
    let mut sorted: Vec<&HoistType> = catalog.iter().collect();
    sorted.sort_by(|a, b| a.wll_kg.total_cmp(&b.wll_kg));
    sorted
        .iter()
        .find(|hoist| hoist.wll_kg >= required)
        .or_else(|| sorted.last())
        .copied()
}

/// Assign a hoist to every requirement. Never fails.
///
/// # Examples
/// ```
/// use trussrig::{suggest_hoists, HoistRequirement, HoistType};
///
/// let catalog = vec![HoistType::new("q", "Quarter tonne", 250.0)];
/// let assignments = suggest_hoists(&[HoistRequirement::new("SL", 180.2)], &catalog);
/// assert_eq!(assignments[0].required_kg, 181.0);
/// assert!(!assignments[0].is_under_capacity());
/// ```
#[must_use]
pub fn suggest_hoists(
    requirements: &[HoistRequirement],
    catalog: &[HoistType],
) -> Vec<HoistAssignment> {
    requirements
        .iter()
        .map(|requirement| {
            let hoist = select_hoist(requirement.required_kg, catalog).cloned();
            let assignment = HoistAssignment {
                label: requirement.label.clone(),
                required_kg: requirement.required_kg.ceil(),
                hoist,
            };
            if assignment.is_under_capacity() {
                log::warn!(
                    "support {} needs {} kg, above every catalog hoist",
                    assignment.label,
                    assignment.required_kg
                );
            }
            assignment
        })
        .collect()
}
