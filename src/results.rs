//! Output of a truss solve.

use serde::{Deserialize, Serialize};

use crate::hoist::HoistRequirement;

/// Vertical reaction at one support.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportReaction {
    /// Support label, generated as `S1`, `S2`, … when none was given.
    pub label: String,
    /// Support position as supplied, in metres.
    pub position_m: f64,
    /// Upward reaction in newtons.
    pub force_n: f64,
    /// Reaction expressed as a hanging mass in kilograms.
    pub mass_kg: f64,
}

/// Reactions, extrema and diagrams produced by [`solve`](crate::solve).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// One reaction per support, in support order.
    pub reactions: Vec<SupportReaction>,
    /// Largest absolute bending moment in N·m.
    pub max_moment_nm: f64,
    /// Largest absolute deflection in metres.
    pub max_deflection_m: f64,
    /// Vertical displacement of every node, upward positive.
    pub deflections_m: Vec<f64>,
    /// Bending moment at every node, sagging positive.
    pub moments_nm: Vec<f64>,
    /// Node x-coordinates matching `deflections_m` and `moments_nm`.
    pub node_positions_m: Vec<f64>,
    /// Moment check against the model's allowable; `None` without one.
    pub moment_ok: Option<bool>,
    /// Deflection check against the model's allowable; `None` without one.
    pub deflection_ok: Option<bool>,
    /// Number of elements the span was split into.
    pub element_count: usize,
    /// Sum of reactions minus total applied load, in newtons.
    pub equilibrium_residual_n: f64,
}

impl SolveResult {
    /// Reactions in newtons, in support order.
    #[must_use]
    pub fn reactions_n(&self) -> Vec<f64> {
        self.reactions.iter().map(|r| r.force_n).collect()
    }

    /// Reactions in kilograms, in support order.
    #[must_use]
    pub fn reactions_kg(&self) -> Vec<f64> {
        self.reactions.iter().map(|r| r.mass_kg).collect()
    }

    /// Support labels, in support order.
    #[must_use]
    pub fn support_labels(&self) -> Vec<&str> {
        self.reactions.iter().map(|r| r.label.as_str()).collect()
    }

    /// Sum of all support reactions in newtons.
    #[must_use]
    pub fn total_reaction_n(&self) -> f64 {
        self.reactions.iter().map(|r| r.force_n).sum()
    }

    /// Whether every supplied allowable is met.
    ///
    /// Checks without an allowable do not count against the result.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.moment_ok != Some(false) && self.deflection_ok != Some(false)
    }

    /// Capacity demand of every support, ready for hoist matching.
    #[must_use]
    pub fn hoist_requirements(&self) -> Vec<HoistRequirement> {
        self.reactions
            .iter()
            .map(|r| HoistRequirement::new(r.label.clone(), r.mass_kg))
            .collect()
    }
}
