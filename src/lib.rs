#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod assembly;
pub mod cholesky;
pub mod constraints;
pub mod element;
mod errors;
mod hoist;
pub mod mesh;
mod model;
pub mod postprocess;
mod report;
mod results;
mod truss;

pub use crate::errors::{ModelError, SingularError, SolveError};
pub use crate::hoist::{select_hoist, suggest_hoists, HoistAssignment, HoistRequirement, HoistType};
pub use crate::mesh::Mesh;
pub use crate::model::{
    BeamModel, Fixture, LoadCase, SolveOptions, Support, DEFAULT_DYNAMIC_FACTOR,
    DEFAULT_ELEMENT_COUNT, MIN_ELEMENT_COUNT, STANDARD_GRAVITY,
};
pub use crate::report::render_report;
pub use crate::results::{SolveResult, SupportReaction};
pub use crate::truss::solve;
