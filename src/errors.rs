//! Error types produced while validating or solving a truss beam model.

use thiserror::Error;

/// Error returned when a solve fails.
///
/// Neither variant is retried: both require the caller to change the input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolveError {
    /// Returned when the beam model, load case or options are not physically meaningful.
    #[error("invalid model: {0}")]
    InvalidModel(#[from] ModelError),
    /// Returned when the reduced stiffness matrix is not symmetric positive definite.
    #[error("{0}; check your support configuration")]
    SingularSystem(#[from] SingularError),
}

impl SolveError {
    /// Whether the failure stems from the support configuration rather than the inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use trussrig::{SingularError, SolveError};
    ///
    /// let error = SolveError::from(SingularError::UnderConstrained { constrained_nodes: 1 });
    /// assert!(error.is_singular());
    /// ```
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularSystem(_))
    }
}

/// Reason the free-free stiffness submatrix cannot be factorised.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SingularError {
    /// Fewer than two distinct nodes are restrained, leaving a rigid-body mode.
    #[error("only {constrained_nodes} distinct support node(s) restrain the truss")]
    UnderConstrained {
        /// Number of distinct mesh nodes that received a support.
        constrained_nodes: usize,
    },
    /// Cholesky factorisation met a pivot that is zero, negative or NaN.
    #[error("stiffness matrix is not positive definite (pivot {pivot} at row {pivot_index})")]
    NonPositivePivot {
        /// Row of the reduced stiffness matrix where factorisation stopped.
        pivot_index: usize,
        /// Offending pivot value before the square root.
        pivot: f64,
    },
}

/// Reason a model input is rejected before assembly.
///
/// Non-finite values are rejected by the same variant as out-of-range ones so
/// callers can present one message per field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// Returned when the span is zero, negative or not finite.
    #[error("span must be positive (received {span_m} m)")]
    NonPositiveSpan {
        /// Rejected span in metres.
        span_m: f64,
    },
    /// Returned when the flexural rigidity is zero, negative or not finite.
    #[error("flexural rigidity EI must be positive (received {ei} N·m²)")]
    NonPositiveFlexuralRigidity {
        /// Rejected flexural rigidity in N·m².
        ei: f64,
    },
    /// Returned when the self-weight per metre is negative or not finite.
    #[error("self-weight must not be negative (received {self_weight_kg_per_m} kg/m)")]
    NegativeSelfWeight {
        /// Rejected self-weight in kilograms per metre.
        self_weight_kg_per_m: f64,
    },
    /// Returned when gravitational acceleration is zero, negative or not finite.
    #[error("gravity must be positive (received {gravity_m_s2} m/s²)")]
    NonPositiveGravity {
        /// Rejected acceleration in m/s².
        gravity_m_s2: f64,
    },
    /// Returned when the dynamic amplification factor is negative or not finite.
    #[error("dynamic factor must not be negative (received {dynamic_factor})")]
    NegativeDynamicFactor {
        /// Rejected factor.
        dynamic_factor: f64,
    },
    /// Returned when the smeared motor weight is negative or not finite.
    #[error("motor weight must not be negative (received {motor_kg} kg)")]
    NegativeMotorWeight {
        /// Rejected weight in kilograms.
        motor_kg: f64,
    },
    /// Returned when a fixture lies outside `[0, span]`.
    #[error("fixture {index} at {position_m} m lies outside the span")]
    FixtureOutsideSpan {
        /// Index of the fixture in the load case.
        index: usize,
        /// Rejected position in metres.
        position_m: f64,
    },
    /// Returned when a fixture carries a negative or non-finite unit weight.
    #[error("fixture {index} has a negative unit weight ({unit_weight_kg} kg)")]
    NegativeFixtureWeight {
        /// Index of the fixture in the load case.
        index: usize,
        /// Rejected unit weight in kilograms.
        unit_weight_kg: f64,
    },
    /// Returned when a support lies outside `[0, span]`.
    #[error("support {index} at {position_m} m lies outside the span")]
    SupportOutsideSpan {
        /// Index of the support in the options.
        index: usize,
        /// Rejected position in metres.
        position_m: f64,
    },
    /// Returned when the tilt is not finite or reaches ±90°.
    #[error("tilt must lie strictly between -90° and 90° (received {tilt_deg}°)")]
    InvalidTilt {
        /// Rejected tilt in degrees.
        tilt_deg: f64,
    },
}
