//! Input types describing the truss, its loads and the solve configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::hoist::HoistType;

/// Standard gravitational acceleration in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Dynamic amplification applied to point loads unless overridden.
pub const DEFAULT_DYNAMIC_FACTOR: f64 = 1.2;

/// Number of beam elements used unless overridden.
pub const DEFAULT_ELEMENT_COUNT: usize = 24;

/// Fewest beam elements a solve will ever use.
pub const MIN_ELEMENT_COUNT: usize = 8;

/// Prismatic beam standing in for a rigging truss.
///
/// Created by the caller and never mutated by the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Length of the truss in metres.
    pub span_m: f64,
    /// Flexural rigidity `EI` in N·m².
    pub flexural_rigidity_nm2: f64,
    /// Self-weight per unit length in kg/m.
    pub self_weight_kg_per_m: f64,
    /// Allowable bending moment in N·m, if the truss has one.
    pub allowable_moment_nm: Option<f64>,
    /// Allowable deflection in metres, if the truss has one.
    pub allowable_deflection_m: Option<f64>,
}

impl BeamModel {
    /// Create a model without allowables.
    ///
    /// # Examples
    /// ```
    /// use trussrig::BeamModel;
    ///
    /// let model = BeamModel::new(10.0, 5.0e6, 5.0).with_allowable_moment(4_000.0);
    /// assert_eq!(model.allowable_moment_nm, Some(4_000.0));
    /// assert_eq!(model.allowable_deflection_m, None);
    /// ```
    #[must_use]
    pub const fn new(span_m: f64, flexural_rigidity_nm2: f64, self_weight_kg_per_m: f64) -> Self {
        Self {
            span_m,
            flexural_rigidity_nm2,
            self_weight_kg_per_m,
            allowable_moment_nm: None,
            allowable_deflection_m: None,
        }
    }

    /// Set the allowable bending moment in N·m.
    #[must_use]
    pub fn with_allowable_moment(mut self, moment_nm: f64) -> Self {
        self.allowable_moment_nm = Some(moment_nm);
        self
    }

    /// Set the allowable deflection in metres.
    #[must_use]
    pub fn with_allowable_deflection(mut self, deflection_m: f64) -> Self {
        self.allowable_deflection_m = Some(deflection_m);
        self
    }

    /// Check the geometric and stiffness properties.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the span or `EI` is not strictly positive or the
    /// self-weight is negative.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.flexural_rigidity_nm2.is_finite() && self.flexural_rigidity_nm2 > 0.0) {
            return Err(ModelError::NonPositiveFlexuralRigidity {
                ei: self.flexural_rigidity_nm2,
            });
        }
        if !(self.span_m.is_finite() && self.span_m > 0.0) {
            return Err(ModelError::NonPositiveSpan {
                span_m: self.span_m,
            });
        }
        if !(self.self_weight_kg_per_m.is_finite() && self.self_weight_kg_per_m >= 0.0) {
            return Err(ModelError::NegativeSelfWeight {
                self_weight_kg_per_m: self.self_weight_kg_per_m,
            });
        }
        Ok(())
    }

    /// Whether `x` lies on the span, inclusive of both ends.
    fn contains(&self, x: f64) -> bool {
        x.is_finite() && (0.0..=self.span_m).contains(&x)
    }
}

/// A point load hung from the truss, such as a group of lighting fixtures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Position along the span in metres.
    pub position_m: f64,
    /// Weight of a single unit in kilograms.
    pub unit_weight_kg: f64,
    /// Number of units hung at this position.
    pub quantity: u32,
}

impl Fixture {
    /// Create a fixture group.
    #[must_use]
    pub const fn new(position_m: f64, unit_weight_kg: f64, quantity: u32) -> Self {
        Self {
            position_m,
            unit_weight_kg,
            quantity,
        }
    }

    /// Total static weight of the group in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.quantity) * self.unit_weight_kg
    }
}

/// A pick point where the truss hangs from a hoist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Position along the span in metres.
    pub position_m: f64,
    /// Optional display label such as `"SR"`.
    pub label: Option<String>,
}

impl Support {
    /// Create an unlabelled support.
    #[must_use]
    pub const fn at(position_m: f64) -> Self {
        Self {
            position_m,
            label: None,
        }
    }

    /// Create a labelled support.
    #[must_use]
    pub fn labelled(position_m: f64, label: impl Into<String>) -> Self {
        Self {
            position_m,
            label: Some(label.into()),
        }
    }

    /// Label used in results, falling back to `S1`, `S2`, … by index.
    #[must_use]
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("S{}", index + 1))
    }
}

/// Loads acting on the truss for a single solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Point loads along the span.
    pub fixtures: Vec<Fixture>,
    /// Gravitational acceleration in m/s².
    pub gravity_m_s2: f64,
    /// Dynamic amplification applied to every point load.
    pub dynamic_factor: f64,
    /// Motor weight per support in kilograms, smeared as a line load when set.
    pub smeared_motor_kg: Option<f64>,
}

impl Default for LoadCase {
    fn default() -> Self {
        Self {
            fixtures: Vec::new(),
            gravity_m_s2: STANDARD_GRAVITY,
            dynamic_factor: DEFAULT_DYNAMIC_FACTOR,
            smeared_motor_kg: None,
        }
    }
}

impl LoadCase {
    /// Create a load case with default gravity and dynamic factor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture group.
    #[must_use]
    pub fn with_fixture(mut self, fixture: Fixture) -> Self {
        self.fixtures.push(fixture);
        self
    }

    /// Override gravitational acceleration.
    #[must_use]
    pub fn with_gravity(mut self, gravity_m_s2: f64) -> Self {
        self.gravity_m_s2 = gravity_m_s2;
        self
    }

    /// Override the dynamic amplification factor.
    #[must_use]
    pub fn with_dynamic_factor(mut self, dynamic_factor: f64) -> Self {
        self.dynamic_factor = dynamic_factor;
        self
    }

    /// Smear one motor of `motor_kg` per support along the span.
    #[must_use]
    pub fn with_smeared_motor_weight(mut self, motor_kg: f64) -> Self {
        self.smeared_motor_kg = Some(motor_kg);
        self
    }

    /// Smear the self-weight of `hoist` per support along the span.
    ///
    /// Hoists without a recorded self-weight leave the load case unchanged.
    #[must_use]
    pub fn with_smeared_motors(self, hoist: &HoistType) -> Self {
        match hoist.self_weight_kg {
            Some(motor_kg) => self.with_smeared_motor_weight(motor_kg),
            None => self,
        }
    }

    /// Uniform line load magnitude in N/m, positive downward.
    ///
    /// The smeared term approximates concentrated motors as a load spread
    /// over the whole span.
    #[must_use]
    pub fn line_load_n_per_m(&self, model: &BeamModel, support_count: usize) -> f64 {
        let self_weight = model.self_weight_kg_per_m * self.gravity_m_s2;
        let smeared = self.smeared_motor_kg.map_or(0.0, |motor_kg| {
            motor_kg * support_count as f64 * self.gravity_m_s2 / model.span_m
        });
        self_weight + smeared
    }

    /// Downward force of one fixture group in newtons, including dynamic amplification.
    #[must_use]
    pub fn point_load_n(&self, fixture: &Fixture) -> f64 {
        fixture.weight_kg() * self.gravity_m_s2 * self.dynamic_factor
    }

    /// Total downward force the supports must carry, in newtons.
    ///
    /// # Examples
    /// ```
    /// use trussrig::{BeamModel, Fixture, LoadCase};
    ///
    /// let model = BeamModel::new(10.0, 5.0e6, 5.0);
    /// let loads = LoadCase::new()
    ///     .with_dynamic_factor(1.0)
    ///     .with_fixture(Fixture::new(5.0, 10.0, 2));
    /// let total = loads.total_applied_force_n(&model, 2);
    /// assert!((total - (50.0 + 20.0) * 9.81).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn total_applied_force_n(&self, model: &BeamModel, support_count: usize) -> f64 {
        let distributed = self.line_load_n_per_m(model, support_count) * model.span_m;
        let point: f64 = self
            .fixtures
            .iter()
            .map(|fixture| self.point_load_n(fixture))
            .sum();
        distributed + point
    }

    /// Check the load case against the model it is applied to.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for non-positive gravity, a negative dynamic factor or
    /// motor weight, and fixtures that are off the span or carry a negative weight.
    pub fn validate(&self, model: &BeamModel) -> Result<(), ModelError> {
        if !(self.gravity_m_s2.is_finite() && self.gravity_m_s2 > 0.0) {
            return Err(ModelError::NonPositiveGravity {
                gravity_m_s2: self.gravity_m_s2,
            });
        }
        if !(self.dynamic_factor.is_finite() && self.dynamic_factor >= 0.0) {
            return Err(ModelError::NegativeDynamicFactor {
                dynamic_factor: self.dynamic_factor,
            });
        }
        if let Some(motor_kg) = self.smeared_motor_kg {
            if !(motor_kg.is_finite() && motor_kg >= 0.0) {
                return Err(ModelError::NegativeMotorWeight { motor_kg });
            }
        }
        for (index, fixture) in self.fixtures.iter().enumerate() {
            if !model.contains(fixture.position_m) {
                return Err(ModelError::FixtureOutsideSpan {
                    index,
                    position_m: fixture.position_m,
                });
            }
            if !(fixture.unit_weight_kg.is_finite() && fixture.unit_weight_kg >= 0.0) {
                return Err(ModelError::NegativeFixtureWeight {
                    index,
                    unit_weight_kg: fixture.unit_weight_kg,
                });
            }
        }
        Ok(())
    }
}

/// Support layout and discretisation settings for a solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Supports in order; the first one is the tilt pivot.
    pub supports: Vec<Support>,
    /// Requested number of beam elements.
    pub element_count: usize,
    /// Tilt in degrees; positive raises supports lying beyond the pivot.
    pub tilt_deg: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            supports: Vec::new(),
            element_count: DEFAULT_ELEMENT_COUNT,
            tilt_deg: 0.0,
        }
    }
}

impl SolveOptions {
    /// Create options with the given supports and default settings.
    #[must_use]
    pub fn with_supports(supports: Vec<Support>) -> Self {
        Self {
            supports,
            ..Self::default()
        }
    }

    /// Add a support after the existing ones.
    #[must_use]
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self
    }

    /// Request a number of beam elements.
    #[must_use]
    pub fn with_element_count(mut self, element_count: usize) -> Self {
        self.element_count = element_count;
        self
    }

    /// Set the tilt in degrees.
    #[must_use]
    pub fn with_tilt_deg(mut self, tilt_deg: f64) -> Self {
        self.tilt_deg = tilt_deg;
        self
    }

    /// Element count actually used, never below [`MIN_ELEMENT_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use trussrig::SolveOptions;
    ///
    /// assert_eq!(SolveOptions::default().with_element_count(3).effective_element_count(), 8);
    /// assert_eq!(SolveOptions::default().effective_element_count(), 24);
    /// ```
    #[must_use]
    pub fn effective_element_count(&self) -> usize {
        self.element_count.max(MIN_ELEMENT_COUNT)
    }

    /// Tilt converted to radians.
    #[must_use]
    pub fn tilt_rad(&self) -> f64 {
        self.tilt_deg.to_radians()
    }

    /// Check supports and tilt against the model.
    ///
    /// Support count is not checked here; too few supports surface as a
    /// singular system during the solve.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when a support is off the span or the tilt is not
    /// strictly between -90° and 90°.
    pub fn validate(&self, model: &BeamModel) -> Result<(), ModelError> {
        if !(self.tilt_deg.is_finite() && self.tilt_deg.abs() < 90.0) {
            return Err(ModelError::InvalidTilt {
                tilt_deg: self.tilt_deg,
            });
        }
        for (index, support) in self.supports.iter().enumerate() {
            if !model.contains(support.position_m) {
                return Err(ModelError::SupportOutsideSpan {
                    index,
                    position_m: support.position_m,
                });
            }
        }
        Ok(())
    }
}
