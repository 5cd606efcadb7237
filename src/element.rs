//! Two-node Euler–Bernoulli beam element.
//!
//! Local DOF ordering is `[w1, θ1, w2, θ2]`, upward displacement and
//! counter-clockwise rotation positive.

use nalgebra::{Matrix4, Vector4};

/// Local stiffness matrix of an element of length `le` with rigidity `ei`.
///
/// # Examples
/// ```
/// use trussrig::element::stiffness;
///
/// let k = stiffness(2.0e6, 0.5);
/// assert_eq!(k, k.transpose());
/// assert!((k[(0, 0)] - 12.0 * 2.0e6 / 0.125).abs() < 1.0e-6);
/// ```
#[must_use]
pub fn stiffness(ei: f64, le: f64) -> Matrix4<f64> {
    let a = 12.0 * ei / le.powi(3);
    let b = 6.0 * ei / le.powi(2);
    let c = 4.0 * ei / le;
    let d = 2.0 * ei / le;
    Matrix4::new(
        a, b, -a, b, //
        b, c, -b, d, //
        -a, -b, a, -b, //
        b, d, -b, c,
    )
}

/// Equivalent nodal loads for a uniform line load `q` over length `le`.
///
/// `q` is signed in N/m: a downward load is negative.
#[must_use]
pub fn udl_load(q: f64, le: f64) -> Vector4<f64> {
    let half = q * le / 2.0;
    let moment = q * le * le / 12.0;
    Vector4::new(half, moment, half, -moment)
}

/// Mid-span moment of a simply supported length `le` under `q`.
#[must_use]
pub fn udl_midspan_moment(q: f64, le: f64) -> f64 {
    q * le * le / 8.0
}

/// Cubic Hermite interpolation of the transverse displacement at local
/// coordinate `xi` in `[0, 1]`.
#[must_use]
pub fn hermite(xi: f64, w1: f64, theta1: f64, w2: f64, theta2: f64, le: f64) -> f64 {
    let xi2 = xi * xi;
    let xi3 = xi2 * xi;
    let n1 = 1.0 - 3.0 * xi2 + 2.0 * xi3;
    let n2 = xi - 2.0 * xi2 + xi3;
    let n3 = 3.0 * xi2 - 2.0 * xi3;
    let n4 = xi3 - xi2;
    n1 * w1 + n2 * le * theta1 + n3 * w2 + n4 * le * theta2
}

/// Hermite interpolation at the element mid-point.
#[must_use]
pub fn hermite_midspan(w1: f64, theta1: f64, w2: f64, theta2: f64, le: f64) -> f64 {
    hermite(0.5, w1, theta1, w2, theta2, le)
}
