//! Recovery of internal moments and deflections from the solved displacements.

use nalgebra::{DVector, Vector4};

use crate::element;
use crate::mesh::{element_dofs, rotation_dof, vertical_dof, Mesh};

/// Response quantities recovered from a displacement field.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// Vertical displacement of every node in metres, upward positive.
    pub deflections_m: Vec<f64>,
    /// Bending moment at every node in N·m, sagging positive.
    pub moments_nm: Vec<f64>,
    /// Largest absolute bending moment, including element mid-span estimates.
    pub max_moment_nm: f64,
    /// Largest absolute deflection over nodes and element mid-points.
    pub max_deflection_m: f64,
}

/// Walk every element and extract its end forces, mid-span deflection and
/// moment envelope.
///
/// `line_load_n_per_m` is the downward line load used at assembly; its
/// fixed-end contribution is removed from `k·d` before reading end moments.
#[must_use]
pub fn recover(
    mesh: &Mesh,
    ei: f64,
    line_load_n_per_m: f64,
    displacements: &DVector<f64>,
) -> Response {
    let deflections_m: Vec<f64> = (0..mesh.node_count())
        .map(|node| displacements[vertical_dof(node)])
        .collect();
    let mut moments_nm = vec![0.0; mesh.node_count()];
    let mut max_moment_nm: f64 = 0.0;
    let mut max_deflection_m = deflections_m
        .iter()
        .fold(0.0_f64, |max, w| max.max(w.abs()));

    for e in 0..mesh.element_count() {
        let le = mesh.element_length(e);
        let k = element::stiffness(ei, le);
        let f = element::udl_load(-line_load_n_per_m, le);
        let dofs = element_dofs(e);
        let d = Vector4::from_fn(|i, _| displacements[dofs[i]]);
        let end_forces = k * d - f;

        // End moments are the nodal couples acting on the element; sagging
        // positive flips the sign at the left end.
        let left = -end_forces[1];
        let right = end_forces[3];
        if e == 0 {
            moments_nm[0] = left;
        }
        moments_nm[e + 1] = right;

        let midspan = element::udl_midspan_moment(line_load_n_per_m, le);
        max_moment_nm = max_moment_nm
            .max(left.abs())
            .max(right.abs())
            .max(midspan.abs());

        let w_mid = element::hermite_midspan(
            displacements[vertical_dof(e)],
            displacements[rotation_dof(e)],
            displacements[vertical_dof(e + 1)],
            displacements[rotation_dof(e + 1)],
            le,
        );
        max_deflection_m = max_deflection_m.max(w_mid.abs());
    }

    Response {
        deflections_m,
        moments_nm,
        max_moment_nm,
        max_deflection_m,
    }
}

/// Compare a value against an optional allowable.
///
/// `None` means no allowable was supplied, never a pass or a fail.
#[must_use]
pub fn check_allowable(value: f64, allowable: Option<f64>) -> Option<bool> {
    allowable.map(|limit| value <= limit)
}
