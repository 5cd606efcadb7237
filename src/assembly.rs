//! Assembly of the global stiffness matrix and load vector.

use nalgebra::{DMatrix, DVector, Matrix4, Vector4};

use crate::element;
use crate::mesh::{element_dofs, vertical_dof, Mesh};
use crate::model::LoadCase;

/// Global stiffness matrix and load vector for one solve.
///
/// Storage is dense; the matrix is banded but the default mesh keeps it small.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalSystem {
    /// Symmetric `ndof × ndof` stiffness matrix.
    pub stiffness: DMatrix<f64>,
    /// Nodal load vector of length `ndof`.
    pub load: DVector<f64>,
}

impl GlobalSystem {
    /// Create an empty system with `dof_count` degrees of freedom.
    #[must_use]
    pub fn new(dof_count: usize) -> Self {
        Self {
            stiffness: DMatrix::zeros(dof_count, dof_count),
            load: DVector::zeros(dof_count),
        }
    }

    /// Number of degrees of freedom.
    #[must_use]
    pub fn dof_count(&self) -> usize {
        self.load.len()
    }

    /// Scatter-add an element block between `first_node` and the next node.
    pub fn add_element(&mut self, first_node: usize, k: &Matrix4<f64>, f: &Vector4<f64>) {
        let dofs = element_dofs(first_node);
        for (row_local, &global_row) in dofs.iter().enumerate() {
            self.load[global_row] += f[row_local];
            for (col_local, &global_col) in dofs.iter().enumerate() {
                self.stiffness[(global_row, global_col)] += k[(row_local, col_local)];
            }
        }
    }

    /// Apply a downward force of `force_n` to the vertical DOF of `node`.
    pub fn add_point_load(&mut self, node: usize, force_n: f64) {
        self.load[vertical_dof(node)] -= force_n;
    }
}

/// Assemble the beam under a downward line load `line_load_n_per_m` and the
/// fixtures of `load_case`.
///
/// Each fixture is snapped to its nearest node.
#[must_use]
pub fn assemble(
    mesh: &Mesh,
    ei: f64,
    line_load_n_per_m: f64,
    load_case: &LoadCase,
) -> GlobalSystem {
    let mut system = GlobalSystem::new(mesh.dof_count());
    for e in 0..mesh.element_count() {
        let le = mesh.element_length(e);
        let k = element::stiffness(ei, le);
        let f = element::udl_load(-line_load_n_per_m, le);
        system.add_element(e, &k, &f);
    }
    for fixture in &load_case.fixtures {
        let node = mesh.nearest_node(fixture.position_m);
        system.add_point_load(node, load_case.point_load_n(fixture));
    }
    system
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::Fixture;

    #[test]
    fn assembled_stiffness_is_symmetric() {
        let mesh = Mesh::uniform(6.0, 8);
        let system = assemble(&mesh, 3.0e6, 50.0, &LoadCase::new());
        assert_eq!(system.dof_count(), 18);
        assert_eq!(system.stiffness, system.stiffness.transpose());
    }

    #[test]
    fn vertical_loads_sum_to_applied_weight() {
        let mesh = Mesh::uniform(6.0, 8);
        let loads = LoadCase::new().with_fixture(Fixture::new(2.9, 10.0, 3));
        let system = assemble(&mesh, 3.0e6, 50.0, &loads);

        let vertical: f64 = (0..mesh.node_count())
            .map(|node| system.load[vertical_dof(node)])
            .sum();
        let expected = -(50.0 * 6.0 + loads.point_load_n(&loads.fixtures[0]));
        assert_relative_eq!(vertical, expected, epsilon = 1.0e-9);
    }

    #[test]
    fn point_loads_snap_to_nearest_node() {
        let mesh = Mesh::uniform(8.0, 8);
        let loads = LoadCase::new()
            .with_dynamic_factor(1.0)
            .with_fixture(Fixture::new(3.4, 1.0, 1));
        let system = assemble(&mesh, 1.0e6, 0.0, &loads);
        assert_relative_eq!(system.load[vertical_dof(3)], -9.81);
        assert_relative_eq!(system.load[vertical_dof(4)], 0.0);
    }
}
