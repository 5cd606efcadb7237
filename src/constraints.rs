//! Split of the global degrees of freedom into free and prescribed sets.

use nalgebra::{DMatrix, DVector};

use crate::errors::SingularError;
use crate::mesh::{vertical_dof, Mesh};
use crate::model::Support;

/// Free and prescribed DOF index sets with the prescribed displacements.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    /// Unconstrained DOFs in ascending order.
    pub free: Vec<usize>,
    /// Prescribed vertical DOFs, one per distinct support node, ascending.
    pub constrained: Vec<usize>,
    /// Target displacement of each entry of `constrained`, in metres.
    pub prescribed: DVector<f64>,
    /// Mesh node of every support, in support order.
    pub support_nodes: Vec<usize>,
}

impl Partition {
    /// Snap supports to nodes and derive the tilt displacements.
    ///
    /// Supports lie on a straight line through the first support inclined at
    /// `tilt_rad`: the node at `x` is displaced by `tan(tilt) · (x − x_first)`.
    ///
    /// # Errors
    ///
    /// Returns [`SingularError::UnderConstrained`] when fewer than two distinct
    /// nodes are restrained.
    pub fn new(mesh: &Mesh, supports: &[Support], tilt_rad: f64) -> Result<Self, SingularError> {
        let support_nodes: Vec<usize> = supports
            .iter()
            .map(|support| mesh.nearest_node(support.position_m))
            .collect();

        let mut constrained_nodes = support_nodes.clone();
        constrained_nodes.sort_unstable();
        constrained_nodes.dedup();
        if constrained_nodes.len() < 2 {
            return Err(SingularError::UnderConstrained {
                constrained_nodes: constrained_nodes.len(),
            });
        }

        let pivot = supports.first().map_or(0.0, |support| support.position_m);
        let slope = tilt_rad.tan();
        let constrained: Vec<usize> = constrained_nodes.iter().map(|&n| vertical_dof(n)).collect();
        let prescribed = DVector::from_iterator(
            constrained_nodes.len(),
            constrained_nodes
                .iter()
                .map(|&node| slope * (mesh.nodes()[node] - pivot)),
        );
        let free = (0..mesh.dof_count())
            .filter(|dof| constrained.binary_search(dof).is_err())
            .collect();

        Ok(Self {
            free,
            constrained,
            prescribed,
            support_nodes,
        })
    }

    /// Position of `dof` within `constrained`, if it is prescribed.
    #[must_use]
    pub fn constrained_index(&self, dof: usize) -> Option<usize> {
        self.constrained.binary_search(&dof).ok()
    }

    /// Number of supports that snapped onto the same node as support `support`.
    #[must_use]
    pub fn supports_sharing_node(&self, support: usize) -> usize {
        let node = self.support_nodes[support];
        self.support_nodes.iter().filter(|&&n| n == node).count()
    }

    /// `K[rows, cols]` as a dense block.
    #[must_use]
    pub fn block(matrix: &DMatrix<f64>, rows: &[usize], cols: &[usize]) -> DMatrix<f64> {
        DMatrix::from_fn(rows.len(), cols.len(), |i, j| matrix[(rows[i], cols[j])])
    }

    /// `F[rows]` as a dense vector.
    #[must_use]
    pub fn slice(vector: &DVector<f64>, rows: &[usize]) -> DVector<f64> {
        DVector::from_fn(rows.len(), |i, _| vector[rows[i]])
    }

    /// Full displacement vector from the free solution and the prescribed values.
    #[must_use]
    pub fn scatter(&self, free_displacements: &DVector<f64>) -> DVector<f64> {
        let mut full = DVector::<f64>::zeros(self.free.len() + self.constrained.len());
        for (value, &dof) in free_displacements.iter().zip(&self.free) {
            full[dof] = *value;
        }
        for (value, &dof) in self.prescribed.iter().zip(&self.constrained) {
            full[dof] = *value;
        }
        full
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn end_supports_prescribe_vertical_dofs_only() {
        let mesh = Mesh::uniform(10.0, 8);
        let supports = [Support::at(0.0), Support::at(10.0)];
        let partition = Partition::new(&mesh, &supports, 0.0).expect("two supports");

        assert_eq!(partition.constrained, vec![0, 16]);
        assert_eq!(partition.free.len(), 16);
        assert!(partition.free.contains(&1));
        assert!(partition.free.contains(&17));
        assert_eq!(partition.support_nodes, vec![0, 8]);
        assert_relative_eq!(partition.prescribed.norm(), 0.0);
    }

    #[test]
    fn tilt_pivots_about_the_first_support() {
        let mesh = Mesh::uniform(8.0, 8);
        let supports = [Support::at(6.0), Support::at(2.0)];
        let tilt = 5.0_f64.to_radians();
        let partition = Partition::new(&mesh, &supports, tilt).expect("two supports");

        // Constrained DOFs are ordered by node, so node 2 comes first.
        assert_eq!(partition.constrained, vec![4, 12]);
        assert_relative_eq!(partition.prescribed[0], tilt.tan() * -4.0, epsilon = 1.0e-12);
        assert_relative_eq!(partition.prescribed[1], 0.0);
    }

    #[test]
    fn coincident_supports_leave_a_mechanism() {
        let mesh = Mesh::uniform(10.0, 8);
        let error = Partition::new(&mesh, &[Support::at(5.0), Support::at(5.0)], 0.0)
            .expect_err("coincident supports rejected");
        assert_eq!(error, SingularError::UnderConstrained { constrained_nodes: 1 });

        let error = Partition::new(&mesh, &[], 0.0).expect_err("no supports rejected");
        assert_eq!(error, SingularError::UnderConstrained { constrained_nodes: 0 });
    }

    #[test]
    fn shared_nodes_are_counted_per_support() {
        let mesh = Mesh::uniform(8.0, 8);
        let supports = [Support::at(0.0), Support::at(4.1), Support::at(3.9)];
        let partition = Partition::new(&mesh, &supports, 0.0).expect("two distinct nodes");
        assert_eq!(partition.constrained.len(), 2);
        assert_eq!(partition.supports_sharing_node(0), 1);
        assert_eq!(partition.supports_sharing_node(1), 2);
        assert_eq!(partition.constrained_index(vertical_dof(4)), Some(1));
        assert_eq!(partition.constrained_index(1), None);
    }

    #[test]
    fn scatter_restores_global_ordering() {
        let mesh = Mesh::uniform(8.0, 8);
        let supports = [Support::at(0.0), Support::at(8.0)];
        let partition = Partition::new(&mesh, &supports, 0.1).expect("two supports");
        let free = DVector::from_element(partition.free.len(), 1.0);
        let full = partition.scatter(&free);
        assert_eq!(full.len(), mesh.dof_count());
        assert_relative_eq!(full[0], 0.0);
        assert_relative_eq!(full[1], 1.0);
        assert_relative_eq!(full[16], 0.1_f64.tan() * 8.0, epsilon = 1.0e-12);
    }
}
