//! Uniform one-dimensional discretisation of the truss span.

/// Degrees of freedom carried by every node: vertical displacement and rotation.
pub const DOFS_PER_NODE: usize = 2;

/// Ordered node coordinates along the span, in metres.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Node x-coordinates, strictly increasing from zero to the span.
    nodes: Vec<f64>,
}

impl Mesh {
    /// Split `span_m` into `element_count` equal elements.
    ///
    /// The last node sits exactly on `span_m`.
    ///
    /// # Examples
    /// ```
    /// use trussrig::Mesh;
    ///
    /// let mesh = Mesh::uniform(10.0, 8);
    /// assert_eq!(mesh.node_count(), 9);
    /// assert_eq!(mesh.dof_count(), 18);
    /// assert_eq!(mesh.nodes()[8], 10.0);
    /// ```
    #[must_use]
    pub fn uniform(span_m: f64, element_count: usize) -> Self {
        let nodes = (0..=element_count)
            .map(|i| {
                if i == element_count {
                    span_m
                } else {
                    span_m * i as f64 / element_count as f64
                }
            })
            .collect();
        Self { nodes }
    }

    /// Node x-coordinates.
    #[must_use]
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Total number of degrees of freedom.
    #[must_use]
    pub fn dof_count(&self) -> usize {
        self.nodes.len() * DOFS_PER_NODE
    }

    /// Length of element `element`, which joins nodes `element` and `element + 1`.
    #[must_use]
    pub fn element_length(&self, element: usize) -> f64 {
        self.nodes[element + 1] - self.nodes[element]
    }

    /// Index of the node nearest to `x`; ties go to the lower index.
    ///
    /// # Examples
    /// ```
    /// use trussrig::Mesh;
    ///
    /// let mesh = Mesh::uniform(8.0, 8);
    /// assert_eq!(mesh.nearest_node(2.4), 2);
    /// assert_eq!(mesh.nearest_node(2.5), 2);
    /// assert_eq!(mesh.nearest_node(2.6), 3);
    /// ```
    #[must_use]
    pub fn nearest_node(&self, x: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, node) in self.nodes.iter().enumerate() {
            let distance = (node - x).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

/// Index of the vertical displacement DOF of `node`.
#[must_use]
pub const fn vertical_dof(node: usize) -> usize {
    node * DOFS_PER_NODE
}

/// Index of the rotation DOF of `node`.
#[must_use]
pub const fn rotation_dof(node: usize) -> usize {
    node * DOFS_PER_NODE + 1
}

/// Global DOF indices of the element starting at `first_node`.
#[must_use]
pub const fn element_dofs(first_node: usize) -> [usize; 4] {
    [
        vertical_dof(first_node),
        rotation_dof(first_node),
        vertical_dof(first_node + 1),
        rotation_dof(first_node + 1),
    ]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn uniform_mesh_is_evenly_spaced() {
        let mesh = Mesh::uniform(10.0, 24);
        assert_eq!(mesh.node_count(), 25);
        assert_eq!(mesh.element_count(), 24);
        assert_relative_eq!(mesh.nodes()[0], 0.0);
        assert_relative_eq!(mesh.nodes()[24], 10.0);
        for element in 0..mesh.element_count() {
            assert_relative_eq!(mesh.element_length(element), 10.0 / 24.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn nearest_node_clamps_to_the_ends() {
        let mesh = Mesh::uniform(4.0, 8);
        assert_eq!(mesh.nearest_node(0.0), 0);
        assert_eq!(mesh.nearest_node(4.0), 8);
        assert_eq!(mesh.nearest_node(3.9), 8);
    }

    #[test]
    fn element_dofs_follow_node_pairs() {
        assert_eq!(element_dofs(0), [0, 1, 2, 3]);
        assert_eq!(element_dofs(5), [10, 11, 12, 13]);
        assert_eq!(vertical_dof(3), 6);
        assert_eq!(rotation_dof(3), 7);
    }
}
