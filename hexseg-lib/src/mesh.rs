use glam::Vec3;
use itertools::Itertools;

use crate::math::bounds::Bounds3;

/// How the [`Mesh::indices`] of a [`Mesh`] are meant to be interpreted.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Topology {
    /// Every three consecutive indices form a triangle.
    Triangles,
    /// Every index is drawn as a single unconnected point.
    Points,
}

impl Topology {
    /// The number of indices that make up a single primitive.
    pub const fn stride(self) -> usize {
        match self {
            Self::Triangles => 3,
            Self::Points => 1,
        }
    }
}

/// A vertex and index buffer pair, ready to be handed off to a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    topology: Topology,
}

impl Mesh {
    /// Constructs a [`Topology::Triangles`] mesh.
    ///
    /// # Panics
    ///
    /// Panics if the number of `indices` is not a multiple of three or any index is out of bounds.
    pub fn triangles(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        assert!(
            indices.len() % 3 == 0,
            "triangle indices should come in groups of three"
        );
        assert!(
            indices
                .iter()
                .all(|&index| (index as usize) < positions.len()),
            "indices should be within the vertex buffer"
        );
        Self {
            positions,
            indices,
            topology: Topology::Triangles,
        }
    }

    /// Constructs a [`Topology::Points`] mesh that draws each position once, in order.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`u32::MAX`] positions.
    pub fn points(positions: Vec<Vec3>) -> Self {
        let count = u32::try_from(positions.len()).expect("vertex count should fit into a u32");
        Self {
            positions,
            indices: (0..count).collect(),
            topology: Topology::Points,
        }
    }

    /// The vertex buffer.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// The index buffer, interpreted according to [`Self::topology`].
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The number of triangles or points, depending on [`Self::topology`].
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.stride()
    }

    /// Returns an iterator over the corners of each triangle in winding order.
    ///
    /// Empty for [`Topology::Points`] meshes.
    pub fn triangles_iter(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        let indices = match self.topology {
            Topology::Triangles => self.indices.as_slice(),
            Topology::Points => &[],
        };
        indices
            .iter()
            .map(|&index| self.positions[index as usize])
            .tuples()
            .map(|(p0, p1, p2)| [p0, p1, p2])
    }

    /// The smallest bounds containing all positions or [`None`] if the mesh is empty.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.positions.iter().copied())
    }

    /// Splits the mesh into its vertex and index buffer.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<u32>, Topology) {
        (self.positions, self.indices, self.topology)
    }
}
