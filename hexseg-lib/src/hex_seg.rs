pub mod config;

use array_init::array_init;
use config::HexSegConfig;
use glam::Vec3;
use itertools::Itertools;
use tracing::debug;

use crate::{
    error::HexSegError,
    mesh::Mesh,
    triangle::Triangle,
    weld::{VertexWelder, Welding},
};

/// A flat, regular hexagon made up of six equilateral triangles that share its center.
///
/// The hexagon lies in the XZ-plane, centered at the origin, with two of its corners on the X-axis:
///
/// ```text
///        p0 ______ p1
///          /\    /\
///         /  \0 /  \        x →
///     p5 /_5__\/__1_\ p2    z ↑
///        \ 4  /\  2 /
///         \  / 3\  /
///          \/____\/
///        p4        p3
/// ```
///
/// Each of the six root triangles `(center, p[i], p[i + 1])` is subdivided at construction. All
/// buffers are built from scratch whenever they are requested; nothing is cached.
#[derive(Clone, Debug, PartialEq)]
pub struct HexSeg {
    radius: f32,
    subdivisions: u32,
    welding: Welding,
    /// The six root triangles, starting with the one between `p0` and `p1`.
    segments: [Triangle; 6],
}

impl HexSeg {
    /// The highest number of subdivisions accepted by [`Self::try_new`].
    ///
    /// Results in `6 * 4^10`, so roughly six million triangles.
    pub const MAX_SUBDIVISIONS: u32 = 10;

    /// Constructs a [`HexSeg`] with the given `radius`, splitting each root triangle
    /// `subdivisions` times.
    ///
    /// Parameters are not validated, so e.g. a `NaN` radius silently results in `NaN` positions
    /// and a huge number of subdivisions will exhaust memory. Use [`Self::try_new`] to guard
    /// against that.
    pub fn new(radius: f32, subdivisions: u32) -> Self {
        Self::from_config(HexSegConfig::new(radius, subdivisions))
    }

    /// Like [`Self::new`], but fails for parameters that don't result in sensible geometry.
    ///
    /// # Errors
    ///
    /// See [`HexSegConfig::validate`].
    pub fn try_new(radius: f32, subdivisions: u32) -> Result<Self, HexSegError> {
        Self::try_from_config(HexSegConfig::new(radius, subdivisions))
    }

    /// Constructs a [`HexSeg`] from the given `config` without validating it.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(radius = config.radius, subdivisions = config.subdivisions)
    )]
    pub fn from_config(config: HexSegConfig) -> Self {
        let corners = corners(config.radius);
        let segments = array_init(|index| {
            let mut root = Triangle::new(Vec3::ZERO, corners[index], corners[(index + 1) % 6]);
            root.subdivide(config.subdivisions);
            root
        });

        let hex_seg = Self {
            radius: config.radius,
            subdivisions: config.subdivisions,
            welding: config.welding,
            segments,
        };
        debug!(leaves = hex_seg.leaf_count(), "subdivided hexagon");
        hex_seg
    }

    /// Like [`Self::from_config`], but validates the `config` first.
    ///
    /// # Errors
    ///
    /// See [`HexSegConfig::validate`].
    pub fn try_from_config(config: HexSegConfig) -> Result<Self, HexSegError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// The distance from the center to each of the six outer corners.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// How often each root triangle was split into four.
    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    /// How positions are merged when building vertex buffers.
    pub fn welding(&self) -> Welding {
        self.welding
    }

    /// The six root triangles, going around the center starting with the one between `p0` and
    /// `p1`.
    pub fn segments(&self) -> &[Triangle; 6] {
        &self.segments
    }

    /// The total number of triangles that end up in [`Self::build_mesh`]; `6 * 4^subdivisions`.
    pub fn leaf_count(&self) -> usize {
        self.segments.iter().map(Triangle::leaf_count).sum()
    }

    /// Returns all distinct corner positions of all triangles, including the ones that were
    /// subdivided further.
    ///
    /// Positions are ordered by first appearance when walking each root triangle depth-first.
    pub fn points(&self) -> Vec<Vec3> {
        let mut points = VertexWelder::new(self.welding);
        for segment in &self.segments {
            segment.append_points(&mut points);
        }
        points.into_positions()
    }

    /// Builds a triangle mesh out of all leaf triangles.
    ///
    /// Positions are shared between triangles and indices keep the winding of each leaf.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build_mesh(&self) -> Mesh {
        let mut points = VertexWelder::new(self.welding);
        let mut indices = Vec::with_capacity(self.leaf_count() * 3);
        for segment in &self.segments {
            segment.append_triangles_and_points(&mut indices, &mut points);
        }

        debug!(
            vertices = points.len(),
            triangles = indices.len() / 3,
            "built triangle mesh"
        );
        Mesh::triangles(points.into_positions(), indices)
    }

    /// Builds a point mesh out of [`Self::points`], ordered from farthest to closest to the center.
    ///
    /// When the geometry is kept centered around a viewpoint, drawing the points in this order
    /// roughly renders them back to front, which is what blending transparent points requires.
    ///
    /// Points with the same distance keep the order of [`Self::points`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build_points_mesh(&self) -> Mesh {
        let points = self
            .points()
            .into_iter()
            .sorted_by(|lhs, rhs| rhs.length().total_cmp(&lhs.length()))
            .collect_vec();

        debug!(points = points.len(), "built point mesh");
        Mesh::points(points)
    }
}

impl Default for HexSeg {
    fn default() -> Self {
        Self::from_config(HexSegConfig::default())
    }
}

/// The six corners of a hexagon with the given `radius`, starting at the top left.
///
/// Uses the ratios of a 30-60-90 triangle instead of trigonometric functions.
fn corners(radius: f32) -> [Vec3; 6] {
    let half = radius / 2.0;
    let opposite = 0.75f32.sqrt() * radius;
    [
        Vec3::new(-half, 0.0, opposite),
        Vec3::new(half, 0.0, opposite),
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(half, 0.0, -opposite),
        Vec3::new(-half, 0.0, -opposite),
        Vec3::new(-radius, 0.0, 0.0),
    ]
}
