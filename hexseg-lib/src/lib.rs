//! Generates a flat hexagon out of six recursively subdivided triangles and turns it into vertex
//! and index buffers, either as a triangle mesh or as a point cloud sorted farthest-first.
//!
//! ```
//! # use hexseg_lib::{hex_seg::HexSeg, mesh::Topology};
//! let hex_seg = HexSeg::new(1.0, 2);
//!
//! let mesh = hex_seg.build_mesh();
//! assert_eq!(mesh.topology(), Topology::Triangles);
//! assert_eq!(mesh.primitive_count(), 6 * 4 * 4);
//!
//! let points = hex_seg.build_points_mesh();
//! assert_eq!(points.topology(), Topology::Points);
//! assert_eq!(points.positions().last(), Some(&glam::Vec3::ZERO));
//! ```

pub mod error;
pub mod hex_seg;
pub mod math;
pub mod mesh;
pub mod triangle;
pub mod weld;
