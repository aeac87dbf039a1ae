pub mod iter;
pub mod visit;

use std::{convert::Infallible, ops::ControlFlow};

use glam::Vec3;
use iter::Iter;
use visit::{TriangleVisitor, VisitTriangle};

use crate::weld::VertexWelder;

/// A triangular face that can be recursively split into four smaller triangles.
///
/// A [`Triangle`] is either a leaf or holds exactly four children, which it owns exclusively. The
/// children are created by the "triforce" split, using the midpoints of each edge:
///
/// ```text
///  p1     m1     p2
///   *-----*-----*
///    \ 1 / \ 2 /
///     \ / 3 \ /
///   m0 *-----* m2      0 = (p0, m0, m2)
///       \ 0 /         1 = (p1, m1, m0)
///        \ /          2 = (p2, m2, m1)
///         *           3 = (m0, m1, m2)
///         p0
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    /// The three corners in winding order.
    points: [Vec3; 3],
    /// Either [`None`] for leaves or exactly four children in [`Child`] order.
    children: Option<Box<[Triangle; 4]>>,
}

impl Triangle {
    /// Constructs a new leaf [`Triangle`] from its three corners in winding order.
    pub const fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            points: [p0, p1, p2],
            children: None,
        }
    }

    /// The three corners in winding order.
    pub const fn points(&self) -> [Vec3; 3] {
        self.points
    }

    /// The midpoints of the edges `p0-p1`, `p1-p2` and `p2-p0`.
    ///
    /// Only available once the triangle has been subdivided, since they are the corners of the
    /// [`Child::Center`] triangle.
    pub fn midpoints(&self) -> Option<[Vec3; 3]> {
        self.children
            .as_deref()
            .map(|children| children[Child::Center.index()].points)
    }

    /// The four children in [`Child`] order or [`None`] if this is a leaf.
    pub fn children(&self) -> Option<&[Triangle; 4]> {
        self.children.as_deref()
    }

    /// Returns a single child or [`None`] if this is a leaf.
    pub fn child(&self, child: Child) -> Option<&Triangle> {
        self.children().map(|children| &children[child.index()])
    }

    /// Whether this triangle has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The number of levels below this triangle; `0` for leaves.
    ///
    /// For a triangle subdivided with [`Self::subdivide`] this is the `depth` that was passed in.
    pub fn depth(&self) -> u32 {
        self.children().map_or(0, |children| {
            1 + children.iter().map(Self::depth).fold(0, u32::max)
        })
    }

    /// The total number of leaves, which is `4^depth` for a fully subdivided triangle.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Splits this triangle into four children and keeps splitting them until `depth` levels of
    /// children exist.
    ///
    /// A `depth` of `0` leaves the triangle untouched. Any existing children are replaced.
    ///
    /// No upper limit is enforced; the number of leaves grows with `4^depth`.
    pub fn subdivide(&mut self, depth: u32) {
        if depth == 0 {
            return;
        }

        let [p0, p1, p2] = self.points;
        let m0 = midpoint(p0, p1);
        let m1 = midpoint(p1, p2);
        let m2 = midpoint(p2, p0);

        let mut children = [
            Self::new(p0, m0, m2),
            Self::new(p1, m1, m0),
            Self::new(p2, m2, m1),
            Self::new(m0, m1, m2),
        ];

        if depth > 1 {
            for child in &mut children {
                child.subdivide(depth - 1);
            }
        }

        self.children = Some(Box::new(children));
    }

    /// Returns an iterator over this triangle and all of its descendants.
    ///
    /// Triangles are returned depth-first, each parent before its children.
    pub fn iter(&self) -> Iter {
        Iter::new(self)
    }

    /// Returns an iterator over all leaves in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &Triangle> {
        self.iter().leaves()
    }

    /// Recursively visits this triangle and its descendants using the given `visitor`.
    ///
    /// Children are visited in [`Child`] order, depth-first.
    pub fn visit<V: TriangleVisitor>(&self, visitor: &mut V) -> ControlFlow<V::Break> {
        let Some(children) = self.children() else {
            return visitor.leaf(self);
        };

        match visitor.parent(self)? {
            VisitTriangle::Enter => {
                for child in children {
                    child.visit(visitor)?;
                }
                ControlFlow::Continue(())
            }
            VisitTriangle::Skip => ControlFlow::Continue(()),
        }
    }

    /// Adds the corners of this triangle and all of its descendants to `points`.
    ///
    /// Each triangle contributes its own corners before those of its children. Corners that are
    /// already part of `points` are skipped.
    pub fn append_points(&self, points: &mut VertexWelder) {
        for triangle in self.iter() {
            points.extend(triangle.points);
        }
    }

    /// Adds all leaves as indexed triangles.
    ///
    /// Parents only recurse into their children, so no overlapping faces are produced. Each leaf
    /// adds its corners to `points` (unless they are already present) and pushes their three
    /// indices onto `indices` in winding order.
    pub fn append_triangles_and_points(&self, indices: &mut Vec<u32>, points: &mut VertexWelder) {
        match self.visit(&mut AppendTriangles { indices, points }) {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }
}

/// Identifies one of the four children of a subdivided [`Triangle`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Child {
    /// The child at the first corner: `(p0, m0, m2)`.
    Corner0,
    /// The child at the second corner: `(p1, m1, m0)`.
    Corner1,
    /// The child at the third corner: `(p2, m2, m1)`.
    Corner2,
    /// The inner child made up of the three midpoints: `(m0, m1, m2)`.
    Center,
}

impl Child {
    /// All children in the order they are stored and traversed.
    pub const ALL: [Self; 4] = [Self::Corner0, Self::Corner1, Self::Corner2, Self::Center];

    /// The index of this child within [`Triangle::children`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The midpoint of the edge from `a` to `b`.
fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    a + (b - a) / 2.0
}

/// Collects leaves into an index buffer.
struct AppendTriangles<'a> {
    indices: &'a mut Vec<u32>,
    points: &'a mut VertexWelder,
}

impl TriangleVisitor for AppendTriangles<'_> {
    type Break = Infallible;

    fn leaf(&mut self, leaf: &Triangle) -> ControlFlow<Self::Break> {
        let indices = leaf.points.map(|point| self.points.insert(point));
        self.indices.extend(indices);
        ControlFlow::Continue(())
    }

    fn parent(&mut self, _parent: &Triangle) -> ControlFlow<Self::Break, VisitTriangle> {
        ControlFlow::Continue(VisitTriangle::Enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(4.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(0.0, 0.0, 4.0);

    #[test]
    fn new_triangle_is_leaf() {
        let triangle = Triangle::new(A, B, C);
        assert!(triangle.is_leaf());
        assert_eq!(triangle.points(), [A, B, C]);
        assert_eq!(triangle.midpoints(), None);
        assert_eq!(triangle.children(), None);
        assert_eq!(triangle.depth(), 0);
        assert_eq!(triangle.leaf_count(), 1);
    }

    #[test]
    fn subdivide_zero_is_noop() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(0);
        assert_eq!(triangle, Triangle::new(A, B, C));
    }

    #[test]
    fn subdivide_once() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(1);

        let ab = Vec3::new(2.0, 0.0, 0.0);
        let bc = Vec3::new(2.0, 0.0, 2.0);
        let ca = Vec3::new(0.0, 0.0, 2.0);

        assert_eq!(triangle.midpoints(), Some([ab, bc, ca]));

        let corners = |child| triangle.child(child).map(Triangle::points);
        assert_eq!(corners(Child::Corner0), Some([A, ab, ca]));
        assert_eq!(corners(Child::Corner1), Some([B, bc, ab]));
        assert_eq!(corners(Child::Corner2), Some([C, ca, bc]));
        assert_eq!(corners(Child::Center), Some([ab, bc, ca]));

        for child in Child::ALL {
            assert!(triangle.child(child).is_some_and(Triangle::is_leaf));
        }
    }

    #[test]
    fn leaf_count_grows_with_depth() {
        for depth in 0..=5 {
            let mut triangle = Triangle::new(A, B, C);
            triangle.subdivide(depth);
            assert_eq!(triangle.depth(), depth);
            assert_eq!(triangle.leaf_count(), 4usize.pow(depth));
            assert!(triangle.leaves().all(Triangle::is_leaf));
        }
    }

    #[test]
    fn subdivide_replaces_children() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(3);
        triangle.subdivide(1);
        assert_eq!(triangle.depth(), 1);
        assert_eq!(triangle.leaf_count(), 4);
    }

    #[test]
    fn append_points_deduplicates() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(1);

        let mut points = VertexWelder::default();
        triangle.append_points(&mut points);

        // own corners first, then the midpoints in order of first appearance
        assert_eq!(
            points.positions(),
            [
                A,
                B,
                C,
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(2.0, 0.0, 2.0),
            ]
        );
    }

    #[test]
    fn append_triangles_only_emits_leaves() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(1);

        let mut indices = Vec::new();
        let mut points = VertexWelder::default();
        triangle.append_triangles_and_points(&mut indices, &mut points);

        assert_eq!(points.len(), 6);
        assert_eq!(indices, [0, 1, 2, 3, 4, 1, 5, 2, 4, 1, 4, 2]);
        for (index, leaf) in triangle.leaves().enumerate() {
            let corners = indices[index * 3..index * 3 + 3]
                .iter()
                .map(|&index| points.positions()[index as usize])
                .collect::<Vec<_>>();
            assert_eq!(corners, leaf.points());
        }
    }

    #[test]
    fn append_triangles_for_leaf() {
        let triangle = Triangle::new(A, B, C);

        let mut indices = Vec::new();
        let mut points = VertexWelder::default();
        triangle.append_triangles_and_points(&mut indices, &mut points);

        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(points.positions(), [A, B, C]);
    }

    #[test]
    fn subdivision_preserves_winding() {
        let mut triangle = Triangle::new(A, B, C);
        triangle.subdivide(3);

        let [p0, p1, p2] = triangle.points();
        let normal = (p1 - p0).cross(p2 - p0);
        for leaf in triangle.leaves() {
            let [p0, p1, p2] = leaf.points();
            assert!((p1 - p0).cross(p2 - p0).dot(normal) > 0.0);
        }
    }
}
