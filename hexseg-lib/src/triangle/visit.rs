use std::ops::ControlFlow;

use super::Triangle;

/// Contains callbacks for [`Triangle::visit`].
///
/// - [`TriangleVisitor::leaf`] is called for triangles without children.
/// - [`TriangleVisitor::parent`] is called for subdivided triangles before their children.
///
/// Returning [`ControlFlow::Break`] from either callback stops the traversal immediately.
pub trait TriangleVisitor {
    /// The type within the [`ControlFlow::Break`] used to break visitation.
    type Break;

    /// Called for triangles that have not been subdivided.
    fn leaf(&mut self, leaf: &Triangle) -> ControlFlow<Self::Break>;

    /// Called for subdivided triangles.
    ///
    /// Return [`VisitTriangle::Enter`] to visit its children, resulting in further callbacks.
    fn parent(&mut self, parent: &Triangle) -> ControlFlow<Self::Break, VisitTriangle>;
}

/// Whether the children of a subdivided [`Triangle`] should be visited.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum VisitTriangle {
    #[default]
    Enter,
    Skip,
}
