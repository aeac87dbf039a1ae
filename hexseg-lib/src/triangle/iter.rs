use std::iter::FusedIterator;

use super::Triangle;

/// Iterates over a [`Triangle`] and all of its descendants.
///
/// Triangles are returned depth-first, with each parent being returned before its children, which
/// are returned in [`Child`](super::Child) order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    /// Triangles that still have to be returned, with the next one on top.
    stack: Vec<&'a Triangle>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Triangle) -> Self {
        Self { stack: vec![root] }
    }

    /// Only returns triangles without children.
    pub fn leaves(self) -> impl FusedIterator<Item = &'a Triangle> {
        self.filter(|triangle| triangle.is_leaf())
    }

    /// Only returns triangles that have been subdivided.
    pub fn parents(self) -> impl FusedIterator<Item = &'a Triangle> {
        self.filter(|triangle| !triangle.is_leaf())
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Triangle;

    fn next(&mut self) -> Option<Self::Item> {
        let triangle = self.stack.pop()?;
        if let Some(children) = triangle.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(triangle)
    }
}

impl FusedIterator for Iter<'_> {}
