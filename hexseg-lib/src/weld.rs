use std::collections::HashMap;

use glam::Vec3;

/// Decides when two positions are merged into a single vertex by a [`VertexWelder`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Welding {
    /// Positions are only merged if all of their coordinates compare equal.
    ///
    /// This is regular float equality, except that all `NaN`s with the same bit pattern are
    /// considered equal, so that even degenerate positions are not duplicated over and over.
    #[default]
    Exact,
    /// Positions are merged if they round to the same point on a grid with the given `step` size.
    ///
    /// Useful if positions that are supposed to coincide were calculated in different ways and
    /// might differ due to rounding. Positions with non-finite coordinates are merged exactly.
    Quantized { step: f32 },
}

/// Accumulates unique vertex positions while keeping them in insertion order.
///
/// Looking up whether a position is already present is a single hash map lookup, so building large
/// meshes stays linear in the number of inserted positions.
///
/// ```
/// # use glam::Vec3;
/// # use hexseg_lib::weld::VertexWelder;
/// let mut welder = VertexWelder::default();
/// assert_eq!(welder.insert(Vec3::X), 0);
/// assert_eq!(welder.insert(Vec3::Y), 1);
/// assert_eq!(welder.insert(Vec3::X), 0);
/// assert_eq!(welder.positions(), [Vec3::X, Vec3::Y]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VertexWelder {
    welding: Welding,
    /// All unique positions in the order they were first inserted.
    positions: Vec<Vec3>,
    /// Maps the key of each position to its index in [`Self::positions`].
    indices: HashMap<WeldKey, u32>,
}

impl VertexWelder {
    /// Constructs an empty [`VertexWelder`] using the given `welding`.
    pub fn new(welding: Welding) -> Self {
        Self {
            welding,
            positions: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// How positions are compared.
    pub fn welding(&self) -> Welding {
        self.welding
    }

    /// Returns the index of the given `position`, adding it first if it is not yet present.
    ///
    /// # Panics
    ///
    /// Panics if the number of unique positions exceeds [`u32::MAX`].
    pub fn insert(&mut self, position: Vec3) -> u32 {
        let key = self.key(position);
        *self.indices.entry(key).or_insert_with(|| {
            let index =
                u32::try_from(self.positions.len()).expect("vertex count should fit into a u32");
            self.positions.push(position);
            index
        })
    }

    /// Returns the index of the given `position` if it is present.
    pub fn get(&self, position: Vec3) -> Option<u32> {
        self.indices.get(&self.key(position)).copied()
    }

    /// Whether the given `position` is present.
    pub fn contains(&self, position: Vec3) -> bool {
        self.get(position).is_some()
    }

    /// The number of unique positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All unique positions in the order they were first inserted.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns all unique positions in the order they were first inserted.
    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }

    fn key(&self, position: Vec3) -> WeldKey {
        match self.welding {
            Welding::Quantized { step } if position.is_finite() => WeldKey::Quantized(
                (position / step)
                    .round()
                    .to_array()
                    .map(|coordinate| coordinate as i64),
            ),
            _ => WeldKey::Exact(position.to_array().map(exact_bits)),
        }
    }
}

impl Extend<Vec3> for VertexWelder {
    fn extend<T: IntoIterator<Item = Vec3>>(&mut self, iter: T) {
        for position in iter {
            self.insert(position);
        }
    }
}

/// The hashable identity of a position.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
enum WeldKey {
    Exact([u32; 3]),
    Quantized([i64; 3]),
}

/// The bits of `value` with `-0.0` folded into `0.0`, since the two compare equal.
fn exact_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keeps_insertion_order() {
        let mut welder = VertexWelder::new(Welding::Exact);
        welder.extend([Vec3::Z, Vec3::X, Vec3::Z, Vec3::Y, Vec3::X]);
        assert_eq!(welder.positions(), [Vec3::Z, Vec3::X, Vec3::Y]);
        assert_eq!(welder.get(Vec3::Y), Some(2));
        assert_eq!(welder.get(Vec3::ONE), None);
        assert_eq!(welder.len(), 3);
    }

    #[test]
    fn exact_merges_signed_zero() {
        let mut welder = VertexWelder::default();
        assert_eq!(welder.insert(Vec3::ZERO), 0);
        assert_eq!(welder.insert(Vec3::new(-0.0, 0.0, -0.0)), 0);
        assert_eq!(welder.len(), 1);
    }

    #[test]
    fn exact_keeps_close_positions_apart() {
        let mut welder = VertexWelder::default();
        welder.insert(Vec3::splat(1.0));
        welder.insert(Vec3::splat(1.0 + f32::EPSILON));
        assert_eq!(welder.len(), 2);
    }

    #[test]
    fn exact_merges_identical_nan() {
        let mut welder = VertexWelder::default();
        welder.insert(Vec3::NAN);
        welder.insert(Vec3::NAN);
        assert_eq!(welder.len(), 1);
    }

    #[test]
    fn quantized_merges_close_positions() {
        let mut welder = VertexWelder::new(Welding::Quantized { step: 1e-4 });
        assert_eq!(welder.insert(Vec3::splat(1.0)), 0);
        assert_eq!(welder.insert(Vec3::splat(1.0 + f32::EPSILON)), 0);
        assert_eq!(welder.insert(Vec3::splat(1.001)), 1);
        assert_eq!(welder.positions(), [Vec3::splat(1.0), Vec3::splat(1.001)]);
    }

    #[test]
    fn quantized_handles_non_finite() {
        let mut welder = VertexWelder::new(Welding::Quantized { step: 1e-4 });
        welder.insert(Vec3::ZERO);
        welder.insert(Vec3::NAN);
        welder.insert(Vec3::INFINITY);
        welder.insert(Vec3::NAN);
        assert_eq!(welder.len(), 3);
    }
}
