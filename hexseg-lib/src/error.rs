use thiserror::Error;

/// Errors reported by the checked [`HexSeg`](crate::hex_seg::HexSeg) constructors.
///
/// The unchecked constructors never fail and instead produce degenerate geometry.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum HexSegError {
    /// The radius is zero, negative, infinite or `NaN`.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// The number of leaf triangles would grow beyond what is reasonable to build.
    #[error("{requested} subdivisions exceed the maximum of {max}")]
    TooManySubdivisions { requested: u32, max: u32 },

    /// The grid size of [`Welding::Quantized`](crate::weld::Welding::Quantized) is zero,
    /// negative, infinite or `NaN`.
    #[error("weld step must be positive and finite, got {0}")]
    InvalidWeldStep(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            HexSegError::InvalidRadius(-1.0).to_string(),
            "radius must be positive and finite, got -1"
        );
        assert_eq!(
            HexSegError::TooManySubdivisions {
                requested: 12,
                max: 10
            }
            .to_string(),
            "12 subdivisions exceed the maximum of 10"
        );
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<HexSegError>();
    }
}
