use crate::{error::HexSegError, weld::Welding};

use super::HexSeg;

/// The parameters used to construct a [`HexSeg`].
///
/// The [`Default`] is a hexagon with a radius of `1.0` made up of just its six root triangles,
/// welded exactly.
///
/// ```
/// # use hexseg_lib::{hex_seg::{config::HexSegConfig, HexSeg}, weld::Welding};
/// let config = HexSegConfig::default()
///     .with_radius(10.0)
///     .with_subdivisions(3)
///     .with_welding(Welding::Quantized { step: 1e-4 });
/// assert!(config.validate().is_ok());
///
/// let hex_seg = HexSeg::from_config(config);
/// assert_eq!(hex_seg.leaf_count(), 6 * 4 * 4 * 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HexSegConfig {
    /// The distance from the center to each of the six outer corners.
    pub radius: f32,
    /// How often each of the six root triangles is split into four.
    pub subdivisions: u32,
    /// How positions are merged when building vertex buffers.
    pub welding: Welding,
}

impl HexSegConfig {
    /// Constructs a [`HexSegConfig`] with the given `radius` and `subdivisions`, welding exactly.
    pub fn new(radius: f32, subdivisions: u32) -> Self {
        Self {
            radius,
            subdivisions,
            welding: Welding::Exact,
        }
    }

    pub fn with_radius(self, radius: f32) -> Self {
        Self { radius, ..self }
    }

    pub fn with_subdivisions(self, subdivisions: u32) -> Self {
        Self {
            subdivisions,
            ..self
        }
    }

    pub fn with_welding(self, welding: Welding) -> Self {
        Self { welding, ..self }
    }

    /// Checks that the configuration results in sensible geometry.
    ///
    /// # Errors
    ///
    /// - [`HexSegError::InvalidRadius`] if the radius is not positive and finite
    /// - [`HexSegError::TooManySubdivisions`] if [`HexSeg::MAX_SUBDIVISIONS`] is exceeded
    /// - [`HexSegError::InvalidWeldStep`] if a quantized weld step is not positive and finite
    pub fn validate(&self) -> Result<(), HexSegError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(HexSegError::InvalidRadius(self.radius));
        }

        if self.subdivisions > HexSeg::MAX_SUBDIVISIONS {
            return Err(HexSegError::TooManySubdivisions {
                requested: self.subdivisions,
                max: HexSeg::MAX_SUBDIVISIONS,
            });
        }

        if let Welding::Quantized { step } = self.welding {
            if !(step.is_finite() && step > 0.0) {
                return Err(HexSegError::InvalidWeldStep(step));
            }
        }

        Ok(())
    }
}

impl Default for HexSegConfig {
    fn default() -> Self {
        Self::new(1.0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = HexSegConfig::default();
        assert_eq!(config, HexSegConfig::new(1.0, 0));
        assert_eq!(config.welding, Welding::Exact);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn invalid_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                HexSegConfig::default().with_radius(radius).validate(),
                Err(HexSegError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn too_many_subdivisions() {
        let config = HexSegConfig::default().with_subdivisions(HexSeg::MAX_SUBDIVISIONS);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config
                .with_subdivisions(HexSeg::MAX_SUBDIVISIONS + 1)
                .validate(),
            Err(HexSegError::TooManySubdivisions {
                requested: HexSeg::MAX_SUBDIVISIONS + 1,
                max: HexSeg::MAX_SUBDIVISIONS,
            })
        );
    }

    #[test]
    fn invalid_weld_step() {
        let config = HexSegConfig::default().with_welding(Welding::Quantized { step: 0.0 });
        assert_eq!(config.validate(), Err(HexSegError::InvalidWeldStep(0.0)));
    }
}
