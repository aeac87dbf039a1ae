use glam::Vec3;

/// Floating point axis-aligned bounds in 3D-space.
///
/// Unlike integer bounds, both limits are inclusive, so bounds around a single point have a size
/// of zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds3 {
    /// The inclusive lower limit of the bounds.
    lower: Vec3,
    /// The inclusive upper limit of the bounds.
    upper: Vec3,
}

impl Bounds3 {
    /// Constructs [`Bounds3`] from the given inclusive `lower` and `upper` limits.
    ///
    /// # Panics
    ///
    /// Panics if `lower` exceeds `upper` along any axis or either of them is `NaN`.
    pub fn new(lower: Vec3, upper: Vec3) -> Self {
        Self::checked_new(lower, upper).expect("lower bounds must not exceed upper bounds")
    }

    /// Constructs [`Bounds3`] from the given inclusive `lower` and `upper` limits.
    ///
    /// Returns [`None`] if `lower` exceeds `upper` along any axis or either of them is `NaN`.
    pub fn checked_new(lower: Vec3, upper: Vec3) -> Option<Self> {
        lower.cmple(upper).all().then_some(Self { lower, upper })
    }

    /// Constructs [`Bounds3`] covering only the given `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is `NaN` on any axis.
    pub fn point(point: Vec3) -> Self {
        Self::new(point, point)
    }

    /// Constructs the smallest [`Bounds3`] containing all given `points`.
    ///
    /// Returns [`None`] if there are no points. `NaN` coordinates are ignored.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (lower, upper) = points.fold((first, first), |(lower, upper), point| {
            (lower.min(point), upper.max(point))
        });
        Self::checked_new(lower, upper)
    }

    /// The inclusive lower limit of the bounds.
    pub fn lower(self) -> Vec3 {
        self.lower
    }

    /// The inclusive upper limit of the bounds.
    pub fn upper(self) -> Vec3 {
        self.upper
    }

    /// The size of the bounds.
    pub fn size(self) -> Vec3 {
        self.upper - self.lower
    }

    /// The point halfway between [`Self::lower`] and [`Self::upper`].
    pub fn center(self) -> Vec3 {
        self.lower + self.size() / 2.0
    }

    /// Whether the given `point` lies within the bounds, including its borders.
    pub fn contains(self, point: Vec3) -> bool {
        self.lower.cmple(point).all() && point.cmple(self.upper).all()
    }

    /// Grows the bounds just enough to contain the given `point`.
    ///
    /// `NaN` coordinates of `point` leave the corresponding axis untouched.
    pub fn extend(self, point: Vec3) -> Self {
        Self {
            lower: self.lower.min(point),
            upper: self.upper.max(point),
        }
    }
}
