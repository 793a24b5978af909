use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::voxelization::InvalidParameter;

/// The default maximum travel distance of the classification rays.
pub const DEFAULT_MAX_DISTANCE: Real = 1000.0;

/// The five classification directions, in the order their passes run.
///
/// The three axes first, then two diagonals of the XY plane. They are not normalized.
pub fn default_directions() -> [Vector<Real>; 5] {
    [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
        Vector::new(1.0, 1.0, 0.0),
        Vector::new(-1.0, 1.0, 0.0),
    ]
}

/// Parameters of a voxelization run.
///
/// The grid extents are not part of the parameters: they come from the bounding box of the
/// model being voxelized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelizationParams {
    /// The distance between two neighbor grid points. Must be positive.
    pub cell_size: Real,
    /// The maximum travel distance of the classification rays. Must be positive.
    pub max_distance: Real,
    /// The directions of the classification passes, in order. They don't need to be normalized.
    pub directions: Vec<Vector<Real>>,
}

impl Default for VoxelizationParams {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            max_distance: DEFAULT_MAX_DISTANCE,
            directions: default_directions().to_vec(),
        }
    }
}

impl VoxelizationParams {
    /// Sets the grid cell size.
    pub fn with_cell_size(mut self, cell_size: Real) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the maximum travel distance of the classification rays.
    pub fn with_max_distance(mut self, max_distance: Real) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Sets the classification directions.
    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Vector<Real>>) -> Self {
        self.directions = directions.into_iter().collect();
        self
    }

    /// Checks every parameter, and returns the normalized classification directions.
    pub fn validate(&self) -> Result<Vec<UnitVector<Real>>, InvalidParameter> {
        validate_cell_size(self.cell_size)?;
        validate_max_distance(self.max_distance)?;
        normalize_directions(&self.directions)
    }
}

pub(crate) fn validate_cell_size(cell_size: Real) -> Result<(), InvalidParameter> {
    if cell_size > 0.0 && cell_size.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameter::NonPositiveCellSize(cell_size))
    }
}

pub(crate) fn validate_max_distance(max_distance: Real) -> Result<(), InvalidParameter> {
    // NOTE: an infinite distance is accepted, NaN is not.
    if max_distance > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameter::NonPositiveMaxDistance(max_distance))
    }
}

pub(crate) fn normalize_direction(dir: &Vector<Real>) -> Result<UnitVector<Real>, InvalidParameter> {
    if !dir.iter().all(|e| e.is_finite()) {
        return Err(InvalidParameter::DegenerateDirection(*dir));
    }

    UnitVector::try_new(*dir, DEFAULT_EPSILON).ok_or(InvalidParameter::DegenerateDirection(*dir))
}

pub(crate) fn normalize_directions(
    dirs: &[Vector<Real>],
) -> Result<Vec<UnitVector<Real>>, InvalidParameter> {
    if dirs.is_empty() {
        return Err(InvalidParameter::NoDirections);
    }

    dirs.iter().map(normalize_direction).collect()
}

#[cfg(test)]
mod test {
    use super::{default_directions, VoxelizationParams, DEFAULT_MAX_DISTANCE};
    use crate::math::{Real, Vector};
    use crate::voxelization::InvalidParameter;

    #[test]
    fn default_params_are_valid() {
        let params = VoxelizationParams::default();
        assert_eq!(params.cell_size, 1.0);
        assert_eq!(params.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(params.directions, default_directions().to_vec());

        let dirs = params.validate().unwrap();
        assert_eq!(dirs.len(), 5);
        assert_relative_eq!(dirs[3].into_inner(), Vector::new(1.0, 1.0, 0.0).normalize());
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = VoxelizationParams::default();

        assert_eq!(
            params.clone().with_cell_size(0.0).validate(),
            Err(InvalidParameter::NonPositiveCellSize(0.0))
        );
        assert_eq!(
            params.clone().with_max_distance(-1.0).validate(),
            Err(InvalidParameter::NonPositiveMaxDistance(-1.0))
        );
        assert_eq!(
            params.clone().with_directions(Vec::new()).validate(),
            Err(InvalidParameter::NoDirections)
        );
        assert_eq!(
            params
                .clone()
                .with_directions([Vector::x(), Vector::zeros()])
                .validate(),
            Err(InvalidParameter::DegenerateDirection(Vector::zeros()))
        );
        assert!(matches!(
            params.with_cell_size(Real::NAN).validate(),
            Err(InvalidParameter::NonPositiveCellSize(_))
        ));
    }
}
