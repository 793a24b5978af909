use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::voxelization::params::validate_cell_size;
use crate::voxelization::InvalidParameter;

const AXIS_NAMES: [&str; DIM] = ["x", "y", "z"];

/// The number of grid points along each axis for a volume of the given extents.
///
/// Each count is `extent / cell_size` rounded to the nearest integer, ties to even. A count can
/// be zero, in which case the grid is empty.
pub fn cell_counts(extents: &Vector<Real>, cell_size: Real) -> Result<[usize; DIM], InvalidParameter> {
    validate_cell_size(cell_size)?;

    let mut counts = [0; DIM];

    for i in 0..DIM {
        let value = extents[i];

        if !(value >= 0.0) || !value.is_finite() {
            return Err(InvalidParameter::NegativeExtent {
                axis: AXIS_NAMES[i],
                value,
            });
        }

        let cells = (value / cell_size).round_ties_even();

        if cells >= usize::MAX as Real {
            counts[i] = usize::MAX;
            return Err(InvalidParameter::TooManyCells { counts });
        }

        counts[i] = cells as usize;

        if !relative_eq!(cells * cell_size, value, max_relative = 1.0e-4) {
            log::debug!(
                "grid extent {} = {} is not a multiple of the cell size {}, using {} cells",
                AXIS_NAMES[i],
                value,
                cell_size,
                counts[i]
            );
        }
    }

    // The point buffer must stay within the allocator limits.
    let too_large = counts
        .iter()
        .try_fold(1usize, |acc, n| acc.checked_mul(*n))
        .and_then(|len| len.checked_mul(mem::size_of::<Point<Real>>()))
        .map_or(true, |bytes| bytes > isize::MAX as usize);

    if too_large {
        return Err(InvalidParameter::TooManyCells { counts });
    }

    Ok(counts)
}

/// Builds the candidate points of a voxelization.
///
/// The grid holds `nx * ny * nz` points where each count is given by [`cell_counts`]. The X and
/// Z ranges are shifted so the grid is centered on the origin, while Y starts at zero:
///
/// - `x = i * cell_size - nx * cell_size / 2` for `i` in `0..nx`,
/// - `y = j * cell_size` for `j` in `0..ny`,
/// - `z = k * cell_size - nz * cell_size / 2` for `k` in `0..nz`.
///
/// The points are ordered with X as the outermost loop and Z as the innermost one. Because of
/// the half-lattice offset, the X and Z coordinates are symmetric about `-cell_size / 2` rather
/// than about the origin.
pub fn build_grid(
    width: Real,
    height: Real,
    depth: Real,
    cell_size: Real,
) -> Result<Vec<Point<Real>>, InvalidParameter> {
    let counts = cell_counts(&Vector::new(width, height, depth), cell_size)?;
    Ok(lattice(counts, cell_size))
}

fn lattice(counts: [usize; DIM], cell_size: Real) -> Vec<Point<Real>> {
    let [nx, ny, nz] = counts;
    let offset_x = nx as Real * cell_size / 2.0;
    let offset_z = nz as Real * cell_size / 2.0;
    let mut points = Vec::with_capacity(nx * ny * nz);

    for i in 0..nx {
        let x = i as Real * cell_size - offset_x;

        for j in 0..ny {
            let y = j as Real * cell_size;

            for k in 0..nz {
                points.push(Point::new(x, y, k as Real * cell_size - offset_z));
            }
        }
    }

    points
}

/// A regular lattice of candidate points, with the cell counts it was built from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    cell_size: Real,
    counts: [usize; DIM],
    points: Vec<Point<Real>>,
}

impl VoxelGrid {
    /// Builds the grid covering a volume of the given extents.
    ///
    /// See [`build_grid`] for the layout of the points.
    pub fn new(extents: Vector<Real>, cell_size: Real) -> Result<Self, InvalidParameter> {
        let counts = cell_counts(&extents, cell_size)?;
        Ok(Self {
            cell_size,
            counts,
            points: lattice(counts, cell_size),
        })
    }

    /// Builds the grid covering the extents of an AABB.
    ///
    /// Only the size of the AABB matters: the grid is always laid out around the origin.
    pub fn from_aabb(aabb: &Aabb, cell_size: Real) -> Result<Self, InvalidParameter> {
        Self::new(aabb.extents(), cell_size)
    }

    /// The distance between two neighbor points.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The number of points along each axis.
    #[inline]
    pub fn counts(&self) -> [usize; DIM] {
        self.counts
    }

    /// The points of this grid.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The total number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this grid contain no point at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The index of the point at the lattice coordinates `(i, j, k)`.
    ///
    /// Returns `None` if the coordinates are out of the grid.
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let [nx, ny, nz] = self.counts;

        if i < nx && j < ny && k < nz {
            Some((i * ny + j) * nz + k)
        } else {
            None
        }
    }

    /// Consumes this grid and returns its points.
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }
}
