use voxcast3d::math::{Point, Real, Vector};
use voxcast3d::voxelization::{build_grid, cell_counts, InvalidParameter, VoxelGrid};

#[test]
fn unit_grid_of_side_two() {
    let points = build_grid(2.0, 2.0, 2.0, 1.0).unwrap();
    assert_eq!(points.len(), 8);

    for x in [-1.0, 0.0] {
        for y in [0.0, 1.0] {
            for z in [-1.0, 0.0] {
                assert!(points.contains(&Point::new(x, y, z)));
            }
        }
    }
}

#[test]
fn grid_size_is_product_of_counts() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let extents = Vector::from_fn(|_, _| rng.rand_float() * 10.0);
        let cell_size = 0.25 + rng.rand_float() * 2.0;
        let counts = cell_counts(&extents, cell_size).unwrap();
        let points = build_grid(extents.x, extents.y, extents.z, cell_size).unwrap();

        assert_eq!(points.len(), counts[0] * counts[1] * counts[2]);
    }
}

#[test]
fn grid_sits_on_the_floor_and_is_centered() {
    let cell_size: Real = 0.5;
    let grid = VoxelGrid::new(Vector::new(3.0, 2.0, 5.0), cell_size).unwrap();
    let [nx, ny, nz] = grid.counts();
    assert_eq!([nx, ny, nz], [6, 4, 10]);

    let min_y = grid.points().iter().map(|pt| pt.y).fold(Real::MAX, Real::min);
    assert_eq!(min_y, 0.0);
    assert!(grid.points().iter().all(|pt| pt.y >= 0.0));

    // The lattice is symmetric about `-cell_size / 2` on X and Z.
    for i in 0..nx {
        let a = grid.points()[grid.linear_index(i, 0, 0).unwrap()];
        let b = grid.points()[grid.linear_index(nx - 1 - i, 0, 0).unwrap()];
        assert_relative_eq!(a.x + b.x, -cell_size);
    }

    for k in 0..nz {
        let a = grid.points()[grid.linear_index(0, 0, k).unwrap()];
        let b = grid.points()[grid.linear_index(0, 0, nz - 1 - k).unwrap()];
        assert_relative_eq!(a.z + b.z, -cell_size);
    }

    assert_relative_eq!(grid.points()[0].x, -(nx as Real) * cell_size / 2.0);
}

#[test]
fn invalid_grid_parameters() {
    assert_eq!(
        build_grid(1.0, 1.0, 1.0, -0.5),
        Err(InvalidParameter::NonPositiveCellSize(-0.5))
    );
    assert_eq!(
        build_grid(-1.0, 1.0, 1.0, 1.0),
        Err(InvalidParameter::NegativeExtent {
            axis: "x",
            value: -1.0
        })
    );
    assert!(matches!(
        build_grid(1.0, 1.0, Real::NAN, 1.0),
        Err(InvalidParameter::NegativeExtent { axis: "z", .. })
    ));
    assert!(matches!(
        build_grid(1.0e30, 1.0e30, 1.0e30, 1.0e-6),
        Err(InvalidParameter::TooManyCells { .. })
    ));
}

#[test]
fn single_oversized_axis_is_rejected() {
    for extents in [[1.0e30, 1.0, 1.0], [1.0, 1.0e30, 1.0], [1.0, 1.0, 1.0e30]] {
        assert!(
            matches!(
                build_grid(extents[0], extents[1], extents[2], 1.0),
                Err(InvalidParameter::TooManyCells { .. })
            ),
            "{:?} was not rejected",
            extents
        );
    }
}
