use crate::{cube_mesh, random_points};
use voxcast3d::math::{Point, Real, Vector};
use voxcast3d::query::{MeshQueryError, Ray, RayIntersection, RayQuery};
use voxcast3d::shape::Cuboid;
use voxcast3d::voxelization::{
    classify, classify_with, default_directions, filter_by_direction, is_inside_along_ray,
    InvalidParameter, VoxelizationError, VoxelizationParams, DEFAULT_MAX_DISTANCE,
};

#[test]
fn cube_center_is_inside_along_every_direction() {
    let cube = Cuboid::new(Vector::repeat(1.0));

    for dir in default_directions() {
        assert!(
            is_inside_along_ray(&cube, &Point::origin(), &dir, DEFAULT_MAX_DISTANCE).unwrap(),
            "the ray along {:?} missed the cube",
            dir
        );
    }

    assert_eq!(
        classify(&cube, &[Point::origin()]).unwrap(),
        vec![Point::origin()]
    );
}

#[test]
fn far_point_is_dropped_by_first_pass() {
    let cube = Cuboid::new(Vector::repeat(1.0));
    let far = [Point::new(5.0, 5.0, 5.0)];

    assert!(filter_by_direction(&cube, &far, &Vector::x(), DEFAULT_MAX_DISTANCE)
        .unwrap()
        .is_empty());
    assert!(classify(&cube, &far).unwrap().is_empty());
}

#[test]
fn trimesh_cube_interior_point() {
    let mesh = cube_mesh(1.0);
    let pt = Point::new(0.1, 0.2, 0.3);
    assert_eq!(classify(&mesh, &[pt]).unwrap(), vec![pt]);
}

#[test]
fn surface_points_are_excluded() {
    let mesh = cube_mesh(1.0);
    let cube = Cuboid::new(Vector::repeat(1.0));
    let on_face = Point::new(1.0, 0.2, 0.3);

    assert!(!is_inside_along_ray(&mesh, &on_face, &Vector::x(), DEFAULT_MAX_DISTANCE).unwrap());
    assert!(!is_inside_along_ray(&cube, &on_face, &Vector::x(), DEFAULT_MAX_DISTANCE).unwrap());
    assert!(classify(&mesh, &[on_face]).unwrap().is_empty());
    assert!(classify(&cube, &[on_face]).unwrap().is_empty());
}

#[test]
fn empty_candidates() {
    let mesh = cube_mesh(1.0);
    assert!(classify(&mesh, &[]).unwrap().is_empty());
}

#[test]
fn box_classification_is_exact_away_from_the_surface() {
    let cube = Cuboid::new(Vector::repeat(1.0));
    let candidates: Vec<_> = random_points(42, 2000, 2.0)
        .into_iter()
        .filter(|pt| pt.iter().all(|e| (e.abs() - 1.0).abs() > 1.0e-3))
        .collect();

    let inside = classify(&cube, &candidates).unwrap();
    let expected: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|pt| pt.iter().all(|e| e.abs() < 1.0))
        .collect();

    assert!(!expected.is_empty());
    assert_eq!(inside, expected);
}

#[test]
fn classification_is_an_idempotent_subset() {
    let mesh = cube_mesh(1.0).translated(&Vector::new(0.3, 0.0, -0.2));
    let candidates = random_points(1234, 1000, 1.5);

    let inside = classify(&mesh, &candidates).unwrap();
    assert!(!inside.is_empty());
    assert!(inside.len() < candidates.len());

    // Order is preserved.
    let mut remaining = candidates.iter();
    for pt in &inside {
        assert!(remaining.any(|candidate| candidate == pt));
    }

    assert_eq!(classify(&mesh, &inside).unwrap(), inside);
}

#[test]
fn interior_points_survive_trimesh_classification() {
    let mesh = cube_mesh(1.0);
    let candidates = random_points(99, 500, 0.9);
    assert_eq!(classify(&mesh, &candidates).unwrap(), candidates);
}

#[test]
fn max_distance_limits_the_rays() {
    let mesh = cube_mesh(1.0);
    let pt = Point::new(-5.0, 0.2, 0.3);
    let params = VoxelizationParams::default().with_directions([Vector::x()]);

    assert_eq!(classify_with(&mesh, &[pt], &params).unwrap(), vec![pt]);
    assert!(classify_with(&mesh, &[pt], &params.with_max_distance(3.0))
        .unwrap()
        .is_empty());
}

#[test]
fn invalid_ray_parameters() {
    let mesh = cube_mesh(1.0);
    let pt = [Point::origin()];

    assert_eq!(
        filter_by_direction(&mesh, &pt, &Vector::zeros(), 10.0),
        Err(VoxelizationError::InvalidParameter(
            InvalidParameter::DegenerateDirection(Vector::zeros())
        ))
    );
    assert_eq!(
        filter_by_direction(&mesh, &pt, &Vector::x(), -1.0),
        Err(VoxelizationError::InvalidParameter(
            InvalidParameter::NonPositiveMaxDistance(-1.0)
        ))
    );
    assert_eq!(
        classify_with(
            &mesh,
            &pt,
            &VoxelizationParams::default().with_directions(Vec::new())
        ),
        Err(VoxelizationError::InvalidParameter(
            InvalidParameter::NoDirections
        ))
    );
}

/// A cube whose host refuses to cast rays with a Z component.
struct NoDepthQueries(Cuboid);

impl RayQuery for NoDepthQueries {
    fn any_intersection(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Result<Option<RayIntersection>, MeshQueryError> {
        if ray.dir.z != 0.0 {
            return Err(MeshQueryError::Host("depth queries are unavailable".to_string()));
        }

        self.0.any_intersection(ray, max_time_of_impact)
    }
}

#[test]
fn mesh_errors_identify_the_failing_pass() {
    let mesh = NoDepthQueries(Cuboid::new(Vector::repeat(1.0)));
    let candidates = [Point::new(5.0, 0.0, 0.0), Point::new(0.1, 0.2, 0.3)];

    match classify(&mesh, &candidates) {
        Err(VoxelizationError::MeshQuery {
            pass,
            point,
            direction,
            source,
        }) => {
            assert_eq!(pass, 2);
            assert_eq!(point, candidates[1]);
            assert_eq!(direction, Vector::z());
            assert_eq!(
                source,
                MeshQueryError::Host("depth queries are unavailable".to_string())
            );
        }
        other => panic!("unexpected classification result: {:?}", other),
    }
}

#[test]
fn non_finite_points_are_reported() {
    let mesh = cube_mesh(1.0);
    let err = classify(&mesh, &[Point::new(Real::NAN, 0.0, 0.0)]).unwrap_err();

    assert!(matches!(
        err,
        VoxelizationError::MeshQuery {
            pass: 0,
            source: MeshQueryError::NonFiniteRay(_),
            ..
        }
    ));
}
