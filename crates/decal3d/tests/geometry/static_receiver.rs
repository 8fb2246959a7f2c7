use decal3d::math::{Matrix, Point, Vector};
use decal3d::shape::{ReceiverId, ReceiverMesh, StaticReceiver};
use decal3d::transformation::{BuildConfig, BuildStatus, ConvexPolygonFactory};

fn grid(n: u32) -> ReceiverMesh {
    let mut positions = vec![];
    for j in 0..=n {
        for i in 0..=n {
            positions.push(Point::new(i as f32, j as f32, 0.0));
        }
    }

    let mut indices = vec![];
    for j in 0..n {
        for i in 0..n {
            let a = j * (n + 1) + i;
            let b = a + 1;
            let c = a + n + 1;
            let d = c + 1;
            indices.push([a, b, d]);
            indices.push([a, d, c]);
        }
    }

    let normals = vec![Vector::z(); positions.len()];
    ReceiverMesh::new(positions, normals, indices).unwrap()
}

#[test]
fn resumable_build_matches_single_step_build() {
    let mesh = grid(10);
    let rotation = Matrix::new_rotation(Vector::new(0.3, -0.2, 0.1));
    let statics = [
        StaticReceiver::new(&mesh, rotation, ReceiverId(0)),
        StaticReceiver::new(&mesh, Matrix::identity(), ReceiverId(1)),
    ];

    let mut one_shot = vec![];
    ConvexPolygonFactory::new(&statics, &[]).build_all(&mut one_shot);
    assert_eq!(one_shot.len(), 400);

    let mut factory = ConvexPolygonFactory::new(&statics, &[]);
    let config = BuildConfig::default().with_back_pressure(3);
    let mut resumed = vec![];
    let mut num_suspensions = 0;

    while factory.step(&config, &mut resumed) == BuildStatus::Suspended {
        assert_eq!(resumed.len() % 33, 0);
        num_suspensions += 1;
    }

    assert_eq!(num_suspensions, 12);
    assert_eq!(resumed, one_shot);
}

#[test]
fn world_space_face_normals() {
    let mesh = grid(2);
    let rotation = Matrix::new_rotation(Vector::new(core::f32::consts::FRAC_PI_2, 0.0, 0.0));
    let statics = [StaticReceiver::new(&mesh, rotation, ReceiverId(0))];

    let mut polygons = vec![];
    ConvexPolygonFactory::new(&statics, &[]).build_all(&mut polygons);

    // A quarter turn around x maps +z to -y.
    for poly in &polygons {
        assert_relative_eq!(poly.face_normal(), -Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(poly.vertex(0).normal, -Vector::y(), epsilon = 1.0e-5);
        assert_relative_eq!(poly.area(), 0.5, epsilon = 1.0e-5);
    }
}
