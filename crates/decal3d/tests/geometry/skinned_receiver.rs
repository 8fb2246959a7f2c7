use decal3d::math::{Matrix, Point, Vector};
use decal3d::shape::{MeshSkin, ReceiverId, ReceiverMesh, SkinWeight, SkinnedReceiver};
use decal3d::transformation::{BuildConfig, BuildStatus, ConvexPolygonFactory};
use decal3d::utils::AffineOps;

fn rigged_triangle(bind_poses: Vec<Matrix<f32>>) -> ReceiverMesh {
    let skin = MeshSkin::new(
        vec![
            SkinWeight::single(0),
            SkinWeight::single(0),
            SkinWeight::single(1),
        ],
        bind_poses,
    )
    .unwrap();

    ReceiverMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![Vector::z(); 3],
        vec![[0, 1, 2]],
    )
    .unwrap()
    .with_skin(skin)
    .unwrap()
}

#[test]
fn single_bone_weights_collapse_to_bone_transform() {
    let mesh = rigged_triangle(vec![Matrix::identity(); 2]);
    let bone_a = Matrix::new_translation(&Vector::new(1.0, 0.0, 0.0));
    let bone_b = Matrix::new_translation(&Vector::new(1.0, 2.0, -3.0));
    let skinned = [SkinnedReceiver::new(
        &mesh,
        Matrix::identity(),
        vec![bone_a, bone_b],
        ReceiverId(1),
    )
    .unwrap()];

    let mut factory = ConvexPolygonFactory::new(&[], &skinned);
    let mut polygons = vec![];
    factory.build_all(&mut polygons);
    assert_eq!(polygons.len(), 1);

    let poly = &polygons[0];
    let positions = mesh.positions();
    assert_relative_eq!(poly.vertex(0).position, bone_a.transform_point_affine(&positions[0]));
    assert_relative_eq!(poly.vertex(1).position, bone_a.transform_point_affine(&positions[1]));
    assert_relative_eq!(poly.vertex(2).position, bone_b.transform_point_affine(&positions[2]));

    // Translations do not affect normals.
    for v in poly.vertices() {
        assert_relative_eq!(v.normal, Vector::z());
    }

    assert_eq!(poly.vertex(0).weight, SkinWeight::single(0));
    assert_eq!(poly.vertex(2).weight, SkinWeight::single(1));
    assert_eq!(poly.receiver(), ReceiverId(1));
}

#[test]
fn bind_pose_cancels_rest_pose() {
    let rest_a = Matrix::new_translation(&Vector::new(0.0, 5.0, 0.0));
    let rest_b = Matrix::new_rotation(Vector::new(0.0, 0.0, 1.0));
    let mesh = rigged_triangle(vec![
        rest_a.try_inverse().unwrap(),
        rest_b.try_inverse().unwrap(),
    ]);
    let receiver =
        SkinnedReceiver::new(&mesh, Matrix::identity(), vec![rest_a, rest_b], ReceiverId(0))
            .unwrap();
    let skinned = [receiver];

    let mut factory = ConvexPolygonFactory::new(&[], &skinned);
    let mut polygons = vec![];
    factory.build_all(&mut polygons);

    for (v, p) in polygons[0].vertices().iter().zip(mesh.positions()) {
        assert_relative_eq!(v.position, *p, epsilon = 1.0e-5);
        assert_relative_eq!(v.normal, Vector::z(), epsilon = 1.0e-5);
    }
}

#[test]
fn blended_weights_average_bones() {
    let skin = MeshSkin::new(
        vec![SkinWeight::new([0, 1, 0, 0], [0.25, 0.75, 0.0, 0.0]); 3],
        vec![Matrix::identity(); 2],
    )
    .unwrap();
    let mesh = ReceiverMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![Vector::z(); 3],
        vec![[0, 1, 2]],
    )
    .unwrap()
    .with_skin(skin)
    .unwrap();
    let bones = vec![
        Matrix::new_translation(&Vector::new(4.0, 0.0, 0.0)),
        Matrix::new_translation(&Vector::new(0.0, 0.0, 4.0)),
    ];
    let skinned = [SkinnedReceiver::new(&mesh, Matrix::identity(), bones, ReceiverId(0)).unwrap()];

    let mut factory = ConvexPolygonFactory::new(&[], &skinned);
    let mut polygons = vec![];
    assert_eq!(
        factory.step(&BuildConfig::default(), &mut polygons),
        BuildStatus::Completed
    );

    assert_relative_eq!(polygons[0].vertex(0).position, Point::new(1.0, 0.0, 3.0));
    assert_relative_eq!(polygons[0].vertex(1).position, Point::new(2.0, 0.0, 3.0));
}
