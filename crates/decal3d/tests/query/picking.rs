use decal3d::math::{Matrix, Point, Vector};
use decal3d::shape::{ReceiverId, ReceiverMesh, StaticReceiver};
use decal3d::transformation::ConvexPolygonFactory;

#[test]
fn pick_receiver_triangle() {
    let mesh = ReceiverMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![Vector::z(); 4],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();
    let lift = Matrix::new_translation(&Vector::new(0.0, 0.0, 2.0));
    let statics = [StaticReceiver::new(&mesh, lift, ReceiverId(9))];
    let mut polygons = vec![];
    ConvexPolygonFactory::new(&statics, &[]).build_all(&mut polygons);

    let start = Point::new(0.25, 0.75, 10.0);
    let end = Point::new(0.25, 0.75, -10.0);
    let hits: Vec<_> = polygons
        .iter()
        .enumerate()
        .filter_map(|(i, poly)| poly.is_intersect_ray_to_triangle(&start, &end).map(|hit| (i, hit)))
        .collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 1);
    assert_relative_eq!(hits[0].1, Point::new(0.25, 0.75, 2.0), epsilon = 1.0e-5);

    let exact = polygons[1].cast_segment_exact(&start, &end).unwrap();
    assert_relative_eq!(exact, hits[0].1, epsilon = 1.0e-5);
    assert!(polygons[0].cast_segment_exact(&start, &end).is_none());
}
