use decal3d::math::{Point, Real, Vector};
use decal3d::query::ClipResult;
use decal3d::shape::{ClipPlane, ConvexPolygon, PolygonVertex, ReceiverId, SkinWeight};

fn rand_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
        rng.rand_float() * 2.0 - 1.0,
    )
}

fn rand_weight(rng: &mut oorandom::Rand32) -> SkinWeight {
    let mut weight = SkinWeight::new(
        [0, 1, 2, 3],
        [
            rng.rand_float(),
            rng.rand_float(),
            rng.rand_float(),
            rng.rand_float() + 0.01,
        ],
    );
    weight.normalize();
    weight
}

fn rand_triangle(rng: &mut oorandom::Rand32) -> ConvexPolygon {
    let normal = Vector::new(0.0, 0.0, 1.0);
    let vertices = [0; 3].map(|_| PolygonVertex::new(rand_point(rng), normal, rand_weight(rng)));
    ConvexPolygon::from_triangle(vertices, ReceiverId(0))
}

fn rand_plane(rng: &mut oorandom::Rand32) -> ClipPlane {
    let normal = rand_point(rng).coords;
    ClipPlane::from_point_and_normal(&(rand_point(rng) * 0.5), &normal)
}

#[test]
fn random_clips_keep_inside_vertices() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let mut poly = rand_triangle(&mut rng);
        let scale = poly.edges().iter().map(|e| e.length()).fold(0.0, Real::max);

        for _ in 0..6 {
            let plane = rand_plane(&mut rng);
            let before = poly.clone();
            let area_before = poly.area();

            match poly.split_and_remove_by_plane(&plane).unwrap() {
                ClipResult::AllOutside => {
                    assert_eq!(poly, before);
                    break;
                }
                ClipResult::Unchanged => assert_eq!(poly, before),
                ClipResult::Clipped => {
                    assert!(poly.vertex_count() >= 3);
                    assert!(poly.vertex_count() <= before.vertex_count() + 1);
                    assert!(poly.area() <= area_before + 1.0e-5 * scale * scale);
                    assert_eq!(poly.face_normal(), before.face_normal());

                    let tolerance = 1.0e-5 * plane.normal().norm() * (1.0 + scale);
                    for pt in poly.positions() {
                        assert!(plane.eval_point(&pt) >= -tolerance);
                    }

                    for v in poly.vertices() {
                        assert!(v.weight.is_normalized(), "{:?}", v.weight);
                        assert_relative_eq!(v.normal.norm(), 1.0, epsilon = 1.0e-5);
                    }

                    for (i, edge) in poly.edges().iter().enumerate() {
                        let next = poly.vertex((i + 1) % poly.vertex_count());
                        assert_eq!(edge.start_pos, poly.vertex(i).position);
                        assert_eq!(edge.start_to_end, next.position - poly.vertex(i).position);
                    }
                }
            }
        }
    }
}
