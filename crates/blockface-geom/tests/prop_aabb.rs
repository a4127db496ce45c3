use blockface_geom::{Aabb, Vec3};
use proptest::prelude::*;
use proptest::num::f32::NORMAL;
use proptest::strategy::Strategy;

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}
fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Every input point lies inside the box built from the points
    #[test]
    fn from_points_contains_inputs(pts in prop::collection::vec(arb_vec3(), 1..16)) {
        let b = Aabb::from_points(pts.iter().copied());
        for p in pts {
            prop_assert!(p.x >= b.min.x && p.x <= b.max.x);
            prop_assert!(p.y >= b.min.y && p.y <= b.max.y);
            prop_assert!(p.z >= b.min.z && p.z <= b.max.z);
        }
    }

    // Union contains both operands and is symmetric
    #[test]
    fn union_is_symmetric(a in arb_vec3(), b in arb_vec3(), c in arb_vec3(), d in arb_vec3()) {
        let x = Aabb::from_points([a, b]);
        let y = Aabb::from_points([c, d]);
        let u = x.union(y);
        prop_assert_eq!(u, y.union(x));
        prop_assert!(u.min.x <= x.min.x && u.min.x <= y.min.x);
        prop_assert!(u.max.z >= x.max.z && u.max.z >= y.max.z);
    }
}
