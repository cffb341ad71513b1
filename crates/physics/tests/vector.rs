use quad_physics::{Vector2, NORMALIZE_EPSILON};

#[test]
fn normalize_yields_unit_or_zero() {
    fastrand::seed(7);
    for _ in 0..1_000 {
        let mut v = Vector2::new(fastrand::f32() * 200.0 - 100.0, fastrand::f32() * 200.0 - 100.0);
        let before = v.magnitude();
        v.normalize();
        if before >= NORMALIZE_EPSILON {
            assert!((v.magnitude() - 1.0).abs() < 1e-5, "magnitude {}", v.magnitude());
        } else {
            assert_eq!(v, Vector2::ZERO);
        }
    }

    let mut tiny = Vector2::new(5e-7, 0.0);
    tiny.normalize();
    assert_eq!(tiny, Vector2::ZERO);
}

#[test]
fn perp_dot_antisymmetry() {
    fastrand::seed(11);
    for _ in 0..1_000 {
        let a = Vector2::new(fastrand::f32() * 10.0 - 5.0, fastrand::f32() * 10.0 - 5.0);
        let b = Vector2::new(fastrand::f32() * 10.0 - 5.0, fastrand::f32() * 10.0 - 5.0);
        assert_eq!(a.perp_dot(b), -b.perp_dot(a));
    }
}

#[test]
fn operators_match_named_operations() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(-3.0, 0.5);
    assert_eq!(a + b, Vector2::new(-2.0, 2.5));
    assert_eq!(a - b, Vector2::new(4.0, 1.5));
    assert_eq!(a * 2.0, a.scale(2.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));

    let mut n = a;
    n.negate();
    assert_eq!(n, -a);
}

#[test]
fn perp_is_orthogonal() {
    let mut v = Vector2::new(3.0, -7.0);
    let original = v;
    v.perp();
    assert_eq!(v.dot(original), 0.0);
    assert_eq!(v.magnitude(), original.magnitude());
}
