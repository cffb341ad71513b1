use anyhow::Result;
use quad_physics::{collision, overlap, CollisionResult, CornerOwner, RigidQuad, Vector2};

fn square(x: f32, y: f32, side: f32) -> Result<RigidQuad> {
    Ok(RigidQuad::new(Vector2::new(x, y), side, side, 1.0, 0.0)?)
}

#[test]
fn sat_far_apart_unit_squares() -> Result<()> {
    let a = square(0.0, 0.0, 1.0)?;
    let b = square(10.0, 10.0, 1.0)?;
    assert!(!overlap(&a, &b).collided());
    assert!(!collision(&a, &b).collided());
    Ok(())
}

#[test]
fn sat_identical_unit_squares() -> Result<()> {
    let a = square(0.0, 0.0, 1.0)?;
    let b = square(0.0, 0.0, 1.0)?;
    assert!(overlap(&a, &b).collided());
    Ok(())
}

#[test]
fn containment_classifies_points() -> Result<()> {
    let q = square(0.0, 0.0, 0.2)?;
    assert!(q.contains_point(Vector2::new(0.0, 0.0)));
    assert!(!q.contains_point(Vector2::new(1.0, 1.0)));
    Ok(())
}

#[test]
fn offset_squares_collide_under_both_tests() -> Result<()> {
    let a = square(0.0, 0.0, 0.2)?;
    let b = square(0.05, 0.0, 0.2)?;

    let sat = overlap(&a, &b);
    let CollisionResult::Overlap { normal, depth } = sat else {
        panic!("expected overlap, got {sat:?}");
    };
    assert!(normal.y.abs() < 1e-5, "normal {normal:?} is not horizontal");
    assert!((normal.x.abs() - 1.0).abs() < 1e-5);
    assert!((depth - 0.15).abs() < 1e-5);
    assert_eq!(sat.point(), None);

    let contact = collision(&a, &b);
    let CollisionResult::Contact { point, normal, owner } = contact else {
        panic!("expected contact, got {contact:?}");
    };
    let (owner_body, other) = match owner {
        CornerOwner::First => (&a, &b),
        CornerOwner::Second => (&b, &a),
    };
    assert!(owner_body.corners().contains(&point));
    assert!(other.contains_point(point));
    // the touching corner sits on an edge here, so the estimate may be zero
    let m = normal.magnitude();
    assert!(m == 0.0 || (m - 1.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn tests_agree_on_rotated_pairs() -> Result<()> {
    // a corner-into-face contact is found by both tests
    let a = RigidQuad::new(Vector2::ZERO, 0.2, 0.2, 1.0, std::f32::consts::FRAC_PI_4)?;
    let b = square(0.2, 0.0, 0.2)?;
    assert!(overlap(&a, &b).collided());
    let contact = collision(&a, &b);
    assert_eq!(contact.point(), Some(a.corner(1)));
    Ok(())
}

#[test]
fn update_before_test_uses_fresh_corners() -> Result<()> {
    let mut a = square(0.0, 0.0, 0.2)?;
    let b = square(0.5, 0.05, 0.2)?;
    assert!(!overlap(&a, &b).collided());

    a.apply_force(Vector2::new(10.0, 0.0));
    a.update(0.2, 1.0);
    assert!(a.center().x > 0.3);
    assert!(overlap(&a, &b).collided());
    assert!(collision(&a, &b).collided());
    Ok(())
}
