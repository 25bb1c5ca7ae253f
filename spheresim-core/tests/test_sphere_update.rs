//! Unit tests for the sphere integration step and drag force model

use spheresim_core::tests::test_helpers::{approx_eq, vec3_near};
use spheresim_core::{PhysicsError, Sphere, Vec3, DRAG_COEFFICIENT};
use std::f64::consts::PI;

#[test]
fn test_at_rest_stays_put() {
    let mut sphere = Sphere::new(1.0, 1.0, Vec3::ZERO).unwrap();

    sphere.update(0.1, Vec3::ZERO);

    assert_eq!(Vec3::ZERO, sphere.position());
    assert_eq!(Vec3::ZERO, sphere.velocity());
}

#[test]
fn test_constant_velocity_advances_position() {
    let init_pos = Vec3::new(0.0, 0.0, 0.0);
    let init_vel = Vec3::new(1.0, 0.0, 0.0);
    let mut sphere = Sphere::with_velocity(1.0, 1.0, init_pos, init_vel).unwrap();

    let dt = 0.1;
    sphere.update(dt, Vec3::ZERO);

    assert_eq!(init_pos + init_vel * dt, sphere.position());

    let init_pos2 = Vec3::new(-1.0, 0.0, 1.0);
    let init_vel2 = Vec3::new(1.0, -1.0, 0.0);
    let mut sphere2 = Sphere::with_velocity(1.0, 1.0, init_pos2, init_vel2).unwrap();
    sphere2.update(dt, Vec3::ZERO);

    assert_eq!(init_pos2 + init_vel2 * dt, sphere2.position());
}

#[test]
fn test_gravity_step_uses_updated_velocity() {
    let init_pos = Vec3::new(0.0, 10.0, 0.0);
    let gravity = Vec3::new(0.0, -9.81, 0.0);
    let mut sphere = Sphere::new(1.0, 1.0, init_pos).unwrap();

    let dt = 0.1;
    sphere.update(dt, gravity);

    // Semi-implicit Euler: v = g*dt = (0, -0.981, 0), then
    // x = (0, 10, 0) + v*dt = (0, 9.9019, 0)
    let expected_vel = gravity * dt;
    let expected_pos = init_pos + expected_vel * dt;

    assert!(vec3_near(expected_vel, sphere.velocity(), 1e-3));
    assert!(vec3_near(expected_pos, sphere.position(), 1e-3));
}

#[test]
fn test_drag_force_opposes_velocity() {
    let radius = 1.0;
    let velocity = Vec3::new(10.0, 0.0, -4.0);
    let sphere = Sphere::with_velocity(radius, 2.0, Vec3::ZERO, velocity).unwrap();

    let density = 1.2;
    let drag = sphere.drag_force(density);

    // Per component: -0.5 * rho * C_d * (pi*r^2) * v^2 * sign(v)
    let area = PI * radius * radius;
    let expected_x = -0.5 * density * DRAG_COEFFICIENT * area * 100.0;
    let expected_z = 0.5 * density * DRAG_COEFFICIENT * area * 16.0;

    assert!(approx_eq(drag.x, expected_x, 1e-9));
    assert!(approx_eq(drag.y, 0.0, 1e-9));
    assert!(approx_eq(drag.z, expected_z, 1e-9));

    // Drag always pushes against the motion
    assert!(drag.x < 0.0);
    assert!(drag.z > 0.0);
}

#[test]
fn test_drag_force_zero_at_rest() {
    let sphere = Sphere::new(1.0, 1.0, Vec3::ZERO).unwrap();

    assert_eq!(Vec3::ZERO, sphere.drag_force(1.2));
}

#[test]
fn test_drag_force_zero_density() {
    let sphere = Sphere::with_velocity(1.0, 1.0, Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0)).unwrap();

    assert_eq!(Vec3::ZERO, sphere.drag_force(0.0));
}

#[test]
fn test_construction_rejects_bad_radius() {
    assert!(matches!(
        Sphere::new(0.0, 1.0, Vec3::ZERO),
        Err(PhysicsError::InvalidRadius(_))
    ));
    assert!(matches!(
        Sphere::new(-1.0, 1.0, Vec3::ZERO),
        Err(PhysicsError::InvalidRadius(_))
    ));
}

#[test]
fn test_construction_rejects_bad_mass() {
    assert!(matches!(
        Sphere::new(1.0, 0.0, Vec3::ZERO),
        Err(PhysicsError::InvalidMass(_))
    ));
    assert!(Sphere::new(1.0, f64::NAN, Vec3::ZERO).is_err());
}
