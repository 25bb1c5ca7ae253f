//! A sphere body: kinematic state plus its own force integration step

use crate::constants::DRAG_COEFFICIENT;
use crate::error::PhysicsError;
use crate::vec3::Vec3;
use std::f64::consts::PI;

/// A point-mass sphere. Radius and mass are fixed at construction;
/// position and velocity mutate only through [`Sphere::update`] or
/// boundary resolution.
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f64,
    mass: f64,
    position: Vec3,
    velocity: Vec3,
}

impl Sphere {
    /// Create a sphere at rest. Fails fast on non-positive or
    /// non-finite radius/mass so the drag-over-mass division in the
    /// world step can never hit zero.
    pub fn new(radius: f64, mass: f64, position: Vec3) -> Result<Self, PhysicsError> {
        Self::with_velocity(radius, mass, position, Vec3::ZERO)
    }

    /// Create a sphere with an initial velocity
    pub fn with_velocity(
        radius: f64,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
    ) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        Ok(Self {
            radius,
            mass,
            position,
            velocity,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Used by external collision resolution; everything else goes
    /// through [`Sphere::update`].
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Advance one step with semi-implicit Euler: velocity first, then
    /// position with the already-updated velocity. The ordering is what
    /// makes the scheme symplectic and is relied on by every expected
    /// numeric output.
    pub fn update(&mut self, dt: f64, acceleration: Vec3) {
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Quadratic drag opposing the current velocity, computed per
    /// component: -0.5 * rho * C_d * (pi * r^2) * v_c^2 * sign(v_c).
    pub fn drag_force(&self, fluid_density: f64) -> Vec3 {
        let area = PI * self.radius * self.radius;
        let magnitude = self.velocity * self.velocity * (0.5 * fluid_density * DRAG_COEFFICIENT * area);
        -(Vec3::sign(self.velocity) * magnitude)
    }
}
