//! Spherical containment boundary

use crate::error::PhysicsError;
use crate::sphere::Sphere;

/// An origin-centered spherical containment surface
#[derive(Debug, Clone)]
pub struct Boundary {
    radius: f64,
}

impl Boundary {
    pub fn new(radius: f64) -> Result<Self, PhysicsError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidBoundaryRadius(radius));
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Clamp the sphere back inside the boundary. If the sphere's
    /// surface pokes past the boundary, its center is rescaled along
    /// its own radial direction so that |position| + sphere radius
    /// equals the boundary radius. Velocity is left untouched, so a
    /// sphere still moving outward gets re-clamped to the same spot on
    /// every subsequent step.
    pub fn resolve(&self, sphere: &mut Sphere) {
        let position = sphere.position();
        let distance = position.length();
        if distance + sphere.radius() > self.radius {
            // A sphere centered exactly at the origin has no radial
            // direction to project onto.
            if distance > 0.0 {
                let scale = (self.radius - sphere.radius()) / distance;
                sphere.set_position(position * scale);
            }
        }
    }
}
