//! The physics world: environment forces plus the per-step sweep over
//! all registered spheres

use crate::boundary::Boundary;
use crate::constants::DEFAULT_DT;
use crate::error::PhysicsError;
use crate::sphere::Sphere;
use crate::vec3::Vec3;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared, caller-owned sphere handle registered with a [`World`]
pub type SphereHandle = Rc<RefCell<Sphere>>;

/// The physics world. Holds non-owning handles to caller-owned
/// spheres, the global environment (gravity, fluid density, time
/// step), and an optional owned containment boundary.
#[derive(Debug)]
pub struct World {
    spheres: Vec<Weak<RefCell<Sphere>>>,
    gravity: Vec3,
    fluid_density: f64,
    dt: f64,
    boundary: Option<Boundary>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// A world with zero gravity and zero fluid density
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            gravity: Vec3::ZERO,
            fluid_density: 0.0,
            dt: DEFAULT_DT,
            boundary: None,
        }
    }

    pub fn with_gravity(gravity: Vec3) -> Self {
        Self::with_environment(gravity, 0.0)
    }

    pub fn with_environment(gravity: Vec3, fluid_density: f64) -> Self {
        Self {
            gravity,
            fluid_density,
            ..Self::new()
        }
    }

    /// Register a caller-owned sphere. The world keeps a weak handle;
    /// the caller retains ownership and must keep the sphere alive for
    /// as long as it stays registered. Duplicates are allowed and not
    /// deduplicated: a sphere added twice is stepped twice per update.
    pub fn add_sphere(&mut self, sphere: &SphereHandle) {
        self.spheres.push(Rc::downgrade(sphere));
    }

    /// Number of registered handles, duplicates included
    pub fn num_spheres(&self) -> usize {
        self.spheres.len()
    }

    /// Attach a containment boundary, taking ownership. Replaces and
    /// drops any previously attached boundary.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = Some(boundary);
    }

    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    pub fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn fluid_density(&self) -> f64 {
        self.fluid_density
    }

    /// Advance the whole world by one time step. Each sphere is fully
    /// processed in insertion order: environment acceleration (gravity
    /// plus drag over mass), then its own integration step, then the
    /// boundary clamp if a boundary is attached. Spheres never interact,
    /// so there is no integrate-all-then-resolve-all phase split.
    ///
    /// Returns [`PhysicsError::StaleSphere`] if a registered sphere was
    /// dropped by its owner.
    pub fn update(&mut self) -> Result<(), PhysicsError> {
        for (index, handle) in self.spheres.iter().enumerate() {
            let sphere = handle
                .upgrade()
                .ok_or(PhysicsError::StaleSphere { index })?;
            let mut sphere = sphere.borrow_mut();

            let drag = sphere.drag_force(self.fluid_density);
            let acceleration = self.gravity + drag * (1.0 / sphere.mass());
            sphere.update(self.dt, acceleration);

            if let Some(boundary) = &self.boundary {
                boundary.resolve(&mut sphere);
            }
        }
        Ok(())
    }
}
