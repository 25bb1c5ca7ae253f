pub mod boundary;
pub mod constants;
pub mod error;
pub mod sphere;
pub mod vec3;
pub mod world;

pub use boundary::Boundary;
pub use constants::{DEFAULT_DT, DRAG_COEFFICIENT};
pub use error::PhysicsError;
pub use sphere::Sphere;
pub use vec3::Vec3;
pub use world::{SphereHandle, World};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
