//! Physical and configuration constants

/// Drag coefficient of a smooth sphere, used by the quadratic drag
/// model. The standard textbook value; the simulator treats it as a
/// fixed property of the body shape rather than a per-sphere input.
pub const DRAG_COEFFICIENT: f64 = 0.47;

/// Default world time step (one 60 Hz frame)
pub const DEFAULT_DT: f64 = 1.0 / 60.0;
