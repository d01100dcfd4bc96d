//! Physics core: system state snapshots, the gravitational derivative
//! field, and the step-advancing solver.

mod gravity;
mod integrator;
mod state;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{GravityField, MIN_SEPARATION, Rate};
pub use integrator::{DEFAULT_MAX_STEP, RungeKutta4, Solver, SteppingScheme, VelocityVerlet};
pub use state::SystemState;
