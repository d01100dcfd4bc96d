//! System state snapshots.

use glam::DVec3;

use super::gravity::Rate;

/// One time-stamped snapshot of every tracked body's position and velocity.
///
/// States are fully owned values: stepping produces a new state rather
/// than mutating a published one, so a recorded history stays valid
/// indefinitely. Index order is fixed when the initial state is built
/// (catalog bodies first, probe last) and shared by every state of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemState {
    positions: Vec<DVec3>,
    velocities: Vec<DVec3>,
    time: f64,
}

impl SystemState {
    /// Build a state from parallel position/velocity sequences.
    ///
    /// # Panics
    /// Panics if the sequences differ in length. The index invariant is
    /// established here and preserved by every operation that follows.
    pub fn new(positions: Vec<DVec3>, velocities: Vec<DVec3>, time: f64) -> Self {
        assert_eq!(
            positions.len(),
            velocities.len(),
            "positions and velocities must be parallel"
        );
        Self {
            positions,
            velocities,
            time,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Simulation time of this snapshot, in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec3] {
        &self.velocities
    }

    pub fn position(&self, index: usize) -> DVec3 {
        self.positions[index]
    }

    pub fn velocity(&self, index: usize) -> DVec3 {
        self.velocities[index]
    }

    /// `self + h · rate`: advance every position by its rate of change
    /// (the velocity sample) and every velocity by its acceleration,
    /// moving the clock by `h`. Returns a new state; the operands are
    /// untouched.
    pub fn add_scaled(&self, h: f64, rate: &Rate) -> SystemState {
        let positions = self
            .positions
            .iter()
            .zip(&rate.velocities)
            .map(|(p, v)| *p + *v * h)
            .collect();
        let velocities = self
            .velocities
            .iter()
            .zip(&rate.accelerations)
            .map(|(v, a)| *v + *a * h)
            .collect();
        SystemState::new(positions, velocities, self.time + h)
    }
}
