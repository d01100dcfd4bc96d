//! Pairwise Newtonian gravity as a derivative field.

use glam::DVec3;
use log::warn;

use super::state::SystemState;
use crate::error::SimulationError;
use crate::types::G;

/// Minimum allowed separation between two bodies, in meters.
///
/// Below this the force term is numerically meaningless; the field
/// reports the offending pair instead of letting a near-singular
/// denominator poison every later state. No real orbit comes anywhere
/// near 1 m.
pub const MIN_SEPARATION: f64 = 1.0;

/// Time-derivative of a state, parallel-indexed with it: the rate of
/// change of each position (its velocity) and of each velocity (its
/// acceleration).
#[derive(Clone, Debug)]
pub struct Rate {
    pub velocities: Vec<DVec3>,
    pub accelerations: Vec<DVec3>,
}

/// Newtonian N-body gravity over a fixed mass table.
///
/// The field owns the per-index masses for one run (catalog bodies plus
/// the probe); states carry only positions and velocities. Evaluation
/// is a pure function of the state, safe to call repeatedly on
/// independent snapshots.
#[derive(Clone, Debug)]
pub struct GravityField {
    masses: Vec<f64>,
}

impl GravityField {
    pub fn new(masses: Vec<f64>) -> Self {
        Self { masses }
    }

    pub fn body_count(&self) -> usize {
        self.masses.len()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Evaluate the derivative of `state`.
    ///
    /// Every body feels every other body:
    /// `a_i = Σ_{j≠i} G·m_j·(p_j − p_i) / |p_j − p_i|³`.
    /// A pair closer than [`MIN_SEPARATION`] is reported as
    /// [`SimulationError::SingularSeparation`] rather than silently
    /// producing non-finite values.
    pub fn evaluate(&self, state: &SystemState) -> Result<Rate, SimulationError> {
        if state.len() != self.masses.len() {
            return Err(SimulationError::BodyCountMismatch {
                bodies: state.len(),
                masses: self.masses.len(),
            });
        }

        let positions = state.positions();
        let mut accelerations = vec![DVec3::ZERO; positions.len()];

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let delta = positions[j] - positions[i];
                let r_squared = delta.length_squared();

                if r_squared < MIN_SEPARATION * MIN_SEPARATION {
                    let separation = r_squared.sqrt();
                    warn!(
                        "bodies {i} and {j} within {separation} m at t = {} s",
                        state.time()
                    );
                    return Err(SimulationError::SingularSeparation {
                        first: i,
                        second: j,
                        separation,
                        time: state.time(),
                    });
                }

                let r = r_squared.sqrt();
                // a = G·m / r² along delta; delta / r is the unit vector
                let inv_r3 = 1.0 / (r_squared * r);
                accelerations[i] += delta * (G * self.masses[j] * inv_r3);
                accelerations[j] -= delta * (G * self.masses[i] * inv_r3);
            }
        }

        Ok(Rate {
            velocities: state.velocities().to_vec(),
            accelerations,
        })
    }

    /// Total mechanical energy of `state` under this field (J): kinetic
    /// plus pairwise gravitational potential. Diagnostic used by the
    /// conservation tests.
    pub fn total_energy(&self, state: &SystemState) -> f64 {
        let mut energy = 0.0;
        for (i, v) in state.velocities().iter().enumerate() {
            energy += 0.5 * self.masses[i] * v.length_squared();
        }

        let positions = state.positions();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let r = (positions[j] - positions[i]).length();
                energy -= G * self.masses[i] * self.masses[j] / r;
            }
        }
        energy
    }
}
