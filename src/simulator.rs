//! Probe trajectory orchestration.
//!
//! Turns a probe's Earth-relative launch condition into a full-system
//! trajectory: frame conversion, initial-state composition, solver
//! delegation, probe extraction, and the replayable history consumed by
//! the presentation layer.

use glam::DVec3;
use log::debug;

use crate::catalog::{Catalog, Probe};
use crate::error::SimulationError;
use crate::physics::{GravityField, Solver, SystemState};
use crate::types::PROBE_MASS;

/// Append-only record of every state produced by one simulator instance.
///
/// Runs append in call order; the record is never reordered or pruned,
/// so the presentation layer can replay it at any point.
#[derive(Debug, Default)]
pub struct SimulationHistory {
    states: Vec<SystemState>,
}

impl SimulationHistory {
    pub fn states(&self) -> &[SystemState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn last(&self) -> Option<&SystemState> {
        self.states.last()
    }
}

/// Simulates probes launched from Earth through the catalog's system.
///
/// One instance owns its history; runs on the same instance accumulate.
/// Catalog records are read-only throughout: a run copies their state
/// vectors into its initial [`SystemState`] and never writes back.
pub struct ProbeSimulator {
    catalog: Catalog,
    earth_index: usize,
    solver: Solver,
    history: SimulationHistory,
}

impl ProbeSimulator {
    /// Build a simulator around the default (RK4) solver.
    ///
    /// Fails fast on configuration errors: an empty catalog, or no body
    /// named "Earth" to launch from.
    pub fn new(catalog: Catalog) -> Result<Self, SimulationError> {
        Self::with_solver(catalog, Solver::runge_kutta())
    }

    /// Build a simulator around an explicitly configured solver.
    pub fn with_solver(catalog: Catalog, solver: Solver) -> Result<Self, SimulationError> {
        if catalog.is_empty() {
            return Err(SimulationError::EmptyCatalog);
        }
        let (earth_index, _) = catalog.earth()?;
        Ok(Self {
            catalog,
            earth_index,
            solver,
            history: SimulationHistory::default(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every state produced so far, across all runs, in call order.
    pub fn history(&self) -> &SimulationHistory {
        &self.history
    }

    /// Compose the initial state: catalog bodies in catalog order, the
    /// probe appended at the final index, clock at zero.
    pub fn build_initial_state(&self, probe: &Probe) -> SystemState {
        let mut positions = Vec::with_capacity(self.catalog.len() + 1);
        let mut velocities = Vec::with_capacity(self.catalog.len() + 1);
        for body in self.catalog.bodies() {
            positions.push(body.position);
            velocities.push(body.velocity);
        }
        positions.push(probe.position);
        velocities.push(probe.velocity);
        SystemState::new(positions, velocities, 0.0)
    }

    /// Probe positions at caller-specified sample times.
    ///
    /// `p0` and `v0` are relative to Earth's catalog position and
    /// velocity; returned positions are barycentric. `times[0]` must be
    /// 0, the launch instant.
    pub fn trajectory(
        &mut self,
        p0: DVec3,
        v0: DVec3,
        times: &[f64],
    ) -> Result<Vec<DVec3>, SimulationError> {
        let (field, initial) = self.prepare_run(p0, v0);
        let states = self.solver.solve_at(&field, &initial, times)?;
        Ok(self.commit(states))
    }

    /// Probe positions on a uniform grid of `step`-sized steps, the
    /// final step shortened to land exactly on `final_time`.
    pub fn trajectory_with_step(
        &mut self,
        p0: DVec3,
        v0: DVec3,
        final_time: f64,
        step: f64,
    ) -> Result<Vec<DVec3>, SimulationError> {
        let (field, initial) = self.prepare_run(p0, v0);
        let states = self.solver.solve_fixed(&field, &initial, final_time, step)?;
        Ok(self.commit(states))
    }

    /// Frame conversion plus run setup: the probe in the barycentric
    /// frame, a fresh gravity field, and the composed initial state.
    fn prepare_run(&self, p0: DVec3, v0: DVec3) -> (GravityField, SystemState) {
        let earth = &self.catalog.bodies()[self.earth_index];
        let probe = Probe::new(
            "Probe",
            PROBE_MASS,
            p0 + earth.position,
            v0 + earth.velocity,
        );

        let mut masses = self.catalog.masses();
        masses.push(probe.mass);
        let field = GravityField::new(masses);
        let initial = self.build_initial_state(&probe);
        (field, initial)
    }

    /// Append a successful run to the history and extract the probe's
    /// position stream. A failed run never reaches this point, so the
    /// history only ever grows by whole runs.
    fn commit(&mut self, states: Vec<SystemState>) -> Vec<DVec3> {
        let probe_index = self.catalog.len();
        debug!("run committed {} states to history", states.len());
        let positions = states
            .iter()
            .map(|state| state.position(probe_index))
            .collect();
        self.history.states.extend(states);
        positions
    }
}
