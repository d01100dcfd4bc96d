//! Catalog of solar-system bodies and the probe seeded into a run.
//!
//! The catalog is produced once by an external loader and consumed here
//! as an immutable ordered sequence. Index order is significant: it
//! fixes the index-to-body mapping for every state of a run.

use glam::DVec3;

use crate::error::SimulationError;

/// Name the catalog must resolve for trajectory seeding.
pub const EARTH: &str = "Earth";

/// One massive object as recorded at catalog load time.
///
/// Position and velocity are barycentric, in meters and meters per
/// second. A trajectory run only reads these values to seed its initial
/// state; it never writes them back.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    /// Mass in kg.
    pub mass: f64,
    /// Physical radius in meters, kept for the presentation boundary.
    pub radius: f64,
    /// Barycentric position at catalog epoch (m).
    pub position: DVec3,
    /// Barycentric velocity at catalog epoch (m/s).
    pub velocity: DVec3,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: DVec3,
        velocity: DVec3,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
        }
    }
}

/// A probe seeded into a single run with a caller-chosen initial state.
#[derive(Clone, Debug)]
pub struct Probe {
    pub name: String,
    /// Mass in kg.
    pub mass: f64,
    /// Barycentric position (m).
    pub position: DVec3,
    /// Barycentric velocity (m/s).
    pub velocity: DVec3,
}

impl Probe {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: DVec3,
        velocity: DVec3,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
        }
    }
}

/// Immutable, ordered collection of catalog bodies.
///
/// Owns the index-to-name/mass/radius mappings for a run; anything that
/// needs a per-index attribute receives the catalog (or a table derived
/// from it) explicitly rather than reaching for shared global state.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    bodies: Vec<Body>,
}

impl Catalog {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Look a body up by name (ASCII case-insensitive).
    ///
    /// Returns the body and its catalog index. Resolving bodies by name
    /// keeps run seeding independent of catalog ordering.
    pub fn find(&self, name: &str) -> Option<(usize, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .find(|(_, body)| body.name.eq_ignore_ascii_case(name))
    }

    /// The catalog body trajectories launch from.
    pub fn earth(&self) -> Result<(usize, &Body), SimulationError> {
        self.find(EARTH)
            .ok_or_else(|| SimulationError::MissingBody(EARTH.to_string()))
    }

    /// Per-index mass table, in catalog order.
    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|body| body.mass).collect()
    }
}
