//! Common helpers for integration tests.

use glam::DVec3;
use outbound::physics::{GravityField, SystemState};
use outbound::types::{AU_TO_METERS, GM_SUN, SUN_MASS};

/// Circular-orbit state at the given distance from the Sun.
pub fn circular_orbit(distance_au: f64) -> (DVec3, DVec3) {
    let r = distance_au * AU_TO_METERS;
    let v = (GM_SUN / r).sqrt();
    (DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, v, 0.0))
}

/// Elliptical-orbit state at perihelion.
pub fn elliptical_orbit(perihelion_au: f64, eccentricity: f64) -> (DVec3, DVec3) {
    let r_p = perihelion_au * AU_TO_METERS;
    let a = r_p / (1.0 - eccentricity);
    let v = (GM_SUN * (2.0 / r_p - 1.0 / a)).sqrt();
    (DVec3::new(r_p, 0.0, 0.0), DVec3::new(0.0, v, 0.0))
}

/// Sun plus a 1 kg orbiter as a (field, state) pair ready to solve.
pub fn two_body_system(pos: DVec3, vel: DVec3) -> (GravityField, SystemState) {
    let field = GravityField::new(vec![SUN_MASS, 1.0]);
    let state = SystemState::new(vec![DVec3::ZERO, pos], vec![DVec3::ZERO, vel], 0.0);
    (field, state)
}

/// Specific orbital energy about the Sun.
pub fn orbital_energy(pos: DVec3, vel: DVec3) -> f64 {
    0.5 * vel.length_squared() - GM_SUN / pos.length()
}

/// Orbital period from Kepler's third law.
pub fn orbital_period(semi_major_axis: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / GM_SUN).sqrt()
}

/// Relative drift between an initial and final conserved quantity.
pub fn relative_drift(initial: f64, final_value: f64) -> f64 {
    ((final_value - initial) / initial).abs()
}
