//! Test fixtures and assertions for orbital invariants.

use glam::DVec3;

use crate::catalog::{Body, Catalog};
use crate::types::{AU_TO_METERS, GM_SUN, SUN_MASS};

/// Fixtures for building test catalogs and orbital states.
pub mod fixtures {
    use super::*;

    /// Sun at the origin plus Earth on a circular 1 AU orbit.
    pub fn two_body_catalog() -> Catalog {
        let (position, velocity) = circular_orbit(1.0);
        Catalog::new(vec![
            Body::new("Sun", SUN_MASS, 6.963e8, DVec3::ZERO, DVec3::ZERO),
            Body::new("Earth", 5.972e24, 6.371e6, position, velocity),
        ])
    }

    /// Circular-orbit state at the given distance from the Sun.
    ///
    /// The body sits on the positive x-axis with velocity along +y.
    pub fn circular_orbit(distance_au: f64) -> (DVec3, DVec3) {
        let r = distance_au * AU_TO_METERS;
        let v = (GM_SUN / r).sqrt();
        (DVec3::new(r, 0.0, 0.0), DVec3::new(0.0, v, 0.0))
    }

    /// Elliptical-orbit state at perihelion.
    pub fn elliptical_orbit(perihelion_au: f64, eccentricity: f64) -> (DVec3, DVec3) {
        assert!(
            (0.0..1.0).contains(&eccentricity),
            "eccentricity must be in [0, 1) for an elliptical orbit"
        );

        let r_p = perihelion_au * AU_TO_METERS;
        let a = r_p / (1.0 - eccentricity);
        // Vis-viva at perihelion: v = sqrt(GM * (2/r - 1/a))
        let v = (GM_SUN * (2.0 / r_p - 1.0 / a)).sqrt();
        (DVec3::new(r_p, 0.0, 0.0), DVec3::new(0.0, v, 0.0))
    }
}

/// Assertions and derived quantities for physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy about the Sun: E = v²/2 − GM/r.
    pub fn orbital_energy(pos: DVec3, vel: DVec3) -> f64 {
        0.5 * vel.length_squared() - GM_SUN / pos.length()
    }

    /// Specific angular momentum vector, L = r × v.
    pub fn angular_momentum(pos: DVec3, vel: DVec3) -> DVec3 {
        pos.cross(vel)
    }

    /// Orbital period from Kepler's third law: T = 2π·sqrt(a³/GM).
    pub fn orbital_period(semi_major_axis: f64) -> f64 {
        use std::f64::consts::TAU;
        TAU * (semi_major_axis.powi(3) / GM_SUN).sqrt()
    }

    /// Relative drift between an initial and final conserved quantity.
    pub fn relative_drift(initial: f64, final_value: f64) -> f64 {
        if initial.abs() > 1e-10 {
            ((final_value - initial) / initial).abs()
        } else {
            (final_value - initial).abs()
        }
    }
}
