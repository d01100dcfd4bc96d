//! Built-in representative catalog.
//!
//! The engine consumes catalogs produced by an external loader; this
//! module provides an in-memory stand-in with real masses and radii,
//! J2000 mean-longitude phases, and circular state vectors. Good enough
//! for demos and tests; a mission run would load proper ephemeris data
//! instead.

use glam::DVec3;

use crate::catalog::{Body, Catalog};
use crate::types::{AU_TO_METERS, G, GM_SUN, SUN_MASS};

const EARTH_MASS: f64 = 5.972e24;
const EARTH_A_AU: f64 = 1.000;
const EARTH_LONGITUDE: f64 = 100.47;

const SATURN_MASS: f64 = 5.683e26;
const SATURN_A_AU: f64 = 9.537;
const SATURN_LONGITUDE: f64 = 49.95;

/// Circular state vectors at mean longitude `longitude_deg` on an orbit
/// of radius `a` meters about a parent with gravitational parameter `gm`.
fn circular_state(a: f64, longitude_deg: f64, gm: f64) -> (DVec3, DVec3) {
    let lambda = longitude_deg.to_radians();
    let (sin, cos) = lambda.sin_cos();
    let speed = (gm / a).sqrt();
    let position = DVec3::new(a * cos, a * sin, 0.0);
    let velocity = DVec3::new(-speed * sin, speed * cos, 0.0);
    (position, velocity)
}

/// Sun, the eight planets, the Moon and Titan.
pub fn solar_system() -> Catalog {
    let mut bodies = vec![Body::new("Sun", SUN_MASS, 6.963e8, DVec3::ZERO, DVec3::ZERO)];

    // name, mass (kg), radius (m), semi-major axis (AU), mean longitude at J2000 (deg)
    let planets: [(&str, f64, f64, f64, f64); 8] = [
        ("Mercury", 3.302e23, 2.440e6, 0.387, 252.25),
        ("Venus", 4.869e24, 6.052e6, 0.723, 181.98),
        ("Earth", EARTH_MASS, 6.371e6, EARTH_A_AU, EARTH_LONGITUDE),
        ("Mars", 6.417e23, 3.390e6, 1.524, 355.45),
        ("Jupiter", 1.898e27, 6.991e7, 5.203, 34.40),
        ("Saturn", SATURN_MASS, 5.823e7, SATURN_A_AU, SATURN_LONGITUDE),
        ("Uranus", 8.681e25, 2.536e7, 19.19, 313.23),
        ("Neptune", 1.024e26, 2.462e7, 30.07, 304.88),
    ];

    for (name, mass, radius, a_au, longitude) in planets {
        let (position, velocity) = circular_state(a_au * AU_TO_METERS, longitude, GM_SUN);
        bodies.push(Body::new(name, mass, radius, position, velocity));
    }

    // Moons ride on their parent's heliocentric state vector.
    let (earth_pos, earth_vel) =
        circular_state(EARTH_A_AU * AU_TO_METERS, EARTH_LONGITUDE, GM_SUN);
    let (moon_rel_pos, moon_rel_vel) =
        circular_state(3.844e8, EARTH_LONGITUDE, G * EARTH_MASS);
    bodies.push(Body::new(
        "Moon",
        7.342e22,
        1.737e6,
        earth_pos + moon_rel_pos,
        earth_vel + moon_rel_vel,
    ));

    let (saturn_pos, saturn_vel) =
        circular_state(SATURN_A_AU * AU_TO_METERS, SATURN_LONGITUDE, GM_SUN);
    let (titan_rel_pos, titan_rel_vel) =
        circular_state(1.2219e9, SATURN_LONGITUDE, G * SATURN_MASS);
    bodies.push(Body::new(
        "Titan",
        1.345e23,
        2.575e6,
        saturn_pos + titan_rel_pos,
        saturn_vel + titan_rel_vel,
    ));

    Catalog::new(bodies)
}
