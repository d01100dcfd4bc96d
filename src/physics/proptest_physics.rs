//! Property-based tests for the physics core.
//!
//! These verify invariants across ranges of orbital parameters rather
//! than single hand-picked cases.

use glam::DVec3;
use proptest::prelude::*;

use super::{GravityField, Solver, SystemState};
use crate::test_utils::{assertions, fixtures};
use crate::types::{AU_TO_METERS, SUN_MASS};

fn two_body_system(pos: DVec3, vel: DVec3) -> (GravityField, SystemState) {
    let field = GravityField::new(vec![SUN_MASS, 1.0]);
    let state = SystemState::new(
        vec![DVec3::ZERO, pos],
        vec![DVec3::ZERO, vel],
        0.0,
    );
    (field, state)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The symplectic scheme conserves energy over one orbital period
    /// for a wide range of bound orbits.
    #[test]
    fn prop_verlet_energy_conservation_one_orbit(
        distance_au in 0.5f64..5.0,
        eccentricity in 0.0f64..0.6,
    ) {
        let (pos, vel) = fixtures::elliptical_orbit(distance_au, eccentricity);
        let (field, initial) = two_body_system(pos, vel);

        let r_p = distance_au * AU_TO_METERS;
        let a = r_p / (1.0 - eccentricity);
        let period = assertions::orbital_period(a);

        let mut solver = Solver::velocity_verlet();
        let states = solver
            .solve_fixed(&field, &initial, period, period / 2048.0)
            .expect("bound orbit must integrate");

        let e0 = field.total_energy(&initial);
        let e1 = field.total_energy(states.last().expect("grid is never empty"));
        let drift = assertions::relative_drift(e0, e1);
        prop_assert!(
            drift < 0.01,
            "energy drift {:.4}% exceeds 1% (e = {}, a = {} AU)",
            drift * 100.0, eccentricity, a / AU_TO_METERS
        );
    }

    /// Angular momentum of the orbiter is conserved under the central
    /// force, for either scheme.
    #[test]
    fn prop_angular_momentum_conservation(
        distance_au in 0.5f64..5.0,
        eccentricity in 0.0f64..0.6,
    ) {
        let (pos, vel) = fixtures::elliptical_orbit(distance_au, eccentricity);
        let (field, initial) = two_body_system(pos, vel);

        let r_p = distance_au * AU_TO_METERS;
        let a = r_p / (1.0 - eccentricity);
        let period = assertions::orbital_period(a);

        let mut solver = Solver::runge_kutta();
        let states = solver
            .solve_fixed(&field, &initial, period, period / 1024.0)
            .expect("bound orbit must integrate");

        let last = states.last().expect("grid is never empty");
        let l0 = assertions::angular_momentum(pos, vel);
        let l1 = assertions::angular_momentum(last.position(1), last.velocity(1));
        let drift = (l1 - l0).length() / l0.length();
        prop_assert!(
            drift < 0.001,
            "angular momentum drift {:.4}% exceeds 0.1%",
            drift * 100.0
        );
    }

    /// The fixed-step grid always contains ceil(tf/h) + 1 states, with
    /// the last landing exactly on the final time.
    #[test]
    fn prop_fixed_step_grid_shape(
        final_time in 1.0f64..500.0,
        step in 0.5f64..40.0,
    ) {
        let (pos, vel) = fixtures::circular_orbit(1.0);
        let (field, initial) = two_body_system(pos, vel);

        let mut solver = Solver::runge_kutta();
        let states = solver
            .solve_fixed(&field, &initial, final_time, step)
            .expect("valid grid input");

        let expected = (final_time / step).ceil() as usize + 1;
        prop_assert_eq!(states.len(), expected);

        let last = states.last().expect("grid is never empty");
        prop_assert!((last.time() - final_time).abs() < 1e-9);
    }

    /// A decreasing pair anywhere in the sample times is rejected
    /// before any stepping.
    #[test]
    fn prop_decreasing_times_rejected(
        first in 1.0f64..100.0,
        drop in 0.1f64..0.9,
    ) {
        let (pos, vel) = fixtures::circular_orbit(1.0);
        let (field, initial) = two_body_system(pos, vel);

        let times = [0.0, first, first * drop];
        let mut solver = Solver::runge_kutta();
        prop_assert!(solver.solve_at(&field, &initial, &times).is_err());
    }
}
