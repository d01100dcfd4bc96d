//! Error taxonomy for simulation runs.
//!
//! Configuration errors surface before integration starts, input
//! validation errors before any stepping, and numerical errors at the
//! evaluation that triggered them. A failed run produces no partial
//! trajectory and no partial history append.

/// Errors reported by catalog validation, the solver, and the gravity field.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The catalog contains no bodies at all.
    #[error("catalog contains no bodies")]
    EmptyCatalog,

    /// A body required for run seeding is missing from the catalog.
    #[error("catalog has no body named \"{0}\"")]
    MissingBody(String),

    /// The initial state tracks no bodies.
    #[error("initial state contains no bodies")]
    EmptyState,

    /// The gravity field's mass table and the state disagree on body count.
    #[error("state tracks {bodies} bodies but the field carries {masses} masses")]
    BodyCountMismatch { bodies: usize, masses: usize },

    /// No sample times were requested.
    #[error("no sample times given")]
    EmptyTimes,

    /// The first sample time does not match the initial state time.
    #[error("sample times must start at the initial state time (expected {expected}, got {got})")]
    MisalignedStart { expected: f64, got: f64 },

    /// Sample times decreased somewhere in the sequence.
    #[error("sample times must be non-decreasing (times[{index}] = {value} after {previous})")]
    DecreasingTimes {
        index: usize,
        value: f64,
        previous: f64,
    },

    /// Step size must be strictly positive.
    #[error("step size must be positive, got {0}")]
    InvalidStepSize(f64),

    /// Final time must be non-negative.
    #[error("final time must be non-negative, got {0}")]
    NegativeFinalTime(f64),

    /// Two bodies came close enough for the force sum to blow up.
    #[error("bodies {first} and {second} are within {separation} m at t = {time} s")]
    SingularSeparation {
        first: usize,
        second: usize,
        separation: f64,
        time: f64,
    },
}
