use thiserror::Error;

/// Everything that can go wrong between a problem instance and a decoded
/// schedule.
///
/// The input-consistency variants mean the caller supplied an invalid
/// instance and must fix it; they are raised before any solve attempt.
/// Solver infeasibility is not an error and surfaces as `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A coupling deducts more hours from a member assignment than it has,
    /// or leaves it with fewer hours than pinned slots.
    #[error("inconsistent coupling for {unit}: {detail}")]
    InconsistentGrouping { unit: String, detail: String },

    /// An assignment with remaining hours has no teacher.
    #[error("{unit} has remaining hours but no assigned teacher")]
    MissingTeacher { unit: String },

    /// A unit is pinned to a slot that is locked for teaching.
    #[error("{unit} has a fixed hour on locked slot {slot}")]
    FixedOnLockedSlot { unit: String, slot: String },

    /// The instance is malformed or outside the supported bounds.
    #[error("unsupported instance: {0}")]
    UnsupportedInstance(String),

    /// The instance contains no schedulable units or slots.
    #[error("the problem instance is empty")]
    EmptyProblem,

    /// A decode was attempted before every variable received a value.
    /// This is a misuse of the API, not a property of the instance.
    #[error("variable {0} has no solution")]
    UnsolvedVariable(String),

    /// The ILP backend failed for a reason other than infeasibility.
    #[error("solver failure: {0}")]
    Solver(String),
}
