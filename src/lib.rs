//! Formulates the school-timetabling problem as a binary integer linear
//! program and decodes a solution back into a weekly schedule.
//!
//! One binary variable is created per schedulable teaching unit and time
//! slot; the timetabling rules (weekly hours, conflict freedom, locked and
//! pinned slots, double periods, subject-per-day limits, teacher
//! availability, period priorities, demanding-subject spreading) become
//! linear constraints and objective weights over those variables. The
//! actual optimization is delegated to HiGHS through `good_lp`.
//!
//! ```no_run
//! use timetable_solver::{SchedulingInput, solve};
//!
//! let input: SchedulingInput = todo!("build or deserialize an instance");
//! match solve(&input)? {
//!     Some(schedule) => println!("{} lessons scheduled", schedule.entries.len()),
//!     None => println!("no feasible schedule exists"),
//! }
//! # Ok::<(), timetable_solver::ModelError>(())
//! ```

pub mod binary;
pub mod data;
pub mod error;
pub mod formulation;
pub mod solver;

pub use data::{Schedule, SchedulingInput, SolverParameters};
pub use error::ModelError;
pub use formulation::Formulation;
pub use solver::{solve, solve_with_time_limit};
