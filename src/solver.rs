//! Solver boundary: maps a [`Formulation`] onto the HiGHS ILP solver via
//! `good_lp`, runs the single long blocking solve, writes the 0/1 values
//! back and decodes the schedule.

use crate::binary::{Constraint, VarId};
use crate::data::{Schedule, SchedulingInput};
use crate::error::ModelError;
use crate::formulation::Formulation;
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable,
    constraint, default_solver, variable,
};
use log::info;
use std::time::{Duration, Instant};

/// Solves the timetabling problem. `Ok(None)` means the instance is
/// infeasible or no solution was found within the time budget.
pub fn solve(input: &SchedulingInput) -> Result<Option<Schedule>, ModelError> {
    solve_with_time_limit(input, None)
}

/// Like [`solve`], with a wall-clock budget for the solver. HiGHS returns
/// its best incumbent when the budget runs out.
pub fn solve_with_time_limit(
    input: &SchedulingInput,
    time_limit: Option<Duration>,
) -> Result<Option<Schedule>, ModelError> {
    let start = Instant::now();
    let mut formulation = Formulation::new(input)?;

    let mut problem = ProblemVariables::new();
    let lp_vars: Vec<Variable> =
        problem.add_vector(variable().binary(), formulation.variables().len());

    let objective: Expression = formulation
        .variables()
        .iter()
        .zip(&lp_vars)
        .filter(|(v, _)| v.objective_factor() != 0.0)
        .map(|(v, lp)| v.objective_factor() * *lp)
        .sum();

    let mut model = problem
        .maximise(objective)
        .using(default_solver)
        .set_option("threads", 1) // limit to 1 thread for reproducibility
        .set_option("random_seed", 1234)
        .set_option("log_to_console", "false");
    if let Some(limit) = time_limit {
        model = model.set_option("time_limit", limit.as_secs_f64());
    }

    for c in formulation.constraints() {
        match c {
            Constraint::ForceValue { var, value, .. } => {
                let lhs = Expression::from(lp_vars[var.0]);
                let rhs = if *value { 1.0 } else { 0.0 };
                model.add_constraint(constraint!(lhs == rhs));
            }
            Constraint::VarEq { a, b, .. } => {
                let lhs = Expression::from(lp_vars[a.0]);
                let rhs = Expression::from(lp_vars[b.0]);
                model.add_constraint(constraint!(lhs == rhs));
            }
            Constraint::VarImpliesOr { condition, any_of, .. } => {
                // condition <= sum(any_of)
                let lhs = Expression::from(lp_vars[condition.0]);
                let rhs: Expression = any_of.iter().map(|v| lp_vars[v.0]).sum();
                model.add_constraint(constraint!(rhs >= lhs));
            }
            Constraint::SumEq { vars, total, .. } => {
                let lhs: Expression = vars.iter().map(|v| lp_vars[v.0]).sum();
                let rhs = f64::from(*total);
                model.add_constraint(constraint!(lhs == rhs));
            }
            Constraint::SumLeq { vars, max, .. } => {
                let lhs: Expression = vars.iter().map(|v| lp_vars[v.0]).sum();
                let rhs = f64::from(*max);
                model.add_constraint(constraint!(lhs <= rhs));
            }
            Constraint::SumGeq { vars, min, .. } => {
                let lhs: Expression = vars.iter().map(|v| lp_vars[v.0]).sum();
                let rhs = f64::from(*min);
                model.add_constraint(constraint!(lhs >= rhs));
            }
        }
    }

    info!(
        "starting ILP solve with {} variables and {} constraints",
        lp_vars.len(),
        formulation.constraints().len()
    );
    let solution = match model.solve() {
        Ok(s) => s,
        Err(ResolutionError::Infeasible) => {
            info!("instance is infeasible, no schedule exists");
            return Ok(None);
        }
        Err(e) => return Err(ModelError::Solver(e.to_string())),
    };
    info!("solution found in {:.2?}", start.elapsed());

    for (i, lp) in lp_vars.iter().enumerate() {
        formulation.set_solution(VarId(i), solution.value(*lp) > 0.9);
    }
    formulation.decode().map(Some)
}
