//! The abstract binary program: variables and the closed set of linear
//! constraint forms the solver boundary has to support.

/// Index of a variable in its formulation's arena. Only meaningful together
/// with the [`Formulation`](crate::formulation::Formulation) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// A binary decision cell. Accumulates an objective coefficient during
/// constraint generation and receives its 0/1 value after solving.
#[derive(Debug, Clone)]
pub struct BinaryVariable {
    name: String,
    objective_factor: f64,
    solution: Option<bool>,
}

impl BinaryVariable {
    pub(crate) fn new(name: String) -> Self {
        BinaryVariable {
            name,
            objective_factor: 0.0,
            solution: None,
        }
    }

    /// Diagnostic name of the variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coefficient of this variable in the maximised objective. A higher
    /// value means the solver prefers setting it to 1.
    pub fn objective_factor(&self) -> f64 {
        self.objective_factor
    }

    pub(crate) fn add_objective_factor(&mut self, add: f64) {
        self.objective_factor += add;
    }

    /// The assigned value, or `None` while the problem is unsolved.
    pub fn solution(&self) -> Option<bool> {
        self.solution
    }

    pub(crate) fn set_solution(&mut self, value: bool) {
        self.solution = Some(value);
    }
}

/// One linear relationship among binary variables. Every solution must
/// satisfy all constraints of a formulation.
///
/// The set is closed: a solver adapter must match exhaustively and fail
/// loudly if it cannot express a variant, rather than drop it.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// `var == value`
    ForceValue {
        name: String,
        var: VarId,
        value: bool,
    },
    /// `a == b`
    VarEq { name: String, a: VarId, b: VarId },
    /// `condition -> OR(any_of)`: if `condition` is true, at least one of
    /// `any_of` must be true.
    VarImpliesOr {
        name: String,
        condition: VarId,
        any_of: Vec<VarId>,
    },
    /// `SUM(vars) == total`
    SumEq {
        name: String,
        vars: Vec<VarId>,
        total: u32,
    },
    /// `SUM(vars) <= max`
    SumLeq {
        name: String,
        vars: Vec<VarId>,
        max: u32,
    },
    /// `SUM(vars) >= min`
    SumGeq {
        name: String,
        vars: Vec<VarId>,
        min: u32,
    },
}

impl Constraint {
    /// Diagnostic name, used in conflict reporting.
    pub fn name(&self) -> &str {
        match self {
            Constraint::ForceValue { name, .. }
            | Constraint::VarEq { name, .. }
            | Constraint::VarImpliesOr { name, .. }
            | Constraint::SumEq { name, .. }
            | Constraint::SumLeq { name, .. }
            | Constraint::SumGeq { name, .. } => name,
        }
    }
}
