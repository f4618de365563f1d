//! Translates the timetabling domain model into a binary integer linear
//! program: one 0/1 variable per teaching unit and time slot, plus the
//! constraints and objective weights encoding the timetabling rules.
//!
//! The formulation is solver-agnostic; an adapter hands the variable and
//! constraint lists to an ILP backend and writes the 0/1 values back before
//! decoding.

use crate::binary::{BinaryVariable, Constraint, VarId};
use crate::data::{
    Availability, ClassId, ClassSchedule, Coupling, Priority, Schedule, ScheduleEntry,
    SchedulingInput, SlotId, SoftWeight, TeacherSchedule, TeachingUnit, Weekday,
};
use crate::error::ModelError;
use itertools::Itertools;
use log::{debug, info};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A time slot with its period attributes resolved, stored in canonical
/// (weekday, period) order.
#[derive(Debug, Clone)]
struct Slot {
    weekday: Weekday,
    period_number: u32,
    priority: Priority,
    locked: bool,
    double_period_start: bool,
}

impl Slot {
    fn label(&self) -> String {
        format!("{}{}", self.weekday.short(), self.period_number)
    }
}

/// The private, normalized working copy of the instance: coupled hours
/// deducted, empty units removed, slots in canonical order, participation
/// indexed per class and teacher.
#[derive(Debug)]
struct WorkingSet {
    slots: Vec<Slot>,
    units: Vec<TeachingUnit>,
    /// Diagnostic label per unit.
    labels: Vec<String>,
    /// Per unit, whether any of its subjects is demanding.
    hard: Vec<bool>,
    /// Per unit, its fixed slots as canonical slot positions.
    fixed: Vec<HashSet<usize>>,
    /// Input slot id to canonical position.
    pos_of: HashMap<SlotId, usize>,
    /// Per class, the units it participates in.
    class_units: BTreeMap<ClassId, Vec<usize>>,
    /// Per teacher, the units it participates in.
    teacher_units: BTreeMap<usize, Vec<usize>>,
}

impl WorkingSet {
    fn normalize(input: &SchedulingInput) -> Result<WorkingSet, ModelError> {
        validate_references(input)?;

        let mut order: Vec<SlotId> = (0..input.slots.len()).collect();
        order.sort_by_key(|&s| {
            (
                input.slots[s].weekday,
                input.periods[input.slots[s].period].number,
            )
        });
        let pos_of: HashMap<SlotId, usize> =
            order.iter().enumerate().map(|(pos, &s)| (s, pos)).collect();
        let slots: Vec<Slot> = order
            .iter()
            .map(|&s| {
                let ts = input.slots[s];
                let period = &input.periods[ts.period];
                Slot {
                    weekday: ts.weekday,
                    period_number: period.number,
                    priority: period.priority,
                    locked: period.locked_on.contains(&ts.weekday),
                    double_period_start: period.double_period_start,
                }
            })
            .collect();

        // Deduct coupled hours from the member assignments so they are not
        // scheduled twice.
        let mut hours: Vec<i64> = input
            .assignments
            .iter()
            .map(|a| i64::from(a.hours_per_week))
            .collect();
        for coupling in &input.couplings {
            for &aid in &coupling.assignments {
                let assignment = &input.assignments[aid];
                hours[aid] -= i64::from(coupling.hours_per_week);
                if hours[aid] < 0 {
                    return Err(ModelError::InconsistentGrouping {
                        unit: single_label(assignment, input),
                        detail: "more coupled hours than weekly hours".into(),
                    });
                }
                if hours[aid] < assignment.fixed_slots.len() as i64 {
                    return Err(ModelError::InconsistentGrouping {
                        unit: single_label(assignment, input),
                        detail: "fewer remaining hours than fixed slots".into(),
                    });
                }
            }
        }
        for (aid, assignment) in input.assignments.iter().enumerate() {
            if hours[aid] != 0 && assignment.teacher.is_none() {
                return Err(ModelError::MissingTeacher {
                    unit: single_label(assignment, input),
                });
            }
        }

        let mut units = Vec::new();
        for (aid, assignment) in input.assignments.iter().enumerate() {
            if hours[aid] == 0 {
                debug!(
                    "dropping {}: all hours are coupled",
                    single_label(assignment, input)
                );
                continue;
            }
            let mut assignment = assignment.clone();
            assignment.hours_per_week = hours[aid] as u32;
            units.push(TeachingUnit::Single(assignment));
        }
        for coupling in &input.couplings {
            if coupling.hours_per_week == 0 {
                debug!("dropping empty {}", coupling_label(coupling, input));
                continue;
            }
            units.push(TeachingUnit::Grouped(coupling.clone()));
        }

        let labels: Vec<String> = units.iter().map(|u| unit_label(u, input)).collect();
        let max_week_hours = 2 * Weekday::ALL.len() as u32;
        for (unit, label) in units.iter().zip(&labels) {
            if unit.hours_per_week() > max_week_hours {
                return Err(ModelError::UnsupportedInstance(format!(
                    "{label} has more than {max_week_hours} weekly hours"
                )));
            }
        }
        let hard: Vec<bool> = units.iter().map(|u| u.is_hard(&input.subjects)).collect();
        let fixed: Vec<HashSet<usize>> = units
            .iter()
            .map(|u| u.fixed_slots().iter().map(|s| pos_of[s]).collect())
            .collect();
        let class_units: BTreeMap<ClassId, Vec<usize>> = units
            .iter()
            .enumerate()
            .flat_map(|(i, u)| u.classes().into_iter().map(move |c| (c, i)))
            .into_group_map()
            .into_iter()
            .collect();
        let teacher_units: BTreeMap<usize, Vec<usize>> = units
            .iter()
            .enumerate()
            .flat_map(|(i, u)| u.teachers().into_iter().map(move |t| (t, i)))
            .into_group_map()
            .into_iter()
            .collect();

        Ok(WorkingSet {
            slots,
            units,
            labels,
            hard,
            fixed,
            pos_of,
            class_units,
            teacher_units,
        })
    }

    /// Canonical positions of all slots on the given weekday, ascending.
    fn day_slots(&self, day: Weekday) -> Vec<usize> {
        (0..self.slots.len())
            .filter(|&s| self.slots[s].weekday == day)
            .collect()
    }

    /// Double-period partner pairs (earlier, later) in canonical order.
    fn partner_pairs(&self) -> Vec<(usize, usize)> {
        (0..self.slots.len().saturating_sub(1))
            .filter(|&i| {
                let (a, b) = (&self.slots[i], &self.slots[i + 1]);
                a.weekday == b.weekday
                    && b.period_number == a.period_number + 1
                    && a.double_period_start
            })
            .map(|i| (i, i + 1))
            .collect()
    }
}

/// Index-bound checks for everything the instance cross-references.
/// Dangling references fail here, before any constraint is generated.
fn validate_references(input: &SchedulingInput) -> Result<(), ModelError> {
    let err = |msg: String| Err(ModelError::UnsupportedInstance(msg));
    for (i, slot) in input.slots.iter().enumerate() {
        if slot.period >= input.periods.len() {
            return err(format!("slot {i} refers to unknown period {}", slot.period));
        }
    }
    for (i, a) in input.assignments.iter().enumerate() {
        if a.subject >= input.subjects.len() {
            return err(format!("assignment {i} refers to unknown subject {}", a.subject));
        }
        if a.class >= input.classes.len() {
            return err(format!("assignment {i} refers to unknown class {}", a.class));
        }
        if let Some(t) = a.teacher {
            if t >= input.teachers.len() {
                return err(format!("assignment {i} refers to unknown teacher {t}"));
            }
        }
        for &s in &a.fixed_slots {
            if s >= input.slots.len() {
                return err(format!("assignment {i} refers to unknown slot {s}"));
            }
        }
    }
    for (i, c) in input.couplings.iter().enumerate() {
        for &k in &c.classes {
            if k >= input.classes.len() {
                return err(format!("coupling {i} refers to unknown class {k}"));
            }
        }
        for part in &c.parts {
            if part.subject >= input.subjects.len() {
                return err(format!("coupling {i} refers to unknown subject {}", part.subject));
            }
            for &t in &part.teachers {
                if t >= input.teachers.len() {
                    return err(format!("coupling {i} refers to unknown teacher {t}"));
                }
            }
        }
        for &aid in &c.assignments {
            if aid >= input.assignments.len() {
                return err(format!("coupling {i} refers to unknown assignment {aid}"));
            }
        }
        for &s in &c.fixed_slots {
            if s >= input.slots.len() {
                return err(format!("coupling {i} refers to unknown slot {s}"));
            }
        }
    }
    for (i, t) in input.teachers.iter().enumerate() {
        for &s in &t.subjects {
            if s >= input.subjects.len() {
                return err(format!("teacher {i} refers to unknown subject {s}"));
            }
        }
        for entry in &t.availability {
            if entry.slot >= input.slots.len() {
                return err(format!("teacher {i} has availability for unknown slot {}", entry.slot));
            }
        }
    }
    if input.parameters.demanding_window < 2 {
        return err(format!(
            "demanding-run window of {} is too short",
            input.parameters.demanding_window
        ));
    }
    Ok(())
}

fn single_label(a: &crate::data::Assignment, input: &SchedulingInput) -> String {
    format!(
        "{}-{}",
        input.classes[a.class].name, input.subjects[a.subject].name
    )
}

fn coupling_label(c: &Coupling, input: &SchedulingInput) -> String {
    format!(
        "coupling-{}-{}",
        c.classes.iter().map(|&k| input.classes[k].name.as_str()).join("-"),
        c.parts.iter().map(|p| input.subjects[p.subject].name.as_str()).join("-"),
    )
}

fn unit_label(unit: &TeachingUnit, input: &SchedulingInput) -> String {
    match unit {
        TeachingUnit::Single(a) => single_label(a, input),
        TeachingUnit::Grouped(c) => coupling_label(c, input),
    }
}

/// The binary ILP formulation of one problem instance.
///
/// Construction normalizes the instance and generates all variables,
/// constraints and objective weights. A formulation is built once, solved at
/// most once and decoded once; it is not reusable.
#[derive(Debug)]
pub struct Formulation<'a> {
    input: &'a SchedulingInput,
    ws: WorkingSet,
    variables: Vec<BinaryVariable>,
    constraints: Vec<Constraint>,
    /// Main variable grid: per unit, per canonical slot position.
    grid: Vec<Vec<VarId>>,
}

impl<'a> Formulation<'a> {
    pub fn new(input: &'a SchedulingInput) -> Result<Self, ModelError> {
        let ws = WorkingSet::normalize(input)?;
        let mut f = Formulation {
            input,
            ws,
            variables: Vec::new(),
            constraints: Vec::new(),
            grid: Vec::new(),
        };

        f.build_variable_space();
        if f.variables.is_empty() || f.grid.is_empty() {
            return Err(ModelError::EmptyProblem);
        }
        f.locked_and_fixed_slots()?;
        f.double_periods();
        f.subject_per_day();

        // Soft passes report (variable, weight) deltas; one reduction at the
        // end keeps the passes independent of each other.
        let mut deltas = f.teacher_availability();
        deltas.extend(f.period_priorities());
        deltas.extend(f.demanding_runs(
            input.parameters.demanding_runs,
            input.parameters.demanding_window,
        ));
        deltas.extend(f.demanding_afternoons(
            input.parameters.demanding_afternoons,
            input.parameters.morning_periods,
        ));
        for (var, delta) in deltas {
            f.variables[var.0].add_objective_factor(delta);
        }

        info!(
            "formulated {} variables and {} constraints for {} units over {} slots",
            f.variables.len(),
            f.constraints.len(),
            f.ws.units.len(),
            f.ws.slots.len()
        );
        Ok(f)
    }

    /// All variables of the formulation. A [`VarId`] is an index into this
    /// slice.
    pub fn variables(&self) -> &[BinaryVariable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Records the solver's value for one variable.
    pub fn set_solution(&mut self, var: VarId, value: bool) {
        self.variables[var.0].set_solution(value);
    }

    fn add_variable(&mut self, name: String) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(BinaryVariable::new(name));
        id
    }

    /// One binary variable per (unit, slot), the weekly-hour total per unit,
    /// and conflict freedom per class/teacher and slot.
    fn build_variable_space(&mut self) {
        let n_slots = self.ws.slots.len();
        for ui in 0..self.ws.units.len() {
            let mut row = Vec::with_capacity(n_slots);
            for si in 0..n_slots {
                let name = format!("{}-{}", self.ws.labels[ui], self.ws.slots[si].label());
                row.push(self.add_variable(name));
            }
            // this unit must take place exactly hours_per_week times
            let name = format!("weekly-hours-{}", self.ws.labels[ui]);
            let total = self.ws.units[ui].hours_per_week();
            self.constraints.push(Constraint::SumEq {
                name,
                vars: row.clone(),
                total,
            });
            self.grid.push(row);
        }

        let groups: Vec<(String, Vec<usize>)> = self
            .ws
            .class_units
            .iter()
            .map(|(&c, units)| (self.input.classes[c].name.clone(), units.clone()))
            .chain(
                self.ws
                    .teacher_units
                    .iter()
                    .map(|(&t, units)| (self.input.teachers[t].name.clone(), units.clone())),
            )
            .collect();
        for (entity, unit_ids) in &groups {
            // at most one of the entity's units per slot
            for si in 0..n_slots {
                let vars = unit_ids.iter().map(|&u| self.grid[u][si]).collect();
                let name = format!("conflict-free-{}-{}", entity, self.ws.slots[si].label());
                self.constraints.push(Constraint::SumLeq { name, vars, max: 1 });
            }
        }
    }

    /// Pinned slots are forced on; locked slots are forced off. A pin on a
    /// locked slot is a configuration error, not an infeasibility.
    fn locked_and_fixed_slots(&mut self) -> Result<(), ModelError> {
        for ui in 0..self.ws.units.len() {
            for si in 0..self.ws.slots.len() {
                let pinned = self.ws.fixed[ui].contains(&si);
                let locked = self.ws.slots[si].locked;
                if pinned {
                    if locked {
                        return Err(ModelError::FixedOnLockedSlot {
                            unit: self.ws.labels[ui].clone(),
                            slot: self.ws.slots[si].label(),
                        });
                    }
                    let name = format!(
                        "fixed-slot-{}-{}",
                        self.ws.labels[ui],
                        self.ws.slots[si].label()
                    );
                    self.constraints.push(Constraint::ForceValue {
                        name,
                        var: self.grid[ui][si],
                        value: true,
                    });
                } else if locked {
                    let name = format!(
                        "locked-slot-{}-{}",
                        self.ws.labels[ui],
                        self.ws.slots[si].label()
                    );
                    self.constraints.push(Constraint::ForceValue {
                        name,
                        var: self.grid[ui][si],
                        value: false,
                    });
                }
            }
        }
        Ok(())
    }

    /// In slot pairs marked as double periods, a unit must occupy both slots
    /// or neither. Units whose hour budget cannot be fully paired (odd
    /// totals, pins that break pairing) get a bounded number of tolerated
    /// single periods instead.
    fn double_periods(&mut self) {
        let pairs = self.ws.partner_pairs();
        let mut partner: HashMap<usize, usize> = HashMap::new();
        for &(a, b) in &pairs {
            partner.insert(a, b);
            partner.insert(b, a);
        }

        for ui in 0..self.ws.units.len() {
            let hours = self.ws.units[ui].hours_per_week();
            let tolerance = {
                let fixed = &self.ws.fixed[ui];
                // every pinned slot whose partner is not pinned needs a freely
                // plannable hour to complete the pair; if there are not
                // enough, more singles must be tolerated
                let fixed_singles = fixed
                    .iter()
                    .filter(|&&s| partner.get(&s).is_some_and(|p| !fixed.contains(p)))
                    .count() as i64;
                let free = i64::from(hours) - fixed.len() as i64;
                i64::from(hours % 2) + (fixed_singles - free).max(0)
            };

            if tolerance == 0 {
                for &(z1, z2) in &pairs {
                    let name = format!(
                        "double-period-{}-{}-{}",
                        self.ws.labels[ui],
                        self.ws.slots[z1].label(),
                        self.ws.slots[z2].label()
                    );
                    self.constraints.push(Constraint::VarEq {
                        name,
                        a: self.grid[ui][z1],
                        b: self.grid[ui][z2],
                    });
                }
            } else {
                // One marker variable per (slot, partner) direction: taking
                // z1 without z2 requires the marker, and the markers are
                // capped at the tolerance.
                let mut singles = Vec::new();
                for &(a, b) in &pairs {
                    for (z1, z2) in [(a, b), (b, a)] {
                        let name = format!(
                            "single-period-{}-{}",
                            self.ws.labels[ui],
                            self.ws.slots[z1].label()
                        );
                        let marker = self.add_variable(format!("{name}-var"));
                        singles.push(marker);
                        self.constraints.push(Constraint::VarImpliesOr {
                            name,
                            condition: self.grid[ui][z1],
                            any_of: vec![self.grid[ui][z2], marker],
                        });
                    }
                }
                if !singles.is_empty() {
                    let name = format!("max-single-periods-{}", self.ws.labels[ui]);
                    self.constraints.push(Constraint::SumLeq {
                        name,
                        vars: singles,
                        max: tolerance as u32,
                    });
                }
            }
        }
    }

    /// A class has at most 2 periods of the same subject per day, and if 2,
    /// they are adjacent. Implemented pairwise: a slot in use excludes every
    /// slot more than one period later on the same day, which bounds the
    /// daily count and the gap at once. Days already carrying 2 pinned hours
    /// are exempt.
    fn subject_per_day(&mut self) {
        let input = self.input;
        for class in 0..input.classes.len() {
            for subject in 0..input.subjects.len() {
                let unit_ids: Vec<usize> = (0..self.ws.units.len())
                    .filter(|&u| {
                        self.ws.units[u].has_class(class) && self.ws.units[u].has_subject(subject)
                    })
                    .collect();
                if unit_ids.is_empty() {
                    continue;
                }
                for day in Weekday::ALL {
                    let day_pins: usize = unit_ids
                        .iter()
                        .map(|&u| {
                            self.ws.fixed[u]
                                .iter()
                                .filter(|&&s| self.ws.slots[s].weekday == day)
                                .count()
                        })
                        .sum();
                    if day_pins >= 2 {
                        continue;
                    }
                    let day_slots = self.ws.day_slots(day);
                    for &one in &day_slots {
                        for &later in &day_slots {
                            if self.ws.slots[later].period_number
                                > self.ws.slots[one].period_number + 1
                            {
                                let vars = unit_ids
                                    .iter()
                                    .map(|&u| self.grid[u][one])
                                    .chain(unit_ids.iter().map(|&u| self.grid[u][later]))
                                    .collect();
                                let name = format!(
                                    "subject-per-day-{}-{}-{}-{}",
                                    input.classes[class].name,
                                    input.subjects[subject].name,
                                    self.ws.slots[one].label(),
                                    self.ws.slots[later].label()
                                );
                                self.constraints.push(Constraint::SumLeq { name, vars, max: 1 });
                            }
                        }
                    }
                }
            }
        }
    }

    /// Unavailable slots are forced off; restricted slots are discouraged
    /// through the objective.
    fn teacher_availability(&mut self) -> Vec<(VarId, f64)> {
        let input = self.input;
        let mut deltas = Vec::new();
        for ti in 0..input.teachers.len() {
            let Some(unit_ids) = self.ws.teacher_units.get(&ti) else {
                continue;
            };
            let unit_ids = unit_ids.clone();
            for entry in &input.teachers[ti].availability {
                let si = self.ws.pos_of[&entry.slot];
                for &u in &unit_ids {
                    let var = self.grid[u][si];
                    match entry.level {
                        Availability::Normal => {}
                        Availability::Unavailable => {
                            let name = format!(
                                "teacher-unavailable-{}-{}",
                                input.teachers[ti].name,
                                self.ws.slots[si].label()
                            );
                            self.constraints.push(Constraint::ForceValue {
                                name,
                                var,
                                value: false,
                            });
                        }
                        Availability::Restricted => deltas.push((var, -1.0)),
                    }
                }
            }
        }
        deltas
    }

    /// Mandatory periods require some lesson per class (no unsupervised free
    /// period); the other levels bias the objective. The per-class soft
    /// preference is folded into per-unit weights scaled by the number of
    /// participating classes.
    fn period_priorities(&mut self) -> Vec<(VarId, f64)> {
        let input = self.input;
        let mut deltas = Vec::new();
        for si in 0..self.ws.slots.len() {
            let weight = match self.ws.slots[si].priority {
                Priority::Mandatory => {
                    for class in 0..input.classes.len() {
                        let vars: Vec<VarId> = self
                            .ws
                            .class_units
                            .get(&class)
                            .into_iter()
                            .flatten()
                            .map(|&u| self.grid[u][si])
                            .collect();
                        let name = format!(
                            "core-slot-{}-{}",
                            input.classes[class].name,
                            self.ws.slots[si].label()
                        );
                        self.constraints.push(Constraint::SumGeq { name, vars, min: 1 });
                    }
                    continue;
                }
                Priority::None | Priority::Medium => continue,
                Priority::Low => -1.0,
                Priority::High => 1.0,
                Priority::VeryHigh => 2.0,
            };
            for ui in 0..self.ws.units.len() {
                let classes = self.ws.units[ui].classes().len() as f64;
                deltas.push((self.grid[ui][si], weight * classes));
            }
        }
        deltas
    }

    /// At most `window - 1` of any `window` consecutive periods of a day may
    /// be demanding for a class; the full window is allowed only against a
    /// tolerance variable that costs objective value.
    fn demanding_runs(&mut self, weight: SoftWeight, window: usize) -> Vec<(VarId, f64)> {
        let mut deltas = Vec::new();
        let Some(factor) = weight.factor() else {
            return deltas;
        };
        let factor = -factor;
        let max_in_window = (window - 1) as u32;
        let input = self.input;
        let hard_units: Vec<usize> = (0..self.ws.units.len()).filter(|&u| self.ws.hard[u]).collect();

        for day in Weekday::ALL {
            let day_slots = self.ws.day_slots(day);
            if day_slots.len() < window {
                continue;
            }
            for win in day_slots.windows(window) {
                for class in 0..input.classes.len() {
                    let (ws, grid) = (&self.ws, &self.grid);
                    let mut vars: Vec<VarId> = hard_units
                        .iter()
                        .filter(|&&u| ws.units[u].has_class(class))
                        .flat_map(|&u| win.iter().map(move |&s| grid[u][s]))
                        .collect();
                    if vars.is_empty() {
                        continue;
                    }
                    let name = format!(
                        "demanding-run-{}-{}",
                        input.classes[class].name,
                        self.ws.slots[win[0]].label()
                    );
                    let tolerance = self.add_variable(format!("{name}-tolerance"));
                    deltas.push((tolerance, factor));
                    vars.push(tolerance);
                    self.constraints.push(Constraint::SumLeq {
                        name,
                        vars,
                        max: max_in_window,
                    });
                }
            }
        }
        deltas
    }

    /// Demanding subjects in afternoon periods cost objective value.
    fn demanding_afternoons(&self, weight: SoftWeight, morning_periods: u32) -> Vec<(VarId, f64)> {
        let mut deltas = Vec::new();
        let Some(factor) = weight.factor() else {
            return deltas;
        };
        for ui in 0..self.ws.units.len() {
            if !self.ws.hard[ui] {
                continue;
            }
            for si in 0..self.ws.slots.len() {
                if self.ws.slots[si].period_number > morning_periods {
                    deltas.push((self.grid[ui][si], -factor));
                }
            }
        }
        deltas
    }

    /// Walks the solved grid and produces the schedule with its per-class and
    /// per-teacher views. All variables must carry a value first.
    pub fn decode(&self) -> Result<Schedule, ModelError> {
        if let Some(unsolved) = self.variables.iter().find(|v| v.solution().is_none()) {
            return Err(ModelError::UnsolvedVariable(unsolved.name().to_string()));
        }

        let mut entries = Vec::new();
        for ui in 0..self.ws.units.len() {
            for si in 0..self.ws.slots.len() {
                if self.variables[self.grid[ui][si].0].solution() == Some(true) {
                    let unit = &self.ws.units[ui];
                    let slot = &self.ws.slots[si];
                    entries.push(ScheduleEntry {
                        weekday: slot.weekday,
                        period_number: slot.period_number,
                        classes: unit.classes(),
                        teachers: unit.teachers(),
                        subjects: unit.subjects(),
                    });
                }
            }
        }
        entries.sort_by_key(|e| (e.weekday, e.period_number));

        let class_views = (0..self.input.classes.len())
            .filter_map(|c| {
                let view: Vec<ScheduleEntry> = entries
                    .iter()
                    .filter(|e| e.classes.contains(&c))
                    .cloned()
                    .collect();
                (!view.is_empty()).then_some(ClassSchedule { class: c, entries: view })
            })
            .collect();
        let teacher_views = (0..self.input.teachers.len())
            .filter_map(|t| {
                let view: Vec<ScheduleEntry> = entries
                    .iter()
                    .filter(|e| e.teachers.contains(&t))
                    .cloned()
                    .collect();
                (!view.is_empty()).then_some(TeacherSchedule { teacher: t, entries: view })
            })
            .collect();

        Ok(Schedule {
            entries,
            class_views,
            teacher_views,
        })
    }
}
